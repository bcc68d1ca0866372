//! Identifier quoting for CUBRID.
//!
//! CUBRID quotes identifiers with `"` and escapes an embedded quote by
//! doubling it. Bare identifiers are lower-case ASCII letters, digits and
//! underscores, start with a letter or underscore, and are not reserved.

/// Maximum length of a bare identifier.
pub const MAX_IDENTIFIER_LENGTH: usize = 254;

const QUOTE: char = '"';

/// CUBRID reserved words, sorted for binary search.
pub const RESERVED_WORDS: &[&str] = &[
    "absolute", "action", "add", "add_months", "after", "all", "allocate", "alter", "and",
    "any", "are", "as", "asc", "assertion", "at", "attach", "attribute", "avg", "before",
    "between", "bigint", "bit", "bit_length", "blob", "boolean", "both", "breadth", "by",
    "call", "cascade", "cascaded", "case", "cast", "catalog", "change", "char", "character",
    "check", "class", "classes", "clob", "close", "coalesce", "collate", "collation", "column",
    "commit", "connect", "connect_by_iscycle", "connect_by_isleaf", "connect_by_root",
    "connection", "constraint", "constraints", "continue", "convert", "corresponding", "count",
    "create", "cross", "current", "current_date", "current_datetime", "current_time",
    "current_timestamp", "current_user", "cursor", "cycle", "data", "data_type", "database",
    "date", "datetime", "day", "day_hour", "day_millisecond", "day_minute", "day_second",
    "deallocate", "dec", "decimal", "declare", "default", "deferrable", "deferred", "delete",
    "depth", "desc", "describe", "descriptor", "diagnostics", "difference", "disconnect",
    "distinct", "distinctrow", "div", "do", "domain", "double", "drop", "duplicate", "each",
    "else", "elseif", "end", "equals", "escape", "evaluate", "except", "exception", "exec",
    "execute", "exists", "external", "extract", "false", "fetch", "file", "first", "float",
    "for", "foreign", "found", "from", "full", "function", "general", "get", "global", "go",
    "goto", "grant", "group", "having", "hour", "hour_millisecond", "hour_minute",
    "hour_second", "identity", "if", "ignore", "immediate", "in", "index", "indicator",
    "inherit", "initially", "inner", "inout", "input", "insert", "int", "integer", "intersect",
    "intersection", "interval", "into", "is", "isolation", "join", "key", "language", "last",
    "leading", "leave", "left", "less", "level", "like", "limit", "list", "local",
    "local_transaction_id", "localtime", "localtimestamp", "loop", "lower", "match", "max",
    "method", "millisecond", "min", "minute", "minute_millisecond", "minute_second", "mod",
    "modify", "module", "month", "multiset", "multiset_of", "na", "names", "national",
    "natural", "nchar", "next", "no", "none", "not", "null", "nullif", "numeric", "object",
    "octet_length", "of", "off", "on", "only", "open", "optimization", "option", "or", "order",
    "out", "outer", "output", "overlaps", "parameters", "partial", "position", "precision",
    "prepare", "preserve", "primary", "prior", "privileges", "procedure", "query", "read",
    "real", "recursive", "ref", "references", "referencing", "relative", "rename", "replace",
    "resignal", "restrict", "return", "returns", "revoke", "right", "role", "rollback",
    "rollup", "routine", "row", "rownum", "rows", "savepoint", "schema", "scope", "scroll",
    "search", "second", "second_millisecond", "section", "select", "sensitive", "sequence",
    "sequence_of", "serializable", "session", "session_user", "set", "set_of", "seteq",
    "shared", "siblings", "signal", "similar", "size", "smallint", "some", "sql", "sqlcode",
    "sqlerror", "sqlexception", "sqlstate", "sqlwarning", "statistics", "string", "subclass",
    "subset", "subseteq", "substring", "sum", "superclass", "superset", "superseteq",
    "sys_connect_by_path", "sys_date", "sys_datetime", "sys_time", "sys_timestamp", "sysdate",
    "sysdatetime", "system_user", "systime", "table", "temporary", "then", "time", "timestamp",
    "timezone_hour", "timezone_minute", "to", "trailing", "transaction", "translate",
    "translation", "trigger", "trim", "true", "truncate", "under", "union", "unique",
    "unknown", "update", "upper", "usage", "use", "user", "using", "utime", "value", "values",
    "varchar", "variable", "varying", "vclass", "view", "when", "whenever", "where", "while",
    "with", "without", "work", "write", "xor", "year", "year_month", "zone",
];

/// Whether `name` is a reserved word (case-insensitive).
pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS
        .binary_search(&name.to_lowercase().as_str())
        .is_ok()
}

/// Whether `name` can be emitted without quotes.
fn is_bare_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_lowercase() || first == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        && name.len() <= MAX_IDENTIFIER_LENGTH
}

/// Whether `name` must be quoted: it is reserved, or it is not a bare
/// identifier (which includes any upper-case letter, since unquoted names
/// are case-folded).
pub fn requires_quoting(name: &str) -> bool {
    is_reserved(name) || !is_bare_identifier(name)
}

/// Quote an identifier unconditionally.
pub fn quote_identifier(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    out.push(QUOTE);
    for c in name.chars() {
        if c == QUOTE {
            out.push(QUOTE);
        }
        out.push(c);
    }
    out.push(QUOTE);
    out
}

/// Quote an identifier only when [`requires_quoting`] says so.
pub fn quote_if_needed(name: &str) -> String {
    if requires_quoting(name) {
        quote_identifier(name)
    } else {
        name.to_string()
    }
}

/// Unilaterally quote every present name, skipping absent entries and
/// keeping input order.
pub fn quote_free_identifiers<'a, I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    names.into_iter().flatten().map(quote_identifier).collect()
}

/// Format a possibly owner-qualified table name.
pub fn format_table(name: &str, schema: Option<&str>) -> String {
    match schema {
        Some(owner) => format!("{}.{}", quote_if_needed(owner), quote_if_needed(name)),
        None => quote_if_needed(name),
    }
}
