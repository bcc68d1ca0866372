use cubrid_dialect::error::{DialectError, DialectResult};
use cubrid_dialect::isolation::{IsolationLevel, get_isolation_level, set_isolation_level};
use cubrid_dialect::reflection::{
    CatalogValue, Connection, Cursor, Inspector, Row, ServerVersion,
};
use cubrid_dialect::types::TypeKind;
use pretty_assertions::assert_eq;

/// In-memory catalog: answers each statement with the rows of the first
/// response whose pattern occurs in the SQL text.
#[derive(Default)]
struct MockConnection {
    responses: Vec<(&'static str, Vec<Row>)>,
    fail_on: Option<&'static str>,
    executed: Vec<String>,
    opened: usize,
    closed: usize,
}

impl MockConnection {
    fn respond(mut self, pattern: &'static str, rows: Vec<Row>) -> Self {
        self.responses.push((pattern, rows));
        self
    }

    fn count(&self, pattern: &str) -> usize {
        self.executed.iter().filter(|sql| sql.contains(pattern)).count()
    }
}

struct MockCursor<'a> {
    conn: &'a mut MockConnection,
    pending: Vec<Row>,
}

impl Cursor for MockCursor<'_> {
    fn execute(&mut self, sql: &str) -> DialectResult<()> {
        self.conn.executed.push(sql.to_string());
        if let Some(pattern) = self.conn.fail_on {
            if sql.contains(pattern) {
                return Err(DialectError::driver("server closed the connection"));
            }
        }
        self.pending = self
            .conn
            .responses
            .iter()
            .find(|(pattern, _)| sql.contains(pattern))
            .map(|(_, rows)| rows.clone())
            .unwrap_or_default();
        Ok(())
    }

    fn fetch_all(&mut self) -> DialectResult<Vec<Row>> {
        Ok(std::mem::take(&mut self.pending))
    }

    fn close(&mut self) -> DialectResult<()> {
        self.conn.closed += 1;
        Ok(())
    }
}

impl Connection for MockConnection {
    fn cursor(&mut self) -> DialectResult<Box<dyn Cursor + '_>> {
        self.opened += 1;
        Ok(Box::new(MockCursor {
            conn: self,
            pending: Vec::new(),
        }))
    }
}

fn text(s: &str) -> CatalogValue {
    CatalogValue::from(s)
}

fn column_row(field: &str, ty: &str, null: &str, key: &str, extra: &str) -> Row {
    vec![
        text(field),
        text(ty),
        text(null),
        text(key),
        CatalogValue::Null,
        text(extra),
    ]
}

fn index_row(non_unique: i64, key_name: &str, seq: i64, column: &str) -> Row {
    vec![
        text("users"),
        CatalogValue::Int(non_unique),
        text(key_name),
        CatalogValue::Int(seq),
        text(column),
        text("A"),
        CatalogValue::Int(0),
        CatalogValue::Null,
        CatalogValue::Null,
        text("NO"),
        text("BTREE"),
    ]
}

fn users_catalog() -> MockConnection {
    MockConnection::default()
        .respond(
            "SHOW COLUMNS IN users",
            vec![
                column_row("id", "INTEGER", "NO", "PRI", "auto_increment"),
                column_row("name", "VARCHAR(50)", "YES", "", ""),
                column_row("location", "GEOMETRY", "YES", "", ""),
                column_row("price", "NUMERIC(10,2)", "NO", "", ""),
            ],
        )
        .respond("index_name = 'pk_users_id'", vec![vec![text("YES")]])
        .respond("index_name = ", vec![vec![text("NO")]])
        .respond(
            "SHOW INDEXES IN users",
            vec![
                index_row(0, "pk_users_id", 1, "id"),
                index_row(1, "idx_users_name_price", 1, "name"),
                index_row(1, "idx_users_name_price", 2, "price"),
                index_row(0, "u_users_name", 1, "name"),
            ],
        )
}

#[test]
fn test_columns_from_show_columns() {
    let mut conn = users_catalog();
    let mut inspector = Inspector::new(&mut conn);
    let columns = inspector.get_columns("users", None).unwrap();

    assert_eq!(columns.len(), 4);
    assert_eq!(columns[0].name, "id");
    assert_eq!(columns[0].data_type.kind, TypeKind::Integer);
    assert!(columns[0].autoincrement);
    assert!(!columns[0].nullable);

    assert_eq!(columns[1].data_type.kind, TypeKind::Varchar);
    assert_eq!(columns[1].data_type.length(), Some(50));
    assert!(columns[1].nullable);
    assert_eq!(columns[1].default, None);

    // Unknown type names do not abort the scan.
    assert_eq!(columns[2].data_type.kind, TypeKind::Null);

    assert_eq!(columns[3].data_type.precision(), Some(10));
    assert_eq!(columns[3].data_type.scale(), Some(2));
}

#[test]
fn test_primary_key_columns() {
    let mut conn = users_catalog();
    let pk = Inspector::new(&mut conn).get_pk_constraint("users", None).unwrap();
    assert_eq!(pk.columns, vec!["id"]);
}

#[test]
fn test_indexes_grouped_in_row_order() {
    let mut conn = users_catalog();
    let indexes = Inspector::new(&mut conn).get_indexes("users", None).unwrap();

    assert_eq!(indexes.len(), 2);
    assert_eq!(indexes[0].name, "idx_users_name_price");
    assert_eq!(indexes[0].column_names, vec!["name", "price"]);
    assert!(!indexes[0].unique);
    assert_eq!(indexes[0].index_type.as_deref(), Some("BTREE"));

    assert_eq!(indexes[1].name, "u_users_name");
    assert!(indexes[1].unique);

    // One primary-key lookup per distinct index name.
    assert_eq!(conn.count("FROM db_index"), 3);
}

#[test]
fn test_results_are_cached_per_table() {
    let mut conn = users_catalog();
    {
        let mut inspector = Inspector::new(&mut conn);
        inspector.get_columns("users", None).unwrap();
        inspector.get_columns("users", None).unwrap();
        inspector.get_columns("users", Some("dba")).unwrap();
    }
    assert_eq!(conn.count("SHOW COLUMNS IN users"), 1);
    assert_eq!(conn.count("SHOW COLUMNS IN dba.users"), 1);
}

#[test]
fn test_list_tables_and_views() {
    let mut conn = MockConnection::default()
        .respond("'VCLASS'", vec![vec![text("active_users")]])
        .respond("'CLASS'", vec![vec![text("users")], vec![text("posts")]]);
    {
        let mut inspector = Inspector::new(&mut conn);
        assert_eq!(inspector.list_tables(None).unwrap(), vec!["users", "posts"]);
        assert_eq!(inspector.list_views(None).unwrap(), vec!["active_users"]);
        inspector.list_tables(Some("public")).unwrap();
    }
    assert_eq!(
        conn.executed[0],
        "SELECT class_name \nFROM db_class \nWHERE (is_system_class = 'NO') AND (class_type = 'CLASS')"
    );
    assert!(conn.executed[2].ends_with("AND (owner_name = 'PUBLIC')"));
}

#[test]
fn test_view_definition() {
    let mut conn = MockConnection::default().respond(
        "SHOW CREATE VIEW active_users",
        vec![vec![
            text("active_users"),
            text("select * from users where active = 1"),
        ]],
    );
    let def = Inspector::new(&mut conn)
        .get_view_definition("active_users", None)
        .unwrap();
    assert_eq!(def.as_deref(), Some("select * from users where active = 1"));
}

#[test]
fn test_existence_checks() {
    let mut conn = MockConnection::default()
        .respond("class_name = 'users'", vec![vec![text("users")]])
        .respond("name = 'order_seq'", vec![vec![text("order_seq")]]);
    {
        let mut inspector = Inspector::new(&mut conn);
        assert!(inspector.has_table("users", None).unwrap());
        assert!(!inspector.has_table("ghosts", None).unwrap());
        assert!(inspector.has_sequence("order_seq").unwrap());
        assert!(!inspector.has_table("o'brien", None).unwrap());
    }
    assert!(conn.executed[3].contains("class_name = 'o''brien'"));
}

#[test]
fn test_foreign_keys_are_empty() {
    let mut conn = MockConnection::default();
    let fks = Inspector::new(&mut conn).get_foreign_keys("users", None).unwrap();
    assert!(fks.is_empty());
    assert!(conn.executed.is_empty());
}

#[test]
fn test_server_version_and_schema() {
    let mut conn = MockConnection::default()
        .respond("VERSION()", vec![vec![text("11.2.0.0658")]])
        .respond("SCHEMA()", vec![vec![text("PUBLIC")]]);
    let mut inspector = Inspector::new(&mut conn);
    assert_eq!(
        inspector.get_server_version().unwrap(),
        Some(ServerVersion {
            major: 11,
            minor: 2,
            patch: 0,
            build: 658
        })
    );
    assert_eq!(inspector.get_default_schema().unwrap().as_deref(), Some("PUBLIC"));
}

#[test]
fn test_unparseable_version_is_none() {
    let mut conn = MockConnection::default().respond("VERSION()", vec![vec![text("dev build")]]);
    assert_eq!(Inspector::new(&mut conn).get_server_version().unwrap(), None);
}

#[test]
fn test_set_isolation_level_commits_and_closes() {
    let mut conn = MockConnection::default();
    set_isolation_level(&mut conn, IsolationLevel::ReadCommitted).unwrap();
    assert_eq!(
        conn.executed,
        vec![
            "SET TRANSACTION ISOLATION LEVEL REPEATABLE READ CLASS, READ COMMITTED INSTANCES",
            "COMMIT",
        ]
    );
    assert_eq!((conn.opened, conn.closed), (1, 1));
}

#[test]
fn test_set_isolation_level_closes_cursor_on_error() {
    let mut conn = MockConnection {
        fail_on: Some("SET TRANSACTION"),
        ..MockConnection::default()
    };
    let err = set_isolation_level(&mut conn, IsolationLevel::Serializable).unwrap_err();
    assert!(matches!(err, DialectError::Driver(_)));
    assert_eq!(conn.executed.len(), 1);
    assert_eq!((conn.opened, conn.closed), (1, 1));
}

#[test]
fn test_get_isolation_level_returns_raw_value() {
    let mut conn = MockConnection::default()
        .respond("GET TRANSACTION ISOLATION LEVEL", vec![vec![CatalogValue::Int(4)]]);
    assert_eq!(get_isolation_level(&mut conn).unwrap().as_deref(), Some("4"));
    assert_eq!(conn.closed, 1);
}

#[test]
fn test_primary_key_index_lookup_filters_by_owner() {
    let mut conn = MockConnection::default()
        .respond("index_name = ", vec![vec![text("NO")]])
        .respond(
            "SHOW INDEXES IN sales.users",
            vec![index_row(1, "idx_users_name", 1, "name")],
        );
    let indexes = Inspector::new(&mut conn)
        .get_indexes("users", Some("sales"))
        .unwrap();
    assert_eq!(indexes.len(), 1);

    let lookup = conn
        .executed
        .iter()
        .find(|sql| sql.contains("FROM db_index"))
        .unwrap();
    assert!(lookup.ends_with("AND (owner_name = 'SALES')"));
}

#[test]
fn test_unreadable_type_text_becomes_null_type() {
    let mut conn = MockConnection::default().respond(
        "SHOW COLUMNS IN blobs",
        vec![
            column_row("payload", "(8)", "YES", "", ""),
            column_row("id", "INTEGER", "NO", "PRI", ""),
        ],
    );
    let columns = Inspector::new(&mut conn).get_columns("blobs", None).unwrap();
    assert_eq!(columns[0].data_type.kind, TypeKind::Null);
    assert_eq!(columns[1].data_type.kind, TypeKind::Integer);
}
