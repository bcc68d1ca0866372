//! Dialect registration surface and capability flags.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::connect::{self, ConnectArgs};
use crate::error::{DialectError, DialectResult};
use crate::transpiler::CubridGenerator;
use crate::transpiler::identifier::MAX_IDENTIFIER_LENGTH;

static AUTOCOMMIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:UPDATE|INSERT|CREATE|DELETE|DROP|ALTER|MERGE)").unwrap()
});

/// Bind-parameter style understood by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamStyle {
    /// `?` placeholders.
    Qmark,
}

/// What the dialect tells a host framework it can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub supports_native_boolean: bool,
    /// BOOLEAN is stored as SMALLINT, whose NULL handling is not a
    /// three-valued boolean.
    pub nullable_booleans: bool,
    pub returning: bool,
    pub supports_alter: bool,
    pub max_identifier_length: usize,
    pub default_paramstyle: ParamStyle,
}

/// The CUBRID dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct CubridDialect;

impl CubridDialect {
    /// Identifying token the host framework looks the dialect up by.
    pub const NAME: &'static str = "cubrid";
    /// Driver identifier.
    pub const DRIVER: &'static str = "cubrid-cci";
    pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");

    pub fn new() -> Self {
        Self
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            supports_native_boolean: false,
            nullable_booleans: false,
            returning: true,
            supports_alter: true,
            max_identifier_length: MAX_IDENTIFIER_LENGTH,
            default_paramstyle: ParamStyle::Qmark,
        }
    }

    /// SQL generator for statements compiled under this dialect.
    pub fn generator(&self) -> CubridGenerator {
        CubridGenerator
    }

    /// Resolve a URL scheme (`cubrid` or `cubrid+<driver>`) to the driver
    /// that serves it.
    pub fn resolve_scheme(scheme: &str) -> DialectResult<&'static str> {
        let scheme = scheme.to_ascii_lowercase();
        let (name, driver) = match scheme.split_once('+') {
            Some((name, driver)) => (name, Some(driver)),
            None => (scheme.as_str(), None),
        };
        if name != Self::NAME {
            return Err(DialectError::Config(format!(
                "Unsupported URL scheme '{}'",
                scheme
            )));
        }
        match driver {
            None => Ok(Self::DRIVER),
            Some(d) if d == Self::DRIVER => Ok(Self::DRIVER),
            Some(d) => Err(DialectError::DriverUnavailable(d.to_string())),
        }
    }

    pub fn create_connect_args(&self, url: Option<&str>) -> DialectResult<ConnectArgs> {
        connect::create_connect_args(url)
    }

    /// Whether a textual statement modifies data or schema and so needs an
    /// implicit commit.
    pub fn should_autocommit(&self, statement: &str) -> bool {
        AUTOCOMMIT_RE.is_match(statement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration() {
        assert_eq!(CubridDialect::NAME, "cubrid");
        assert_eq!(CubridDialect::DRIVER, "cubrid-cci");
    }

    #[test]
    fn test_resolve_scheme() {
        assert_eq!(CubridDialect::resolve_scheme("cubrid").unwrap(), "cubrid-cci");
        assert_eq!(
            CubridDialect::resolve_scheme("CUBRID+cubrid-cci").unwrap(),
            "cubrid-cci"
        );
        assert!(matches!(
            CubridDialect::resolve_scheme("cubrid+pycubrid"),
            Err(DialectError::DriverUnavailable(ref d)) if d == "pycubrid"
        ));
        assert!(matches!(
            CubridDialect::resolve_scheme("postgres"),
            Err(DialectError::Config(_))
        ));
    }

    #[test]
    fn test_capabilities() {
        let caps = CubridDialect.capabilities();
        assert!(!caps.supports_native_boolean);
        assert!(!caps.nullable_booleans);
        assert!(caps.returning);
        assert_eq!(caps.max_identifier_length, 254);
        assert_eq!(caps.default_paramstyle, ParamStyle::Qmark);
    }

    #[test]
    fn test_should_autocommit() {
        let d = CubridDialect;
        assert!(d.should_autocommit("UPDATE t SET a = 1"));
        assert!(d.should_autocommit("  \n insert into t values (1)"));
        assert!(d.should_autocommit("merge into t using s on (t.id = s.id)"));
        assert!(d.should_autocommit("Drop table t"));
        assert!(!d.should_autocommit("SELECT * FROM t"));
        assert!(!d.should_autocommit("-- UPDATE\nSELECT 1"));
    }
}
