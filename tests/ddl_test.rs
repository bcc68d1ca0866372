use cubrid_dialect::ast::Table;
use cubrid_dialect::dialect::CubridDialect;
use cubrid_dialect::transpiler::ddl::{build_create_index, build_create_table, build_drop_table};
use pretty_assertions::assert_eq;

const ORDERS: &str = r#"
name = "orders"
unique = [["reference"]]

[[columns]]
name = "id"
type = { kind = "integer" }
primary_key = true
nullable = false

[[columns]]
name = "reference"
type = { kind = "varchar", length = 32 }
nullable = false

[[columns]]
name = "total"
type = { kind = "numeric", precision = 12, scale = 2 }

[[columns]]
name = "placed_at"
type = { kind = "timestamp" }

[[columns]]
name = "user_id"
type = { kind = "integer" }

[[foreign_keys]]
name = "fk_orders_user"
columns = ["user_id"]
ref_table = "users"
ref_columns = ["id"]
on_delete = "CASCADE"

[[indexes]]
name = "idx_orders_placed"
table = "orders"
columns = ["placed_at", "total"]
"#;

#[test]
fn test_table_definition_from_toml() {
    let table: Table = toml::from_str(ORDERS).unwrap();
    let generator = CubridDialect.generator();

    assert_eq!(
        build_create_table(&table, &generator).unwrap(),
        "CREATE TABLE orders (\n    id INTEGER NOT NULL AUTO_INCREMENT,\n    reference VARCHAR(32) NOT NULL,\n    total NUMERIC(12, 2),\n    placed_at TIMESTAMP NULL,\n    user_id INTEGER,\n    PRIMARY KEY (id),\n    UNIQUE (reference),\n    CONSTRAINT fk_orders_user FOREIGN KEY (user_id) REFERENCES users (id) ON DELETE CASCADE ON UPDATE RESTRICT\n)"
    );
    assert_eq!(
        build_create_index(&table.indexes[0], &generator).unwrap(),
        "CREATE INDEX idx_orders_placed ON orders (placed_at, total)"
    );
    assert_eq!(build_drop_table(&table.name, None), "DROP TABLE orders");
}

#[test]
fn test_reserved_names_are_quoted_in_ddl() {
    let table: Table = toml::from_str(
        r#"
        name = "order"

        [[columns]]
        name = "value"
        type = { kind = "double" }
        "#,
    )
    .unwrap();
    let sql = build_create_table(&table, &CubridDialect.generator()).unwrap();
    assert_eq!(sql, "CREATE TABLE \"order\" (\n    \"value\" DOUBLE\n)");
}

#[test]
fn test_toml_primary_key_defaults_to_not_null() {
    let table: Table = toml::from_str(
        r#"
        name = "tickets"
        schema = "support"

        [[columns]]
        name = "id"
        type = { kind = "bigint" }
        primary_key = true

        [[indexes]]
        name = "idx_tickets_id"
        table = "tickets"
        schema = "support"
        columns = ["id"]
        "#,
    )
    .unwrap();
    let generator = CubridDialect.generator();
    assert_eq!(
        build_create_table(&table, &generator).unwrap(),
        "CREATE TABLE support.tickets (\n    id BIGINT NOT NULL AUTO_INCREMENT,\n    PRIMARY KEY (id)\n)"
    );
    assert_eq!(
        build_create_index(&table.indexes[0], &generator).unwrap(),
        "CREATE INDEX idx_tickets_id ON support.tickets (id)"
    );
}
