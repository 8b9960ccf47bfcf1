// src/sql/mod.rs
//! Plain-text INSERT statements.
pub mod items;
pub mod troops;

/// `INSERT INTO <table> (<cols>) VALUES` header line.
pub fn insert_header(table: &str, columns: &[&str]) -> String {
    format!("INSERT INTO {} ({}) VALUES", table, columns.join(", "))
}

/// Value rows joined into the statement body, terminated with `;`.
pub fn values_body(rows: &[String]) -> String {
    join!(&rows.join(",\n"), ";")
}

pub fn sql_bool(b: bool) -> u8 {
    if b { 1 } else { 0 }
}

pub fn sql_opt(v: Option<i64>) -> String {
    v.map_or_else(|| s!("NULL"), |n| n.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_body() {
        assert_eq!(
            insert_header("Items", &["item_id", "name"]),
            "INSERT INTO Items (item_id, name) VALUES"
        );
        let rows = vec![sql_row!(1, "'a'"), sql_row!(2, "'b'")];
        assert_eq!(values_body(&rows), "  (1, 'a'),\n  (2, 'b');");
        assert_eq!(sql_opt(None), "NULL");
        assert_eq!(sql_opt(Some(4)), "4");
    }
}
