// src/sql/items.rs
//! Items table dump from the game data CSV.

use std::io::Write;

use crate::config::options::SqlOptions;
use crate::core::sanitize::sql_quote;
use crate::csv::{parse_int, Table};
use crate::error::{Error, Result};
use crate::file;

use super::{insert_header, sql_opt, values_body};

const ITEM_TYPES: &[(u32, &str)] = &[
    (1, "melee_weapons"),
    (2, "ranged_weapons"),
    (3, "armors"),
    (4, "shields"),
    (5, "horses"),
];

/// Render the Item_Types and Items inserts. Any bad row fails the whole dump.
pub fn items_sql(table: &Table) -> Result<String> {
    let id_col = table.require("Item_ID")?;
    let type_col = table.require("Item_Type_ID")?;
    let culture_col = table.require("Culture_ID")?;
    let name_col = table.require("Item_Name")?;

    let mut lines = vec![
        s!("-- Item Types"),
        insert_header("Item_Types", &["item_type_id", "item_type"]),
    ];
    let types: Vec<String> = ITEM_TYPES
        .iter()
        .map(|&(id, name)| sql_row!(id, sql_quote(name)))
        .collect();
    lines.push(values_body(&types));
    lines.push(s!());

    lines.push(s!("-- Items"));
    lines.push(insert_header("Items", &["item_id", "item_type_id", "culture_id", "name"]));

    let invalid = |line: usize, column: &str, value: &str| Error::InvalidValue {
        path: table.path().to_path_buf(),
        row: line,
        column: s!(column),
        value: s!(value),
    };

    let mut items = Vec::with_capacity(table.len());
    for row in table.rows() {
        let raw_id = row.get(id_col);
        let id = parse_int(raw_id).ok_or_else(|| invalid(row.line, "Item_ID", raw_id))?;
        let item_type = optional_int(row.opt(Some(type_col)))
            .map_err(|v| invalid(row.line, "Item_Type_ID", v))?;
        let culture = optional_int(row.opt(Some(culture_col)))
            .map_err(|v| invalid(row.line, "Culture_ID", v))?;

        items.push(sql_row!(id, sql_opt(item_type), sql_opt(culture), sql_quote(row.get(name_col))));
    }
    lines.push(values_body(&items));

    Ok(join!(&lines.join("\n"), "\n"))
}

/// Empty cell → None; a present cell must be an integer.
fn optional_int(cell: Option<&str>) -> std::result::Result<Option<i64>, &str> {
    match cell {
        None => Ok(None),
        Some(v) => parse_int(v).map(Some).ok_or(v),
    }
}

/// Read the CSV and write the dump to `--out` or stdout.
pub fn run(opts: &SqlOptions) -> Result<()> {
    let table = Table::read(&opts.input)?;
    let sql = items_sql(&table)?;
    match &opts.out {
        Some(path) => {
            file::write_text(path, &sql)?;
            logf!("wrote {} ({} items)", path.display(), table.len());
        }
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(sql.as_bytes())?;
            out.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEAD: &str = "Item_ID,Item_Type_ID,Culture_ID,Item_Name\n";

    #[test]
    fn renders_types_then_items_with_nulls_and_escaping() {
        let t = Table::from_text("items.csv", &join!(HEAD, "1,1,2,Falchion\n2,,,Noble's Bow\n")).unwrap();
        let sql = items_sql(&t).unwrap();
        let expected = "\
-- Item Types
INSERT INTO Item_Types (item_type_id, item_type) VALUES
  (1, 'melee_weapons'),
  (2, 'ranged_weapons'),
  (3, 'armors'),
  (4, 'shields'),
  (5, 'horses');

-- Items
INSERT INTO Items (item_id, item_type_id, culture_id, name) VALUES
  (1, 1, 2, 'Falchion'),
  (2, NULL, NULL, 'Noble''s Bow');
";
        assert_eq!(sql, expected);
    }

    #[test]
    fn float_cells_from_spreadsheets_are_accepted() {
        let t = Table::from_text("items.csv", &join!(HEAD, "3,2.0,4.0,Bow\n")).unwrap();
        assert!(items_sql(&t).unwrap().contains("  (3, 2, 4, 'Bow');"));
    }

    #[test]
    fn bad_id_fails_the_run() {
        let t = Table::from_text("items.csv", &join!(HEAD, "x,1,1,Bad\n")).unwrap();
        let err = items_sql(&t).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { row: 1, .. }));
    }

    #[test]
    fn missing_column_fails_the_run() {
        let t = Table::from_text("items.csv", "Item_ID,Item_Name\n1,A\n").unwrap();
        assert!(matches!(items_sql(&t), Err(Error::MissingColumn { .. })));
    }
}
