// tests/items_sql.rs
use std::fs;
use std::path::PathBuf;

use troopdb::config::options::SqlOptions;
use troopdb::{sql, Error};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("troopdb_sql_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn dump_goes_to_the_out_file() {
    let dir = tmp_dir("out");
    let input = dir.join("items.csv");
    fs::write(&input, "Item_ID,Item_Type_ID,Culture_ID,Item_Name\n7,3,,\"Mail, Hauberk\"\n8.0,,2,Hunter\n").unwrap();
    let out = dir.join("sql").join("items.sql");

    sql::items::run(&SqlOptions { input, out: Some(out.clone()) }).unwrap();

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("-- Item Types\n"));
    assert!(text.ends_with(
        "INSERT INTO Items (item_id, item_type_id, culture_id, name) VALUES\n  \
         (7, 3, NULL, 'Mail, Hauberk'),\n  \
         (8, NULL, 2, 'Hunter');\n"
    ));
}

#[test]
fn unreadable_input_is_fatal() {
    let dir = tmp_dir("missing");
    let opts = SqlOptions { input: dir.join("nope.csv"), out: Some(dir.join("items.sql")) };
    assert!(sql::items::run(&opts).is_err());
    assert!(!dir.join("items.sql").exists());
}

#[test]
fn bad_id_names_the_row() {
    let dir = tmp_dir("bad");
    let input = dir.join("items.csv");
    fs::write(&input, "Item_ID,Item_Type_ID,Culture_ID,Item_Name\n1,1,1,Ok\nabc,1,1,Broken\n").unwrap();

    let err = sql::items::run(&SqlOptions { input, out: Some(dir.join("items.sql")) }).unwrap_err();
    match err {
        Error::InvalidValue { row, column, value, .. } => {
            assert_eq!((row, column.as_str(), value.as_str()), (2, "Item_ID", "abc"));
        }
        other => panic!("unexpected {other}"),
    }
}
