use serde::Serialize;
use trickcheck_kernel::LogicTricks;
use trickcheck_sheet::{SheetColumns, read_logic_json};

pub fn load_logic_or_exit(input: &str) -> LogicTricks {
    read_logic_json(input).unwrap_or_else(|error| {
        eprintln!("error: failed to load rule document: {error}");
        std::process::exit(1);
    })
}

pub fn load_columns_or_exit(columns: Option<&str>) -> SheetColumns {
    match columns {
        Some(path) => SheetColumns::from_toml_path(path).unwrap_or_else(|error| {
            eprintln!("error: failed to load column map: {error}");
            std::process::exit(1);
        }),
        None => SheetColumns::default(),
    }
}

pub fn print_json_or_exit<T: Serialize>(payload: &T, label: &str) {
    let rendered = serde_json::to_string_pretty(payload).unwrap_or_else(|error| {
        eprintln!("error: failed to render {label} payload: {error}");
        std::process::exit(2);
    });
    println!("{rendered}");
}
