use crate::support::{load_columns_or_exit, print_json_or_exit};
use serde_json::json;
use trickcheck_kernel::LogicTricks;
use trickcheck_sheet::{
    JsonStyle, Row, SheetColumns, SheetError, logic_from_rows, read_rows_from_path,
    write_logic_json,
};

pub struct Args {
    pub tricks_csv: String,
    pub tags_csv: String,
    pub out: String,
    pub out_min: String,
    pub columns: Option<String>,
    pub json: bool,
}

fn read_rows_or_exit(path: &str, label: &str) -> Vec<Row> {
    read_rows_from_path(path).unwrap_or_else(|error| {
        eprintln!("error: failed to read {label} sheet: {error}");
        std::process::exit(1);
    })
}

fn convert(
    tricks_rows: &[Row],
    tags_rows: &[Row],
    columns: &SheetColumns,
    out: &str,
    out_min: &str,
) -> Result<LogicTricks, SheetError> {
    let logic = logic_from_rows(tricks_rows, tags_rows, columns)?;
    write_logic_json(out, &logic, JsonStyle::Pretty)?;
    write_logic_json(out_min, &logic, JsonStyle::Compact)?;
    Ok(logic)
}

pub fn run(args: Args) {
    log::debug!("converting {} and {}", args.tricks_csv, args.tags_csv);
    let columns = load_columns_or_exit(args.columns.as_deref());
    let tricks_rows = read_rows_or_exit(&args.tricks_csv, "tricks");
    let tags_rows = read_rows_or_exit(&args.tags_csv, "tags");

    let logic = convert(&tricks_rows, &tags_rows, &columns, &args.out, &args.out_min)
        .unwrap_or_else(|error| {
            eprintln!("error: {error}");
            std::process::exit(1);
        });

    if args.json {
        let payload = json!({
            "schema": 1,
            "tricksCsv": args.tricks_csv,
            "tagsCsv": args.tags_csv,
            "out": args.out,
            "outMin": args.out_min,
            "entranceRuleCount": logic.entrance_tricks.len(),
            "locationRuleCount": logic.location_tricks.len(),
            "trickCount": logic.trick_count(),
            "tagCount": logic.tag_hierarchy.len()
        });
        print_json_or_exit(&payload, "sheet-to-json");
    } else {
        println!(
            "[sheet-to-json] OK (entrance rules={}, location rules={}, tricks={}, tags={})",
            logic.entrance_tricks.len(),
            logic.location_tricks.len(),
            logic.trick_count(),
            logic.tag_hierarchy.len()
        );
        println!("  wrote {}", args.out);
        println!("  wrote {}", args.out_min);
    }
}
