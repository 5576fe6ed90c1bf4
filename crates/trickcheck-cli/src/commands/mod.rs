pub mod explain;
pub mod sheet_to_json;
pub mod validate;
