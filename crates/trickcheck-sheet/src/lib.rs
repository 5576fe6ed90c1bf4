//! # trickcheck-sheet
//!
//! Adapters between the authoring spreadsheets and the kernel.
//!
//! This crate provides:
//! - `Row` (header-indexed CSV rows with typed cell accessors)
//! - `SheetColumns` (the header names each field is read from)
//! - Row → `Trick` / `TagHierarchy` mapping
//! - JSON read/write of the rule document and the flat diagnostics file
//!
//! It performs no validation of its own; findings come from
//! `trickcheck-kernel`.
//!
//! ## Data flow
//!
//! ```text
//! Tricks CSV + Tags CSV
//!     ↓  read_rows / logic_from_rows
//! LogicTricks
//!     ↕  write_logic_json / read_logic_json
//! tricks.json (pretty) + tricks.min.json (compact)
//! ```

pub mod columns;
pub mod error;
pub mod json;
pub mod parse;
pub mod row;

pub use columns::SheetColumns;
pub use error::SheetError;
pub use json::{JsonStyle, read_logic_json, render_logic_json, write_findings, write_logic_json};
pub use parse::{
    RuleTarget, loadout_from_row, logic_from_rows, rule_target, tag_hierarchy_from_rows,
    trick_from_row,
};
pub use row::{LIST_SEPARATOR, Row, read_rows, read_rows_from_path};
