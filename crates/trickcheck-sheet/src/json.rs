//! JSON interchange for the rule document, and the flat diagnostics file.
//!
//! Writes go to a sibling temp file that is synced and then renamed over the
//! target, so a reader never sees a half-written document.

use crate::error::SheetError;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use trickcheck_kernel::{LogicTricks, ValidationReport};

const PRETTY_INDENT: &[u8] = b"    ";

/// Output layout of a rule document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonStyle {
    /// Four-space indent, for review and diffs.
    Pretty,
    /// No whitespace, for shipping.
    Compact,
}

/// Render a rule document. Both styles end with a newline.
pub fn render_logic_json(logic: &LogicTricks, style: JsonStyle) -> Result<String, SheetError> {
    let mut buf = Vec::new();
    match style {
        JsonStyle::Pretty => {
            let formatter = serde_json::ser::PrettyFormatter::with_indent(PRETTY_INDENT);
            let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
            serde::Serialize::serialize(logic, &mut serializer)
                .map_err(|e| SheetError::Serialize(e.to_string()))?;
        }
        JsonStyle::Compact => {
            serde_json::to_writer(&mut buf, logic)
                .map_err(|e| SheetError::Serialize(e.to_string()))?;
        }
    }
    buf.push(b'\n');
    String::from_utf8(buf).map_err(|e| SheetError::Serialize(e.to_string()))
}

pub fn write_logic_json(
    path: impl AsRef<Path>,
    logic: &LogicTricks,
    style: JsonStyle,
) -> Result<(), SheetError> {
    let path = path.as_ref();
    let text = render_logic_json(logic, style)?;
    write_atomic(path, text.as_bytes())?;
    log::info!("wrote {:?} rule document to {}", style, path.display());
    Ok(())
}

pub fn read_logic_json(path: impl AsRef<Path>) -> Result<LogicTricks, SheetError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| SheetError::io(path, e))?;
    let logic: LogicTricks = serde_json::from_str(&text).map_err(|source| SheetError::Json {
        path: path.display().to_string(),
        source,
    })?;
    log::info!(
        "read {} rule(s) with {} trick(s) from {}",
        logic.rule_count(),
        logic.trick_count(),
        path.display()
    );
    Ok(logic)
}

/// Write one diagnostic line per finding. A clean report yields an empty file.
pub fn write_findings(path: impl AsRef<Path>, report: &ValidationReport) -> Result<(), SheetError> {
    let path = path.as_ref();
    let mut buf = Vec::new();
    report
        .write_lines(&mut buf)
        .map_err(|e| SheetError::io(path, e))?;
    write_atomic(path, &buf)?;
    log::info!(
        "wrote {} finding(s) to {}",
        report.findings().len(),
        path.display()
    );
    Ok(())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), SheetError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| SheetError::io(parent, e))?;
    }

    let tmp_path = tmp_write_path(path);
    let write_result = (|| -> Result<(), SheetError> {
        let file = File::create(&tmp_path).map_err(|e| SheetError::io(&tmp_path, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(bytes)
            .map_err(|e| SheetError::io(&tmp_path, e))?;
        writer.flush().map_err(|e| SheetError::io(&tmp_path, e))?;
        let file = writer
            .into_inner()
            .map_err(|e| SheetError::io(&tmp_path, e.into_error()))?;
        file.sync_all().map_err(|e| SheetError::io(&tmp_path, e))?;
        Ok(())
    })();

    if let Err(error) = write_result {
        let _ = fs::remove_file(&tmp_path);
        return Err(error);
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        SheetError::io(path, e)
    })
}

fn tmp_write_path(path: &Path) -> PathBuf {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let mut tmp: OsString = path.as_os_str().to_os_string();
    tmp.push(format!(".tmp.{}.{}", std::process::id(), unique));
    PathBuf::from(tmp)
}
