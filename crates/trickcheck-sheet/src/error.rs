//! Errors from sheet and document I/O.
//!
//! All of these are structural: the run aborts before validation.

/// Errors raised while reading sheets or reading/writing rule documents.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("{path}: I/O error: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: invalid csv: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("missing column {column}")]
    MissingColumn { column: String },

    #[error("column {column}: invalid integer {value:?}")]
    InvalidInteger { column: String, value: String },

    #[error("column {column}: negative counter {value}")]
    NegativeCounter { column: String, value: i64 },

    #[error("failed to build {kind} from row {row}: {source}")]
    Row {
        kind: &'static str,
        row: usize,
        #[source]
        source: Box<SheetError>,
    },

    #[error("{path}: invalid rule document: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("serialization error: {0}")]
    Serialize(String),

    #[error("invalid toml at {path}: {source}")]
    Columns {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl SheetError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    /// Attach the 1-based sheet row number (the header is row 1).
    pub(crate) fn at_row(self, kind: &'static str, row: usize) -> Self {
        Self::Row {
            kind,
            row,
            source: Box::new(self),
        }
    }
}
