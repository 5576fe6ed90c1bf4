//! Error types for kernel lookups.

/// Errors raised by kernel queries over a loaded rule set.
///
/// Validation findings are never errors; see [`crate::report::Finding`].
#[derive(Debug, thiserror::Error)]
pub enum KernelError {
    /// No entrance or location rule carries this name.
    #[error("unknown rule: {0}")]
    UnknownRule(String),
}
