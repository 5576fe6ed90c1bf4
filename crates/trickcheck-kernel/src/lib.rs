//! # trickcheck kernel
//!
//! Sanity checks for authored trick logic: every rule (a location or an
//! entrance) lists alternative tricks, each a tag set plus a loadout. A
//! trick is one sufficient way to satisfy its rule. The kernel looks for
//! alternatives that add nothing.
//!
//! It does not decide reachability. It only compares a rule's alternatives
//! against each other.
//!
//! ## Pipeline
//!
//! ```text
//! LogicTricks            ← rules + tag hierarchy (from trickcheck-sheet)
//!     │
//! check_tag_references   ← authored tags must be declared
//!     │
//! TagHierarchy::expand   ← closure under "implies" edges
//!     │
//! validate_rules         ← default trick + pairwise equal/redundant scan
//!     │
//! ValidationReport       ← ordered flat findings
//! ```

pub mod error;
pub mod loadout;
pub mod logic;
pub mod report;
pub mod tags;
pub mod validate;

pub use error::KernelError;
pub use loadout::{Loadout, LoadoutMask, MAX_CLINGS, MAX_KICKS};
pub use logic::{LogicTricks, RuleKind, RuleSet, Trick};
pub use report::{
    CLASS_EQUAL_PAIR, CLASS_NO_DEFAULT, CLASS_REDUNDANT_TRICK, CLASS_UNKNOWN_TAG, Finding,
    VALIDATION_CHECK_KIND, ValidationReport, ValidationSummary,
};
pub use tags::TagHierarchy;
pub use validate::{
    TrickOrdering, check_tag_references, compare_tricks, validate_logic, validate_rule,
    validate_rules,
};
