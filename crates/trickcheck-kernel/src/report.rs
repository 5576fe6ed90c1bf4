//! Validation findings and the ordered report that collects them.
//!
//! Findings carry no severity. Each one renders as a single
//! `"{rule}: {message}"` line, and the report keeps them in discovery order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};

pub const VALIDATION_CHECK_KIND: &str = "trickcheck.validate.v1";

pub const CLASS_UNKNOWN_TAG: &str = "tricks.tag.unknown";
pub const CLASS_NO_DEFAULT: &str = "tricks.rule.no_default";
pub const CLASS_EQUAL_PAIR: &str = "tricks.pair.equal";
pub const CLASS_REDUNDANT_TRICK: &str = "tricks.pair.redundant";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub rule: String,
    pub class: String,
    pub message: String,
}

impl Finding {
    pub fn unknown_tag(rule: &str, trick: usize, tag: &str) -> Self {
        Self::new(
            rule,
            CLASS_UNKNOWN_TAG,
            format!("trick {trick} tag {tag} is not in tag hierarchy"),
        )
    }

    pub fn no_default(rule: &str) -> Self {
        Self::new(rule, CLASS_NO_DEFAULT, "no default tricks".to_string())
    }

    pub fn equal_pair(rule: &str, first: usize, second: usize) -> Self {
        Self::new(
            rule,
            CLASS_EQUAL_PAIR,
            format!("tricks {first}, {second} are equal"),
        )
    }

    pub fn redundant(rule: &str, redundant: usize, by: usize) -> Self {
        Self::new(
            rule,
            CLASS_REDUNDANT_TRICK,
            format!("trick {redundant} is made unnecessary by trick {by}"),
        )
    }

    fn new(rule: &str, class: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            class: class.to_string(),
            message,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.rule, self.message)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    pub rule_count: usize,
    pub trick_count: usize,
    pub finding_count: usize,
}

/// Ordered findings from one validation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub check_kind: String,
    pub findings: Vec<Finding>,
    pub summary: ValidationSummary,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self {
            check_kind: VALIDATION_CHECK_KIND.to_string(),
            findings: Vec::new(),
            summary: ValidationSummary::default(),
        }
    }
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
        self.summary.finding_count = self.findings.len();
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// True when the rule set raised no findings.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Findings rendered as flat lines, in discovery order.
    pub fn lines(&self) -> Vec<String> {
        self.findings.iter().map(ToString::to_string).collect()
    }

    /// Number of findings of one class.
    pub fn count_class(&self, class: &str) -> usize {
        self.findings.iter().filter(|f| f.class == class).count()
    }

    /// Write one finding per line.
    pub fn write_lines(&self, writer: &mut impl Write) -> io::Result<()> {
        for finding in &self.findings {
            writeln!(writer, "{finding}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn findings_render_in_discovery_order() {
        let mut report = ValidationReport::new();
        report.push(Finding::unknown_tag("A -> B", 1, "Hardd"));
        report.push(Finding::equal_pair("A -> B", 0, 2));
        report.push(Finding::redundant("A -> B", 3, 0));
        report.push(Finding::no_default("Tower - Chest"));

        insta::assert_snapshot!(report.lines().join("\n"), @r"
        A -> B: trick 1 tag Hardd is not in tag hierarchy
        A -> B: tricks 0, 2 are equal
        A -> B: trick 3 is made unnecessary by trick 0
        Tower - Chest: no default tricks
        ");
        assert_eq!(report.summary.finding_count, 4);
        assert_eq!(report.count_class(CLASS_UNKNOWN_TAG), 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn write_lines_terminates_every_line() {
        let mut report = ValidationReport::new();
        report.push(Finding::no_default("Y"));
        report.push(Finding::no_default("Z"));

        let mut out = Vec::new();
        report.write_lines(&mut out).expect("write should succeed");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "Y: no default tricks\nZ: no default tricks\n"
        );
    }

    #[test]
    fn empty_report_is_clean_and_writes_nothing() {
        let report = ValidationReport::new();
        let mut out = Vec::new();
        report.write_lines(&mut out).expect("write should succeed");
        assert!(report.is_clean());
        assert!(out.is_empty());
    }

    #[test]
    fn report_serializes_with_camel_case_keys() {
        let mut report = ValidationReport::new();
        report.push(Finding::no_default("Y"));
        let value = serde_json::to_value(&report).expect("report should serialize");
        assert_eq!(value["checkKind"], VALIDATION_CHECK_KIND);
        assert_eq!(value["findings"][0]["class"], CLASS_NO_DEFAULT);
        assert_eq!(value["summary"]["findingCount"], 1);
    }
}
