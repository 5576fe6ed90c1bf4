//! Rule validation: tag references, default tricks, and pairwise redundancy.
//!
//! For tricks t1, t2 in one rule, with `tags` the expanded tag set and
//! `mask` the encoded loadout:
//!
//! - `tags(t1) ⊆ tags(t2)`: whenever t2's tags are allowed, t1's are too.
//! - `mask(t1) ⊆ mask(t2)`: whenever t2's loadout is held, t1's is too.
//!
//! If both hold, t1 is usable wherever t2 is, and t2 adds nothing.

use crate::logic::{LogicTricks, RuleSet, Trick};
use crate::report::{Finding, ValidationReport};
use crate::tags::TagHierarchy;
use std::collections::BTreeSet;

/// How two tricks of the same rule relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrickOrdering {
    /// Same expanded tags and same loadout mask.
    Equal,
    /// The first trick asks for no more than the second; the second is redundant.
    SecondRedundant,
    /// The second trick asks for no more than the first; the first is redundant.
    FirstRedundant,
    Incomparable,
}

/// Report every authored tag that the hierarchy does not declare.
///
/// Runs on unexpanded tags. One finding per offending tag per trick.
pub fn check_tag_references(
    rules: &RuleSet,
    hierarchy: &TagHierarchy,
    report: &mut ValidationReport,
) {
    for (name, tricks) in rules {
        for (index, trick) in tricks.iter().enumerate() {
            for tag in &trick.tags {
                if !hierarchy.contains(tag) {
                    report.push(Finding::unknown_tag(name, index, tag));
                }
            }
        }
    }
}

fn tag_set(trick: &Trick) -> BTreeSet<&str> {
    trick.tags.iter().map(String::as_str).collect()
}

/// Compare two tricks whose tags are already expanded.
///
/// Equality takes precedence over either direction of redundancy, so
/// mutual dominance always reads as `Equal`.
pub fn compare_tricks(first: &Trick, second: &Trick) -> TrickOrdering {
    let first_tags = tag_set(first);
    let second_tags = tag_set(second);
    let first_mask = first.loadout.mask();
    let second_mask = second.loadout.mask();

    let first_tags_le = first_tags.is_subset(&second_tags);
    let second_tags_le = second_tags.is_subset(&first_tags);
    let first_load_le = first_mask.is_subset_of(second_mask);
    let second_load_le = second_mask.is_subset_of(first_mask);

    if first_tags_le && second_tags_le && first_load_le && second_load_le {
        TrickOrdering::Equal
    } else if first_tags_le && first_load_le {
        TrickOrdering::SecondRedundant
    } else if second_tags_le && second_load_le {
        TrickOrdering::FirstRedundant
    } else {
        TrickOrdering::Incomparable
    }
}

/// Validate one rule's alternatives (tags already expanded).
///
/// Pairs are scanned in authored order; the missing-default finding, if
/// any, comes after the rule's pair findings.
pub fn validate_rule(name: &str, tricks: &[Trick], report: &mut ValidationReport) {
    for (i1, first) in tricks.iter().enumerate() {
        for (i2, second) in tricks.iter().enumerate().skip(i1 + 1) {
            match compare_tricks(first, second) {
                TrickOrdering::Equal => report.push(Finding::equal_pair(name, i1, i2)),
                TrickOrdering::SecondRedundant => report.push(Finding::redundant(name, i2, i1)),
                TrickOrdering::FirstRedundant => report.push(Finding::redundant(name, i1, i2)),
                TrickOrdering::Incomparable => {}
            }
        }
    }

    if !tricks.iter().any(Trick::is_default) {
        report.push(Finding::no_default(name));
    }
}

/// Validate every rule of a set, in name order.
pub fn validate_rules(rules: &RuleSet, report: &mut ValidationReport) {
    for (name, tricks) in rules {
        validate_rule(name, tricks, report);
    }
}

/// Full pipeline: tag references, expansion, then rule validation.
///
/// Entrance rules are handled before location rules at each stage.
pub fn validate_logic(logic: &LogicTricks) -> ValidationReport {
    let mut report = ValidationReport::new();

    for (_, rules) in logic.rule_sets() {
        check_tag_references(rules, &logic.tag_hierarchy, &mut report);
    }
    log::debug!(
        "tag reference check: {} unknown tag finding(s)",
        report.findings().len()
    );

    let expanded = logic.expanded();
    log::debug!(
        "expanded tags for {} trick(s) across {} rule(s)",
        expanded.trick_count(),
        expanded.rule_count()
    );

    for (kind, rules) in expanded.rule_sets() {
        let before = report.findings().len();
        validate_rules(rules, &mut report);
        log::debug!(
            "validated {} {kind} rule(s): {} finding(s)",
            rules.len(),
            report.findings().len() - before
        );
    }

    report.summary.rule_count = logic.rule_count();
    report.summary.trick_count = logic.trick_count();
    report
}
