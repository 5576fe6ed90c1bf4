//! Tricks, rules, and the top-level rule document.

use crate::error::KernelError;
use crate::loadout::Loadout;
use crate::tags::TagHierarchy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One authored way to satisfy a rule: a tag requirement plus a loadout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    pub id: String,
    #[serde(default)]
    pub loadout: Loadout,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Trick {
    pub fn new(id: impl Into<String>, loadout: Loadout, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            loadout,
            tags,
        }
    }

    /// A copy of this trick whose tags are closed under `hierarchy`.
    pub fn with_expanded_tags(&self, hierarchy: &TagHierarchy) -> Trick {
        Trick {
            id: self.id.clone(),
            loadout: self.loadout,
            tags: hierarchy.expand(self.tags.as_slice()),
        }
    }

    /// A trick with no tag requirement; satisfiable by loadout alone.
    pub fn is_default(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Rule name → ordered alternative tricks.
pub type RuleSet = BTreeMap<String, Vec<Trick>>;

/// Which rule collection a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Entrance,
    Location,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entrance => write!(f, "entrance"),
            Self::Location => write!(f, "location"),
        }
    }
}

/// Entrance rules, location rules, and the tag hierarchy they reference.
///
/// This is the unit exchanged as JSON. Field order here is the document's
/// key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicTricks {
    #[serde(default)]
    pub entrance_tricks: RuleSet,
    #[serde(default)]
    pub location_tricks: RuleSet,
    #[serde(default)]
    pub tag_hierarchy: TagHierarchy,
}

impl LogicTricks {
    /// Append `trick` to the named rule of the given kind.
    pub fn push_trick(&mut self, kind: RuleKind, rule: impl Into<String>, trick: Trick) {
        self.rules_mut(kind).entry(rule.into()).or_default().push(trick);
    }

    pub fn rules(&self, kind: RuleKind) -> &RuleSet {
        match kind {
            RuleKind::Entrance => &self.entrance_tricks,
            RuleKind::Location => &self.location_tricks,
        }
    }

    fn rules_mut(&mut self, kind: RuleKind) -> &mut RuleSet {
        match kind {
            RuleKind::Entrance => &mut self.entrance_tricks,
            RuleKind::Location => &mut self.location_tricks,
        }
    }

    /// Both collections in validation order: entrances, then locations.
    pub fn rule_sets(&self) -> [(RuleKind, &RuleSet); 2] {
        [
            (RuleKind::Entrance, &self.entrance_tricks),
            (RuleKind::Location, &self.location_tricks),
        ]
    }

    /// Look up a rule by name, entrances first.
    pub fn rule(&self, name: &str) -> Result<(RuleKind, &[Trick]), KernelError> {
        self.rule_sets()
            .into_iter()
            .find_map(|(kind, rules)| rules.get(name).map(|tricks| (kind, tricks.as_slice())))
            .ok_or_else(|| KernelError::UnknownRule(name.to_string()))
    }

    pub fn rule_count(&self) -> usize {
        self.entrance_tricks.len() + self.location_tricks.len()
    }

    pub fn trick_count(&self) -> usize {
        self.rule_sets()
            .into_iter()
            .flat_map(|(_, rules)| rules.values())
            .map(Vec::len)
            .sum()
    }

    /// A copy with every trick's tags closed under the tag hierarchy.
    pub fn expanded(&self) -> LogicTricks {
        let expand_set = |rules: &RuleSet| -> RuleSet {
            rules
                .iter()
                .map(|(name, tricks)| {
                    let tricks = tricks
                        .iter()
                        .map(|trick| trick.with_expanded_tags(&self.tag_hierarchy))
                        .collect();
                    (name.clone(), tricks)
                })
                .collect()
        };

        LogicTricks {
            entrance_tricks: expand_set(&self.entrance_tricks),
            location_tricks: expand_set(&self.location_tricks),
            tag_hierarchy: self.tag_hierarchy.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(id: &str, tags: &[&str]) -> Trick {
        Trick::new(
            id,
            Loadout::default(),
            tags.iter().map(|t| (*t).to_string()).collect(),
        )
    }

    #[test]
    fn push_trick_keeps_authored_order() {
        let mut logic = LogicTricks::default();
        logic.push_trick(RuleKind::Location, "Tower - Chest", tagged("t1", &[]));
        logic.push_trick(RuleKind::Location, "Tower - Chest", tagged("t2", &["Hard"]));
        logic.push_trick(RuleKind::Entrance, "Dungeon -> Tower", tagged("t3", &[]));

        let (kind, tricks) = logic.rule("Tower - Chest").expect("rule should exist");
        assert_eq!(kind, RuleKind::Location);
        assert_eq!(tricks[0].id, "t1");
        assert_eq!(tricks[1].id, "t2");
        assert_eq!(logic.rule_count(), 2);
        assert_eq!(logic.trick_count(), 3);
    }

    #[test]
    fn unknown_rule_is_an_error() {
        let logic = LogicTricks::default();
        match logic.rule("Nowhere") {
            Err(KernelError::UnknownRule(name)) => assert_eq!(name, "Nowhere"),
            other => panic!("expected unknown rule error, got {other:?}"),
        }
    }

    #[test]
    fn expanded_returns_new_value_and_leaves_source_untouched() {
        let mut logic = LogicTricks::default();
        logic.tag_hierarchy.declare("Hard", vec!["Easy".to_string()]);
        logic.tag_hierarchy.declare("Easy", Vec::new());
        logic.push_trick(RuleKind::Location, "Spot", tagged("t1", &["Hard"]));

        let expanded = logic.expanded();
        assert_eq!(expanded.location_tricks["Spot"][0].tags, vec!["Hard", "Easy"]);
        assert_eq!(logic.location_tricks["Spot"][0].tags, vec!["Hard"]);
    }

    #[test]
    fn document_uses_snake_case_keys_and_omits_empty_tags() {
        let mut logic = LogicTricks::default();
        logic.push_trick(RuleKind::Entrance, "A -> B", tagged("t1", &[]));
        let value = serde_json::to_value(&logic).expect("logic should serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "entrance_tricks": { "A -> B": [{ "id": "t1", "loadout": {} }] },
                "location_tricks": {},
                "tag_hierarchy": {}
            })
        );
    }
}
