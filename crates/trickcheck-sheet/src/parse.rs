//! Row → typed record mapping.
//!
//! One tricks-sheet row is one trick of one rule. A row names a location
//! rule when its `Location` cell is set; otherwise it names the entrance
//! rule `"{Region} -> {Connected Region}"`.

use crate::columns::SheetColumns;
use crate::error::SheetError;
use crate::row::Row;
use trickcheck_kernel::{Loadout, LogicTricks, RuleKind, TagHierarchy, Trick};

/// The rule a tricks-sheet row contributes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleTarget {
    Location(String),
    Entrance(String),
}

impl RuleTarget {
    pub fn kind(&self) -> RuleKind {
        match self {
            Self::Location(_) => RuleKind::Location,
            Self::Entrance(_) => RuleKind::Entrance,
        }
    }

    pub fn into_name(self) -> String {
        match self {
            Self::Location(name) | Self::Entrance(name) => name,
        }
    }
}

pub fn loadout_from_row(row: &Row, columns: &SheetColumns) -> Result<Loadout, SheetError> {
    Ok(Loadout {
        dream_breaker: row.flag(&columns.dream_breaker)?,
        strikebreak: row.flag(&columns.strikebreak)?,
        soul_cutter: row.flag(&columns.soul_cutter)?,
        sunsetter: row.flag(&columns.sunsetter)?,
        slide: row.flag(&columns.slide)?,
        solar_wind: row.flag(&columns.solar_wind)?,
        ascendant_light: row.flag(&columns.ascendant_light)?,
        clings: row.counter(&columns.clings)?,
        kicks: row.counter(&columns.kicks)?,
        small_keys: row.flag(&columns.small_keys)?,
    })
}

pub fn trick_from_row(
    row: &Row,
    loadout: Loadout,
    columns: &SheetColumns,
) -> Result<Trick, SheetError> {
    let id = row.string(&columns.trick_id)?;
    let tags = row.list(&columns.tags)?;
    Ok(Trick::new(id, loadout, tags))
}

pub fn rule_target(row: &Row, columns: &SheetColumns) -> Result<RuleTarget, SheetError> {
    let location = row.string(&columns.location)?;
    if !location.is_empty() {
        return Ok(RuleTarget::Location(location.to_string()));
    }
    let region = row.string(&columns.region)?;
    let connected = row.string(&columns.connected_region)?;
    Ok(RuleTarget::Entrance(format!("{region} -> {connected}")))
}

fn trick_row(row: &Row, columns: &SheetColumns) -> Result<(RuleTarget, Trick), SheetError> {
    let loadout = loadout_from_row(row, columns)?;
    let trick = trick_from_row(row, loadout, columns)?;
    let target = rule_target(row, columns)?;
    Ok((target, trick))
}

/// Build the tag hierarchy; rows with an empty tag name are skipped.
pub fn tag_hierarchy_from_rows(
    rows: &[Row],
    columns: &SheetColumns,
) -> Result<TagHierarchy, SheetError> {
    let mut hierarchy = TagHierarchy::new();
    for row in rows {
        let entry = (|| -> Result<Option<(String, Vec<String>)>, SheetError> {
            let tag = row.string(&columns.tag)?;
            if tag.is_empty() {
                return Ok(None);
            }
            Ok(Some((tag.to_string(), row.list(&columns.child_tags)?)))
        })()
        .map_err(|e| e.at_row("tag", row.number()))?;

        if let Some((tag, children)) = entry {
            hierarchy.declare(tag, children);
        }
    }
    Ok(hierarchy)
}

/// Build the full rule document from both sheets.
///
/// Tricks keep sheet order within each rule. The first bad row aborts.
pub fn logic_from_rows(
    trick_rows: &[Row],
    tag_rows: &[Row],
    columns: &SheetColumns,
) -> Result<LogicTricks, SheetError> {
    let mut logic = LogicTricks::default();
    for row in trick_rows {
        let (target, trick) =
            trick_row(row, columns).map_err(|e| e.at_row("trick", row.number()))?;
        logic.push_trick(target.kind(), target.into_name(), trick);
    }
    logic.tag_hierarchy = tag_hierarchy_from_rows(tag_rows, columns)?;

    log::info!(
        "built {} entrance rule(s), {} location rule(s), {} tag(s)",
        logic.entrance_tricks.len(),
        logic.location_tricks.len(),
        logic.tag_hierarchy.len()
    );
    Ok(logic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::read_rows;

    const TRICKS_HEADER: &str = "Location,Region,Connected Region,Trick ID,Dream Breaker,\
Strikebreak,Soul Cutter,Sunsetter,Slide,Solar Wind,Ascendant Light,Clings,Kicks,Small Keys,Tags";

    fn tricks_sheet(rows: &[&str]) -> Vec<Row> {
        let text = format!("{TRICKS_HEADER}\n{}\n", rows.join("\n"));
        read_rows(text.as_bytes(), "tricks").expect("tricks csv should parse")
    }

    fn tags_sheet(rows: &[&str]) -> Vec<Row> {
        let text = format!("Tag,Child Tags\n{}\n", rows.join("\n"));
        read_rows(text.as_bytes(), "tags").expect("tags csv should parse")
    }

    #[test]
    fn location_row_builds_location_rule() {
        let rows = tricks_sheet(&[
            "Tower - Chest,,,tc-1,TRUE,,,,TRUE,,,2,,TRUE,\"Hard, Knowledge\"",
        ]);
        let logic = logic_from_rows(&rows, &[], &SheetColumns::default()).expect("rows should map");

        let trick = &logic.location_tricks["Tower - Chest"][0];
        assert_eq!(trick.id, "tc-1");
        assert_eq!(trick.tags, vec!["Hard", "Knowledge"]);
        assert_eq!(
            trick.loadout,
            Loadout {
                dream_breaker: true,
                slide: true,
                clings: 2,
                small_keys: true,
                ..Loadout::default()
            }
        );
        assert!(logic.entrance_tricks.is_empty());
    }

    #[test]
    fn blank_location_builds_entrance_rule() {
        let rows = tricks_sheet(&[
            ",Dungeon,Castle,dc-1,,,,,,,,,1,,",
            ",Dungeon,Castle,dc-2,,,,TRUE,,,,,,,Hard",
        ]);
        let logic = logic_from_rows(&rows, &[], &SheetColumns::default()).expect("rows should map");

        let tricks = &logic.entrance_tricks["Dungeon -> Castle"];
        assert_eq!(tricks.len(), 2);
        assert_eq!(tricks[0].loadout.kicks, 1);
        assert!(tricks[0].tags.is_empty());
        assert!(tricks[1].loadout.sunsetter);
    }

    #[test]
    fn bad_counter_reports_sheet_row() {
        let rows = tricks_sheet(&[
            "Tower - Chest,,,tc-1,,,,,,,,,,,",
            "Tower - Chest,,,tc-2,,,,,,,,lots,,,",
        ]);
        let err = logic_from_rows(&rows, &[], &SheetColumns::default())
            .expect_err("bad counter should abort");
        assert_eq!(
            err.to_string(),
            "failed to build trick from row 3: column Clings: invalid integer \"lots\""
        );
    }

    #[test]
    fn negative_counter_aborts() {
        let rows = tricks_sheet(&["Tower - Chest,,,tc-1,,,,,,,,,-2,,"]);
        let err = logic_from_rows(&rows, &[], &SheetColumns::default())
            .expect_err("negative counter should abort");
        assert_eq!(
            err.to_string(),
            "failed to build trick from row 2: column Kicks: negative counter -2"
        );
    }

    #[test]
    fn missing_column_aborts() {
        let text = "Location,Trick ID\nTower - Chest,tc-1\n";
        let rows = read_rows(text.as_bytes(), "tricks").expect("csv should parse");
        let err = logic_from_rows(&rows, &[], &SheetColumns::default())
            .expect_err("missing columns should abort");
        assert_eq!(
            err.to_string(),
            "failed to build trick from row 2: missing column Dream Breaker"
        );
    }

    #[test]
    fn custom_columns_are_honored() {
        let text = "Spot,Name,Slide,Dream Breaker,Strikebreak,Soul Cutter,Sunsetter,Solar Wind,\
Ascendant Light,Clings,Kicks,Small Keys,Tags,Region,Connected Region\n\
Tower - Chest,tc-1,TRUE,,,,,,,,,,,,\n";
        let rows = read_rows(text.as_bytes(), "tricks").expect("csv should parse");
        let columns = SheetColumns {
            location: "Spot".to_string(),
            trick_id: "Name".to_string(),
            ..SheetColumns::default()
        };
        let logic = logic_from_rows(&rows, &[], &columns).expect("rows should map");
        assert!(logic.location_tricks["Tower - Chest"][0].loadout.slide);
    }

    #[test]
    fn tag_rows_build_hierarchy_and_skip_blank_tags() {
        let rows = tags_sheet(&["Hard,\"Medium, Knowledge\"", ",ignored", "Medium,", "Knowledge,"]);
        let hierarchy =
            tag_hierarchy_from_rows(&rows, &SheetColumns::default()).expect("tags should map");
        assert_eq!(hierarchy.len(), 3);
        assert_eq!(hierarchy.children("Hard"), ["Medium", "Knowledge"]);
        assert!(hierarchy.children("Medium").is_empty());
        assert!(!hierarchy.contains(""));
    }

    #[test]
    fn tag_row_without_child_column_aborts() {
        let text = "Tag\nHard\n";
        let rows = read_rows(text.as_bytes(), "tags").expect("csv should parse");
        let err = tag_hierarchy_from_rows(&rows, &SheetColumns::default())
            .expect_err("missing child column should abort");
        assert_eq!(
            err.to_string(),
            "failed to build tag from row 2: missing column Child Tags"
        );
    }
}
