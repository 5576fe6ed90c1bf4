use crate::support::{load_logic_or_exit, print_json_or_exit};
use serde::Serialize;
use serde_json::json;
use trickcheck_kernel::{RuleKind, Trick};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TrickEntry {
    index: usize,
    id: String,
    tags: Vec<String>,
    expanded_tags: Vec<String>,
    loadout: String,
    is_default: bool,
}

fn entry(index: usize, trick: &Trick, expanded: &Trick) -> TrickEntry {
    TrickEntry {
        index,
        id: trick.id.clone(),
        tags: trick.tags.clone(),
        expanded_tags: expanded.tags.clone(),
        loadout: trick.loadout.to_string(),
        is_default: trick.is_default(),
    }
}

fn join_or_none(tags: &[String]) -> String {
    if tags.is_empty() {
        "(none)".to_string()
    } else {
        tags.join(", ")
    }
}

fn print_entries(rule: &str, kind: RuleKind, entries: &[TrickEntry]) {
    println!("[explain] {rule} ({kind}, tricks={})", entries.len());
    for entry in entries {
        println!("  {}. {}", entry.index, entry.id);
        println!("     tags: {}", join_or_none(&entry.tags));
        println!("     expanded: {}", join_or_none(&entry.expanded_tags));
        println!("     loadout: {}", entry.loadout);
    }
}

pub fn run(rule: String, input: String, json_output: bool) {
    let logic = load_logic_or_exit(&input);
    let (kind, tricks) = logic.rule(&rule).unwrap_or_else(|error| {
        eprintln!("error: {error}");
        std::process::exit(1);
    });

    let entries: Vec<TrickEntry> = tricks
        .iter()
        .enumerate()
        .map(|(index, trick)| {
            let expanded = trick.with_expanded_tags(&logic.tag_hierarchy);
            entry(index, trick, &expanded)
        })
        .collect();

    if json_output {
        let payload = json!({
            "schema": 1,
            "input": input,
            "rule": rule,
            "kind": kind,
            "tricks": entries
        });
        print_json_or_exit(&payload, "explain");
    } else {
        print_entries(&rule, kind, &entries);
    }
}
