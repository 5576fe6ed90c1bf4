use crate::support::{load_logic_or_exit, print_json_or_exit};
use serde_json::json;
use trickcheck_kernel::{
    CLASS_EQUAL_PAIR, CLASS_NO_DEFAULT, CLASS_REDUNDANT_TRICK, CLASS_UNKNOWN_TAG,
    ValidationReport, validate_logic,
};
use trickcheck_sheet::write_findings;

fn print_report(report: &ValidationReport, out: &str) {
    println!(
        "[validate] {} (rules={}, tricks={}, findings={})",
        if report.is_clean() { "OK" } else { "FINDINGS" },
        report.summary.rule_count,
        report.summary.trick_count,
        report.summary.finding_count
    );
    for class in [
        CLASS_UNKNOWN_TAG,
        CLASS_EQUAL_PAIR,
        CLASS_REDUNDANT_TRICK,
        CLASS_NO_DEFAULT,
    ] {
        let count = report.count_class(class);
        if count > 0 {
            println!("  - {class}: {count}");
        }
    }
    println!("  wrote {out}");
}

pub fn run(input: String, out: String, json_output: bool) {
    let logic = load_logic_or_exit(&input);
    let report = validate_logic(&logic);
    log::info!(
        "validated {} rule(s): {} finding(s)",
        report.summary.rule_count,
        report.summary.finding_count
    );

    write_findings(&out, &report).unwrap_or_else(|error| {
        eprintln!("error: failed to write diagnostics: {error}");
        std::process::exit(1);
    });

    if json_output {
        let payload = json!({
            "schema": 1,
            "checkKind": report.check_kind,
            "input": input,
            "out": out,
            "result": if report.is_clean() { "clean" } else { "findings" },
            "findings": report.findings,
            "summary": report.summary
        });
        print_json_or_exit(&payload, "validate");
    } else {
        print_report(&report, &out);
    }
}
