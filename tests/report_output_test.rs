//! Writer tests for the report command's output formats.

use gradebook::io::output::{JsonWriter, MarkdownWriter, TerminalWriter};
use gradebook::{
    insertion_sort, render_roster, OutputWriter, RosterReport, SortDirection, Student,
};
use pretty_assertions::assert_eq;

fn sample_report(direction: SortDirection) -> RosterReport {
    let records = insertion_sort(
        vec![
            Student::new("Noah", 73.0),
            Student::new("Ava", 91.5),
            Student::new("Emma", 82.0),
        ],
        direction,
    );
    RosterReport::new(direction, records)
}

#[test]
fn test_terminal_writer_emits_roster_block() {
    let report = sample_report(SortDirection::Ascending);
    let mut buf = Vec::new();
    TerminalWriter::new(&mut buf).write_report(&report).unwrap();

    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text, render_roster(&report.records, "Ascending"));
    assert!(text.starts_with("Ascending\n"));
}

#[test]
fn test_json_writer_preserves_sorted_order() {
    let report = sample_report(SortDirection::Descending);
    let mut buf = Vec::new();
    JsonWriter::new(&mut buf).write_report(&report).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(value["title"], "Descending");
    assert_eq!(value["direction"], "descending");

    let names: Vec<&str> = value["records"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ava", "Emma", "Noah"]);
    assert!(value["generated_at"].is_string());
}

#[test]
fn test_markdown_writer_renders_table() {
    let report = sample_report(SortDirection::Ascending);
    let mut buf = Vec::new();
    MarkdownWriter::new(&mut buf)
        .write_report(&report)
        .unwrap();

    let text = String::from_utf8(buf).unwrap();
    assert!(text.starts_with("# Gradebook Report\n"));
    assert!(text.contains("Direction: Ascending"));
    assert!(text.contains("| Name | Score |"));
    // Scores keep the fixed two-decimal rendering
    assert!(text.contains("| Noah | 73.00 |"));

    // Rows appear in sorted order
    let noah = text.find("| Noah |").unwrap();
    let emma = text.find("| Emma |").unwrap();
    let ava = text.find("| Ava |").unwrap();
    assert!(noah < emma && emma < ava);
}
