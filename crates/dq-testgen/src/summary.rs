//! Human-readable summary of a generated document

use std::collections::BTreeMap;

use crate::document::{Priority, TestCaseDocument};

/// Characters of each sub-component summary shown in the breakdown
const SUMMARY_PREVIEW_CHARS: usize = 50;

/// Build the detailed text summary. Counts are weighted by test cases,
/// so a tag on a sub-component with three steps counts three times.
pub fn detailed_summary(doc: &TestCaseDocument) -> String {
    let mut summary = String::from("\n=== Test Case Generation Summary ===\n");

    summary.push_str("\n📊 Overall Statistics:");
    summary.push_str(&format!("\n- Total Components: {}", doc.components.len()));
    summary.push_str(&format!("\n- Total Test Cases: {}", doc.total_test_cases()));

    let mut by_priority: BTreeMap<Priority, usize> =
        Priority::ALL.into_iter().map(|p| (p, 0)).collect();
    let mut by_tag: BTreeMap<&str, usize> = BTreeMap::new();

    for component in &doc.components {
        for sub in &component.sub_components {
            let cases = sub.test_cases.len();
            *by_priority.entry(sub.priority).or_default() += cases;
            for tag in &sub.tags {
                *by_tag.entry(tag.as_str()).or_default() += cases;
            }
        }
    }

    summary.push_str("\n\n🎯 Priority Distribution:");
    for (priority, count) in &by_priority {
        summary.push_str(&format!(
            "\n- {} ({}): {} test cases",
            priority.label(),
            priority,
            count
        ));
    }

    summary.push_str("\n\n🏷 Tag Coverage:");
    for (tag, count) in &by_tag {
        summary.push_str(&format!("\n- {}: {} test cases", tag, count));
    }

    summary.push_str("\n\n📝 Component Breakdown:");
    for component in &doc.components {
        summary.push_str(&format!("\n\n🔹 {}", component.parent_component.to_uppercase()));
        summary.push_str(&format!("\n  - Sub-components: {}", component.sub_components.len()));
        summary.push_str(&format!("\n  - Total test cases: {}", component.total_test_cases()));
        for sub in &component.sub_components {
            let preview: String = sub.summary.chars().take(SUMMARY_PREVIEW_CHARS).collect();
            summary.push_str(&format!(
                "\n  - {}... ({} tests, {})",
                preview,
                sub.test_cases.len(),
                sub.priority
            ));
        }
    }

    summary
}
