//! Structured test case document

use serde::{Deserialize, Serialize};
use std::fmt;

/// Root of a generated document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCaseDocument {
    pub components: Vec<Component>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub parent_component: String,
    pub sub_components: Vec<SubComponent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubComponent {
    pub summary: String,
    pub priority: Priority,
    pub tags: Vec<String>,
    pub test_cases: Vec<TestStep>,
}

/// One action and the result it should produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestStep {
    pub action: String,
    pub expected_result: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    P1,
    P2,
    P3,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::P1, Priority::P2, Priority::P3];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::P1 => "P1",
            Priority::P2 => "P2",
            Priority::P3 => "P3",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Priority::ALL.into_iter().find(|p| p.as_str() == s)
    }

    /// Label used in summaries
    pub fn label(&self) -> &'static str {
        match self {
            Priority::P1 => "Critical",
            Priority::P2 => "Important",
            Priority::P3 => "Nice-to-have",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TestCaseDocument {
    /// Total number of test steps across all components
    pub fn total_test_cases(&self) -> usize {
        self.components.iter().map(Component::total_test_cases).sum()
    }
}

impl Component {
    pub fn total_test_cases(&self) -> usize {
        self.sub_components.iter().map(|s| s.test_cases.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_priority_parse() {
        assert_eq!(Priority::parse("P2"), Some(Priority::P2));
        assert_eq!(Priority::parse("p2"), None);
        assert_eq!(Priority::parse("P4"), None);
    }

    #[test]
    fn test_document_counts() {
        let doc: TestCaseDocument = serde_json::from_value(json!({
            "components": [{
                "parent_component": "login-form",
                "sub_components": [
                    {"summary": "a", "priority": "P1", "tags": [], "test_cases": [
                        {"action": "x", "expected_result": "y"},
                        {"action": "x2", "expected_result": "y2"}
                    ]},
                    {"summary": "b", "priority": "P3", "tags": ["UI"], "test_cases": [
                        {"action": "z", "expected_result": "w"}
                    ]}
                ]
            }]
        }))
        .unwrap();

        assert_eq!(doc.total_test_cases(), 3);
        assert_eq!(doc.components[0].sub_components[1].priority, Priority::P3);
    }
}
