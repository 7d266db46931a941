//! Event-level structure.

use nor2qml_model::{HeaderKind, Issue, NordicEvent};

/// The first header of every event must be a type 1 line.
pub fn check(event: &NordicEvent) -> Vec<Issue> {
    match event.first_header_kind() {
        Some(HeaderKind::Main) => Vec::new(),
        found => vec![Issue::FirstHeaderNotMain { found }],
    }
}
