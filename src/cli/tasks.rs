//! Tasks command implementation

use scholar_quest::progression::tasks::{self, TaskCategory};

/// Catalog grouped by category, one task per line
pub fn catalog_lines() -> Vec<String> {
    let mut lines = Vec::new();
    for category in TaskCategory::all() {
        lines.push(format!("{}:", category.label()));
        for task in tasks::in_category(*category) {
            lines.push(format!("  {:<24} +{} XP", task.label, task.xp));
        }
    }
    lines
}

/// Print the study task catalog
pub fn tasks_command() {
    for line in catalog_lines() {
        println!("{line}");
    }
}
