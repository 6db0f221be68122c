//! Static study task catalog

use serde::{Deserialize, Serialize};

/// Task category, in the order they are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskCategory {
    Initiation,
    Engagement,
    Understanding,
    Mastery,
}

impl TaskCategory {
    pub fn all() -> &'static [TaskCategory] {
        &[
            Self::Initiation,
            Self::Engagement,
            Self::Understanding,
            Self::Mastery,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Initiation => "Initiation",
            Self::Engagement => "Engagement",
            Self::Understanding => "Understanding",
            Self::Mastery => "Mastery",
        }
    }
}

/// A study action worth a fixed amount of XP
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub category: TaskCategory,
    pub label: &'static str,
    pub xp: u32,
}

/// All tasks, grouped by category
pub static CATALOG: &[Task] = &[
    // === INITIATION ===
    Task {
        category: TaskCategory::Initiation,
        label: "Read 1–4 pages",
        xp: 5,
    },
    // === ENGAGEMENT ===
    Task {
        category: TaskCategory::Engagement,
        label: "Read 5–14 pages",
        xp: 10,
    },
    Task {
        category: TaskCategory::Engagement,
        label: "Read 15–24 pages",
        xp: 15,
    },
    Task {
        category: TaskCategory::Engagement,
        label: "Read 25+ pages",
        xp: 20,
    },
    // === UNDERSTANDING ===
    Task {
        category: TaskCategory::Understanding,
        label: "Understanding it",
        xp: 10,
    },
    Task {
        category: TaskCategory::Understanding,
        label: "Active recall",
        xp: 5,
    },
    Task {
        category: TaskCategory::Understanding,
        label: "Linking to real world",
        xp: 10,
    },
    Task {
        category: TaskCategory::Understanding,
        label: "Answering/discussing",
        xp: 5,
    },
    // === MASTERY ===
    Task {
        category: TaskCategory::Mastery,
        label: "Reading notes later",
        xp: 10,
    },
    Task {
        category: TaskCategory::Mastery,
        label: "Teaching someone",
        xp: 20,
    },
];

/// Tasks in one category
pub fn in_category(category: TaskCategory) -> impl Iterator<Item = &'static Task> {
    CATALOG.iter().filter(move |t| t.category == category)
}

/// Find a task by label (case-insensitive)
pub fn find(label: &str) -> Option<&'static Task> {
    let label = label.trim();
    CATALOG.iter().find(|t| t.label.eq_ignore_ascii_case(label))
}
