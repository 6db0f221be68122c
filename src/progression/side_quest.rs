//! Side quests: free-form bonus tasks

/// Completed side-quest count plus the text currently being typed
#[derive(Debug, Clone, Default)]
pub struct SideQuests {
    completed: u32,
    pending_text: String,
}

impl SideQuests {
    pub fn completed(&self) -> u32 {
        self.completed
    }

    pub fn pending_text(&self) -> &str {
        &self.pending_text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.pending_text = text.into();
    }

    /// Count one completion and clear the pending text; returns the text it held
    pub fn complete(&mut self) -> String {
        self.completed = self.completed.saturating_add(1);
        std::mem::take(&mut self.pending_text)
    }
}
