use serde::{Deserialize, Serialize};

/// Delay between the last edit event and the autosave commit
pub const AUTOSAVE_DELAY_MS: u64 = 1000;

/// Autosave state machine states
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SaveState {
    /// No edits outstanding; the store matches the session buffer
    Idle,
    /// Edits captured, commit timer armed
    PendingSave,
    /// Commit in progress
    Saving,
}

impl SaveState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaveState::Idle => "idle",
            SaveState::PendingSave => "pending_save",
            SaveState::Saving => "saving",
        }
    }

    /// Collapse to the two-value indicator the UI renders
    pub fn indicator(&self) -> SaveIndicator {
        match self {
            SaveState::Idle => SaveIndicator::Saved,
            SaveState::PendingSave | SaveState::Saving => SaveIndicator::Saving,
        }
    }
}

/// UI-facing save indicator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SaveIndicator {
    Saving,
    Saved,
}

impl SaveIndicator {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaveIndicator::Saving => "saving",
            SaveIndicator::Saved => "saved",
        }
    }
}
