//! Top-level progression of the card: a loading screen, a landing gate, then
//! the story itself.
//!
//! `Loading -> Gate` happens when the loading timer fires, `Gate -> Story` when
//! the reader opens the card. Both are one-way; every other input is a no-op,
//! which is also what makes a late or duplicate timer firing harmless.

use serde::{Deserialize, Serialize};

/// Minimum time the loading screen stays up, regardless of asset readiness.
pub const LOADING_DELAY_MS: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NarrativePhase {
    Loading,
    Gate,
    Story,
}

impl Default for NarrativePhase {
    fn default() -> Self {
        Self::initialize()
    }
}

impl NarrativePhase {
    pub fn initialize() -> Self {
        NarrativePhase::Loading
    }

    #[must_use]
    pub fn on_timer_elapsed(self) -> Self {
        match self {
            NarrativePhase::Loading => NarrativePhase::Gate,
            other => other,
        }
    }

    #[must_use]
    pub fn on_user_advance(self) -> Self {
        match self {
            NarrativePhase::Gate => NarrativePhase::Story,
            other => other,
        }
    }

    /// The loader is drawn over the gate until the timer fires.
    pub fn shows_loading_overlay(self) -> bool {
        self == NarrativePhase::Loading
    }

    pub fn has_started(self) -> bool {
        self == NarrativePhase::Story
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_phase_sequence() {
        let phase = NarrativePhase::initialize();
        assert_eq!(phase, NarrativePhase::Loading);

        let phase = phase.on_timer_elapsed();
        assert_eq!(phase, NarrativePhase::Gate);

        let phase = phase.on_timer_elapsed();
        assert_eq!(phase, NarrativePhase::Gate);

        let phase = phase.on_user_advance();
        assert_eq!(phase, NarrativePhase::Story);

        let phase = phase.on_user_advance();
        assert_eq!(phase, NarrativePhase::Story);
    }

    #[test]
    fn advance_during_loading_is_ignored() {
        let phase = NarrativePhase::Loading.on_user_advance();
        assert_eq!(phase, NarrativePhase::Loading);
    }

    #[test]
    fn story_never_goes_back() {
        let phase = NarrativePhase::Story.on_timer_elapsed().on_user_advance();
        assert_eq!(phase, NarrativePhase::Story);
    }

    #[test]
    fn views_follow_phase() {
        assert!(NarrativePhase::Loading.shows_loading_overlay());
        assert!(!NarrativePhase::Gate.shows_loading_overlay());
        assert!(!NarrativePhase::Gate.has_started());
        assert!(NarrativePhase::Story.has_started());
    }

    #[test]
    fn serializes_as_lowercase_name() {
        let json = serde_json::to_string(&NarrativePhase::Gate).unwrap();
        assert_eq!(json, "\"gate\"");
    }
}
