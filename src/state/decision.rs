//! The proposal's yes/no decision.
//!
//! Two independent tracks: the affirmative latch (unset -> set, absorbing) and
//! the negative track, a counter whose visibility decays by a fixed step per
//! engagement until the "No" button is exhausted after seven engagements.
//! Setting the latch freezes everything, including the negative track.

use serde::{Deserialize, Serialize};

use crate::random::{between, UnitSource};

/// Visibility lost by the negative option on every engagement.
pub const VISIBILITY_STEP: f64 = 0.15;
/// Maximum displacement of the negative option along either axis.
pub const OFFSET_BOUND: f64 = 100.0;
/// Engagements after which the negative option is gone for good.
pub const MAX_REJECTIONS: u32 = 7;
/// Degrees of tilt added per rejection.
const ROTATION_STEP_DEG: f64 = 5.0;

pub const NO_PHRASES: [&str; 10] = [
    "No",
    "Are you sure?",
    "Really sure?",
    "Think again!",
    "Last chance!",
    "Surely not?",
    "You're breaking my heart ;(",
    "Give it another thought!",
    "I'm gonna cry...",
    "You're so mean!",
];

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    fn scatter(source: &mut impl UnitSource) -> Self {
        Self {
            x: between(source, -OFFSET_BOUND, OFFSET_BOUND),
            y: between(source, -OFFSET_BOUND, OFFSET_BOUND),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionWidgetState {
    pub rejection_count: u32,
    pub affirmative_chosen: bool,
    pub negative_visibility: f64,
    pub negative_offset: Offset,
}

impl Default for DecisionWidgetState {
    fn default() -> Self {
        Self::initial()
    }
}

impl DecisionWidgetState {
    pub fn initial() -> Self {
        Self {
            rejection_count: 0,
            affirmative_chosen: false,
            negative_visibility: 1.0,
            negative_offset: Offset::default(),
        }
    }

    /// Sets the latch. Already-chosen states are returned unchanged.
    #[must_use]
    pub fn on_affirmative_chosen(&self) -> Self {
        if self.affirmative_chosen {
            return self.clone();
        }
        Self {
            affirmative_chosen: true,
            ..self.clone()
        }
    }

    /// A click or pointer-enter on the negative option. No-op once the latch
    /// is set or the option is exhausted.
    #[must_use]
    pub fn on_negative_engaged(&self, source: &mut impl UnitSource) -> Self {
        if self.affirmative_chosen || !self.negative_available() {
            return self.clone();
        }
        let rejection_count = self.rejection_count + 1;
        Self {
            rejection_count,
            affirmative_chosen: false,
            negative_visibility: decay(self.negative_visibility, rejection_count),
            negative_offset: Offset::scatter(source),
        }
    }

    pub fn label_for(&self) -> &'static str {
        let index = (self.rejection_count as usize).min(NO_PHRASES.len() - 1);
        NO_PHRASES[index]
    }

    pub fn auxiliary_prompt_visible(&self) -> bool {
        self.rejection_count > 2 && self.negative_visibility > 0.0
    }

    /// Whether the negative option is still rendered and interactable.
    pub fn negative_available(&self) -> bool {
        self.negative_visibility > 0.0
    }

    pub fn negative_rotation_deg(&self) -> f64 {
        f64::from(self.rejection_count) * ROTATION_STEP_DEG
    }
}

/// Residual visibility treated as fully faded.
const VISIBILITY_FLOOR: f64 = 1e-9;

/// One decay step from the current visibility. Snaps to zero at the rejection
/// limit, and for float residue, so no sliver of a button is left behind.
fn decay(visibility: f64, rejections: u32) -> f64 {
    let next = visibility - VISIBILITY_STEP;
    if rejections >= MAX_REJECTIONS || next <= VISIBILITY_FLOOR {
        return 0.0;
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::testing::Sequence;
    use pretty_assertions::assert_eq;

    const EPSILON: f64 = 1e-9;

    fn engage(state: DecisionWidgetState, times: usize) -> DecisionWidgetState {
        let mut source = Sequence::new(&[0.25, 0.75]);
        (0..times).fold(state, |s, _| s.on_negative_engaged(&mut source))
    }

    #[test]
    fn initial_state() {
        let state = DecisionWidgetState::initial();
        assert_eq!(state.rejection_count, 0);
        assert!(!state.affirmative_chosen);
        assert_eq!(state.negative_visibility, 1.0);
        assert_eq!(state.negative_offset, Offset { x: 0.0, y: 0.0 });
        assert_eq!(state.label_for(), "No");
        assert!(!state.auxiliary_prompt_visible());
    }

    #[test]
    fn visibility_decays_linearly_per_engagement() {
        for n in 0..=7u32 {
            let state = engage(DecisionWidgetState::initial(), n as usize);
            assert_eq!(state.rejection_count, n);
            let expected = (1.0 - 0.15 * f64::from(n)).max(0.0);
            assert!(
                (state.negative_visibility - expected).abs() < EPSILON,
                "after {} engagements visibility was {}",
                n,
                state.negative_visibility
            );
        }
    }

    #[test]
    fn exhausted_after_seven_engagements() {
        let six = engage(DecisionWidgetState::initial(), 6);
        assert!(six.negative_available());

        let seven = engage(six, 1);
        assert_eq!(seven.negative_visibility, 0.0);
        assert!(!seven.negative_available());

        let mut source = Sequence::new(&[0.9]);
        let after = seven.on_negative_engaged(&mut source);
        assert_eq!(after, seven);
        assert_eq!(engage(seven.clone(), 5), seven);
    }

    #[test]
    fn affirmative_is_idempotent() {
        let once = DecisionWidgetState::initial().on_affirmative_chosen();
        let twice = once.on_affirmative_chosen();
        assert!(once.affirmative_chosen);
        assert_eq!(once, twice);
    }

    #[test]
    fn affirmative_keeps_negative_track_frozen() {
        let before = engage(DecisionWidgetState::initial(), 2);
        let chosen = before.on_affirmative_chosen();
        assert_eq!(chosen.rejection_count, 2);
        assert_eq!(chosen.negative_offset, before.negative_offset);
        assert_eq!(chosen.negative_visibility, before.negative_visibility);
    }

    #[test]
    fn negative_after_affirmative_is_rejected() {
        let chosen = DecisionWidgetState::initial().on_affirmative_chosen();
        let mut source = Sequence::new(&[0.1]);
        let after = chosen.on_negative_engaged(&mut source);
        assert_eq!(after, chosen);
    }

    #[test]
    fn affirmative_still_available_when_exhausted() {
        let exhausted = engage(DecisionWidgetState::initial(), 7);
        let chosen = exhausted.on_affirmative_chosen();
        assert!(chosen.affirmative_chosen);
        assert_eq!(chosen.rejection_count, 7);
    }

    #[test]
    fn three_rejections_scenario() {
        let state = engage(DecisionWidgetState::initial(), 3);
        assert_eq!(state.rejection_count, 3);
        assert!((state.negative_visibility - 0.55).abs() < EPSILON);
        assert!(state.auxiliary_prompt_visible());
        assert_eq!(state.label_for(), "Think again!");
        assert_eq!(state.label_for(), NO_PHRASES[3]);
    }

    #[test]
    fn auxiliary_prompt_threshold() {
        for n in 0..=2 {
            assert!(!engage(DecisionWidgetState::initial(), n).auxiliary_prompt_visible());
        }
        for n in 3..=6 {
            assert!(engage(DecisionWidgetState::initial(), n).auxiliary_prompt_visible());
        }
        // Hidden again once the button itself is gone.
        assert!(!engage(DecisionWidgetState::initial(), 7).auxiliary_prompt_visible());
    }

    #[test]
    fn label_advances_then_clamps() {
        let labels: Vec<&str> = (0..NO_PHRASES.len() as u32 + 5)
            .map(|rejection_count| DecisionWidgetState { rejection_count, ..DecisionWidgetState::initial() }.label_for())
            .collect();
        assert_eq!(&labels[..NO_PHRASES.len()], &NO_PHRASES[..]);
        assert!(labels[NO_PHRASES.len()..].iter().all(|l| *l == "You're so mean!"));
    }

    #[test]
    fn offset_follows_source_within_bounds() {
        let mut source = Sequence::new(&[0.0, 0.5]);
        let state = DecisionWidgetState::initial().on_negative_engaged(&mut source);
        assert_eq!(state.negative_offset, Offset { x: -100.0, y: 0.0 });

        let mut source = Sequence::new(&[0.13, 0.999_999, 0.42, 0.87, 0.0, 0.61]);
        let mut state = DecisionWidgetState::initial();
        for _ in 0..7 {
            let next = state.on_negative_engaged(&mut source);
            assert!(next.negative_offset.x.abs() <= OFFSET_BOUND);
            assert!(next.negative_offset.y.abs() <= OFFSET_BOUND);
            assert_ne!(next.negative_offset, state.negative_offset);
            state = next;
        }
    }

    #[test]
    fn replay_is_deterministic_with_same_source() {
        let run = || {
            let mut source = Sequence::new(&[0.3, 0.8, 0.55]);
            let state = DecisionWidgetState::initial()
                .on_negative_engaged(&mut source)
                .on_negative_engaged(&mut source)
                .on_affirmative_chosen();
            state.on_negative_engaged(&mut source)
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn decay_continues_from_current_visibility() {
        let restored: DecisionWidgetState = serde_json::from_str(
            r#"{"rejection_count":0,"affirmative_chosen":false,"negative_visibility":0.3,"negative_offset":{"x":0.0,"y":0.0}}"#,
        )
        .unwrap();
        let once = engage(restored, 1);
        assert_eq!(once.rejection_count, 1);
        assert!((once.negative_visibility - 0.15).abs() < EPSILON);

        let twice = engage(once, 1);
        assert_eq!(twice.negative_visibility, 0.0);
        assert!(!twice.negative_available());
    }

    #[test]
    fn visibility_never_increases() {
        let mut state = DecisionWidgetState::initial();
        let mut source = Sequence::new(&[0.4, 0.6]);
        for _ in 0..10 {
            let next = state.on_negative_engaged(&mut source);
            assert!(next.negative_visibility <= state.negative_visibility);
            state = next;
        }
        assert_eq!(state.rejection_count, MAX_REJECTIONS);
    }

    #[test]
    fn rotation_grows_with_rejections() {
        assert_eq!(DecisionWidgetState::initial().negative_rotation_deg(), 0.0);
        assert_eq!(engage(DecisionWidgetState::initial(), 4).negative_rotation_deg(), 20.0);
    }
}
