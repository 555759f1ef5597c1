use std::time::Duration;

use bevy_time::{Timer, TimerMode};

use crate::{buttons::ButtonId, constants::DWELL_THRESHOLD_SECS};

// ============================================================================
// Gaze Dwell Selection
// ============================================================================

/// Dwell accumulator for the button under the viewer's gaze.
#[derive(Debug, Clone)]
pub struct GazeSelection {
    current_target: Option<ButtonId>,
    dwell: Timer,
}

impl Default for GazeSelection {
    fn default() -> Self {
        Self::new(DWELL_THRESHOLD_SECS)
    }
}

impl GazeSelection {
    #[must_use]
    pub fn new(threshold_secs: f32) -> Self {
        Self {
            current_target: None,
            dwell: Timer::from_seconds(threshold_secs, TimerMode::Once),
        }
    }

    #[must_use]
    pub const fn current_target(&self) -> Option<ButtonId> {
        self.current_target
    }

    #[must_use]
    pub fn dwell_secs(&self) -> f32 {
        self.dwell.elapsed_secs()
    }

    #[must_use]
    pub fn threshold_secs(&self) -> f32 {
        self.dwell.duration().as_secs_f32()
    }

    /// Fraction of the threshold reached, for progress feedback.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.dwell.fraction()
    }

    pub fn reset(&mut self) {
        self.current_target = None;
        self.dwell.reset();
    }

    /// Feed this frame's gaze hit. Returns the button to fire, at most once per
    /// threshold's worth of continuous dwell.
    pub fn update(&mut self, hit: Option<ButtonId>, delta: Duration) -> Option<ButtonId> {
        if hit != self.current_target {
            self.current_target = hit;
            self.dwell.reset();
        }

        let target = self.current_target?;
        self.dwell.tick(delta);
        if self.dwell.is_finished() {
            self.dwell.reset();
            Some(target)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{buttons::ButtonGroup, buttons::ButtonAnchor, mode::Mode};

    const FRAME: Duration = Duration::from_nanos(16_666_667); // 60 fps

    fn two_buttons() -> (ButtonId, ButtonId) {
        let mut group = ButtonGroup::new(ButtonAnchor::WorldAnchored);
        group.rebuild(Mode::Menu);
        let ids: Vec<_> = group.iter().map(|button| button.id).collect();
        (ids[0], ids[1])
    }

    fn gaze_for(gaze: &mut GazeSelection, target: Option<ButtonId>, frames: u32) -> usize {
        (0..frames).filter(|_| gaze.update(target, FRAME).is_some()).count()
    }

    #[test]
    fn ten_seconds_fires_six_times() {
        let (a, _) = two_buttons();
        let mut gaze = GazeSelection::default();
        assert_eq!(gaze_for(&mut gaze, Some(a), 600), 6);
    }

    #[test]
    fn switching_target_resets_dwell() {
        let (a, b) = two_buttons();
        let mut gaze = GazeSelection::default();
        assert_eq!(gaze_for(&mut gaze, Some(a), 60), 0);
        assert_eq!(gaze_for(&mut gaze, Some(b), 60), 0);
        assert_eq!(gaze.current_target(), Some(b));
        assert!(gaze.dwell_secs() < 1.1);
    }

    #[test]
    fn looking_away_resets_dwell() {
        let (a, _) = two_buttons();
        let mut gaze = GazeSelection::default();
        gaze_for(&mut gaze, Some(a), 80);
        assert_eq!(gaze_for(&mut gaze, None, 30), 0);
        assert_eq!(gaze.dwell_secs(), 0.0);
        // Needs a full threshold again after returning
        assert_eq!(gaze_for(&mut gaze, Some(a), 80), 0);
    }

    #[test]
    fn fire_resets_accumulator() {
        let (a, _) = two_buttons();
        let mut gaze = GazeSelection::default();
        assert_eq!(gaze.update(Some(a), Duration::from_secs(2)), Some(a));
        assert_eq!(gaze.dwell_secs(), 0.0);
        assert_eq!(gaze.update(Some(a), FRAME), None);
    }
}
