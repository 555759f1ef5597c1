#[allow(clippy::wildcard_imports)]
use bevy_ecs::prelude::*;
use bevy_math::Vec2;
use bevy_transform::components::Transform;
#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::constants::{CONTROLLER_COUNT, THUMBSTICK_AXIS_X, THUMBSTICK_AXIS_Y, THUMBSTICK_MIN_AXES};

// ============================================================================
// Controllers and Input Sources
// ============================================================================

/// Index of a tracked controller, as the device enumerates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControllerId(usize);

impl ControllerId {
    pub const ALL: [Self; CONTROLLER_COUNT] = [Self(0), Self(1)];

    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < CONTROLLER_COUNT { Some(Self(index)) } else { None }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Handedness {
    #[default]
    None,
    Left,
    Right,
}

/// Which input sources may drive thumbstick locomotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum HandFilter {
    #[default]
    LeftOnly,
    Any,
}

impl HandFilter {
    #[must_use]
    pub fn accepts(self, handedness: Handedness) -> bool {
        match self {
            Self::LeftOnly => handedness == Handedness::Left,
            Self::Any => true,
        }
    }
}

/// One XR input source. `axes` is empty when the source has no gamepad.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSource {
    pub handedness: Handedness,
    pub axes: Vec<f32>,
}

impl InputSource {
    #[must_use]
    pub fn thumbstick(&self) -> Option<Vec2> {
        if self.axes.len() < THUMBSTICK_MIN_AXES {
            return None;
        }
        Some(Vec2::new(self.axes[THUMBSTICK_AXIS_X], self.axes[THUMBSTICK_AXIS_Y]))
    }
}

// ============================================================================
// Session Provider
// ============================================================================

/// The device side of an immersive session. Poses are relative to the player rig.
pub trait SessionProvider {
    fn is_presenting(&self) -> bool;

    fn head_pose(&self) -> Transform;

    /// `None` while the controller is not tracked.
    fn controller_pose(&self, controller: ControllerId) -> Option<Transform>;

    fn input_sources(&self) -> &[InputSource];
}

// ============================================================================
// Session Messages
// ============================================================================

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Started,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectPhase {
    Start,
    End,
}

/// Trigger press or release on one controller.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectEvent {
    pub controller: ControllerId,
    pub phase: SelectPhase,
}
