use std::f32::consts::FRAC_PI_2;

#[allow(clippy::wildcard_imports)]
use bevy::prelude::*;
use interaction::{
    LoadGeneration, Mode, SessionProvider,
    constants::EYE_HEIGHT,
    session::{ControllerId, Handedness, InputSource},
};

use crate::constants::CONTROLLER_OFFSETS;

const MAX_HEAD_PITCH: f32 = FRAC_PI_2 - 0.05;

// ============================================================================
// Emulated Immersive Session
// ============================================================================

/// Stand-in for a headset: mouse steers the head, two controllers are held
/// just below it and aim where the head looks.
#[derive(Resource, Debug)]
pub struct EmulatedSession {
    presenting: bool,
    yaw: f32,
    pitch: f32,
    sources: [InputSource; 2],
}

impl Default for EmulatedSession {
    fn default() -> Self {
        Self {
            presenting: false,
            yaw: 0.0,
            pitch: 0.0,
            sources: [
                InputSource {
                    handedness: Handedness::Left,
                    axes: vec![0.0; 4],
                },
                InputSource {
                    handedness: Handedness::Right,
                    axes: vec![0.0; 4],
                },
            ],
        }
    }
}

impl EmulatedSession {
    pub fn toggle(&mut self) {
        self.presenting = !self.presenting;
        if !self.presenting {
            for source in &mut self.sources {
                source.axes.fill(0.0);
            }
        }
    }

    // Delta in radians (x = yaw, y = pitch)
    pub fn look(&mut self, delta: Vec2) {
        self.yaw -= delta.x;
        self.pitch = (self.pitch - delta.y).clamp(-MAX_HEAD_PITCH, MAX_HEAD_PITCH);
    }

    // Stick in gamepad convention (up is positive y)
    pub fn set_thumbstick(&mut self, handedness: Handedness, stick: Vec2) {
        if let Some(source) = self.sources.iter_mut().find(|source| source.handedness == handedness) {
            source.axes = thumbstick_axes(stick);
        }
    }
}

// XR gamepads report the stick on axes 2/3 with up being negative
#[must_use]
pub fn thumbstick_axes(stick: Vec2) -> Vec<f32> {
    vec![0.0, 0.0, stick.x, -stick.y]
}

impl SessionProvider for EmulatedSession {
    fn is_presenting(&self) -> bool {
        self.presenting
    }

    fn head_pose(&self) -> Transform {
        Transform::from_xyz(0.0, EYE_HEIGHT, 0.0).with_rotation(Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0))
    }

    fn controller_pose(&self, controller: ControllerId) -> Option<Transform> {
        if !self.presenting {
            return None;
        }
        let head = self.head_pose();
        let offset = Vec3::from_array(CONTROLLER_OFFSETS[controller.index()]);
        Some(Transform::from_translation(head.translation + head.rotation * offset).with_rotation(head.rotation))
    }

    fn input_sources(&self) -> &[InputSource] {
        if self.presenting { &self.sources } else { &[] }
    }
}

// ============================================================================
// Content Loading
// ============================================================================

/// A content request still waiting on the asset server.
#[derive(Debug)]
pub struct PendingLoad {
    pub generation: LoadGeneration,
    pub mode: Mode,
    pub path: String,
    pub scene: Handle<Scene>,
    pub clip: Option<Handle<AnimationClip>>,
    pub transform: Transform,
}

#[derive(Resource, Default, Debug)]
pub struct PendingLoads(pub Vec<PendingLoad>);

/// Looping clip for the current content, applied to its animation players.
#[derive(Debug, Clone)]
pub struct ContentClip {
    pub graph: Handle<AnimationGraph>,
    pub node: AnimationNodeIndex,
}

#[derive(Resource, Default, Debug)]
pub struct ContentAnimation(pub Option<ContentClip>);

// ============================================================================
// Shared Render Assets
// ============================================================================

#[derive(Resource)]
pub struct ButtonAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
    pub hover_material: Handle<StandardMaterial>,
}
