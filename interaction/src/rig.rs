use bevy_math::Vec3;
use bevy_transform::components::Transform;

use crate::constants::{GROUND_HEIGHT, RIG_START};

// ============================================================================
// Player Rig
// ============================================================================

/// Movable frame holding the head and the controllers. Only translates, and
/// always stands on the ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerRig {
    position: Vec3,
}

impl Default for PlayerRig {
    fn default() -> Self {
        Self::new(RIG_START)
    }
}

impl PlayerRig {
    #[must_use]
    pub const fn new(start: Vec3) -> Self {
        Self {
            position: Vec3::new(start.x, GROUND_HEIGHT, start.z),
        }
    }

    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    // Snap to a point's horizontal coordinates
    pub const fn teleport_to(&mut self, point: Vec3) {
        self.position.x = point.x;
        self.position.z = point.z;
    }

    // Horizontal part of `delta` only
    pub fn translate(&mut self, delta: Vec3) {
        self.position.x += delta.x;
        self.position.z += delta.z;
    }

    /// Rig-relative pose to world pose.
    #[must_use]
    pub fn to_world(&self, local: &Transform) -> Transform {
        Transform {
            translation: self.position + local.translation,
            ..*local
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_is_pinned_to_ground() {
        let rig = PlayerRig::new(Vec3::new(1.0, 3.0, 2.0));
        assert_eq!(rig.position(), Vec3::new(1.0, GROUND_HEIGHT, 2.0));
    }

    #[test]
    fn vertical_motion_is_ignored() {
        let mut rig = PlayerRig::default();
        rig.translate(Vec3::new(0.5, 2.0, -0.5));
        rig.teleport_to(Vec3::new(3.0, 1.25, 4.0));
        assert_eq!(rig.position(), Vec3::new(3.0, GROUND_HEIGHT, 4.0));
    }

    #[test]
    fn local_pose_is_offset_by_rig() {
        let rig = PlayerRig::default();
        let head = rig.to_world(&Transform::from_xyz(0.0, 1.6, 0.0));
        assert_eq!(head.translation, RIG_START + Vec3::new(0.0, 1.6, 0.0));
    }
}
