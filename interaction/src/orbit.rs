#[allow(clippy::wildcard_imports)]
use bevy_ecs::prelude::*;
use bevy_math::{Vec2, Vec3};
use bevy_transform::components::Transform;

use crate::constants::*;

// ============================================================================
// Desktop Orbit Camera
// ============================================================================

/// Camera orbiting a fixed target, used while not presenting.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub radius: f32,
}

impl Default for OrbitCamera {
    // Starts at the head position of a rig standing at its start point
    fn default() -> Self {
        let eye = RIG_START + Vec3::Y * EYE_HEIGHT;
        Self {
            target: ORBIT_TARGET,
            yaw: 0.0,
            pitch: 0.0,
            radius: eye.distance(ORBIT_TARGET),
        }
    }
}

impl OrbitCamera {
    // Drag delta is in radians
    pub fn rotate(&mut self, delta: Vec2) {
        self.yaw -= delta.x;
        self.pitch = (self.pitch + delta.y).clamp(-ORBIT_MAX_PITCH, ORBIT_MAX_PITCH);
    }

    // Positive steps move closer
    pub fn zoom(&mut self, steps: f32) {
        self.radius = (self.radius * 0.9_f32.powf(steps)).clamp(ORBIT_MIN_RADIUS, ORBIT_MAX_RADIUS);
    }

    #[must_use]
    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target + Vec3::new(sin_yaw * cos_pitch, sin_pitch, cos_yaw * cos_pitch) * self.radius
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.target, Vec3::Y)
    }
}

/// Width over height, or `None` for a collapsed surface.
#[must_use]
pub fn aspect_ratio(width: f32, height: f32) -> Option<f32> {
    (width > 0.0 && height > 0.0).then(|| width / height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_eye_matches_rig_head() {
        let orbit = OrbitCamera::default();
        assert!(orbit.eye().distance(RIG_START + Vec3::Y * EYE_HEIGHT) < 1e-4);
    }

    #[test]
    fn pitch_and_radius_are_clamped() {
        let mut orbit = OrbitCamera::default();
        orbit.rotate(Vec2::new(0.0, 10.0));
        assert!((orbit.pitch - ORBIT_MAX_PITCH).abs() < 1e-6);
        orbit.zoom(1000.0);
        assert!((orbit.radius - ORBIT_MIN_RADIUS).abs() < 1e-6);
        orbit.zoom(-1000.0);
        assert!((orbit.radius - ORBIT_MAX_RADIUS).abs() < 1e-6);
    }

    #[test]
    fn camera_looks_at_target() {
        let mut orbit = OrbitCamera::default();
        orbit.rotate(Vec2::new(0.7, 0.3));
        let transform = orbit.transform();
        let to_target = (orbit.target - transform.translation).normalize();
        assert!(transform.forward().dot(to_target) > 0.999);
    }

    #[test]
    fn collapsed_surface_has_no_aspect() {
        assert_eq!(aspect_ratio(1200.0, 800.0), Some(1.5));
        assert_eq!(aspect_ratio(1200.0, 0.0), None);
    }
}
