use bevy_math::{Vec2, Vec3};

use crate::{
    constants::{LOCOMOTION_SPEED, THUMBSTICK_DEAD_ZONE},
    session::{HandFilter, InputSource},
};

// ============================================================================
// Thumbstick Locomotion
// ============================================================================

#[must_use]
pub fn apply_dead_zone(value: f32) -> f32 {
    if value.abs() <= THUMBSTICK_DEAD_ZONE { 0.0 } else { value }
}

/// Dead-zoned stick of the first accepted source that is actually deflected.
#[must_use]
pub fn thumbstick_input(sources: &[InputSource], filter: HandFilter) -> Vec2 {
    sources
        .iter()
        .filter(|source| filter.accepts(source.handedness))
        .filter_map(InputSource::thumbstick)
        .map(|stick| Vec2::new(apply_dead_zone(stick.x), apply_dead_zone(stick.y)))
        .find(|stick| *stick != Vec2::ZERO)
        .unwrap_or(Vec2::ZERO)
}

/// Rig displacement for one frame. Pushing the stick up (negative y) moves
/// along the head's horizontal forward, right (positive x) strafes right.
#[must_use]
pub fn displacement(stick: Vec2, head_forward: Vec3, delta_secs: f32) -> Option<Vec3> {
    if stick == Vec2::ZERO {
        return None;
    }

    // Looking straight up or down leaves no horizontal heading
    let forward = Vec3::new(head_forward.x, 0.0, head_forward.z).try_normalize()?;
    let strafe = -Vec3::Y.cross(forward);

    let step = LOCOMOTION_SPEED * delta_secs;
    Some(forward * (-stick.y * step) + strafe * (stick.x * step))
}
