use bevy_math::{Ray3d, Vec3};
use bevy_transform::components::Transform;

use crate::{constants::CONTROLLER_COUNT, session::ControllerId, surfaces::WalkableSurfaces};

// ============================================================================
// Teleport State
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TeleportMarker {
    pub position: Vec3,
    pub visible: bool,
}

/// Trigger state of each controller plus the shared landing marker.
#[derive(Debug, Clone, Default)]
pub struct TeleportState {
    requesting: [bool; CONTROLLER_COUNT],
    marker: TeleportMarker,
}

/// Forward ray of a controller: its position, along its local -Z.
#[must_use]
pub fn controller_ray(pose: &Transform) -> Ray3d {
    Ray3d {
        origin: pose.translation,
        direction: pose.forward(),
    }
}

impl TeleportState {
    pub const fn begin_request(&mut self, controller: ControllerId) {
        self.requesting[controller.index()] = true;
    }

    pub const fn end_request(&mut self, controller: ControllerId) {
        self.requesting[controller.index()] = false;
    }

    #[must_use]
    pub const fn is_requesting(&self, controller: ControllerId) -> bool {
        self.requesting[controller.index()]
    }

    #[must_use]
    pub fn any_requesting(&self) -> bool {
        self.requesting.iter().any(|&requesting| requesting)
    }

    #[must_use]
    pub const fn marker(&self) -> TeleportMarker {
        self.marker
    }

    pub const fn hide_marker(&mut self) {
        self.marker.visible = false;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Re-aim the marker from the world poses of tracked controllers.
    ///
    /// The first requesting controller whose ray lands on a walkable surface
    /// places the marker; if none does, the marker is hidden.
    pub fn update_marker<I, S>(&mut self, controllers: I, surfaces: &mut S)
    where
        I: IntoIterator<Item = (ControllerId, Option<Transform>)>,
        S: WalkableSurfaces + ?Sized,
    {
        let hit = controllers
            .into_iter()
            .filter(|(controller, _)| self.is_requesting(*controller))
            .filter_map(|(_, pose)| pose)
            .find_map(|pose| surfaces.cast_walkable(controller_ray(&pose)));

        match hit {
            Some(point) => {
                self.marker.position = point;
                self.marker.visible = true;
            }
            None => self.marker.visible = false,
        }
    }

    /// Consume a visible marker as a teleport destination.
    pub const fn take_destination(&mut self) -> Option<Vec3> {
        if self.marker.visible {
            self.marker.visible = false;
            Some(self.marker.position)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surfaces::WalkableSet;
    use bevy_math::Quat;

    const LEFT: ControllerId = ControllerId::ALL[0];
    const RIGHT: ControllerId = ControllerId::ALL[1];

    // Held at chest height, pitched 45 degrees down
    fn aiming_down(at: Vec3) -> Transform {
        Transform::from_translation(at).with_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_4))
    }

    fn aiming_up(at: Vec3) -> Transform {
        Transform::from_translation(at).with_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_4))
    }

    #[test]
    fn marker_hidden_without_request() {
        let mut state = TeleportState::default();
        let mut ground = WalkableSet::default();
        let pose = aiming_down(Vec3::new(0.0, 1.0, 0.0));
        state.update_marker([(LEFT, Some(pose)), (RIGHT, Some(pose))], &mut ground);
        assert!(!state.marker().visible);
    }

    #[test]
    fn requesting_controller_places_marker() {
        let mut state = TeleportState::default();
        let mut ground = WalkableSet::default();
        state.begin_request(LEFT);
        state.update_marker([(LEFT, Some(aiming_down(Vec3::new(0.0, 1.0, 5.0)))), (RIGHT, None)], &mut ground);

        let marker = state.marker();
        assert!(marker.visible);
        assert!((marker.position.z - 4.0).abs() < 1e-4);
        assert!(marker.position.y.abs() < 1e-5);
    }

    #[test]
    fn idle_second_controller_does_not_hide_marker() {
        let mut state = TeleportState::default();
        let mut ground = WalkableSet::default();
        state.begin_request(RIGHT);
        let pose = aiming_down(Vec3::new(0.0, 1.0, 0.0));
        state.update_marker([(LEFT, Some(pose)), (RIGHT, Some(pose))], &mut ground);
        assert!(state.marker().visible);
    }

    #[test]
    fn miss_hides_marker() {
        let mut state = TeleportState::default();
        let mut ground = WalkableSet::default();
        state.begin_request(LEFT);
        state.update_marker([(LEFT, Some(aiming_down(Vec3::Y)))], &mut ground);
        assert!(state.marker().visible);
        state.update_marker([(LEFT, Some(aiming_up(Vec3::Y)))], &mut ground);
        assert!(!state.marker().visible);
    }

    #[test]
    fn untracked_controller_hides_marker() {
        let mut state = TeleportState::default();
        let mut ground = WalkableSet::default();
        state.begin_request(LEFT);
        state.update_marker([(LEFT, None)], &mut ground);
        assert!(!state.marker().visible);
    }

    #[test]
    fn destination_is_taken_once() {
        let mut state = TeleportState::default();
        let mut ground = WalkableSet::default();
        state.begin_request(LEFT);
        state.update_marker([(LEFT, Some(aiming_down(Vec3::Y)))], &mut ground);
        state.end_request(LEFT);

        assert!(state.take_destination().is_some());
        assert!(state.take_destination().is_none());
        assert!(!state.any_requesting());
    }
}
