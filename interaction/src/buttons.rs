use std::collections::BTreeSet;

use bevy_math::{Dir3, Ray3d, Vec2, Vec3, primitives::InfinitePlane3d};
use bevy_transform::components::Transform;
#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::*,
    mode::{FlatButton, Mode},
};

// ============================================================================
// Button Types
// ============================================================================

/// Identity of one built button. A rebuild never reuses an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ButtonId(u64);

/// Frame the in-world buttons live in.
///
/// Head-locked buttons follow the head, so a gaze ray (always the head's
/// forward axis) can only ever reach a button straddling the line of sight;
/// off-center buttons stay reachable by controller rays only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum ButtonAnchor {
    HeadLocked,
    #[default]
    WorldAnchored,
}

#[derive(Debug, Clone)]
pub struct InteractableButton {
    pub id: ButtonId,
    pub name: &'static str,
    pub target: Mode,
    pub label: String,
    /// Center in the group frame. The face points along +Z.
    pub position: Vec3,
    pub half_size: Vec2,
    pub hover_scale: f32,
}

impl InteractableButton {
    // Distance along `ray` (given in the group frame) to the button face, if it hits
    fn intersect(&self, ray: Ray3d) -> Option<f32> {
        let distance = ray.intersect_plane(self.position, InfinitePlane3d { normal: Dir3::Z })?;
        let local = ray.get_point(distance) - self.position;
        (local.x.abs() <= self.half_size.x && local.y.abs() <= self.half_size.y).then_some(distance)
    }
}

// ============================================================================
// Button Group
// ============================================================================

#[derive(Debug, Clone)]
pub struct ButtonGroup {
    anchor: ButtonAnchor,
    buttons: Vec<InteractableButton>,
    next_id: u64,
}

impl ButtonGroup {
    #[must_use]
    pub const fn new(anchor: ButtonAnchor) -> Self {
        Self {
            anchor,
            buttons: Vec::new(),
            next_id: 0,
        }
    }

    #[must_use]
    pub const fn anchor(&self) -> ButtonAnchor {
        self.anchor
    }

    pub fn clear(&mut self) {
        self.buttons.clear();
    }

    // Replace the buttons with the set offered in `mode`
    pub fn rebuild(&mut self, mode: Mode) {
        self.clear();
        let offered: Vec<FlatButton> = FlatButton::offered_in(mode).collect();
        let center = (offered.len() as f32 - 1.0) / 2.0;

        for (index, key) in offered.into_iter().enumerate() {
            let Some(target) = key.target(mode) else {
                continue;
            };
            let x = (index as f32 - center) * BUTTON_SPACING;
            let position = match self.anchor {
                ButtonAnchor::WorldAnchored => Vec3::new(x, WORLD_BUTTON_HEIGHT, WORLD_BUTTON_Z),
                ButtonAnchor::HeadLocked => Vec3::new(x, -HEAD_BUTTON_DROP, -HEAD_BUTTON_DISTANCE),
            };
            let id = ButtonId(self.next_id);
            self.next_id += 1;
            self.buttons.push(InteractableButton {
                id,
                name: key.key(),
                target,
                label: key.label(mode),
                position,
                half_size: BUTTON_SIZE / 2.0,
                hover_scale: REST_SCALE,
            });
        }
    }

    #[must_use]
    pub fn get(&self, id: ButtonId) -> Option<&InteractableButton> {
        self.buttons.iter().find(|button| button.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InteractableButton> {
        self.buttons.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    #[must_use]
    pub fn names(&self) -> BTreeSet<&'static str> {
        self.buttons.iter().map(|button| button.name).collect()
    }

    // Reset every button to rest scale, then scale up the hovered one
    pub fn apply_hover(&mut self, hovered: Option<ButtonId>) {
        for button in &mut self.buttons {
            button.hover_scale = REST_SCALE;
        }
        if let Some(id) = hovered
            && let Some(button) = self.buttons.iter_mut().find(|button| button.id == id)
        {
            button.hover_scale = HOVER_SCALE;
        }
    }

    /// World transform of the group frame, given the head's world pose.
    #[must_use]
    pub fn frame(&self, head: &Transform) -> Transform {
        match self.anchor {
            ButtonAnchor::WorldAnchored => Transform::IDENTITY,
            ButtonAnchor::HeadLocked => Transform::from_translation(head.translation).with_rotation(head.rotation),
        }
    }

    #[must_use]
    pub fn world_position(&self, button: &InteractableButton, head: &Transform) -> Vec3 {
        let frame = self.frame(head);
        frame.translation + frame.rotation * button.position
    }

    /// Nearest button hit by a world-space ray.
    #[must_use]
    pub fn raycast(&self, ray: Ray3d, head: &Transform) -> Option<(ButtonId, f32)> {
        let frame = self.frame(head);
        let inverse = frame.rotation.inverse();
        let local_ray = Ray3d {
            origin: inverse * (ray.origin - frame.translation),
            direction: inverse * ray.direction,
        };

        self.buttons
            .iter()
            .filter_map(|button| button.intersect(local_ray).map(|distance| (button.id, distance)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}
