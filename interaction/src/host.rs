use std::fmt;

use bevy_math::Vec3;
use bevy_transform::components::Transform;
#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::{constants::*, mode::Mode};

// ============================================================================
// Load Generations
// ============================================================================

/// Tag carried by every content request. Bumped on each mode switch, so a
/// completion whose generation is not the current one belongs to content
/// that was already superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LoadGeneration(u64);

impl LoadGeneration {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for LoadGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ============================================================================
// Content Requests
// ============================================================================

/// A model file and where to put it under the content holder.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct ModelAsset {
    pub path: String,
    pub scale: f32,
    pub offset: Vec3,
}

impl ModelAsset {
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.offset).with_scale(Vec3::splat(self.scale))
    }
}

/// Everything the host needs to populate one mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRequest {
    pub generation: LoadGeneration,
    pub mode: Mode,
    pub model: ModelAsset,
    /// Looping clip played on the model. The model is only shown once both are loaded.
    pub animation: Option<String>,
}

/// Which content each environment shows.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize), serde(default))]
pub struct ContentCatalog {
    pub environment_a: ModelAsset,
    pub environment_b: ModelAsset,
    pub environment_b_animation: Option<String>,
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self {
            environment_a: ModelAsset {
                path: SCENE_MODEL.to_string(),
                scale: SCENE_SCALE,
                offset: Vec3::ZERO,
            },
            environment_b: ModelAsset {
                path: CHARACTER_MODEL.to_string(),
                scale: CHARACTER_SCALE,
                offset: CHARACTER_OFFSET,
            },
            environment_b_animation: Some(CHARACTER_ANIMATION.to_string()),
        }
    }
}

impl ContentCatalog {
    /// The menu has no content.
    #[must_use]
    pub fn request_for(&self, mode: Mode, generation: LoadGeneration) -> Option<ContentRequest> {
        let (model, animation) = match mode {
            Mode::Menu => return None,
            Mode::EnvironmentA => (self.environment_a.clone(), None),
            Mode::EnvironmentB => (self.environment_b.clone(), self.environment_b_animation.clone()),
        };
        Some(ContentRequest {
            generation,
            mode,
            model,
            animation,
        })
    }
}

// ============================================================================
// Scene Host
// ============================================================================

/// The rendering side: owns the content graph and loads assets asynchronously.
///
/// Completions are reported back through `ViewerContext::accept_loaded` and
/// `ViewerContext::report_load_failure`.
pub trait SceneHost {
    /// Drop all loaded content and stop its animation playback.
    fn clear_content(&mut self);

    /// Start loading; must not block.
    fn request_content(&mut self, request: ContentRequest);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_requests_nothing() {
        let catalog = ContentCatalog::default();
        assert!(catalog.request_for(Mode::Menu, LoadGeneration::default()).is_none());
    }

    #[test]
    fn character_carries_animation() {
        let catalog = ContentCatalog::default();
        let generation = LoadGeneration::default().next();
        let request = catalog.request_for(Mode::EnvironmentB, generation).unwrap();
        assert_eq!(request.generation, generation);
        assert_eq!(request.animation.as_deref(), Some(CHARACTER_ANIMATION));
        assert_eq!(request.model.transform().scale, Vec3::splat(CHARACTER_SCALE));
        assert_eq!(request.model.transform().translation, CHARACTER_OFFSET);
    }

    #[test]
    fn generations_increase() {
        let first = LoadGeneration::default();
        assert!(first.next() > first);
        assert_eq!(first.next().to_string(), "#1");
    }
}
