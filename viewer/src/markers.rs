use bevy::prelude::*;

// ============================================================================
// Scene Markers
// ============================================================================

// Marker component for the main camera
#[derive(Component)]
pub struct MainCameraMarker;

// Marker component for the group all loaded content is parented to
#[derive(Component)]
pub struct ContentHolderMarker;

// Marker component for the teleport landing ring
#[derive(Component)]
pub struct TeleportRingMarker;

// ============================================================================
// UI Markers
// ============================================================================

// Marker component for the flat-screen button bar
#[derive(Component)]
pub struct FlatUiMarker;

// Marker component for the current mode title
#[derive(Component)]
pub struct ModeTitleUIMarker;

// Marker component for the gaze reticle
#[derive(Component)]
pub struct ReticleUIMarker;

// Marker component for the dwell progress bar under the reticle
#[derive(Component)]
pub struct DwellBarUIMarker;
