use bevy_math::{Vec2, Vec3};

// ============================================================================
// Gaze Selection
// ============================================================================

pub const DWELL_THRESHOLD_SECS: f32 = 1.5; // Continuous gaze needed to fire a button
pub const HOVER_SCALE: f32 = 1.2; // Uniform scale of the button under gaze
pub const REST_SCALE: f32 = 1.0;

// ============================================================================
// Locomotion
// ============================================================================

pub const THUMBSTICK_DEAD_ZONE: f32 = 0.1; // |axis| at or below this reads as zero
pub const LOCOMOTION_SPEED: f32 = 2.0; // meters per second

// Gamepad axis layout of an XR input source (axes 0/1 are the touchpad)
pub const THUMBSTICK_AXIS_X: usize = 2;
pub const THUMBSTICK_AXIS_Y: usize = 3;
pub const THUMBSTICK_MIN_AXES: usize = 4;

// ============================================================================
// Player Rig
// ============================================================================

pub const GROUND_HEIGHT: f32 = 0.0;
pub const EYE_HEIGHT: f32 = 1.6; // Head height inside the rig (meters)
pub const RIG_START: Vec3 = Vec3::new(0.0, GROUND_HEIGHT, 10.0); // 10 m back from the content
pub const GROUND_PLANE_SIZE: f32 = 100.0; // Invisible walkable plane, square (meters)

// ============================================================================
// Controllers
// ============================================================================

pub const CONTROLLER_COUNT: usize = 2;

// ============================================================================
// Interactable Buttons
// ============================================================================

pub const BUTTON_SIZE: Vec2 = Vec2::new(1.0, 0.3); // width x height (meters)
pub const BUTTON_SPACING: f32 = 1.2; // center to center along X

// World-anchored layout: a row at eye height, 2 m in front of the rig start
pub const WORLD_BUTTON_HEIGHT: f32 = EYE_HEIGHT;
pub const WORLD_BUTTON_Z: f32 = RIG_START.z - 2.0;

// Head-locked layout: a row below the line of sight, relative to the head
pub const HEAD_BUTTON_DISTANCE: f32 = 2.0;
pub const HEAD_BUTTON_DROP: f32 = 0.4;

// ============================================================================
// Content
// ============================================================================

pub const SCENE_MODEL: &str = "models/bus_stop.glb";
pub const SCENE_SCALE: f32 = 1.0;

pub const CHARACTER_MODEL: &str = "models/KGR.glb";
pub const CHARACTER_ANIMATION: &str = "models/silly_dancing.glb";
pub const CHARACTER_SCALE: f32 = 0.02;
pub const CHARACTER_OFFSET: Vec3 = Vec3::new(-1.0, 0.1, 0.0);

// ============================================================================
// Desktop Orbit Camera
// ============================================================================

pub const ORBIT_TARGET: Vec3 = Vec3::new(0.0, EYE_HEIGHT, 0.0);
pub const ORBIT_MIN_RADIUS: f32 = 1.0;
pub const ORBIT_MAX_RADIUS: f32 = 50.0;
pub const ORBIT_MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.05;
