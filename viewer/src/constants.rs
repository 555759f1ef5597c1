// ============================================================================
// Viewer Constants
// ============================================================================

// Window
pub const WINDOW_TITLE: &str = "XR Viewer";
pub const BACKGROUND_COLOR: [f32; 3] = [0.063, 0.063, 0.063]; // 0x101010

// Camera settings
pub const CAMERA_FOV_DEGREES: f32 = 50.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

// Light settings
pub const LIGHT_AMBIENT_BRIGHTNESS: f32 = 400.0;
pub const LIGHT_DIRECTIONAL_BRIGHTNESS: f32 = 6000.0;
pub const LIGHT_DIRECTIONAL_POSITION: [f32; 3] = [2.0, 5.0, 5.0];

// Mouse sensitivity as radians per pixel
pub const MOUSE_SENSITIVITY: f32 = 0.003;
pub const SCROLL_LINE_STEPS: f32 = 1.0; // zoom steps per wheel line
pub const SCROLL_PIXEL_STEPS: f32 = 0.02; // zoom steps per wheel pixel

// Emulated controllers, relative to the head (left, right)
pub const CONTROLLER_OFFSETS: [[f32; 3]; 2] = [[-0.1, -0.1, -0.1], [0.1, -0.1, -0.1]];

// Teleport marker ring
pub const MARKER_INNER_RADIUS: f32 = 0.25;
pub const MARKER_OUTER_RADIUS: f32 = 0.3;
pub const MARKER_LIFT: f32 = 0.01; // Slightly above the hit surface to avoid z-fighting
pub const MARKER_COLOR: [f32; 3] = [0.0, 1.0, 0.0];

// In-world buttons
pub const BUTTON_COLOR: [f32; 4] = [0.15, 0.15, 0.2, 0.9];
pub const BUTTON_HOVER_COLOR: [f32; 4] = [0.2, 0.45, 0.9, 0.95];
pub const BUTTON_LABEL_FONT_SIZE: f32 = 18.0;
pub const BUTTON_LABEL_WIDTH: f32 = 160.0; // pixels

// Flat UI
pub const FLAT_BUTTON_WIDTH: f32 = 180.0;
pub const FLAT_BUTTON_HEIGHT: f32 = 40.0;
pub const FLAT_FONT_SIZE: f32 = 18.0;
pub const FLAT_BUTTON_COLOR: [f32; 4] = [0.2, 0.2, 0.25, 0.9];
pub const FLAT_BUTTON_HOVER_COLOR: [f32; 4] = [0.3, 0.3, 0.4, 0.95];
pub const FLAT_BUTTON_PRESSED_COLOR: [f32; 4] = [0.2, 0.45, 0.9, 1.0];
pub const MODE_TITLE_COLOR: [f32; 4] = [0.2, 0.45, 0.9, 1.0];

// Gaze reticle
pub const RETICLE_SIZE: f32 = 20.0;
pub const RETICLE_THICKNESS: f32 = 2.0;
pub const RETICLE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.8];
pub const DWELL_BAR_WIDTH: f32 = 60.0;
pub const DWELL_BAR_HEIGHT: f32 = 4.0;
