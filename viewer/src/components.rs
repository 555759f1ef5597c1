use bevy::prelude::*;
use interaction::{FlatButton, buttons::ButtonId};

// ============================================================================
// Button Components
// ============================================================================

// Quad showing one in-world button
#[derive(Component)]
pub struct ButtonVisual {
    pub id: ButtonId,
}

// Screen-space label that tracks an in-world button
#[derive(Component)]
pub struct ButtonLabel {
    pub id: ButtonId,
}

// A flat-screen button and the key it stands for
#[derive(Component, Clone, Copy)]
pub struct FlatButtonKey(pub FlatButton);

