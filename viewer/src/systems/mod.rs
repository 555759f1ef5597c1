// Re-export all systems modules
pub mod content;
pub mod controls;
pub mod session;
pub mod setup;
pub mod ui;
pub mod visuals;
