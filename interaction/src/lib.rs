pub mod buttons;
pub mod config;
pub mod constants;
pub mod context;
pub mod gaze;
pub mod host;
pub mod locomotion;
pub mod mode;
pub mod orbit;
pub mod rig;
pub mod session;
pub mod surfaces;
pub mod systems;
pub mod teleport;

pub use config::ViewerConfig;
pub use context::{SelectOutcome, UiLayers, ViewerContext};
pub use host::{ContentRequest, LoadGeneration, SceneHost};
pub use mode::{FlatButton, Mode};
pub use session::{ControllerId, SessionEvent, SessionProvider};
