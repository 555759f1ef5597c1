use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use interaction::{Mode, ViewerConfig, buttons::ButtonAnchor, session::HandFilter};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(author, version, about = "Immersive model viewer", long_about = None)]
pub struct Args {
    /// JSON file with viewer settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where the in-world buttons live
    #[arg(long, value_enum)]
    pub anchor: Option<AnchorArg>,

    /// Let either hand's thumbstick drive locomotion
    #[arg(long)]
    pub any_hand: bool,

    /// Mode to start in
    #[arg(long, value_enum)]
    pub start: Option<StartArg>,

    /// Window width
    #[arg(long, default_value = "1200")]
    pub window_width: u32,

    /// Window height
    #[arg(long, default_value = "800")]
    pub window_height: u32,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorArg {
    Head,
    World,
}

impl From<AnchorArg> for ButtonAnchor {
    fn from(arg: AnchorArg) -> Self {
        match arg {
            AnchorArg::Head => Self::HeadLocked,
            AnchorArg::World => Self::WorldAnchored,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartArg {
    Menu,
    Env1,
    Env2,
}

impl From<StartArg> for Mode {
    fn from(arg: StartArg) -> Self {
        match arg {
            StartArg::Menu => Self::Menu,
            StartArg::Env1 => Self::EnvironmentA,
            StartArg::Env2 => Self::EnvironmentB,
        }
    }
}

// ============================================================================
// Viewer Configuration
// ============================================================================

impl Args {
    /// Settings file (or defaults) with command line overrides applied on top.
    pub fn viewer_config(&self) -> Result<ViewerConfig> {
        let mut config = match &self.config {
            Some(path) => load_config_file(path)?,
            None => ViewerConfig::default(),
        };

        if let Some(anchor) = self.anchor {
            config.anchor = anchor.into();
        }
        if self.any_hand {
            config.hand_filter = HandFilter::Any;
        }
        if let Some(start) = self.start {
            config.initial_mode = start.into();
        }

        Ok(config)
    }
}

#[cfg(feature = "json")]
fn load_config_file(path: &Path) -> Result<ViewerConfig> {
    ViewerConfig::from_json_file(path)
}

#[cfg(not(feature = "json"))]
fn load_config_file(path: &Path) -> Result<ViewerConfig> {
    anyhow::bail!("cannot read {}: built without the json feature", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_flags() {
        let args = Args::try_parse_from(["viewer"]).unwrap();
        assert_eq!(args.viewer_config().unwrap(), ViewerConfig::default());
        assert_eq!((args.window_width, args.window_height), (1200, 800));
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from(["viewer", "--anchor", "head", "--any-hand", "--start", "env2"]).unwrap();
        let config = args.viewer_config().unwrap();
        assert_eq!(config.anchor, ButtonAnchor::HeadLocked);
        assert_eq!(config.hand_filter, HandFilter::Any);
        assert_eq!(config.initial_mode, Mode::EnvironmentB);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let args = Args::try_parse_from(["viewer", "--config", "/nonexistent/viewer.json"]).unwrap();
        assert!(args.viewer_config().is_err());
    }
}
