#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Application Mode
// ============================================================================

/// What the viewer is currently showing. Exactly one mode is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum Mode {
    #[default]
    Menu,
    /// The bus-stop environment.
    EnvironmentA,
    /// The dancing character.
    EnvironmentB,
}

impl Mode {
    pub const ALL: [Self; 3] = [Self::Menu, Self::EnvironmentA, Self::EnvironmentB];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Menu => "Menu",
            Self::EnvironmentA => "Bus Stop",
            Self::EnvironmentB => "Character",
        }
    }

    #[must_use]
    pub const fn is_environment(self) -> bool {
        !matches!(self, Self::Menu)
    }

    // The environment you are not in, if you are in one
    #[must_use]
    pub const fn other_environment(self) -> Option<Self> {
        match self {
            Self::Menu => None,
            Self::EnvironmentA => Some(Self::EnvironmentB),
            Self::EnvironmentB => Some(Self::EnvironmentA),
        }
    }
}

// ============================================================================
// Button Keys
// ============================================================================

/// Stable keys shared by the flat-screen buttons and the in-world buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlatButton {
    ToEnvironmentA,
    ToEnvironmentB,
    ToMenu,
    ToOther,
}

impl FlatButton {
    pub const ALL: [Self; 4] = [Self::ToEnvironmentA, Self::ToEnvironmentB, Self::ToMenu, Self::ToOther];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ToEnvironmentA => "btn-to-env1",
            Self::ToEnvironmentB => "btn-to-env2",
            Self::ToMenu => "btn-to-menu",
            Self::ToOther => "btn-to-other",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|button| button.key() == key)
    }

    /// Menu offers both environments; an environment offers the way back and the other one.
    #[must_use]
    pub const fn is_offered_in(self, mode: Mode) -> bool {
        match self {
            Self::ToEnvironmentA | Self::ToEnvironmentB => !mode.is_environment(),
            Self::ToMenu | Self::ToOther => mode.is_environment(),
        }
    }

    #[must_use]
    pub const fn target(self, current: Mode) -> Option<Mode> {
        match self {
            Self::ToEnvironmentA => Some(Mode::EnvironmentA),
            Self::ToEnvironmentB => Some(Mode::EnvironmentB),
            Self::ToMenu => Some(Mode::Menu),
            Self::ToOther => current.other_environment(),
        }
    }

    #[must_use]
    pub fn label(self, current: Mode) -> String {
        match self {
            Self::ToMenu => "Back to Menu".to_string(),
            _ => self
                .target(current)
                .map_or_else(String::new, |target| format!("Go to {}", target.label())),
        }
    }

    // Buttons offered in a mode, in layout order (left to right)
    pub fn offered_in(mode: Mode) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |button| button.is_offered_in(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_offers_both_environments() {
        let offered: Vec<_> = FlatButton::offered_in(Mode::Menu).collect();
        assert_eq!(offered, vec![FlatButton::ToEnvironmentA, FlatButton::ToEnvironmentB]);
    }

    #[test]
    fn environment_offers_menu_and_other() {
        let offered: Vec<_> = FlatButton::offered_in(Mode::EnvironmentB).collect();
        assert_eq!(offered, vec![FlatButton::ToMenu, FlatButton::ToOther]);
        assert_eq!(FlatButton::ToOther.target(Mode::EnvironmentB), Some(Mode::EnvironmentA));
        assert_eq!(FlatButton::ToOther.target(Mode::Menu), None);
    }

    #[test]
    fn keys_round_trip() {
        for button in FlatButton::ALL {
            assert_eq!(FlatButton::from_key(button.key()), Some(button));
        }
        assert_eq!(FlatButton::from_key("btnScene"), None);
    }

    #[test]
    fn labels_name_the_destination() {
        assert_eq!(FlatButton::ToOther.label(Mode::EnvironmentA), "Go to Character");
        assert_eq!(FlatButton::ToMenu.label(Mode::EnvironmentA), "Back to Menu");
    }
}
