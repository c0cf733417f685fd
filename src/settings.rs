//! Presentation preferences
//!
//! Nothing here affects the simulation; these only change what the render
//! pass draws.

use serde::{Deserialize, Serialize};

/// Display preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === HUD ===
    /// HP and weapon readout
    pub show_hud: bool,
    /// Current spawn shape readout under the weapon line
    pub show_shape: bool,

    // === Debug ===
    /// Outline collision circles and oriented hitboxes
    pub show_hitboxes: bool,

    // === Visual Effects ===
    /// Blink the ship sprite while it falls after being destroyed
    pub blink_dead_ship: bool,
    /// Draw the background sprite (plain clear colour otherwise)
    pub background: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_hud: true,
            show_shape: false,
            show_hitboxes: false,
            blink_dead_ship: true,
            background: true,
        }
    }
}

impl Settings {
    /// Apply `--flag` style switches from the command line, ignoring
    /// anything unrecognised. Returns the arguments that were not consumed.
    pub fn apply_flags<'a>(&mut self, args: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        let mut rest = Vec::new();
        for arg in args {
            match arg {
                "--hitboxes" => self.show_hitboxes = true,
                "--no-hud" => self.show_hud = false,
                "--show-shape" => self.show_shape = true,
                "--no-blink" => self.blink_dead_ship = false,
                "--no-background" => self.background = false,
                other => rest.push(other),
            }
        }
        rest
    }

    /// Whether the dead ship is drawn at time `t` (seconds)
    pub fn dead_ship_visible(&self, t: f64) -> bool {
        !self.blink_dead_ship || t.rem_euclid(0.4) <= 0.2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_toggle_and_pass_through() {
        let mut settings = Settings::default();
        let rest = settings.apply_flags(["--hitboxes", "tuning.json", "--no-hud"]);
        assert!(settings.show_hitboxes);
        assert!(!settings.show_hud);
        assert_eq!(rest, vec!["tuning.json"]);
    }

    #[test]
    fn test_dead_ship_blink() {
        let settings = Settings::default();
        assert!(settings.dead_ship_visible(0.1));
        assert!(!settings.dead_ship_visible(0.3));
        assert!(settings.dead_ship_visible(0.5));

        let steady = Settings {
            blink_dead_ship: false,
            ..Default::default()
        };
        assert!(steady.dead_ship_visible(0.3));
    }
}
