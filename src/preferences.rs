use serde::Deserialize;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::puzzle::common::Color;
use crate::puzzle::scramble::ScrambleSettings;

const PREFS_PATH: &str = "./preferences.json";

fn primary_default() -> Color {
    Color::White
}

fn session_log_default() -> PathBuf {
    PathBuf::from("logs/session.json")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// The color that faces front on a new cube.
    #[serde(default = "primary_default")]
    pub primary: Color,
    #[serde(default)]
    pub scramble: ScrambleSettings,
    #[serde(default = "session_log_default")]
    pub session_log: PathBuf,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            primary: primary_default(),
            scramble: ScrambleSettings::default(),
            session_log: session_log_default(),
        }
    }
}

impl Preferences {
    pub fn save(&self) -> eyre::Result<()> {
        self.save_to(PREFS_PATH)
    }

    /// Reads `./preferences.json`, falling back to the defaults if it does not exist.
    pub fn load() -> eyre::Result<Self> {
        Self::load_from(PREFS_PATH)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> eyre::Result<()> {
        std::fs::write(path, serde_json::to_string(self)?)?;
        Ok(())
    }

    pub fn load_from(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        let file;
        if path.exists() {
            file = std::fs::File::open(path)?;
        } else {
            log::debug!("no {}, using default preferences", path.display());
            return Ok(Default::default());
        }
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_gives_defaults() {
        let prefs: Preferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.scramble.rounds(), 50..=69);
    }

    #[test]
    fn partial_settings_keep_other_defaults() {
        let prefs: Preferences =
            serde_json::from_str(r#"{"primary": "Red", "scramble": {"max_rounds": 60}}"#).unwrap();
        assert_eq!(prefs.primary, Color::Red);
        assert_eq!(prefs.scramble.rounds(), 50..=60);
        assert_eq!(prefs.session_log, PathBuf::from("logs/session.json"));
    }

    /// Loading never writes; a missing file just gives the defaults.
    #[test]
    fn missing_file_gives_defaults_without_writing() {
        let path = std::env::temp_dir().join(format!(
            "rubiks_cube_prefs_missing_{}.json",
            std::process::id()
        ));
        assert_eq!(Preferences::load_from(&path).unwrap(), Preferences::default());
        assert!(!path.exists());
    }

    #[test]
    fn saved_preferences_load_back() {
        let path = std::env::temp_dir().join(format!(
            "rubiks_cube_prefs_{}.json",
            std::process::id()
        ));
        let prefs = Preferences {
            primary: Color::Green,
            scramble: ScrambleSettings {
                min_rounds: 3,
                max_rounds: 4,
            },
            session_log: PathBuf::from("elsewhere/log.json"),
        };
        prefs.save_to(&path).unwrap();
        assert_eq!(Preferences::load_from(&path).unwrap(), prefs);
        let _ = std::fs::remove_file(&path);
    }
}
