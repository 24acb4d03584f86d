use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    animation::PlaybackMode, camera::CameraSettings, controls::Bindings, controls::ManualSpeed,
    error::Error,
};

pub const DEFAULT_SETTINGS_PATH: &str = "keyframes.ron";

const DEFAULT_CAPACITY: usize = 9;
const DEFAULT_STEP_COUNT: u32 = 190;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwingSettings {
    pub step: f32,
    pub min: f32,
    pub max: f32,
}

impl Default for SwingSettings {
    fn default() -> Self {
        Self {
            step: 0.8,
            min: -15.0,
            max: 15.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of keyframe slots.
    pub capacity: usize,
    /// Ticks spent interpolating between two adjacent keyframes.
    pub step_count: u32,
    pub playback_mode: PlaybackMode,
    /// Degrees the ball turns per tick while spinning.
    pub ball_spin_delta: f32,
    pub head_swing: SwingSettings,
    pub manual_speed: ManualSpeed,
    pub camera: CameraSettings,
    pub bindings: Bindings,
    /// Where the save and load commands put captured keyframes.
    pub keyframe_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            step_count: DEFAULT_STEP_COUNT,
            playback_mode: PlaybackMode::Once,
            ball_spin_delta: 0.4,
            head_swing: SwingSettings::default(),
            manual_speed: ManualSpeed::default(),
            camera: CameraSettings::default(),
            bindings: Bindings::default(),
            keyframe_file: PathBuf::from("captured_frames.ron"),
        }
    }
}

impl Settings {
    /// Reads settings from `path`. A missing file is created with the
    /// defaults; an unreadable or malformed one is left alone and the
    /// defaults are used.
    pub fn load(path: &Path) -> Self {
        match fs::File::open(path) {
            Ok(file) => match ron::de::from_reader(file) {
                Ok(settings) => {
                    info!(path = %path.display(), "loaded settings");
                    settings
                }
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        "Failed to parse settings file, falling back to defaults. {}",
                        e
                    );
                    Self::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let default_settings = Self::default();
                if let Err(e) = default_settings.save_to_file(path) {
                    warn!(
                        path = %path.display(),
                        "Failed to create default settings file! {}",
                        e
                    );
                }
                default_settings
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    "Failed to open settings file, falling back to defaults. {}",
                    e
                );
                Self::default()
            }
        }
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), Error> {
        let text = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        fs::write(path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "kor_keyframes_settings_{}_{name}.ron",
            std::process::id()
        ))
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let path = temp_file("missing");
        let _ = fs::remove_file(&path);
        assert_eq!(Settings::load(&path), Settings::default());
        assert!(path.exists());
        assert_eq!(Settings::load(&path), Settings::default());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = temp_file("partial");
        fs::write(&path, "(step_count: 20, playback_mode: Loop)").unwrap();
        let settings = Settings::load(&path);
        assert_eq!(settings.step_count, 20);
        assert_eq!(settings.playback_mode, PlaybackMode::Loop);
        assert_eq!(settings.capacity, DEFAULT_CAPACITY);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let path = temp_file("malformed");
        fs::write(&path, "(step_count: \"many\"").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn non_utf8_file_is_not_overwritten() {
        let path = temp_file("non_utf8");
        let contents: &[u8] = b"(step_count: 20, capacity: 4) // caf\xe9";
        fs::write(&path, contents).unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
        assert_eq!(fs::read(&path).unwrap(), contents);
        let _ = fs::remove_file(path);
    }
}
