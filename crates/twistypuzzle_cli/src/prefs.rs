use std::path::Path;

use config::builder::DefaultState;
use config::{ConfigBuilder, FileFormat};
use serde::{Deserialize, Serialize};
use twistypuzzle::Camera;

const PREFS_FILE_FORMAT: FileFormat = FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

/// Prefix for environment variables that override preferences, such as
/// `TWISTY_FOV_Y_DEGREES`.
const ENV_PREFIX: &str = "TWISTY";

lazy_static! {
    static ref DEFAULT_VIEW_PREFS: ViewPreferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

/// Camera preferences used to compute render frames.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ViewPreferences {
    /// Vertical field of view, in degrees.
    pub fov_y_degrees: f64,
    /// Distance from the camera to the center of the puzzle.
    pub camera_distance: f64,
    pub near: f64,
    pub far: f64,
    /// Whether faces pointing away from the camera are drawn.
    pub show_backfaces: bool,

    /// Rotation around the X axis, in degrees.
    pub pitch: f64,
    /// Rotation around the Y axis, in degrees.
    pub yaw: f64,
}
impl Default for ViewPreferences {
    fn default() -> Self {
        Self {
            fov_y_degrees: 45.0,
            camera_distance: 6.0,
            near: 0.1,
            far: 100.0,
            show_backfaces: false,
            pitch: 0.0,
            yaw: 0.0,
        }
    }
}
impl ViewPreferences {
    /// Loads preferences, layering `user_file` (if any) and then environment
    /// variables over the defaults. If loading fails, the default preferences
    /// are returned.
    pub fn load(user_file: Option<&Path>) -> Self {
        lazy_static::initialize(&DEFAULT_VIEW_PREFS);

        let mut config = default_config();
        if let Some(path) = user_file {
            log::debug!("loading preferences from {}", path.display());
            config = config.add_source(config::File::from(path).format(PREFS_FILE_FORMAT));
        }
        config = config.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        Self::build(config)
    }

    fn build(config: ConfigBuilder<DefaultState>) -> Self {
        config
            .build()
            .and_then(|c| c.try_deserialize::<Self>())
            .map(Self::sanitized)
            .unwrap_or_else(|e| {
                log::warn!("Error loading preferences: {e}");
                DEFAULT_VIEW_PREFS.clone()
            })
    }

    /// Replaces values that would produce a degenerate projection with their
    /// defaults.
    fn sanitized(mut self) -> Self {
        let defaults = &*DEFAULT_VIEW_PREFS;
        if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            log::warn!("Ignoring invalid field of view {}", self.fov_y_degrees);
            self.fov_y_degrees = defaults.fov_y_degrees;
        }
        if !(self.near > 0.0 && self.far > self.near) {
            log::warn!("Ignoring invalid clipping planes {}..{}", self.near, self.far);
            self.near = defaults.near;
            self.far = defaults.far;
        }
        self
    }

    /// Returns a camera orbiting the origin according to these preferences.
    pub fn camera(&self, aspect: f64) -> Camera {
        Camera {
            fov_y: self.fov_y_degrees.to_radians(),
            aspect,
            near: self.near,
            far: self.far,
            ..Camera::orbit(
                self.camera_distance,
                self.pitch.to_radians(),
                self.yaw.to_radians(),
            )
        }
    }
}

fn default_config() -> ConfigBuilder<DefaultState> {
    config::Config::builder().add_source(config::File::from_str(
        DEFAULT_PREFS_STR,
        PREFS_FILE_FORMAT,
    ))
}
