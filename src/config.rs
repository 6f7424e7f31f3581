// Configuration management
//
// Handles window plugin selection and window settings persistence.

use crate::display::{COLS, ROWS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Default configuration file path
pub const CONFIG_FILE: &str = "window_config.toml";

/// Smallest and largest supported window scale
const MIN_SCALE: u32 = 1;
const MAX_SCALE: u32 = 8;

/// Window plugin configuration
///
/// `window_type` selects which window plugin the host should construct.
/// Leaving it unset selects the default (winit) window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window plugin identifier ("winit", "null", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_type: Option<String>,

    /// Integer scale applied to the 160×144 screen (1-8)
    pub scale: u32,

    /// Let the GPU wait for vertical blank when presenting
    pub vsync: bool,
}

impl WindowConfig {
    /// Create a configuration with default values
    ///
    /// Default: no window type (winit window), 3x scale, VSync disabled
    pub fn new() -> Self {
        Self {
            window_type: None,
            scale: 3,
            vsync: false,
        }
    }

    /// Select a window plugin by identifier
    pub fn with_window_type(mut self, window_type: impl Into<String>) -> Self {
        self.window_type = Some(window_type.into());
        self
    }

    /// Set the scale factor
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        self
    }

    /// Set VSync enabled or disabled
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// The selected window type, if any
    pub fn window_type(&self) -> Option<&str> {
        self.window_type.as_deref()
    }

    /// Window size in pixels for the configured scale
    pub fn scaled_resolution(&self) -> (u32, u32) {
        let scale = self.scale.clamp(MIN_SCALE, MAX_SCALE);
        (COLS as u32 * scale, ROWS as u32 * scale)
    }

    /// Load configuration from file or create default
    ///
    /// If the configuration file doesn't exist, creates a default configuration
    /// and saves it to the file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gb_window::WindowConfig;
    ///
    /// let config = WindowConfig::load_or_default("window_config.toml");
    /// ```
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|err| {
            log::debug!("Using default window config ({}): {}", path.display(), err);
            let config = Self::default();
            // Try to save the default config, but don't fail if we can't
            if let Err(err) = config.save(path) {
                log::warn!("Could not write {}: {}", path.display(), err);
            }
            config
        })
    }

    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, io::Error> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, io::Error> {
        toml::from_str(contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Save configuration to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), io::Error> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, contents)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new()
    }
}
