//  ____  ____     __        __    __  __           _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 0.1.0
// License : Mulan PSL v2
//
// Config Tools

use serde::{Serialize, Deserialize};
use std::{fs, path::{Path, PathBuf}};
use dirs::config_dir;
use log::{debug, warn};

use crate::alphabet::CharacterClassConfig;
use crate::error::{PassGenError, Result};
use crate::passgen::{DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH, PasswordRequest};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_CLIPBOARD_CLEAR_SECS: u64 = 30;

/// Generation defaults for the command-line front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_special: bool,
    pub avoid_similar: bool,
    /// Seconds before a copied password is wiped; 0 keeps it.
    pub clipboard_clear_secs: u64,
}

impl Default for GenConfig {
    fn default() -> Self {
        let classes = CharacterClassConfig::default();
        Self {
            length: DEFAULT_LENGTH,
            include_uppercase: classes.include_uppercase,
            include_lowercase: classes.include_lowercase,
            include_digits: classes.include_digits,
            include_special: classes.include_special,
            avoid_similar: classes.avoid_similar,
            clipboard_clear_secs: DEFAULT_CLIPBOARD_CLEAR_SECS,
        }
    }
}

/// Per-invocation flags layered on top of a `GenConfig`.
///
/// The `no_*` flags can only switch a class off and `avoid_confusion` can
/// only switch filtering on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenOverrides {
    pub length: Option<usize>,
    pub no_uppercase: bool,
    pub no_lowercase: bool,
    pub no_numbers: bool,
    pub no_special: bool,
    pub avoid_confusion: bool,
}

pub fn get_config_dir() -> Result<PathBuf> {
    match config_dir() {
        Some(path) => Ok(path.join("rpawogen")),
        None => Err(PassGenError::config("Could not determine configuration directory")),
    }
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

impl GenConfig {
    pub fn class_config(&self) -> CharacterClassConfig {
        CharacterClassConfig {
            include_uppercase: self.include_uppercase,
            include_lowercase: self.include_lowercase,
            include_digits: self.include_digits,
            include_special: self.include_special,
            avoid_similar: self.avoid_similar,
        }
    }

    /// Merge `overrides` into these defaults and clamp the length into
    /// `[MIN_LENGTH, MAX_LENGTH]`, whether it came from a flag or the file.
    ///
    /// A request with no class left is returned as is; the generator rejects it.
    pub fn to_request(&self, overrides: &GenOverrides) -> PasswordRequest {
        let mut classes = self.class_config();
        classes.include_uppercase &= !overrides.no_uppercase;
        classes.include_lowercase &= !overrides.no_lowercase;
        classes.include_digits &= !overrides.no_numbers;
        classes.include_special &= !overrides.no_special;
        classes.avoid_similar |= overrides.avoid_confusion;

        let request = PasswordRequest::new(overrides.length.unwrap_or(self.length), classes);
        if !request.is_within_bounds() {
            warn!(
                "length {} is outside {}..={}, clamping",
                request.length, MIN_LENGTH, MAX_LENGTH
            );
        }
        request.clamped()
    }

    /// Checked before writing a file; loading is lenient and `to_request` clamps.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(PassGenError::config(format!(
                "length {} is outside {}..={}",
                self.length, MIN_LENGTH, MAX_LENGTH
            )));
        }
        if !self.class_config().any_class_enabled() {
            return Err(PassGenError::config("at least one character type must be enabled"));
        }
        Ok(())
    }

    /// Read a config file. A missing file gives the defaults.
    ///
    /// Values are not range-checked here, see `to_request`.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)
            .map_err(|e| PassGenError::io(e.to_string(), Some(path.display().to_string())))?;
        let config: Self = serde_json::from_str(&data)?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// `load_from` with `path`, or the per-user config location when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(p),
            None => Self::load_from(&default_config_path()?),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| PassGenError::io(e.to_string(), Some(parent.display().to_string())))?;
        }
        let config_file = fs::File::create(path)
            .map_err(|e| PassGenError::io(e.to_string(), Some(path.display().to_string())))?;
        serde_json::to_writer_pretty(config_file, self)?;
        Ok(())
    }
}
