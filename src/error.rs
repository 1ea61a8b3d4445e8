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
// Error types

use thiserror::Error;

/// Every failure the generator library can report.
///
/// Only `InvalidInput` can come out of the generation core; the other
/// variants belong to the configuration and clipboard layers.
#[derive(Error, Debug)]
pub enum PassGenError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Clipboard error: {message}")]
    Clipboard { message: String },
}

impl PassGenError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard {
            message: message.into(),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Message suitable for showing to the person at the keyboard.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput { message } => {
                format!("Warning: {}\nPlease select at least one character type and a positive length.", message)
            }
            Self::Config { message } => format!("Configuration problem: {}", message),
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("File error{}: {}", path_info, message)
            }
            Self::Json(e) => format!("Config file is not valid JSON: {}", e),
            Self::Clipboard { message } => format!("Clipboard unavailable: {}", message),
        }
    }
}

impl From<std::io::Error> for PassGenError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

pub type Result<T> = std::result::Result<T, PassGenError>;
