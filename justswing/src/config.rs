//! Configuration for JustSwing
//!
//! Handles data directory configuration with the following precedence:
//! 1. JUSTSWING_DATA_DIR environment variable
//! 2. ~/.config/justswing/data (production default)
//! 3. ./data (fallback for development)
//!
//! The analysis collaborator is configured via GEMINI_API_KEY and
//! JUSTSWING_MODEL.

use std::path::PathBuf;

const DEFAULT_CONFIG_DIR: &str = ".config/justswing/data";
const DEV_DATA_DIR: &str = "./data";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Get the data directory for persistence.
///
/// Priority:
/// 1. JUSTSWING_DATA_DIR env variable if set
/// 2. $HOME/.config/justswing/data if HOME is set
/// 3. ./data as fallback
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("JUSTSWING_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(DEFAULT_CONFIG_DIR);
    }

    PathBuf::from(DEV_DATA_DIR)
}

/// Model id for the analysis collaborator.
pub fn model_id() -> String {
    std::env::var("JUSTSWING_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string())
}

/// API key for the analysis collaborator, if configured.
pub fn api_key() -> Option<String> {
    std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_data_dir_fallback() {
        // Note: This test assumes JUSTSWING_DATA_DIR is not set in the test
        // environment. If it is set, it will return that value (which is
        // correct behavior).
        let dir = get_data_dir();
        assert!(!dir.as_os_str().is_empty());
    }

    #[test]
    fn test_model_id_has_default() {
        assert!(!model_id().is_empty());
    }
}
