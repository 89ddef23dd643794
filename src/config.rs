use crate::constants::{
    BASE_Y_OFFSET, DEFAULT_DATA_PATH, DEFAULT_VIEWPORT_HEIGHT, VIEWPORT_SCALE,
};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Page-level settings from the optional `coursepage.toml`.
///
/// Every field has a default, so a missing file (or a file with only a
/// subset of keys) still yields a fully usable configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Dataset location: a filesystem path or an http(s) URL.
    pub data: String,
    /// Base upward scroll correction for the fixed header, in pixels.
    pub base_y_offset: f64,
    /// Viewport-height fraction folded into the scroll correction.
    pub viewport_scale: f64,
    /// Viewport height assumed for offset computation.
    pub viewport_height: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            data: DEFAULT_DATA_PATH.to_string(),
            base_y_offset: BASE_Y_OFFSET,
            viewport_scale: VIEWPORT_SCALE,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    page: PageConfig,
}

/// Parse config file content. A file that exists but does not parse is
/// a configuration error, not a silent fallback to defaults.
pub fn parse_config(content: &str) -> Result<PageConfig> {
    let file: ConfigFile = toml::from_str(content)
        .map_err(|e| Error::Configuration(format!("invalid config file: {}", e)))?;
    Ok(file.page)
}

/// Load the config file if present; an absent file means defaults.
pub fn load_config(path: &Path) -> Result<PageConfig> {
    if !path.exists() {
        return Ok(PageConfig::default());
    }
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Configuration(format!("unreadable config file {}: {}", path.display(), e)))?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_page_constants() {
        let cfg = PageConfig::default();
        assert_eq!(cfg.data, "course.json");
        assert_eq!(cfg.base_y_offset, -120.0);
        assert_eq!(cfg.viewport_scale, 0.05);
        assert_eq!(cfg.viewport_height, 900.0);
    }

    #[test]
    fn test_partial_config_keeps_remaining_defaults() {
        let cfg = parse_config("[page]\ndata = \"data/courses.json\"\n").unwrap();
        assert_eq!(cfg.data, "data/courses.json");
        assert_eq!(cfg.base_y_offset, -120.0);
    }

    #[test]
    fn test_full_config_overrides_everything() {
        let cfg = parse_config(
            "[page]\n\
             data = \"https://example.com/course.json\"\n\
             base_y_offset = -80.0\n\
             viewport_scale = 0.1\n\
             viewport_height = 600.0\n",
        )
        .unwrap();
        assert_eq!(cfg.data, "https://example.com/course.json");
        assert_eq!(cfg.base_y_offset, -80.0);
        assert_eq!(cfg.viewport_scale, 0.1);
        assert_eq!(cfg.viewport_height, 600.0);
    }

    #[test]
    fn test_malformed_config_is_a_configuration_error() {
        let err = parse_config("[page\ndata =").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let cfg = load_config(Path::new("no/such/coursepage.toml")).unwrap();
        assert_eq!(cfg.data, "course.json");
    }
}
