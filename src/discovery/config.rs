//! Project configuration (chalk.yaml) parsing.
//!
//! The config adds paint sources on top of the builtin set, overrides the
//! tool token tables, and sets defaults for the CLI.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChalkError, Result};
use crate::types::{ColorPalette, Colour, PaintSource, PaintTable, ToolTable};

/// An extra paint source declared in chalk.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaintConfig {
    pub token: String,
    /// Hex colour, e.g. `"#7F3FBF"`.
    pub colour: String,
}

/// Project config loaded from chalk.yaml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Paint sources registered after the builtins, in file order.
    pub paints: Vec<PaintConfig>,

    /// Tool token overrides. Missing keys keep their builtin tokens.
    pub tools: ToolTable,

    /// Default scale factor for PNG output.
    pub scale: Option<u32>,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,
}

impl Config {
    /// Load config from a chalk.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ChalkError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| ChalkError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some("Check chalk.yaml syntax".to_string()),
        })
    }

    /// Builtin paints followed by the configured ones.
    pub fn paint_table(&self) -> Result<PaintTable> {
        let mut table = PaintTable::builtin();

        for paint in &self.paints {
            let colour = Colour::from_hex(&paint.colour).map_err(|_| ChalkError::Parse {
                message: format!("Invalid colour '{}' for paint '{}'", paint.colour, paint.token),
                help: Some("Use #RGB or #RRGGBB".to_string()),
            })?;
            table.push(PaintSource::new(paint.token.clone(), colour));
        }

        Ok(table)
    }

    /// A palette with every known paint registered.
    pub fn palette(&self) -> Result<ColorPalette> {
        let mut palette = ColorPalette::new();
        palette.register_all(&self.paint_table()?)?;
        Ok(palette)
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(&path_str, pattern))
    }

    /// Simple glob pattern matching.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix("**/") {
            // **/dir/* matches anything inside dir anywhere in the path
            if let Some(dir) = suffix.strip_suffix("/*") {
                return path.contains(&format!("/{}/", dir)) || path.starts_with(&format!("{}/", dir));
            }
            return path.contains(suffix);
        }

        if let Some(suffix) = pattern.strip_prefix('*') {
            if !suffix.contains('/') {
                return path.ends_with(suffix);
            }
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        path.contains(pattern)
    }

    /// Get the effective scale factor.
    pub fn effective_scale(&self) -> u32 {
        self.scale.unwrap_or(1).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ToolKind, ToolResolver};

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();

        assert!(config.paints.is_empty());
        assert_eq!(config.tools, ToolTable::default());
        assert!(config.scale.is_none());
        assert!(config.excludes.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r##"
paints:
  - token: ink_sac
    colour: "#1A1A2E"
  - token: cocoa_beans
    colour: "#6B3F1F"
tools:
  increase_shade: [coal, soot]
  fill: [water_bucket]
scale: 8
excludes:
  - "**/backup/*"
"##;
        let config = Config::parse(yaml).unwrap();

        assert_eq!(config.paints.len(), 2);
        assert_eq!(config.paints[1].token, "cocoa_beans");
        assert_eq!(config.tools.resolve_tool_token("soot"), Some(ToolKind::IncreaseShade));
        assert_eq!(config.tools.fill, vec!["water_bucket".to_string()]);
        assert_eq!(config.tools.brush, vec!["white_wool".to_string()]);
        assert_eq!(config.effective_scale(), 8);
        assert_eq!(config.excludes, vec!["**/backup/*"]);
    }

    #[test]
    fn test_parse_invalid_yaml() {
        assert!(matches!(
            Config::parse("scale: [nope"),
            Err(ChalkError::Parse { .. })
        ));
    }

    #[test]
    fn test_configured_paints_follow_builtins() {
        let config = Config::parse("paints:\n  - token: ink_sac\n    colour: \"#102030\"\n").unwrap();
        let palette = config.palette().unwrap();

        let ink = palette.by_token("ink_sac").unwrap();
        assert_eq!(ink.id(), 21);
        assert_eq!(ink.base_rgb(), 0x102030);
        assert_eq!(palette.by_token("red_dye").unwrap().id(), 15);
    }

    #[test]
    fn test_configured_paint_cannot_shadow_builtin() {
        let config = Config::parse("paints:\n  - token: red_dye\n    colour: \"#000000\"\n").unwrap();
        let palette = config.palette().unwrap();

        assert_eq!(palette.len(), 20);
        assert_eq!(palette.by_token("red_dye").unwrap().base_rgb(), 0xB02E26);
    }

    #[test]
    fn test_bad_paint_colour() {
        let config = Config::parse("paints:\n  - token: mud\n    colour: brownish\n").unwrap();
        assert!(matches!(config.paint_table(), Err(ChalkError::Parse { .. })));
    }

    #[test]
    fn test_is_excluded() {
        let config = Config {
            excludes: vec!["**/backup/*".to_string(), "*.bak".to_string()],
            ..Default::default()
        };

        assert!(config.is_excluded(Path::new("backup/old.canvas.json")));
        assert!(config.is_excluded(Path::new("art/backup/old.canvas.json")));
        assert!(config.is_excluded(Path::new("art/old.bak")));
        assert!(!config.is_excluded(Path::new("art/logo.canvas.json")));
    }

    #[test]
    fn test_effective_scale() {
        assert_eq!(Config::default().effective_scale(), 1);
        let config = Config {
            scale: Some(0),
            ..Default::default()
        };
        assert_eq!(config.effective_scale(), 1);
    }
}
