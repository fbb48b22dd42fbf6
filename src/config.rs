use std::{path::Path, str::FromStr};

use crate::{
    error::{ConfigError, MazeError},
    generators::{Generation, generate_maze},
    maze::Point,
};

/// Plain values that drive one maze generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    pub width: u16,
    pub height: u16,
    pub entry: Point,
    pub exit: Point,
    pub perfect: bool,
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 15,
            entry: (0, 0),
            exit: (19, 14),
            perfect: true,
            seed: None,
        }
    }
}

/// Keys of features this crate does not implement (file output, viewer, algorithm
/// choice). They are accepted so existing config files keep loading, as are all
/// `COLOR_*` keys.
const IGNORED_KEYS: [&str; 3] = ["OUTPUT_FILE", "DISPLAY", "ALGORITHM"];

impl MazeConfig {
    /// Reads and parses a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        content.parse()
    }

    /// Runs the full generation pipeline with these values.
    pub fn generate(&self) -> Result<Generation, MazeError> {
        generate_maze(
            self.width,
            self.height,
            self.entry,
            self.exit,
            self.perfect,
            self.seed,
        )
    }
}

/// Parses `x,y` with optional spaces around either number.
pub fn parse_point(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| "expected 'x,y'".to_string())?;
    let x = x
        .trim()
        .parse::<u16>()
        .map_err(|err| format!("invalid x: {err}"))?;
    let y = y
        .trim()
        .parse::<u16>()
        .map_err(|err| format!("invalid y: {err}"))?;
    Ok((x, y))
}

fn parse_bool(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err("expected a boolean".to_string()),
    }
}

impl FromStr for MazeConfig {
    type Err = ConfigError;

    /// Parses `KEY=VALUE` lines. Blank lines and lines starting with `#` are skipped and
    /// keys are case-insensitive. Missing keys keep their default.
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let mut config = MazeConfig::default();
        let mut exit_set = false;

        for (index, raw) in content.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let (key, value) = trimmed.split_once('=').ok_or_else(|| ConfigError::Syntax {
                line,
                content: raw.to_string(),
            })?;
            let key = key.trim().to_ascii_uppercase();
            let value = value.trim();
            let invalid = |reason: String| ConfigError::InvalidValue {
                line,
                key: key.clone(),
                value: value.to_string(),
                reason,
            };

            match key.as_str() {
                "WIDTH" => config.width = value.parse().map_err(|e| invalid(format!("{e}")))?,
                "HEIGHT" => config.height = value.parse().map_err(|e| invalid(format!("{e}")))?,
                "ENTRY" => config.entry = parse_point(value).map_err(invalid)?,
                "EXIT" => {
                    config.exit = parse_point(value).map_err(invalid)?;
                    exit_set = true;
                }
                "PERFECT" => config.perfect = parse_bool(value).map_err(invalid)?,
                "SEED" => {
                    config.seed = if value.is_empty() {
                        None
                    } else {
                        Some(value.parse().map_err(|e| invalid(format!("{e}")))?)
                    }
                }
                k if IGNORED_KEYS.contains(&k) || k.starts_with("COLOR_") => {
                    tracing::debug!("[config] Ignoring unsupported key {}", k);
                }
                _ => {
                    return Err(ConfigError::UnknownKey {
                        line,
                        key: key.clone(),
                    });
                }
            }
        }

        // Default exit follows the size: the bottom right cell
        if !exit_set {
            config.exit = (
                config.width.saturating_sub(1),
                config.height.saturating_sub(1),
            );
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = "\
# maze settings
WIDTH=25
HEIGHT = 12
ENTRY=1, 2
EXIT=24,11
PERFECT=False
SEED=42
OUTPUT_FILE=maze.txt
DISPLAY=ascii
ALGORITHM=backtracking
COLOR_WALL=0xFFFFFF
"
        .parse::<MazeConfig>()
        .unwrap();
        assert_eq!(
            config,
            MazeConfig {
                width: 25,
                height: 12,
                entry: (1, 2),
                exit: (24, 11),
                perfect: false,
                seed: Some(42),
            }
        );
    }

    #[test]
    fn test_defaults() {
        assert_eq!("".parse::<MazeConfig>().unwrap(), MazeConfig::default());
        let config = "width=8\nheight=6".parse::<MazeConfig>().unwrap();
        assert_eq!(config.exit, (7, 5));
        assert!(config.perfect);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            "WIDTH".parse::<MazeConfig>(),
            Err(ConfigError::Syntax { line: 1, .. })
        ));
        assert!(matches!(
            "\nENTRY=3".parse::<MazeConfig>(),
            Err(ConfigError::InvalidValue { line: 2, .. })
        ));
        assert!(matches!(
            "PERFECT=maybe".parse::<MazeConfig>(),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            "DEPTH=3".parse::<MazeConfig>(),
            Err(ConfigError::UnknownKey { key, .. }) if key == "DEPTH"
        ));
        assert!(matches!(
            "WIDTH=-4".parse::<MazeConfig>(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_generate_from_config() {
        let config = MazeConfig {
            width: 6,
            height: 4,
            exit: (5, 3),
            seed: Some(9),
            ..MazeConfig::default()
        };
        let generation = config.generate().unwrap();
        assert_eq!(generation.maze.width(), 6);
        assert!(generation.report.ok);
    }
}
