//! Game tunables and their JSON file format.
//!
//! Every field has a default equal to the classic constants in
//! [`crate::core::constants`], so a config file only needs the values it
//! changes:
//!
//! ```json
//! { "gravity": 2, "pipe_gap": 200 }
//! ```

use crate::core::constants::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the per-user directory under `$HOME`.
pub const CONFIG_DIR_NAME: &str = ".flappy";
/// File looked up inside [`CONFIG_DIR_NAME`] when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_width: i32,
    pub board_height: i32,

    pub bird_x: i32,
    pub bird_width: i32,
    pub bird_height: i32,

    pub pipe_width: i32,
    pub pipe_height: i32,
    /// Vertical opening between a top pipe and its bottom partner.
    pub pipe_gap: i32,

    /// Horizontal pipe velocity per tick (negative scrolls left).
    pub velocity_x: i32,
    pub gravity: i32,
    /// Vertical velocity set by a jump (negative is upward).
    pub jump_velocity: i32,

    pub tick_interval_ms: u64,
    pub spawn_interval_ms: u64,

    /// Drop pipes once they have scrolled fully past the left edge.
    pub evict_offscreen_pipes: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            bird_x: BIRD_X,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            pipe_width: PIPE_WIDTH,
            pipe_height: PIPE_HEIGHT,
            pipe_gap: PIPE_GAP,
            velocity_x: VELOCITY_X,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            tick_interval_ms: TICK_INTERVAL_MS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            evict_offscreen_pipes: true,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON text and validate it.
    pub fn from_json(json: &str) -> io::Result<Self> {
        let config: GameConfig = serde_json::from_str(json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a config file.
    pub fn load(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json).map_err(|e| {
            io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
        })
    }

    /// `~/.flappy/config.json`, if a home directory can be determined.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Resolve the config the game should run with.
    ///
    /// An explicit path must exist. Otherwise the default path is used when
    /// present, falling back to built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> io::Result<(Self, ConfigSource)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, ConfigSource::File(path.to_path_buf())));
        }
        match Self::default_path() {
            Some(path) if path.is_file() => {
                let config = Self::load(&path)?;
                Ok((config, ConfigSource::File(path)))
            }
            _ => Ok((Self::default(), ConfigSource::Defaults)),
        }
    }

    /// Reject configurations that would make the game degenerate.
    pub fn validate(&self) -> io::Result<()> {
        let positive = [
            ("board_width", self.board_width),
            ("board_height", self.board_height),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("pipe_width", self.pipe_width),
            ("pipe_height", self.pipe_height),
            ("pipe_gap", self.pipe_gap),
        ];
        for (name, value) in positive {
            if value <= 0 {
                return Err(invalid(format!("{} must be positive, got {}", name, value)));
            }
        }

        if self.tick_interval_ms == 0 {
            return Err(invalid("tick_interval_ms must be positive".to_string()));
        }
        if self.spawn_interval_ms == 0 {
            return Err(invalid("spawn_interval_ms must be positive".to_string()));
        }
        if self.pipe_gap >= self.board_height {
            return Err(invalid(format!(
                "pipe_gap ({}) must be smaller than board_height ({})",
                self.pipe_gap, self.board_height
            )));
        }
        if self.bird_height >= self.board_height {
            return Err(invalid(format!(
                "bird_height ({}) must be smaller than board_height ({})",
                self.bird_height, self.board_height
            )));
        }
        if self.bird_x < 0 || self.bird_x + self.bird_width > self.board_width {
            return Err(invalid(format!(
                "bird_x ({}) puts the bird outside the board",
                self.bird_x
            )));
        }
        if self.velocity_x >= 0 {
            return Err(invalid(format!(
                "velocity_x must be negative, got {}",
                self.velocity_x
            )));
        }
        if self.jump_velocity >= 0 {
            return Err(invalid(format!(
                "jump_velocity must be negative, got {}",
                self.jump_velocity
            )));
        }
        Ok(())
    }

    pub fn bird_start_y(&self) -> i32 {
        self.board_height / 2
    }
}

/// Parse a `--seed` argument. Shared by both binaries so a bad seed is
/// always an error rather than a silently unseeded run.
pub fn parse_seed(arg: &str) -> io::Result<u64> {
    arg.trim()
        .parse()
        .map_err(|_| invalid(format!("invalid seed '{}'", arg)))
}

fn invalid(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, msg)
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Defaults => write!(f, "built-in defaults"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_constants() {
        let config = GameConfig::default();
        assert_eq!(config.board_width, 360);
        assert_eq!(config.board_height, 640);
        assert_eq!(config.bird_x, 45);
        assert_eq!(config.pipe_gap, 160);
        assert_eq!(config.velocity_x, -4);
        assert_eq!(config.gravity, 1);
        assert_eq!(config.jump_velocity, -10);
        assert_eq!(config.tick_interval_ms, 16);
        assert_eq!(config.spawn_interval_ms, 1500);
        assert!(config.evict_offscreen_pipes);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bird_start_is_mid_board() {
        let config = GameConfig::default();
        assert_eq!(config.bird_start_y(), 320);
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed("42").unwrap(), 42);
        assert_eq!(parse_seed(" 7 ").unwrap(), 7);
        assert_eq!(parse_seed("18446744073709551615").unwrap(), u64::MAX);

        for bad in ["", "abc", "-1", "4.2", "18446744073709551616"] {
            let err = parse_seed(bad).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput, "{:?}", bad);
            assert!(err.to_string().contains("invalid seed"));
        }
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "gravity": 2, "pipe_gap": 200 }"#).unwrap();
        assert_eq!(config.gravity, 2);
        assert_eq!(config.pipe_gap, 200);
        assert_eq!(config.board_width, BOARD_WIDTH);
        assert_eq!(config.jump_velocity, JUMP_VELOCITY);
    }

    #[test]
    fn test_malformed_json_is_invalid_data() {
        let err = GameConfig::from_json("{ gravity: ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let cases = [
            r#"{ "board_height": 0 }"#,
            r#"{ "pipe_gap": 640 }"#,
            r#"{ "tick_interval_ms": 0 }"#,
            r#"{ "spawn_interval_ms": 0 }"#,
            r#"{ "velocity_x": 4 }"#,
            r#"{ "jump_velocity": 10 }"#,
            r#"{ "bird_x": 400 }"#,
        ];
        for json in cases {
            let err = GameConfig::from_json(json).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput, "{}", json);
        }
    }

    #[test]
    fn test_json_roundtrip_through_file() {
        let dir = std::env::temp_dir().join(format!("flappy-config-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");

        let config = GameConfig {
            gravity: 3,
            evict_offscreen_pipes: false,
            ..GameConfig::default()
        };
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = GameConfig::load(&path).unwrap();
        assert_eq!(loaded, config);

        let (resolved, source) = GameConfig::resolve(Some(&path)).unwrap();
        assert_eq!(resolved, config);
        assert_eq!(source, ConfigSource::File(path.clone()));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let path = Path::new("/definitely/not/here/flappy.json");
        let err = GameConfig::resolve(Some(path)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
