//! Runtime configuration for the terminal game.
//!
//! Values come from defaults, then environment variables, then command-line
//! flags (flags win):
//!
//! | Flag | Env | Default |
//! |------|-----|---------|
//! | `--seed N` | `TETRIS_SEED` | derived from the clock |
//! | `--tick-ms N` | `TETRIS_TICK_MS` | 1000 |
//! | `--log PATH` | `TETRIS_LOG` | none (logging off) |
//! | `--mute` | `TETRIS_SOUND=0` | sound on |

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    pub tick_ms: u64,
    pub log_path: Option<PathBuf>,
    pub sound: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            tick_ms: TICK_MS as u64,
            log_path: None,
            sound: true,
        }
    }
}

impl GameConfig {
    /// Build from the process environment and arguments (without the program name).
    pub fn load(args: &[String]) -> Result<Self> {
        Self::from_sources(|key| std::env::var(key).ok(), args)
    }

    /// Build from an environment lookup and arguments.
    pub fn from_sources(env: impl Fn(&str) -> Option<String>, args: &[String]) -> Result<Self> {
        let mut config = Self::default();
        config.apply_env(env)?;
        config.apply_args(args)?;
        if config.tick_ms == 0 {
            return Err(anyhow!("config: tick interval must be at least 1ms"));
        }
        Ok(config)
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<()> {
        let var = |key: &str| {
            env(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(v) = var("TETRIS_SEED") {
            self.seed = parse_value("TETRIS_SEED", &v)?;
        }
        if let Some(v) = var("TETRIS_TICK_MS") {
            self.tick_ms = parse_value("TETRIS_TICK_MS", &v)?;
        }
        if let Some(v) = var("TETRIS_LOG") {
            self.log_path = Some(PathBuf::from(v));
        }
        if let Some(v) = var("TETRIS_SOUND") {
            self.sound = !(v == "0" || v.eq_ignore_ascii_case("false"));
        }
        Ok(())
    }

    fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    self.seed = parse_value("--seed", flag_value(args, i, "--seed")?)?;
                }
                "--tick-ms" => {
                    i += 1;
                    self.tick_ms = parse_value("--tick-ms", flag_value(args, i, "--tick-ms")?)?;
                }
                "--log" => {
                    i += 1;
                    self.log_path = Some(PathBuf::from(flag_value(args, i, "--log")?));
                }
                "--mute" => self.sound = false,
                other => return Err(anyhow!("config: unknown argument: {}", other)),
            }
            i += 1;
        }
        Ok(())
    }
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("config: missing value for {}", flag))
}

fn parse_value<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .parse::<T>()
        .map_err(|_| anyhow!("config: invalid {} value: {}", name, value))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults() {
        let config = GameConfig::from_sources(no_env, &[]).unwrap();
        assert_eq!(config.tick_ms, 1000);
        assert!(config.sound);
        assert!(config.log_path.is_none());
    }

    #[test]
    fn env_overrides() {
        let env = |key: &str| match key {
            "TETRIS_SEED" => Some("42".to_string()),
            "TETRIS_TICK_MS" => Some(" 250 ".to_string()),
            "TETRIS_SOUND" => Some("false".to_string()),
            "TETRIS_LOG" => Some("".to_string()),
            _ => None,
        };
        let config = GameConfig::from_sources(env, &[]).unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.tick_ms, 250);
        assert!(!config.sound);
        assert!(config.log_path.is_none());
    }

    #[test]
    fn flags_win_over_env() {
        let env = |key: &str| (key == "TETRIS_SEED").then(|| "42".to_string());
        let config = GameConfig::from_sources(
            env,
            &args(&["--seed", "7", "--tick-ms", "500", "--log", "game.log", "--mute"]),
        )
        .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.tick_ms, 500);
        assert_eq!(config.log_path, Some(PathBuf::from("game.log")));
        assert!(!config.sound);
    }

    #[test]
    fn rejects_bad_input() {
        let err = GameConfig::from_sources(no_env, &args(&["--seed"])).unwrap_err();
        assert!(err.to_string().contains("missing value for --seed"));

        let err = GameConfig::from_sources(no_env, &args(&["--tick-ms", "soon"])).unwrap_err();
        assert!(err.to_string().contains("invalid --tick-ms"));

        let err = GameConfig::from_sources(no_env, &args(&["--tick-ms", "0"])).unwrap_err();
        assert!(err.to_string().contains("at least 1ms"));

        let err = GameConfig::from_sources(no_env, &args(&["--fast"])).unwrap_err();
        assert!(err.to_string().contains("unknown argument: --fast"));
    }
}
