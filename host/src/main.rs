mod replay;
mod scenarios;

#[cfg(feature = "gamepad")]
mod gamepad;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use padarena_core::{default_config, GameConfig};

/// Four-player gamepad arena: replay, generate and record sessions
#[derive(Parser)]
#[command(name = "padarena")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recording headlessly and print the final state
    Replay {
        /// Recording file (JSON)
        recording: PathBuf,

        /// Override the recording's config with a TOML file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write every frame's draw list to this file (JSON)
        #[arg(long)]
        draw_list: Option<PathBuf>,
    },

    /// Generate a scripted recording
    Gen {
        #[arg(value_enum)]
        scenario: scenarios::Scenario,

        /// Number of frames to generate
        #[arg(long, default_value_t = 600)]
        frames: u32,

        /// Config file (TOML) embedded in the recording
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Record a live session from connected gamepads
    #[cfg(feature = "gamepad")]
    Record {
        /// Frames to record before stopping
        #[arg(long, default_value_t = 3600)]
        frames: u32,

        /// Frame rate of the polling loop
        #[arg(long, default_value_t = padarena_core::FRAME_RATE)]
        fps: u32,

        /// Config file (TOML)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output recording file (JSON)
        #[arg(short, long, default_value = "session.json")]
        output: PathBuf,
    },
}

/// Defaults, or a TOML file where every field is optional.
fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(default_config());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: GameConfig = toml::from_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Replay {
            recording,
            config,
            draw_list,
        } => {
            let config = match config {
                Some(path) => Some(load_config(Some(&path))?),
                None => None,
            };
            replay::execute(&recording, config, draw_list.as_deref())
        }
        Commands::Gen {
            scenario,
            frames,
            config,
            output,
        } => {
            let config = load_config(config.as_deref())?;
            scenarios::execute(scenario, frames, config, output.as_deref())
        }
        #[cfg(feature = "gamepad")]
        Commands::Record {
            frames,
            fps,
            config,
            output,
        } => {
            let config = load_config(config.as_deref())?;
            gamepad::record(frames, fps, config, &output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_config_path_gives_defaults() {
        assert_eq!(load_config(None).unwrap(), default_config());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: GameConfig = toml::from_str("bullet_speed = 12.5\nshooting_cooldown = 9\n").unwrap();
        assert_eq!(config.bullet_speed, 12.5);
        assert_eq!(config.shooting_cooldown, 9);
        assert_eq!(config.window_width, 1280.0);
    }

    #[test]
    fn cli_parses_replay() {
        let cli = Cli::try_parse_from(["padarena", "replay", "s.json", "--draw-list", "d.json"]).unwrap();
        match cli.command {
            Commands::Replay { recording, draw_list, config } => {
                assert_eq!(recording, PathBuf::from("s.json"));
                assert_eq!(draw_list, Some(PathBuf::from("d.json")));
                assert!(config.is_none());
            }
            _ => panic!("expected replay"),
        }
    }
}
