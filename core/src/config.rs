use crate::constants::*;
use crate::types::GameConfig;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a finite positive number, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must be a finite non-negative number, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must be at least one frame")]
    ZeroFrames { field: &'static str },
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            move_speed: P_SPEED,
            tilt_dir_change: TILT_DIR_CHANGE,
            shooting_cooldown: SHOOTING_COOLDOWN,
            bullet_duration: BULLET_DURATION,
            bullet_speed: BULLET_SPEED,
            window_width: WIN_WIDTH,
            window_height: WIN_HEIGHT,
            player_size: PLAYER_SIZE,
            bullet_spawn_size: BULLET_SPAWN_SIZE,
            bullet_idle_size: BULLET_IDLE_SIZE,
        }
    }
}

/// Default config: 1280x720 window, 5px/frame players, 70px/frame bullets.
pub fn default_config() -> GameConfig {
    GameConfig::default()
}

impl GameConfig {
    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("move_speed", self.move_speed),
            ("bullet_speed", self.bullet_speed),
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("player_size", self.player_size),
            ("bullet_spawn_size", self.bullet_spawn_size),
            ("bullet_idle_size", self.bullet_idle_size),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if !self.tilt_dir_change.is_finite() || self.tilt_dir_change < 0.0 {
            return Err(ConfigError::Negative {
                field: "tilt_dir_change",
                value: self.tilt_dir_change,
            });
        }
        if self.shooting_cooldown == 0 {
            return Err(ConfigError::ZeroFrames { field: "shooting_cooldown" });
        }
        if self.bullet_duration == 0 {
            return Err(ConfigError::ZeroFrames { field: "bullet_duration" });
        }
        Ok(())
    }
}
