use serde::Deserialize;
use thiserror::Error;

use crate::params::Params;

/// Reasons a [`Config`] cannot drive a board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("win score {0} does not fit the 4-bit score field (1..={max})", max = proto::MAX_WIRE_SCORE)]
    WinScoreOutOfRange(u8),

    #[error("{task} task rate must be non-zero")]
    ZeroTaskRate { task: &'static str },

    #[error("{task} task rate {rate} Hz exceeds scheduler rate {scheduler} Hz")]
    TaskFasterThanScheduler {
        task: &'static str,
        rate: u32,
        scheduler: u32,
    },
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub win_score: u8,
    pub scheduler_rate: u32,
    pub display_rate: u32,
    pub game_rate: u32,
    pub input_rate: u32,
    pub text_scroll_speed: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            win_score: Params::WIN_SCORE,
            scheduler_rate: Params::SCHEDULER_RATE,
            display_rate: Params::DISPLAY_TASK_RATE,
            game_rate: Params::GAME_TASK_RATE,
            input_rate: Params::INPUT_TASK_RATE,
            text_scroll_speed: Params::TEXT_SCROLL_SPEED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the values a board relies on without re-checking every tick
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.win_score == 0 || self.win_score > proto::MAX_WIRE_SCORE {
            return Err(ConfigError::WinScoreOutOfRange(self.win_score));
        }
        if self.scheduler_rate == 0 {
            return Err(ConfigError::ZeroTaskRate { task: "scheduler" });
        }
        for (task, rate) in self.task_rates() {
            if rate == 0 {
                return Err(ConfigError::ZeroTaskRate { task });
            }
            if rate > self.scheduler_rate {
                return Err(ConfigError::TaskFasterThanScheduler {
                    task,
                    rate,
                    scheduler: self.scheduler_rate,
                });
            }
        }
        Ok(())
    }

    /// Scheduler ticks between two runs of a task running at `rate` Hz
    pub fn period_for(&self, rate: u32) -> u32 {
        (self.scheduler_rate / rate.max(1)).max(1)
    }

    fn task_rates(&self) -> [(&'static str, u32); 3] {
        [
            ("input", self.input_rate),
            ("game", self.game_rate),
            ("display", self.display_rate),
        ]
    }
}
