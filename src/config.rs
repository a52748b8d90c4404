//! Start-time configuration.
//!
//! Everything here is fixed once parsed; the session never mutates it.

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use crate::core::Randomizer;
use crate::types::{FRAME_RATE, TICK_RATE};

/// What to do when a new piece cannot be placed at its spawn position
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TopOutPolicy {
    /// Keep playing; the piece is shown overlapping the stack
    #[default]
    Ignore,
    /// Stop the loop at the end of the current iteration
    EndSession,
}

/// Loop settings consumed by [`crate::Session`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Gravity ticks per second
    pub tick_rate: u32,
    /// Redraws per second
    pub frame_rate: u32,
    pub top_out: TopOutPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,
            frame_rate: FRAME_RATE,
            top_out: TopOutPolicy::default(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "tui-blocks", version, about = "Terminal falling-block puzzle game")]
pub struct Cli {
    #[arg(long, default_value_t = TICK_RATE, value_parser = clap::value_parser!(u32).range(1..), help = "Gravity ticks per second")]
    pub tick_rate: u32,

    #[arg(long, default_value_t = FRAME_RATE, value_parser = clap::value_parser!(u32).range(1..), help = "Redraws per second")]
    pub frame_rate: u32,

    #[arg(long, help = "Seed for the piece randomizer (default: OS entropy)")]
    pub seed: Option<u64>,

    #[arg(long, help = "End the session when a new piece cannot spawn")]
    pub end_on_board_full: bool,

    #[arg(long, help = "Write logs to this file (the terminal is used for the game)")]
    pub log_file: Option<PathBuf>,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v = INFO, -vv = DEBUG, -vvv = TRACE)")]
    pub verbose: u8,
}

impl Cli {
    pub fn top_out_policy(&self) -> TopOutPolicy {
        if self.end_on_board_full {
            TopOutPolicy::EndSession
        } else {
            TopOutPolicy::Ignore
        }
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            tick_rate: self.tick_rate,
            frame_rate: self.frame_rate,
            top_out: self.top_out_policy(),
        }
    }

    /// Log level for the file logger; WARN unless raised with `-v`
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    pub fn randomizer(&self) -> Randomizer {
        match self.seed {
            Some(seed) => Randomizer::with_seed(seed),
            None => Randomizer::from_entropy(),
        }
    }
}
