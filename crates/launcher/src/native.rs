use std::path::PathBuf;

use clap::Parser;

use player_control::{ActivationMode, DiagonalPolicy};

use crate::app::create_app;
use crate::config::LaunchConfig;

#[derive(Parser, Debug, Default)]
#[command(name = "fps-player")]
#[command(version = "0.1")]
#[command(about = "First-person player controller sandbox")]
#[command(long_about = "
First-person player controller sandbox

EXAMPLES:
    cargo run --bin launcher                                   # Windowed sandbox
    cargo run --bin launcher -- --config player.ron            # Load tunables from a file
    cargo run --bin launcher -- --movement-speed 8 --walk-toggle
    cargo run --bin launcher -- --headless                     # No window, no rendering
")]
pub struct Cli {
    #[arg(long, default_value_t = false)]
    pub headless: bool,

    #[arg(long)]
    #[arg(help = "RON file with `movement` and `gun` sections")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub movement_speed: Option<f32>,

    #[arg(long)]
    pub walk_speed: Option<f32>,

    #[arg(long)]
    pub rotation_speed: Option<f32>,

    #[arg(long)]
    pub jump_height: Option<f32>,

    #[arg(long, allow_hyphen_values = true)]
    pub pitch_min: Option<f32>,

    #[arg(long, allow_hyphen_values = true)]
    pub pitch_max: Option<f32>,

    #[arg(long, default_value_t = false)]
    #[arg(help = "Walk flips on release instead of being held")]
    pub walk_toggle: bool,

    #[arg(long, default_value_t = false)]
    #[arg(help = "Diagonal movement is no faster than straight movement")]
    pub normalize_diagonal: bool,
}

impl Cli {
    /// Config file (or defaults) with command-line overrides on top.
    pub fn launch_config(&self) -> LaunchConfig {
        let mut config = self
            .config
            .as_deref()
            .map(LaunchConfig::load_or_default)
            .unwrap_or_default();
        self.apply_overrides(&mut config);
        config
    }

    pub fn apply_overrides(&self, config: &mut LaunchConfig) {
        let movement = &mut config.movement;
        if let Some(speed) = self.movement_speed {
            movement.movement_speed = speed;
        }
        if let Some(speed) = self.walk_speed {
            movement.walk_speed = speed;
        }
        if let Some(speed) = self.rotation_speed {
            movement.rotation_speed = speed;
        }
        if let Some(height) = self.jump_height {
            movement.jump_height = height;
        }
        if let Some(pitch) = self.pitch_min {
            movement.pitch_min = pitch;
        }
        if let Some(pitch) = self.pitch_max {
            movement.pitch_max = pitch;
        }
        if self.walk_toggle {
            movement.walk_activation = ActivationMode::Toggle;
        }
        if self.normalize_diagonal {
            movement.diagonal = DiagonalPolicy::Normalized;
        }
    }
}

pub fn run() {
    let cli = Cli::parse();
    let mut app = create_app(&cli);
    app.run();
}
