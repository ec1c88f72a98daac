//! Runs two simulated boards against each other over an in-memory IR link

mod bot;
mod display;
mod link;
mod sim;

use std::fs;
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use game_core::{end_message, Config};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sim::{SimOptions, Simulation, DEFAULT_TICKS};

#[derive(Parser, Debug)]
#[command(version, about = "Two-board pong simulator")]
struct Cli {
    /// JSON file overriding the default game configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scheduler ticks to run before giving up
    #[arg(long, default_value_t = DEFAULT_TICKS)]
    ticks: u64,

    /// Seed for the bots and the link loss
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Probability that any byte is lost on the wire
    #[arg(long, default_value_t = 0.0)]
    loss: f64,

    /// Chance of a bot returning each incoming ball
    #[arg(long, default_value_t = 0.6)]
    skill: f64,

    /// Print both LED matrices after every game tick
    #[arg(long)]
    frames: bool,

    /// Write every byte sent over the link to this JSON file
    #[arg(long)]
    trace: Option<PathBuf>,
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: Config = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    ensure!(
        (0.0..=1.0).contains(&cli.loss),
        "--loss must be between 0 and 1, got {}",
        cli.loss
    );
    ensure!(
        (0.0..=1.0).contains(&cli.skill),
        "--skill must be between 0 and 1, got {}",
        cli.skill
    );

    let config = load_config(cli.config.as_ref())?;
    info!(?config, seed = cli.seed, loss = cli.loss, skill = cli.skill, "Starting simulation");

    let options = SimOptions {
        seed: cli.seed,
        loss: cli.loss,
        skill: cli.skill,
    };
    let mut sim = Simulation::new(config.clone(), options).context("Invalid configuration")?;

    let frame_period = u64::from(config.period_for(config.game_rate));
    let finished_at = sim.run(cli.ticks, |tick, sim| {
        if cli.frames && tick % frame_period == 0 {
            print!("tick {tick}\n{}", sim.render());
        }
    });

    match finished_at {
        Some(tick) => {
            let seconds = tick as f64 / f64::from(config.scheduler_rate);
            info!(
                tick,
                seconds,
                a = %end_message(sim.a.session()),
                b = %end_message(sim.b.session()),
                "Match finished"
            );
        }
        None => warn!(
            ticks = cli.ticks,
            a_state = ?sim.a.session().state(),
            b_state = ?sim.b.session().state(),
            "Match did not finish"
        ),
    }
    if cli.frames {
        print!("final\n{}", sim.render());
    }
    info!(
        uptime_a = sim.a.uptime_ticks(),
        uptime_b = sim.b.uptime_ticks(),
        led_pulses_a = sim.a.led.pulses(),
        led_pulses_b = sim.b.led.pulses(),
        "Board activity"
    );

    if let Some(path) = &cli.trace {
        let entries = sim.trace().borrow();
        let json = serde_json::to_string_pretty(&*entries)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write trace {}", path.display()))?;
        let dropped = entries.iter().filter(|e| e.dropped).count();
        info!(bytes = entries.len(), dropped, path = %path.display(), "Wrote link trace");
    }

    Ok(())
}
