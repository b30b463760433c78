use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use drive_sim::simulation::{
    ControlIntent, ControlScript, Precipitation, ScriptStep, SimConfig, SimWorld, TimeOfDay,
    KEY_REPEAT_TICKS,
};

/// Script played when none is given: warm up, boost past the safe speed, cool down.
const DEFAULT_SCRIPT: &str =
    "accel*30, wait*60, boost, accel*25, wait*120, car, ped, boost, brake*40, wait*60, halt";

#[derive(Parser)]
#[command(name = "drive_sim")]
#[command(about = "Headless driving simulation with scripted controls")]
struct Cli {
    /// Number of simulation ticks to run
    #[arg(long, default_value = "1800")]
    ticks: u32,

    /// Fast ticks per simulated second
    #[arg(long, default_value = "60")]
    ticks_per_second: u32,

    /// Seed for reproducible runs (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Weather: clear, rain, snow or fog
    #[arg(long, default_value = "clear")]
    weather: String,

    /// Time of day: day, night or sunset
    #[arg(long, default_value = "day")]
    time_of_day: String,

    /// Control script, e.g. "accel*20,boost,accel*10,wait*30,brake*15"
    #[arg(long)]
    script: Option<String>,

    /// Seconds of simulated time between summaries
    #[arg(long, default_value = "5")]
    report_every: u32,

    /// Draw the road map with each summary
    #[arg(long)]
    map: bool,

    /// Leave the simulation stopped until the script sends `start`
    #[arg(long)]
    no_autostart: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    run_headless(&cli)
}

/// Run the simulation in headless mode (no graphics)
fn run_headless(cli: &Cli) -> Result<()> {
    let weather: Precipitation = cli.weather.parse().context("invalid --weather")?;
    let time_of_day: TimeOfDay = cli.time_of_day.parse().context("invalid --time-of-day")?;
    let mut script: ControlScript = cli
        .script
        .as_deref()
        .unwrap_or(DEFAULT_SCRIPT)
        .parse()
        .context("invalid --script")?;

    let config = SimConfig {
        ticks_per_second: cli.ticks_per_second.max(1),
        ..SimConfig::default()
    };
    let ticks_per_report = config
        .ticks_per_second
        .saturating_mul(cli.report_every.max(1));

    let mut world = match cli.seed {
        Some(seed) => SimWorld::with_config(config, seed),
        None => SimWorld::with_config(config, rand::random()),
    };

    println!("Running driving simulation in headless mode...");
    println!(
        "Ticks: {}, {} ticks per second, seed {}",
        cli.ticks,
        world.clock().ticks_per_second(),
        world.seed()
    );
    println!("Script: {} steps", script.len());
    println!();

    world.weather.set_mode(weather, time_of_day);
    if !cli.no_autostart {
        world.submit(ControlIntent::Start);
    }

    for tick in 1..=cli.ticks {
        // Scripted keys repeat at the same cadence as a held key
        if (tick - 1) % KEY_REPEAT_TICKS == 0 {
            if let Some(ScriptStep::Intent(intent)) = script.next_step() {
                world.submit(intent);
            }
        }

        world.tick();

        if tick % ticks_per_report == 0 {
            println!(
                "--- After tick {} ({:.1}s simulated time) ---",
                tick,
                tick as f32 / world.clock().ticks_per_second() as f32
            );
            world.print_summary();
            if cli.map {
                world.draw_map();
            }
            println!();
        }
    }

    if !script.is_empty() {
        warn!("{} script steps were not played before the run ended", script.len());
    }

    println!("=== Final State ===");
    world.print_summary();
    if cli.map {
        world.draw_map();
    }

    let snapshot = world.snapshot();
    info!("=== SIMULATION COMPLETE ===");
    info!("Elapsed time: {}", snapshot.stats.elapsed);
    info!("Distance travelled: {:.2} km", snapshot.stats.distance_km);
    info!("Battery remaining: {}%", snapshot.stats.battery_percent);
    info!(
        "Safety score: {:.1} ({:?})",
        snapshot.stats.safety_score, snapshot.stats.safety_rating
    );
    info!("Traffic cars: {}", snapshot.vehicles.len());
    info!("Pedestrians: {}", snapshot.pedestrians.len());
    info!("Cars recycled: {}", world.traffic.recycled_vehicles());

    Ok(())
}
