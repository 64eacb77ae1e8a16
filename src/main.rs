//! Hoopshot entry point
//!
//! Headless runner: loads settings, lets the demo auto-player take a batch of
//! shots and prints the final scoreboard as JSON. A graphical host drives
//! `hoopshot::sim::Session` the same way, one tick per rendered frame.
//!
//! Usage: `hoopshot [settings.json] [seed] [shots]`

use hoopshot::Settings;
use hoopshot::demo::run_demo;
use hoopshot::sim::Session;

/// Host frame time for the headless run
const FRAME_DT: f32 = 1.0 / 60.0;
/// Ten simulated minutes
const MAX_TICKS: u64 = 60 * 60 * 10;

fn main() {
    env_logger::init();
    log::info!("Hoopshot (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) if path != "-" => Settings::load(path),
        _ => Settings::default(),
    };
    let seed = parse_arg(args.next(), "seed", 12345u64);
    let shots = parse_arg(args.next(), "shots", 10u32);

    let mut session = Session::new(settings);
    log::info!("Session started with seed: {}", seed);

    let done = run_demo(&mut session, seed, shots, FRAME_DT, MAX_TICKS);
    log::info!("Finished {} shots in {} ticks", done, session.time_ticks);

    match serde_json::to_string_pretty(&session.game.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Could not serialize scoreboard: {}", e),
    }
}

fn parse_arg<T: std::str::FromStr + std::fmt::Display + Copy>(
    arg: Option<String>,
    name: &str,
    default: T,
) -> T {
    match arg {
        None => default,
        Some(s) => s.parse().unwrap_or_else(|_| {
            log::warn!("Invalid {} '{}', using {}", name, s, default);
            default
        }),
    }
}
