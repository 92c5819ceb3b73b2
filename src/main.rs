//! Greenhouse controller: host entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │  SimulatedSensor   SystemClock   ConsoleDisplay              │
//! │  (SensorPort)      (ClockPort)   (DisplayPort)               │
//! │  SetpointFile      ReadingLog    LogEventSink                │
//! │  (SetpointPort)    (ReadingLog)  (EventSink)                 │
//! │                                                              │
//! │  ──────────────── Port Trait Boundary ───────────────────    │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │          Controller (pure logic)                       │  │
//! │  │  decide · update_alarms                                │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage:
//!
//! ```text
//! ghc [CONFIG.toml]                     run the control loop
//! ghc set <TEMP> <HUMIDITY> [CONFIG]    save new setpoints and exit
//! ```
//!
//! While running, a line `q` on stdin stops the loop after the current tick.

use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use log::{info, warn};

use greenhouse::adapters::console::ConsoleDisplay;
use greenhouse::adapters::data_log::ReadingLog;
use greenhouse::adapters::log_sink::LogEventSink;
use greenhouse::adapters::setpoint_file::SetpointFile;
use greenhouse::adapters::time::SystemClock;
use greenhouse::app::commands::AppCommand;
use greenhouse::app::ports::ReadingLogPort;
use greenhouse::app::service::{Controller, RunOptions};
use greenhouse::app::stop::StopSignal;
use greenhouse::config::ControllerConfig;
use greenhouse::control::Setpoint;
use greenhouse::sensors::SimulatedSensor;

enum Invocation {
    Run {
        config: Option<PathBuf>,
    },
    Set {
        setpoint: Setpoint,
        config: Option<PathBuf>,
    },
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Invocation> {
    match args.next() {
        None => Ok(Invocation::Run { config: None }),
        Some(cmd) if cmd == "set" => {
            let (Some(t), Some(h)) = (args.next(), args.next()) else {
                bail!("usage: ghc set <TEMP> <HUMIDITY> [CONFIG]");
            };
            let temperature: f32 = t.parse().with_context(|| format!("bad temperature '{t}'"))?;
            let humidity: f32 = h.parse().with_context(|| format!("bad humidity '{h}'"))?;
            Ok(Invocation::Set {
                setpoint: Setpoint::new(temperature, humidity),
                config: args.next().map(PathBuf::from),
            })
        }
        Some(path) => Ok(Invocation::Run {
            config: Some(PathBuf::from(path)),
        }),
    }
}

/// RUST_LOG wins over the configured level.
fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_millis()
        .init();
}

/// Raise `stop` when the operator types `q`.
fn watch_stdin(stop: StopSignal) {
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(l) if l.trim().eq_ignore_ascii_case("q") => {
                    info!("Stop requested from console");
                    stop.raise();
                    break;
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

fn main() -> Result<()> {
    let invocation = parse_args(std::env::args().skip(1))?;
    let config_path = match &invocation {
        Invocation::Run { config } | Invocation::Set { config, .. } => config.clone(),
    };

    // ── 1. Config + logging ───────────────────────────────────
    // The log level comes from the config, so report the outcome of
    // loading it only once the logger is up.
    let loaded = config_path.as_deref().map(ControllerConfig::load);
    let config = match &loaded {
        Some(Ok(cfg)) => cfg.clone(),
        _ => ControllerConfig::default(),
    };
    init_logging(&config.logging.level);
    match (&config_path, loaded) {
        (Some(path), Some(Ok(_))) => info!("Config loaded from {}", path.display()),
        (Some(path), Some(Err(e))) => {
            warn!("Config {} unusable, running with defaults: {e:#}", path.display())
        }
        _ => info!("No config file given, using defaults"),
    }

    info!("╔══════════════════════════════════════╗");
    info!("║  Greenhouse controller v{:<13}║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Setpoints ──────────────────────────────────────────
    let store = SetpointFile::new(&config.setpoint_path);
    let mut sink = LogEventSink::new();
    let mut controller = Controller::from_config(&config, &store);

    if let Invocation::Set { setpoint, .. } = invocation {
        controller
            .handle_command(AppCommand::UpdateSetpoint(setpoint), &store, &mut sink)
            .context("setpoint not saved")?;
        return Ok(());
    }

    // ── 3. Adapters ───────────────────────────────────────────
    let mut sensor = SimulatedSensor::new(&config.simulation);
    let clock = SystemClock::new();
    let mut display = ConsoleDisplay::new(std::io::stdout(), config.display.clone(), config.simulation);
    let mut data_log = config.data_log.as_ref().map(ReadingLog::new);

    watch_stdin(controller.stop_signal());

    // ── 4. Control loop ───────────────────────────────────────
    controller.start(&mut sink);
    let ticks = controller.run(
        &mut sensor,
        &clock,
        &mut display,
        &mut sink,
        data_log.as_mut().map(|l| l as &mut dyn ReadingLogPort),
        RunOptions::from_config(&config),
    );
    info!("Exiting after {ticks} ticks");
    Ok(())
}
