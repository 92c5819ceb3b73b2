//! Controller service: the hexagonal core.
//!
//! [`Controller`] owns the operator setpoint, the alarm limits and the
//! active alarm set. Each tick is a strictly sequential unit:
//!
//! ```text
//!  SensorPort ──▶ ┌─────────────────────────────┐ ──▶ EventSink
//!   ClockPort ──▶ │         Controller          │ ──▶ DisplayPort
//!                 │ acquire · decide · alarms   │ ──▶ ReadingLogPort
//!                 └─────────────────────────────┘
//! ```
//!
//! The controller is single-threaded; only the [`StopSignal`] is shared
//! with the host.

use core::time::Duration;

use log::{debug, info, warn};

use crate::alarms::{AlarmLimits, AlarmSet, update_alarms};
use crate::config::ControllerConfig;
use crate::control::{ControlState, Setpoint, decide};
use crate::error::Error;
use crate::sensors::{self, Reading};

use super::commands::AppCommand;
use super::events::{AppEvent, TickReport};
use super::ports::{ClockPort, DisplayPort, EventSink, ReadingLogPort, SensorPort, SetpointPort};
use super::stop::StopSignal;

/// Pacing and bounds for [`Controller::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub interval: Duration,
    /// Stop after this many ticks of this run.
    pub max_ticks: Option<u64>,
}

impl RunOptions {
    pub fn from_config(config: &ControllerConfig) -> Self {
        Self {
            interval: config.update_interval(),
            max_ticks: config.max_ticks,
        }
    }
}

/// The controller orchestrates all domain logic.
pub struct Controller {
    setpoint: Setpoint,
    limits: AlarmLimits,
    alarms: AlarmSet,
    controls: ControlState,
    last_reading: Option<Reading>,
    tick_count: u64,
    stop: StopSignal,
}

impl Controller {
    /// Construct with explicit targets and limits. The alarm set starts empty.
    pub fn new(setpoint: Setpoint, limits: AlarmLimits) -> Self {
        Self {
            setpoint,
            limits,
            alarms: AlarmSet::new(),
            controls: ControlState::ALL_OFF,
            last_reading: None,
            tick_count: 0,
            stop: StopSignal::new(),
        }
    }

    /// Resolve the persisted targets (first-run defaults included) and
    /// take the limits from configuration.
    pub fn from_config(config: &ControllerConfig, store: &impl SetpointPort) -> Self {
        let setpoint = store.resolve_targets(config.default_setpoint);
        Self::new(setpoint, config.alarm_limits)
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started {
            setpoint: self.setpoint,
            limits: self.limits,
        });
        info!(
            "Controller started: target T={:.1}C H={:.1}%",
            self.setpoint.temperature, self.setpoint.humidity
        );
    }

    /// Handle for requesting a graceful stop from another thread.
    pub fn stop_signal(&self) -> StopSignal {
        self.stop.clone()
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one cycle: acquire reading → decide controls → update alarms.
    pub fn tick(
        &mut self,
        sensor: &mut impl SensorPort,
        clock: &impl ClockPort,
        sink: &mut impl EventSink,
    ) -> TickReport {
        self.tick_count += 1;

        // 1. Acquire
        let reading = sensors::acquire(sensor, clock.now());

        // 2. Decide
        self.controls = decide(&self.setpoint, &reading);

        // 3. Alarms (old set in, new set out)
        let update = update_alarms(core::mem::take(&mut self.alarms), &self.limits, &reading);
        self.alarms = update.alarms;
        for transition in update.transitions {
            sink.emit(&AppEvent::from(transition));
        }

        self.last_reading = Some(reading);
        debug!(
            "tick {}: T={:.1} H={:.1} P={:.1} heater={} humidifier={} alarms={}",
            self.tick_count,
            reading.temperature,
            reading.humidity,
            reading.pressure,
            self.controls.heater_on,
            self.controls.humidifier_on,
            self.alarms.len()
        );

        let report = self.report(reading);
        sink.emit(&AppEvent::Telemetry(report.clone()));
        report
    }

    /// Tick until stopped or `opts.max_ticks` is reached, rendering each
    /// report and optionally logging readings. Returns the ticks executed.
    ///
    /// A failing reading log is reported and skipped; it never ends the loop.
    pub fn run(
        &mut self,
        sensor: &mut impl SensorPort,
        clock: &impl ClockPort,
        display: &mut impl DisplayPort,
        sink: &mut impl EventSink,
        mut data_log: Option<&mut dyn ReadingLogPort>,
        opts: RunOptions,
    ) -> u64 {
        let mut executed: u64 = 0;
        loop {
            if self.stop.is_raised() || opts.max_ticks.is_some_and(|max| executed >= max) {
                break;
            }

            let report = self.tick(sensor, clock, sink);
            display.render(&report);
            if let Some(log) = data_log.as_deref_mut() {
                if let Err(e) = log.append(&report.reading) {
                    warn!("Reading not logged: {e}");
                }
            }
            executed += 1;

            if self.stop.is_raised() || opts.max_ticks.is_some_and(|max| executed >= max) {
                break;
            }
            clock.sleep(opts.interval);
        }

        sink.emit(&AppEvent::Stopped {
            ticks: self.tick_count,
        });
        info!("Controller stopped after {executed} ticks");
        executed
    }

    // ── Command handling ──────────────────────────────────────

    pub fn handle_command(
        &mut self,
        cmd: AppCommand,
        store: &impl SetpointPort,
        sink: &mut impl EventSink,
    ) -> Result<(), Error> {
        match cmd {
            AppCommand::UpdateSetpoint(setpoint) => self.update_setpoint(setpoint, store, sink),
            AppCommand::ReloadSetpoint => {
                let loaded = store.load();
                if loaded.is_unset() {
                    warn!("Setpoint reload found nothing usable; keeping current targets");
                } else if loaded != self.setpoint {
                    let from = self.setpoint;
                    self.setpoint = loaded;
                    sink.emit(&AppEvent::SetpointChanged { from, to: loaded });
                }
                Ok(())
            }
            AppCommand::Stop => {
                self.stop.raise();
                Ok(())
            }
        }
    }

    /// Explicit save path: validate, persist, then adopt.
    ///
    /// The in-memory setpoint only changes once the save succeeded.
    pub fn update_setpoint(
        &mut self,
        setpoint: Setpoint,
        store: &impl SetpointPort,
        sink: &mut impl EventSink,
    ) -> Result<(), Error> {
        setpoint.validate()?;
        if setpoint.is_unset() {
            warn!("A 0.0C target reads back as 'unset' and is replaced by defaults on restart");
        }
        store.save(&setpoint)?;

        let from = self.setpoint;
        self.setpoint = setpoint;
        sink.emit(&AppEvent::SetpointChanged { from, to: setpoint });
        info!(
            "Setpoint updated: T={:.1}C H={:.1}%",
            setpoint.temperature, setpoint.humidity
        );
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn setpoint(&self) -> Setpoint {
        self.setpoint
    }

    pub fn limits(&self) -> AlarmLimits {
        self.limits
    }

    pub fn alarms(&self) -> &AlarmSet {
        &self.alarms
    }

    /// Controls computed on the latest tick (all off before the first).
    pub fn controls(&self) -> ControlState {
        self.controls
    }

    pub fn last_reading(&self) -> Option<Reading> {
        self.last_reading
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    // ── Internal ──────────────────────────────────────────────

    fn report(&self, reading: Reading) -> TickReport {
        TickReport {
            tick: self.tick_count,
            reading,
            setpoint: self.setpoint,
            controls: self.controls,
            alarms: self.alarms.clone(),
        }
    }
}
