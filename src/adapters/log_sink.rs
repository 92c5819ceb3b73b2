//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events
//! through the `log` facade (stderr via `env_logger` on the host).

use log::{error, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] as a single tagged line.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | #{} | T={:.1}\u{00b0}C H={:.1}% P={:.1}mbar | \
                     target T={:.1}\u{00b0}C H={:.1}% | heater={} humidifier={} | alarms={}",
                    t.tick,
                    t.reading.temperature,
                    t.reading.humidity,
                    t.reading.pressure,
                    t.setpoint.temperature,
                    t.setpoint.humidity,
                    if t.controls.heater_on { "ON" } else { "OFF" },
                    if t.controls.humidifier_on { "ON" } else { "OFF" },
                    t.alarms.len(),
                );
            }
            AppEvent::AlarmRaised(r) => {
                error!("ALARM | {} | {:.1} at {}", r.code.announcement(), r.value, r.triggered_at);
            }
            AppEvent::AlarmCleared(r) => {
                info!("ALARM | {} cleared (raised at {})", r.code, r.triggered_at);
            }
            AppEvent::AlarmDropped { code, value, error } => {
                warn!("ALARM | {code} at {value:.1} not recorded: {error}");
            }
            AppEvent::SetpointChanged { from, to } => {
                info!(
                    "SETPOINT | T {:.1} -> {:.1} | H {:.1} -> {:.1}",
                    from.temperature, to.temperature, from.humidity, to.humidity
                );
            }
            AppEvent::Started { setpoint, limits } => {
                info!(
                    "START | target T={:.1} H={:.1} | limits T {:.1}..{:.1} H {:.1}..{:.1} P {:.1}..{:.1}",
                    setpoint.temperature,
                    setpoint.humidity,
                    limits.low_temp,
                    limits.high_temp,
                    limits.low_humidity,
                    limits.high_humidity,
                    limits.low_pressure,
                    limits.high_pressure,
                );
            }
            AppEvent::Stopped { ticks } => {
                info!("STOP | after {ticks} ticks");
            }
        }
    }
}
