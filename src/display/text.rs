//! Console text lines for one tick.

use chrono::Local;

use crate::alarms::{AlarmSet, NO_ALARMS_LABEL};
use crate::control::{ControlState, Setpoint};
use crate::sensors::{Reading, Timestamp};

/// `Wed Apr 17 10:22:33 2024` in local time (always 24 characters).
pub fn ctime(at: &Timestamp) -> String {
    at.with_timezone(&Local).format("%a %b %e %H:%M:%S %Y").to_string()
}

pub fn readings_line(reading: &Reading) -> String {
    format!(
        "{} Readings\tT: {:5.1}C\tH: {:5.1}%\tP: {:6.1}mb",
        ctime(&reading.timestamp),
        reading.temperature,
        reading.humidity,
        reading.pressure
    )
}

pub fn controls_line(controls: &ControlState) -> String {
    format!(
        " Controls\tHeater:{} \tHumidifier:{}",
        u8::from(controls.heater_on),
        u8::from(controls.humidifier_on)
    )
}

pub fn setpoints_line(setpoint: &Setpoint) -> String {
    format!(
        " Setpoints\tT: {:5.1}C\tH: {:5.1}%",
        setpoint.temperature, setpoint.humidity
    )
}

/// One line per active alarm, oldest first, or the "no alarms" label.
pub fn alarm_lines<const N: usize>(alarms: &AlarmSet<N>) -> Vec<String> {
    if alarms.is_empty() {
        return vec![NO_ALARMS_LABEL.to_string()];
    }
    alarms
        .iter()
        .map(|r| format!("{} {}", r.code.announcement(), ctime(&r.triggered_at)))
        .collect()
}
