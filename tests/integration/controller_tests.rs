//! Integration tests for the Controller tick and run loop against mock
//! adapters.

use std::time::Duration;

use greenhouse::alarms::{AlarmCode, AlarmLimits, current_limits};
use greenhouse::app::commands::AppCommand;
use greenhouse::app::events::AppEvent;
use greenhouse::app::ports::ReadingLogPort;
use greenhouse::app::service::{Controller, RunOptions};
use greenhouse::config::ControllerConfig;
use greenhouse::control::Setpoint;
use greenhouse::error::Error;

use crate::mock_hw::{
    LogSink, MemoryLog, MemoryStore, RecordingDisplay, ScriptedSensor, StepClock,
};

fn controller() -> Controller {
    Controller::new(Setpoint::new(25.0, 55.0), current_limits())
}

fn opts(max_ticks: u64) -> RunOptions {
    RunOptions {
        interval: Duration::from_millis(2000),
        max_ticks: Some(max_ticks),
    }
}

fn codes(c: &Controller) -> Vec<AlarmCode> {
    c.alarms().codes().collect()
}

// ── Alarm lifecycle through the controller ────────────────────

#[test]
fn temperature_sequence_walks_the_alarm_lifecycle() {
    let mut c = controller();
    let mut sensor = ScriptedSensor::temperatures(&[35.0, 35.0, 5.0, 20.0]);
    let clock = StepClock::new();
    let mut sink = LogSink::new();

    c.tick(&mut sensor, &clock, &mut sink);
    assert_eq!(codes(&c), vec![AlarmCode::HighTemp]);

    c.tick(&mut sensor, &clock, &mut sink);
    assert_eq!(codes(&c), vec![AlarmCode::HighTemp], "no duplicate on repeat");

    c.tick(&mut sensor, &clock, &mut sink);
    assert_eq!(codes(&c), vec![AlarmCode::LowTemp]);

    c.tick(&mut sensor, &clock, &mut sink);
    assert!(c.alarms().is_empty());

    assert_eq!(sink.raised(), 2);
    assert_eq!(sink.cleared(), 2);
}

#[test]
fn alarm_records_carry_tick_time_and_value() {
    let mut c = controller();
    let mut sensor = ScriptedSensor::new(&[(20.0, 80.0, 970.0)]);
    let clock = StepClock::new();
    let mut sink = LogSink::new();

    let report = c.tick(&mut sensor, &clock, &mut sink);
    let humid = report.alarms.get(AlarmCode::HighHumidity).unwrap();
    assert_eq!(humid.value, 80.0);
    assert_eq!(humid.triggered_at, clock_now(&clock));
    let press = report.alarms.get(AlarmCode::LowPressure).unwrap();
    assert_eq!(press.value, 970.0);
}

fn clock_now(clock: &StepClock) -> greenhouse::sensors::Timestamp {
    use greenhouse::app::ports::ClockPort;
    clock.now()
}

#[test]
fn custom_limits_are_honoured() {
    let limits = AlarmLimits {
        high_temp: 22.0,
        ..current_limits()
    };
    let mut c = Controller::new(Setpoint::DEFAULT, limits);
    let mut sink = LogSink::new();
    c.tick(&mut ScriptedSensor::temperatures(&[23.0]), &StepClock::new(), &mut sink);
    assert_eq!(codes(&c), vec![AlarmCode::HighTemp]);
}

// ── Control decisions ─────────────────────────────────────────

#[test]
fn actuators_follow_the_setpoint_each_tick() {
    let mut c = controller();
    let mut sensor = ScriptedSensor::new(&[(20.0, 60.0, 1000.0), (25.0, 55.0, 1000.0), (26.0, 40.0, 1000.0)]);
    let clock = StepClock::new();
    let mut sink = LogSink::new();

    let r1 = c.tick(&mut sensor, &clock, &mut sink);
    assert!(r1.controls.heater_on && !r1.controls.humidifier_on);

    let r2 = c.tick(&mut sensor, &clock, &mut sink);
    assert!(!r2.controls.heater_on && !r2.controls.humidifier_on, "equal means off");

    let r3 = c.tick(&mut sensor, &clock, &mut sink);
    assert!(!r3.controls.heater_on && r3.controls.humidifier_on);
    assert_eq!(c.controls(), r3.controls);
}

// ── Run loop ──────────────────────────────────────────────────

#[test]
fn run_honours_max_ticks_and_sleeps_between_ticks() {
    let mut c = controller();
    let mut sensor = ScriptedSensor::temperatures(&[20.0]);
    let clock = StepClock::new();
    let mut display = RecordingDisplay::new();
    let mut sink = LogSink::new();

    let ticks = c.run(&mut sensor, &clock, &mut display, &mut sink, None, opts(3));

    assert_eq!(ticks, 3);
    assert_eq!(display.reports.len(), 3);
    assert_eq!(clock.sleep_count(), 2, "no sleep after the last tick");
    assert!(clock.sleeps.borrow().iter().all(|d| *d == Duration::from_secs(2)));
    assert_eq!(
        display.reports.iter().map(|r| r.tick).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert!(matches!(sink.events.last(), Some(AppEvent::Stopped { ticks: 3 })));
}

#[test]
fn stop_signal_ends_the_loop_after_the_current_tick() {
    let mut c = controller();
    let stop = c.stop_signal();
    let mut sensor = ScriptedSensor::temperatures(&[20.0]);
    let clock = StepClock::new();
    let mut display = RecordingDisplay::stopping_after(2, stop.clone());
    let mut sink = LogSink::new();

    let unbounded = RunOptions {
        interval: Duration::from_millis(100),
        max_ticks: None,
    };
    let ticks = c.run(&mut sensor, &clock, &mut display, &mut sink, None, unbounded);

    assert_eq!(ticks, 2);
    assert!(stop.is_raised());
}

#[test]
fn pre_raised_stop_runs_no_ticks() {
    let mut c = controller();
    c.stop_signal().raise();
    let mut display = RecordingDisplay::new();
    let ticks = c.run(
        &mut ScriptedSensor::temperatures(&[20.0]),
        &StepClock::new(),
        &mut display,
        &mut LogSink::new(),
        None,
        opts(5),
    );
    assert_eq!(ticks, 0);
    assert!(display.reports.is_empty());
}

#[test]
fn readings_are_logged_and_log_failures_do_not_stop_the_loop() {
    let mut c = controller();
    let mut log = MemoryLog::new();
    let ticks = c.run(
        &mut ScriptedSensor::temperatures(&[20.0, 21.0]),
        &StepClock::new(),
        &mut RecordingDisplay::new(),
        &mut LogSink::new(),
        Some(&mut log as &mut dyn ReadingLogPort),
        opts(2),
    );
    assert_eq!(ticks, 2);
    assert_eq!(
        log.readings.iter().map(|r| r.temperature).collect::<Vec<_>>(),
        vec![20.0, 21.0]
    );

    let mut broken = MemoryLog::failing();
    let ticks = c.run(
        &mut ScriptedSensor::temperatures(&[20.0]),
        &StepClock::new(),
        &mut RecordingDisplay::new(),
        &mut LogSink::new(),
        Some(&mut broken as &mut dyn ReadingLogPort),
        opts(3),
    );
    assert_eq!(ticks, 3);
}

#[test]
fn alarms_survive_across_runs() {
    let mut c = controller();
    c.run(
        &mut ScriptedSensor::temperatures(&[40.0]),
        &StepClock::new(),
        &mut RecordingDisplay::new(),
        &mut LogSink::new(),
        None,
        opts(1),
    );
    assert_eq!(codes(&c), vec![AlarmCode::HighTemp]);
    assert_eq!(c.tick_count(), 1);
}

// ── Setpoints ─────────────────────────────────────────────────

#[test]
fn from_config_persists_defaults_on_first_run() {
    let store = MemoryStore::empty();
    let config = ControllerConfig::default();
    let c = Controller::from_config(&config, &store);
    assert_eq!(c.setpoint(), Setpoint::DEFAULT);
    assert_eq!(*store.stored.borrow(), Some(Setpoint::DEFAULT));

    let again = Controller::from_config(&config, &store);
    assert_eq!(again.setpoint(), Setpoint::DEFAULT);
    assert_eq!(store.saves.get(), 1, "second start must not rewrite");
}

#[test]
fn from_config_prefers_the_stored_setpoint() {
    let store = MemoryStore::with(Setpoint::new(18.0, 65.0));
    let c = Controller::from_config(&ControllerConfig::default(), &store);
    assert_eq!(c.setpoint(), Setpoint::new(18.0, 65.0));
    assert_eq!(store.saves.get(), 0);
}

#[test]
fn unwritable_store_still_yields_defaults() {
    let store = MemoryStore::read_only();
    let c = Controller::from_config(&ControllerConfig::default(), &store);
    assert_eq!(c.setpoint(), Setpoint::DEFAULT);
}

#[test]
fn update_setpoint_saves_then_adopts() {
    let mut c = controller();
    let store = MemoryStore::empty();
    let mut sink = LogSink::new();

    c.handle_command(AppCommand::UpdateSetpoint(Setpoint::new(28.0, 70.0)), &store, &mut sink)
        .unwrap();

    assert_eq!(c.setpoint(), Setpoint::new(28.0, 70.0));
    assert_eq!(*store.stored.borrow(), Some(Setpoint::new(28.0, 70.0)));
    assert!(matches!(
        sink.events.last(),
        Some(AppEvent::SetpointChanged { to, .. }) if *to == Setpoint::new(28.0, 70.0)
    ));

    // The next tick decides against the new target.
    let r = c.tick(&mut ScriptedSensor::temperatures(&[26.0]), &StepClock::new(), &mut sink);
    assert!(r.controls.heater_on);
}

#[test]
fn failed_save_keeps_the_old_setpoint() {
    let mut c = controller();
    let mut sink = LogSink::new();
    let err = c
        .update_setpoint(Setpoint::new(28.0, 70.0), &MemoryStore::read_only(), &mut sink)
        .unwrap_err();
    assert!(matches!(err, Error::Persistence(_)));
    assert_eq!(c.setpoint(), Setpoint::new(25.0, 55.0));
    assert!(sink.events.is_empty());
}

#[test]
fn invalid_setpoint_is_rejected_before_saving() {
    let mut c = controller();
    let store = MemoryStore::empty();
    let err = c
        .update_setpoint(Setpoint::new(20.0, 140.0), &store, &mut LogSink::new())
        .unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert_eq!(store.saves.get(), 0);
}

#[test]
fn reload_picks_up_external_changes() {
    let mut c = controller();
    let store = MemoryStore::with(Setpoint::new(19.0, 45.0));
    let mut sink = LogSink::new();
    c.handle_command(AppCommand::ReloadSetpoint, &store, &mut sink).unwrap();
    assert_eq!(c.setpoint(), Setpoint::new(19.0, 45.0));

    // An empty store leaves the current targets alone.
    c.handle_command(AppCommand::ReloadSetpoint, &MemoryStore::empty(), &mut sink)
        .unwrap();
    assert_eq!(c.setpoint(), Setpoint::new(19.0, 45.0));
}

#[test]
fn stop_command_raises_the_signal() {
    let mut c = controller();
    c.handle_command(AppCommand::Stop, &MemoryStore::empty(), &mut LogSink::new())
        .unwrap();
    assert!(c.stop_signal().is_raised());
}
