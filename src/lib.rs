//! Greenhouse controller library.
//!
//! Per tick the controller reads temperature, humidity and pressure,
//! decides heater and humidifier state against the operator setpoint, and
//! tracks six threshold alarms. Sensors, clock, display and persistence
//! sit behind the port traits in [`app::ports`].

#![deny(unused_must_use)]

pub mod adapters;
pub mod alarms;
pub mod app;
pub mod config;
pub mod control;
pub mod display;
pub mod error;
pub mod sensors;
