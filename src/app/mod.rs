//! Application core: pure domain orchestration, zero direct I/O.
//!
//! The [`service::Controller`] runs the per-tick sequence (acquire →
//! decide → alarm update → display). All interaction with sensors, the
//! clock, files and renderers happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
pub mod stop;
