//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter         | Implements      | Connects to                  |
//! |-----------------|-----------------|------------------------------|
//! | `console`       | DisplayPort     | stdout (or any `io::Write`)  |
//! | `data_log`      | ReadingLogPort  | CSV file, append mode        |
//! | `log_sink`      | EventSink       | `log` facade                 |
//! | `setpoint_file` | SetpointPort    | 8-byte setpoint record file  |
//! | `time`          | ClockPort       | system clock, thread sleep   |
//!
//! The sensor source lives in [`crate::sensors::simulated`].

pub mod console;
pub mod data_log;
pub mod log_sink;
pub mod setpoint_file;
pub mod time;
