//! Console display adapter.
//!
//! Implements [`DisplayPort`] by writing the per-tick text block (and,
//! optionally, the LED matrix as ASCII) to any [`Write`] sink.

use std::io::Write;

use log::warn;

use crate::app::events::TickReport;
use crate::app::ports::DisplayPort;
use crate::config::{DisplayConfig, SimulationConfig};
use crate::display::{render_matrix, text};

pub struct ConsoleDisplay<W: Write> {
    out: W,
    config: DisplayConfig,
    scale: SimulationConfig,
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn new(out: W, config: DisplayConfig, scale: SimulationConfig) -> Self {
        Self { out, config, scale }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_report(&mut self, report: &TickReport) -> std::io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", text::readings_line(&report.reading))?;
        writeln!(self.out, "{}", text::setpoints_line(&report.setpoint))?;
        writeln!(self.out, "{}", text::controls_line(&report.controls))?;
        if self.config.show_alarms {
            for line in text::alarm_lines(&report.alarms) {
                writeln!(self.out, " {line}")?;
            }
        }
        if self.config.show_matrix {
            let m = render_matrix(&report.reading, &report.setpoint, &self.scale);
            write!(self.out, "{m}")?;
        }
        self.out.flush()
    }
}

impl<W: Write> DisplayPort for ConsoleDisplay<W> {
    fn render(&mut self, report: &TickReport) {
        if let Err(e) = self.write_report(report) {
            warn!("Console display write failed: {e}");
        }
    }
}
