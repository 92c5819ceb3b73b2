//! Simulated sensor source.
//!
//! Stands in for the environmental sensor board on development hosts:
//! each channel returns a uniform random value inside its configured
//! range. A fixed seed makes runs reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::app::ports::SensorPort;
use crate::config::{Range, SimulationConfig};

pub struct SimulatedSensor {
    rng: StdRng,
    temperature: Range,
    humidity: Range,
    pressure: Range,
}

impl SimulatedSensor {
    pub fn new(config: &SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            temperature: config.temperature,
            humidity: config.humidity,
            pressure: config.pressure,
        }
    }

    fn sample(&mut self, range: Range) -> f32 {
        if range.low < range.high {
            self.rng.gen_range(range.low..range.high)
        } else {
            range.low
        }
    }
}

impl SensorPort for SimulatedSensor {
    fn temperature(&mut self) -> f32 {
        self.sample(self.temperature)
    }

    fn humidity(&mut self) -> f32 {
        self.sample(self.humidity)
    }

    fn pressure(&mut self) -> f32 {
        self.sample(self.pressure)
    }
}
