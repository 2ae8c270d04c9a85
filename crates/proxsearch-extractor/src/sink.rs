//! In-memory observation sink

use proxsearch_domain::{Observation, ObservationSink};
use std::convert::Infallible;

/// Collects observations in emission order
#[derive(Debug, Clone, Default)]
pub struct VecSink {
    observations: Vec<Observation>,
}

impl VecSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Observations written so far
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Consume the sink, returning its observations
    pub fn into_inner(self) -> Vec<Observation> {
        self.observations
    }
}

impl ObservationSink for VecSink {
    type Error = Infallible;

    fn write(&mut self, observation: &Observation) -> Result<(), Self::Error> {
        self.observations.push(observation.clone());
        Ok(())
    }
}
