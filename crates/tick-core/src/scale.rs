// File: crates/tick-core/src/scale.rs
// Summary: Linear mapping from domain values to percent offsets along the track.

use crate::types::Domain;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackScale {
    pub min: f64,
    pub max: f64,
}

impl TrackScale {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn to_percent(&self, value: f64) -> f64 {
        let span = (self.max - self.min).max(1e-12);
        (value - self.min) / span * 100.0
    }
}

impl From<&Domain> for TrackScale {
    fn from(domain: &Domain) -> Self {
        Self::new(domain.min(), domain.max())
    }
}
