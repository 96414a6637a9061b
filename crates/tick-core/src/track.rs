// File: crates/tick-core/src/track.rs
// Summary: Range track configuration and its one-shot layout (ticks, positions, edge margins).

use crate::error::TickError;
use crate::layout::{derive_layout_hints_with, LayoutHint};
use crate::policy::TickPolicy;
use crate::scale::TrackScale;
use crate::text::format_value;
use crate::ticks::calculate_ticks_with;
use crate::types::{Domain, Step, TickValue};
use crate::validate::validate_with;

/// Track parameters supplied once by the host.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeTrack {
    pub domain: Domain,
    pub step: Step,
    pub tick_interval: Option<f64>,
    pub ticks: Option<Vec<TickValue>>,
    pub show_ticks: bool,
}

/// A validated tick ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedTick {
    pub value: f64,
    pub label: String,
    /// Offset from the track's left edge, 0..=100.
    pub offset_percent: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackLayout {
    pub ticks: Vec<PlacedTick>,
    pub hint: LayoutHint,
    /// `tick_interval` if set, else the step.
    pub interval: f64,
}

impl RangeTrack {
    pub fn new(domain: Domain) -> Self {
        Self { domain, step: Step::default(), tick_interval: None, ticks: None, show_ticks: false }
    }

    pub fn with_step(mut self, step: Step) -> Self {
        self.step = step;
        self
    }

    pub fn with_tick_interval(mut self, interval: f64) -> Self {
        self.tick_interval = Some(interval);
        self.show_ticks = true;
        self
    }

    pub fn with_ticks(mut self, ticks: Vec<TickValue>) -> Self {
        self.ticks = Some(ticks);
        self.show_ticks = true;
        self
    }

    pub fn with_show_ticks(mut self, show: bool) -> Self {
        self.show_ticks = show;
        self
    }

    pub fn layout(&self) -> Result<TrackLayout, TickError> {
        self.layout_with(&TickPolicy::default())
    }

    /// Max must be reachable from min by whole steps even when ticks are hidden.
    pub fn layout_with(&self, policy: &TickPolicy) -> Result<TrackLayout, TickError> {
        validate_with(policy, self.domain.max(), &self.domain, self.step).map_err(|source| {
            log::debug!("track max rejected: {source}");
            TickError::MaxOffGrid { source }
        })?;

        let interval = self.tick_interval.unwrap_or(self.step.get());
        if !self.show_ticks {
            return Ok(TrackLayout { ticks: Vec::new(), hint: LayoutHint::default(), interval });
        }

        let ticks = calculate_ticks_with(policy, &self.domain, self.step, self.tick_interval, self.ticks.as_deref())?;
        let hint = derive_layout_hints_with(policy, &ticks, self.domain.max());
        let scale = TrackScale::from(&self.domain);
        let ticks = ticks
            .into_iter()
            .map(|t| PlacedTick {
                offset_percent: scale.to_percent(t.value),
                label: t.label.unwrap_or_else(|| format_value(t.value)),
                value: t.value,
            })
            .collect();
        Ok(TrackLayout { ticks, hint, interval })
    }
}
