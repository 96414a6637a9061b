// File: crates/tick-core/src/layout.rs
// Summary: Edge margin hints compensating for long first/last tick labels.

use std::fmt;

use crate::policy::TickPolicy;
use crate::text::label_len;
use crate::types::TickValue;

/// Spacing in em units; displays as `0.6em`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin(pub f64);

impl fmt::Display for Margin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}em", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutHint {
    pub margin_left: Option<Margin>,
    pub margin_right: Option<Margin>,
}

impl LayoutHint {
    pub fn is_empty(&self) -> bool {
        self.margin_left.is_none() && self.margin_right.is_none()
    }

    /// Inline style declarations, e.g. `margin-left: 0.6em; margin-right: 0.8em`.
    pub fn to_style(&self) -> String {
        let mut parts = Vec::with_capacity(2);
        if let Some(m) = self.margin_left {
            parts.push(format!("margin-left: {m}"));
        }
        if let Some(m) = self.margin_right {
            parts.push(format!("margin-right: {m}"));
        }
        parts.join("; ")
    }
}

pub fn derive_layout_hints(sequence: &[TickValue], max: f64) -> LayoutHint {
    derive_layout_hints_with(&TickPolicy::default(), sequence, max)
}

/// The right margin is only added when the last tick is `max` itself; a tick
/// short of max does not stand in for the max label drawn by the host.
pub fn derive_layout_hints_with(policy: &TickPolicy, sequence: &[TickValue], max: f64) -> LayoutHint {
    let (Some(first), Some(last)) = (sequence.first(), sequence.last()) else {
        return LayoutHint::default();
    };
    let margin = |len: usize| Margin(len as f64 / policy.chars_per_em);

    let mut hint = LayoutHint::default();
    let min_len = label_len(first.value);
    if min_len > policy.margin_label_threshold {
        hint.margin_left = Some(margin(min_len));
    }
    let max_len = label_len(last.value);
    if last.value == max && max_len > policy.margin_label_threshold {
        hint.margin_right = Some(margin(max_len));
    }
    hint
}
