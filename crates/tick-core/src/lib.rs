// File: crates/tick-core/src/lib.rs
// Summary: Core library entry point; exports tick validation, sequence generation, and layout hints.

pub mod error;
pub mod types;
pub mod policy;
pub mod validate;
pub mod grid;
pub mod ticks;
pub mod text;
pub mod layout;
pub mod scale;
pub mod track;

pub use error::{TickError, ValidationError};
pub use types::{Domain, Step, TickValue};
pub use policy::TickPolicy;
pub use validate::{validate, validate_with};
pub use grid::{generate_sequence, generate_sequence_with, Sequence};
pub use ticks::{calculate_ticks, calculate_ticks_with};
pub use text::format_value;
pub use layout::{derive_layout_hints, derive_layout_hints_with, LayoutHint, Margin};
pub use scale::TrackScale;
pub use track::{PlacedTick, RangeTrack, TrackLayout};
