//! Domain layer: pure table logic, no I/O.

pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod catalog;
pub mod evaluator;
pub mod round_progress;
pub mod rules;
pub mod sequencer;
pub mod state;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_sequencer;
#[cfg(test)]
mod tests_sequencer;

// Re-exports for ergonomics
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use evaluator::{evaluate_hands, is_playable, is_playable_with, Playability};
pub use round_progress::{RevealState, RoundProgress};
pub use rules::{required_crib_cards, CountingRule};
pub use sequencer::{Destination, PhaseSequencer, RoundStage, Routed};
pub use state::{Phase, PlayerId, SessionState};
