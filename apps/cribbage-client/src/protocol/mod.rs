//! Wire contract with the authority service.

pub mod game_state;

pub use game_state::{GameStateReply, PlayCardRequest};

pub const CURRENT_GAME_PATH: &str = "/api/current-game";
pub const START_NEW_GAME_PATH: &str = "/api/start-new-game";
pub const START_NEW_ROUND_PATH: &str = "/api/start-new-round";
pub const SHOW_SCORE_PATH: &str = "/api/show-score";
pub const PLAY_CARD_PATH: &str = "/api/play-card";
