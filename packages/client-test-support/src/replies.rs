//! Authority reply documents for stub servers and scripted authorities.
//!
//! Built straight from JSON so tests exercise the client's decoder rather
//! than its encoder.

use serde_json::{json, Value};

/// Encode a card token such as `"AS"`, `"10h"` or `"QD"` as the authority's
/// `[value, suit]` pair.
///
/// # Panics
/// On a malformed token; test input is expected to be well formed.
pub fn wire_card(token: &str) -> Value {
    let upper = token.to_ascii_uppercase();
    let (rank, suit) = upper.split_at(upper.len() - 1);
    let value: u8 = match rank {
        "A" => 1,
        "J" => 11,
        "Q" => 12,
        "K" => 13,
        n => n
            .parse()
            .unwrap_or_else(|_| panic!("bad rank in card token '{token}'")),
    };
    let suit: u8 = match suit {
        "C" => 0,
        "H" => 1,
        "D" => 2,
        "S" => 3,
        _ => panic!("bad suit in card token '{token}'"),
    };
    json!([value, suit])
}

/// Fluent builder for one game-state reply.
#[derive(Debug, Clone)]
pub struct ReplyBuilder {
    state: String,
    hands: [Vec<Value>; 2],
    points: [u32; 2],
    won: [bool; 2],
    legal: [bool; 2],
    running_sum: u8,
}

impl ReplyBuilder {
    /// `state` is the authority's status string: `DEAL`, `PLAY`, `SHOW`...
    pub fn new(state: &str) -> Self {
        Self {
            state: state.to_string(),
            hands: [Vec::new(), Vec::new()],
            points: [0, 0],
            won: [false, false],
            legal: [false, false],
            running_sum: 0,
        }
    }

    /// `player` is 1 or 2, as the authority numbers them.
    pub fn hand(mut self, player: usize, cards: &[&str]) -> Self {
        self.hands[player - 1] = cards.iter().map(|c| wire_card(c)).collect();
        self
    }

    pub fn points(mut self, player: usize, points: u32) -> Self {
        self.points[player - 1] = points;
        self
    }

    pub fn won(mut self, player: usize) -> Self {
        self.won[player - 1] = true;
        self
    }

    pub fn legal(mut self, player: usize, has_legal_cards: bool) -> Self {
        self.legal[player - 1] = has_legal_cards;
        self
    }

    pub fn running_sum(mut self, sum: u8) -> Self {
        self.running_sum = sum;
        self
    }

    pub fn build(&self) -> Value {
        json!({
            "gameState": self.state,
            "player1Hand": self.hands[0],
            "player2Hand": self.hands[1],
            "player1Points": self.points[0],
            "player2Points": self.points[1],
            "Player1Won": self.won[0],
            "Player2Won": self.won[1],
            "Player1HasLegalCards": self.legal[0],
            "Player2HasLegalCards": self.legal[1],
            "RunningSum": self.running_sum,
        })
    }
}
