//! Authority payloads: the game-state reply and the play-card body.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::state::{Phase, SessionState};
use crate::domain::Card;

impl Phase {
    /// Status string the authority uses for this phase.
    pub const fn as_wire(self) -> &'static str {
        match self {
            Phase::Dealing => "NOTSTARTED",
            Phase::CribCollection => "DEAL",
            Phase::Play => "PLAY",
            Phase::Show => "SHOW",
            Phase::Over => "OVER",
        }
    }

    /// Accepts the authority's status names and the descriptive aliases.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NOTSTARTED" | "DEALING" => Some(Phase::Dealing),
            "DEAL" | "CRIB_COLLECTION" => Some(Phase::CribCollection),
            "PLAY" => Some(Phase::Play),
            "SHOW" => Some(Phase::Show),
            "OVER" => Some(Phase::Over),
            _ => None,
        }
    }
}

impl Serialize for Phase {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for Phase {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phase::from_wire(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown game state: {s}")))
    }
}

fn hand_or_empty<'de, D>(deserializer: D) -> Result<Vec<Card>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Card>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Every authority endpoint replies with this document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateReply {
    /// Absent before the first deal.
    #[serde(rename = "gameState", default)]
    pub game_state: Option<Phase>,
    #[serde(rename = "player1Hand", default, deserialize_with = "hand_or_empty")]
    pub player1_hand: Vec<Card>,
    #[serde(rename = "player2Hand", default, deserialize_with = "hand_or_empty")]
    pub player2_hand: Vec<Card>,
    #[serde(rename = "player1Points", default)]
    pub player1_points: u32,
    #[serde(rename = "player2Points", default)]
    pub player2_points: u32,
    #[serde(rename = "Player1Won", default)]
    pub player1_won: bool,
    #[serde(rename = "Player2Won", default)]
    pub player2_won: bool,
    #[serde(rename = "Player1HasLegalCards", default)]
    pub player1_has_legal_cards: bool,
    #[serde(rename = "Player2HasLegalCards", default)]
    pub player2_has_legal_cards: bool,
    #[serde(rename = "RunningSum", default)]
    pub running_sum: u8,
}

impl From<GameStateReply> for SessionState {
    fn from(r: GameStateReply) -> Self {
        SessionState {
            phase: r.game_state.unwrap_or_default(),
            hands: [r.player1_hand, r.player2_hand],
            scores: [r.player1_points, r.player2_points],
            running_sum: r.running_sum,
            has_legal_move: [r.player1_has_legal_cards, r.player2_has_legal_cards],
            won: [r.player1_won, r.player2_won],
        }
    }
}

impl From<&SessionState> for GameStateReply {
    fn from(s: &SessionState) -> Self {
        GameStateReply {
            game_state: Some(s.phase),
            player1_hand: s.hands[0].clone(),
            player2_hand: s.hands[1].clone(),
            player1_points: s.scores[0],
            player2_points: s.scores[1],
            player1_won: s.won[0],
            player2_won: s.won[1],
            player1_has_legal_cards: s.has_legal_move[0],
            player2_has_legal_cards: s.has_legal_move[1],
            running_sum: s.running_sum,
        }
    }
}

/// Body of `POST /api/play-card`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayCardRequest {
    pub value: u8,
    pub suit: u8,
    #[serde(rename = "gameStatus")]
    pub game_status: Phase,
}

impl PlayCardRequest {
    pub fn new(card: Card, phase: Phase) -> Self {
        let [value, suit] = card.to_wire();
        Self {
            value,
            suit,
            game_status: phase,
        }
    }
}
