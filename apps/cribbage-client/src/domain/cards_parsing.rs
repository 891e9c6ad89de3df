//! Card parsing from console tokens (e.g., "AS", "10H", "qd")

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

fn parse_error(s: &str) -> DomainError {
    DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_uppercase();
        if !token.is_ascii() {
            return Err(parse_error(s));
        }
        // "10X" is accepted alongside "TX"
        let (rank_part, suit_part) = match token.len() {
            2 => token.split_at(1),
            3 if token.starts_with("10") => token.split_at(2),
            _ => return Err(parse_error(s)),
        };
        let rank = match rank_part {
            "A" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            _ => return Err(parse_error(s)),
        };
        let suit = match suit_part {
            "C" => Suit::Clubs,
            "H" => Suit::Hearts,
            "D" => Suit::Diamonds,
            "S" => Suit::Spades,
            _ => return Err(parse_error(s)),
        };
        Ok(Card { rank, suit })
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
