//! Core card-related types: Card, Rank, Suit

use std::fmt;

use crate::errors::domain::{DomainError, ValidationKind};

/// Suits in the authority's wire order (CLUBS = 0 … SPADES = 3).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Clubs,
    Hearts,
    Diamonds,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Hearts, Suit::Diamonds, Suit::Spades];

    pub const fn index(self) -> u8 {
        match self {
            Suit::Clubs => 0,
            Suit::Hearts => 1,
            Suit::Diamonds => 2,
            Suit::Spades => 3,
        }
    }

    pub fn from_index(index: u8) -> Result<Self, DomainError> {
        match index {
            0 => Ok(Suit::Clubs),
            1 => Ok(Suit::Hearts),
            2 => Ok(Suit::Diamonds),
            3 => Ok(Suit::Spades),
            _ => Err(DomainError::validation(
                ValidationKind::InvalidSuit,
                format!("Not a valid suit: {index}"),
            )),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Spades => "spades",
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Spades => '♠',
        }
    }
}

/// Ranks ace-low, valued 1..=13 as the authority counts them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Face value 1..=13.
    pub const fn value(self) -> u8 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
        }
    }

    /// Pegging value: faces count 10.
    pub const fn pip_value(self) -> u8 {
        match self {
            Rank::Jack | Rank::Queen | Rank::King => 10,
            other => other.value(),
        }
    }

    pub fn from_value(value: u8) -> Result<Self, DomainError> {
        match value {
            1..=13 => Ok(Rank::ALL[(value - 1) as usize]),
            _ => Err(DomainError::validation(
                ValidationKind::InvalidRank,
                format!("Not a valid value: {value}"),
            )),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Rank::Ace => "ace",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
        }
    }

    pub const fn token(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Builds a card from the authority's `(value, suit)` integers.
    pub fn from_wire(value: u8, suit: u8) -> Result<Self, DomainError> {
        Ok(Self {
            rank: Rank::from_value(value)?,
            suit: Suit::from_index(suit)?,
        })
    }

    pub const fn to_wire(self) -> [u8; 2] {
        [self.rank.value(), self.suit.index()]
    }
}

// Note: Ord on Card is only for stable display sorting: suit order C<H<D<S then rank.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.token(), self.suit.symbol())
    }
}
