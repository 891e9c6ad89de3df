//! Static card → display asset lookup.

use once_cell::sync::Lazy;

use crate::domain::{Card, Rank, Suit};

pub const CARD_BACK_IMAGE: &str = "./images/back.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardAsset {
    pub card: Card,
    pub image_path: String,
}

static CATALOG: Lazy<Vec<CardAsset>> = Lazy::new(|| {
    Suit::ALL
        .iter()
        .flat_map(|&suit| {
            Rank::ALL.iter().map(move |&rank| CardAsset {
                card: Card::new(rank, suit),
                image_path: format!("./images/{}_of_{}.png", rank.name(), suit.name()),
            })
        })
        .collect()
});

fn slot(card: Card) -> usize {
    card.suit.index() as usize * Rank::ALL.len() + (card.rank.value() - 1) as usize
}

pub fn lookup(card: Card) -> &'static CardAsset {
    &CATALOG[slot(card)]
}

pub fn all() -> &'static [CardAsset] {
    &CATALOG
}
