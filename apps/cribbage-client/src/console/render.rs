//! Plain-text table rendering.

use std::fmt::Write;

use crate::domain::catalog::{self, CARD_BACK_IMAGE};
use crate::domain::rules::PLAYERS;
use crate::domain::{Card, RoundStage};
use crate::error::ClientError;
use crate::services::{FlowStatus, GameFlow, Notice, Prompt};

pub const NOT_PLAYABLE: &str = "Card Not Playable";

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Print each card's image path next to its label.
    pub show_assets: bool,
}

fn card_label(card: Card, opts: RenderOptions) -> String {
    if opts.show_assets {
        format!("{card} <{}>", catalog::lookup(card).image_path)
    } else {
        card.to_string()
    }
}

pub fn render_table(flow: &GameFlow, player_name: &str, opts: RenderOptions) -> String {
    let session = flow.session();
    let round = flow.round();
    let playability = flow.playability();
    let pegging = round.sequencer.stage() == RoundStage::Playing;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "== {player_name} | {} | running sum {} ==",
        session.phase.as_wire(),
        flow.running_sum_in_play()
    );
    for p in 0..PLAYERS {
        let _ = write!(out, "Player {} Points = {:<4}", p + 1, session.scores[p]);
        if session.won[p] {
            out.push_str(" (won)");
        }
        out.push('\n');
    }

    for (p, hand) in playability.cards.iter().enumerate() {
        let _ = write!(out, "Player {} hand:", p + 1);
        if hand.is_empty() {
            out.push_str(" (empty)");
        }
        for &(card, playable) in hand {
            let _ = write!(out, " {}", card_label(card, opts));
            if pegging && !playable {
                let _ = write!(out, " [{NOT_PLAYABLE}]");
            }
        }
        out.push('\n');
    }

    let _ = write!(
        out,
        "Crib: {} card(s) face down",
        round.crib.len()
    );
    if opts.show_assets && !round.crib.is_empty() {
        let _ = write!(out, " <{CARD_BACK_IMAGE}>");
    }
    out.push('\n');

    out.push_str("Play area:");
    if round.play_area.is_empty() {
        out.push_str(" (empty)");
    }
    for &card in &round.play_area {
        let _ = write!(out, " {}", card_label(card, opts));
    }
    out.push('\n');

    if round.sequencer.stage() == RoundStage::CollectingCrib && session.phase.accepts_cards() {
        let required = round.sequencer.required_crib_cards();
        let _ = writeln!(
            out,
            "Crib: player 1 gave {}/{required}, player 2 gave {}/{required}",
            round.sequencer.collected(0),
            round.sequencer.collected(1)
        );
    }

    match flow.status() {
        FlowStatus::AwaitingReply(p) => {
            let _ = writeln!(out, "(waiting on authority: {})", p.request);
        }
        FlowStatus::AwaitingAcknowledgment(prompt) => {
            let _ = writeln!(out, "{}", render_prompt(prompt));
        }
        FlowStatus::Halted => out.push_str("Game over. Type `new` to play again.\n"),
        FlowStatus::Ready => {}
    }
    out
}

pub fn render_prompt(prompt: &Prompt) -> String {
    match prompt {
        Prompt::GameWon { winner } => {
            format!("Player {} has Won! Play 1 more game? (ok/no)", winner + 1)
        }
        Prompt::Failure(err) => format!("{} (ok to continue)", render_error(err)),
    }
}

pub fn render_notice(notice: &Notice) -> String {
    match notice {
        Notice::CollectCrib { required: 1 } => {
            "Select one card from each hand to add to the crib.".to_string()
        }
        Notice::CollectCrib { required } => {
            format!("Select {required} cards from each hand to add to the crib.")
        }
        Notice::PlayBegins => "Now play cards!".to_string(),
        Notice::TurnCompleted => "Turn Completed, Refreshing Scores.".to_string(),
        Notice::NoLegalMoves => "No player has playable cards, moving on.".to_string(),
        Notice::RoundExhausted => "All cards have been played.".to_string(),
        Notice::ScoresRevealed => {
            "Displaying new scores, adding points from the crib, and starting new round."
                .to_string()
        }
        Notice::GameDeclined => "No new game. Type `new` when ready.".to_string(),
        Notice::RequestCancelled => "Request cancelled; table restored.".to_string(),
    }
}

pub fn render_error(err: &ClientError) -> String {
    format!("[{}] {}", err.code(), err.detail())
}
