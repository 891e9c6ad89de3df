// Builders for driving a GameFlow through scripted authority replies.

use super::{Effect, Event, GameFlow};
use crate::domain::{is_playable_with, Card, CountingRule, Phase, SessionState};
use crate::sync::AuthorityRequest;

pub fn c(token: &str) -> Card {
    token.parse().unwrap()
}

pub fn cards(tokens: &[&str]) -> Vec<Card> {
    tokens.iter().map(|t| c(t)).collect()
}

/// Legal-card flags the way the authority computes them (faces count 10).
pub fn with_flags(mut state: SessionState) -> SessionState {
    for (flag, hand) in state.has_legal_move.iter_mut().zip(&state.hands) {
        *flag = hand
            .iter()
            .any(|&card| is_playable_with(card, state.running_sum, CountingRule::Pip));
    }
    state
}

pub fn table(phase: Phase, p1: &[&str], p2: &[&str], running_sum: u8) -> SessionState {
    with_flags(SessionState {
        phase,
        hands: [cards(p1), cards(p2)],
        running_sum,
        ..SessionState::zeroed()
    })
}

pub fn deal() -> SessionState {
    table(
        Phase::CribCollection,
        &["AC", "2C", "3C", "4C", "5C", "6C"],
        &["AH", "2H", "3H", "4H", "5H", "6H"],
        0,
    )
}

pub fn requests(effects: &[Effect]) -> Vec<AuthorityRequest> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::Request(r) => Some(*r),
            _ => None,
        })
        .collect()
}

/// Flow that has loaded `state` from the authority; returns the effects of
/// the load reply.
pub fn loaded(state: SessionState) -> (GameFlow, Vec<Effect>) {
    let mut flow = GameFlow::default();
    assert_eq!(
        requests(&flow.start().unwrap()),
        vec![AuthorityRequest::FetchCurrentGame]
    );
    let effects = flow.dispatch(Event::ReplyReceived(state)).unwrap();
    (flow, effects)
}

/// Flow on the first round of a freshly started game.
pub fn new_game(state: SessionState) -> GameFlow {
    let (mut flow, _) = loaded(SessionState::zeroed());
    flow.dispatch(Event::NewGameRequested).unwrap();
    flow.dispatch(Event::ReplyReceived(state)).unwrap();
    flow
}

/// Flow on a later round: a finished round is revealed and the next dealt.
pub fn later_round(state: SessionState) -> GameFlow {
    let (mut flow, effects) = loaded(table(Phase::Show, &[], &[], 0));
    assert_eq!(requests(&effects), vec![AuthorityRequest::ShowScore]);
    let effects = flow
        .dispatch(Event::ReplyReceived(table(Phase::Show, &[], &[], 0)))
        .unwrap();
    assert_eq!(requests(&effects), vec![AuthorityRequest::StartNewRound]);
    flow.dispatch(Event::ReplyReceived(state)).unwrap();
    flow
}

/// What an agreeable authority would send back: the client's optimistic
/// view with legal-card flags recomputed.
pub fn echo(flow: &GameFlow) -> SessionState {
    with_flags(flow.session().clone())
}

/// Select a card and answer with `echo`.
pub fn play(flow: &mut GameFlow, who: u8, token: &str) -> (AuthorityRequest, Vec<Effect>) {
    let effects = flow
        .dispatch(Event::CardSelected { who, card: c(token) })
        .unwrap();
    let sent = requests(&effects);
    assert_eq!(sent.len(), 1, "one request per selection: {effects:?}");
    let reply = echo(flow);
    let after = flow.dispatch(Event::ReplyReceived(reply)).unwrap();
    (sent[0], after)
}
