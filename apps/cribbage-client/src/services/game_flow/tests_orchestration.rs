use super::test_fixtures::{echo, loaded, play, requests, table};
use super::{turn_outcome, Effect, Event, FlowStatus, Notice, Prompt, TurnOutcome};
use crate::domain::{Phase, RevealState, RoundStage, SessionState};
use crate::error::ClientError;
use crate::sync::AuthorityRequest;

#[test]
fn turn_outcome_requires_both_players_blocked() {
    let mut s = SessionState {
        phase: Phase::Play,
        running_sum: 24,
        has_legal_move: [true, false],
        ..SessionState::zeroed()
    };
    assert_eq!(turn_outcome(&s), None);

    s.has_legal_move = [false, false];
    assert_eq!(turn_outcome(&s), Some(TurnOutcome::Go));

    s.running_sum = 0;
    assert_eq!(turn_outcome(&s), Some(TurnOutcome::TurnCompleted));

    s.has_legal_move = [true, true];
    assert_eq!(turn_outcome(&s), None);
}

#[test]
fn exhausted_hands_request_one_reveal_then_a_new_round() {
    let (mut flow, _) = loaded(table(Phase::Play, &["AS"], &[], 5));

    let (sent, effects) = play(&mut flow, 0, "AS");
    assert_eq!(
        sent,
        AuthorityRequest::PlayCard {
            card: "AS".parse().unwrap(),
            phase: Phase::Play
        }
    );
    assert!(effects.contains(&Effect::Notice(Notice::RoundExhausted)));
    assert_eq!(requests(&effects), vec![AuthorityRequest::ShowScore]);
    assert_eq!(flow.session().phase, Phase::Show);
    assert_eq!(flow.round().sequencer.stage(), RoundStage::Showing);
    assert_eq!(flow.round().reveal, RevealState::Requested);

    // The reveal reply rebuilds hands; the round still moves on exactly once.
    let revealed = table(Phase::Show, &["AS"], &["KD"], 0);
    let effects = flow.dispatch(Event::ReplyReceived(revealed)).unwrap();
    assert!(effects.contains(&Effect::Notice(Notice::ScoresRevealed)));
    assert_eq!(requests(&effects), vec![AuthorityRequest::StartNewRound]);

    let dealt = table(Phase::CribCollection, &["2C"; 1], &["3C"; 1], 0);
    let effects = flow.dispatch(Event::ReplyReceived(dealt)).unwrap();
    assert_eq!(
        effects,
        vec![Effect::Notice(Notice::CollectCrib { required: 1 })]
    );
    assert_eq!(flow.round().reveal, RevealState::NotRequested);
}

#[test]
fn win_prompts_and_acceptance_starts_a_new_game() {
    let mut won = table(Phase::Over, &[], &[], 0);
    won.won = [true, false];
    won.scores = [121, 98];
    let (mut flow, effects) = loaded(won);

    assert_eq!(
        effects,
        vec![Effect::Prompt(Prompt::GameWon { winner: 0 })]
    );
    let err = flow
        .dispatch(Event::CardSelected {
            who: 0,
            card: "AS".parse().unwrap(),
        })
        .unwrap_err();
    assert_eq!(err.code(), crate::errors::ErrorCode::PhaseMismatch);

    let effects = flow.dispatch(Event::Acknowledge).unwrap();
    assert_eq!(requests(&effects), vec![AuthorityRequest::StartNewGame]);
}

#[test]
fn declining_a_new_game_leaves_state_untouched() {
    let mut won = table(Phase::Over, &[], &[], 0);
    won.won = [false, true];
    let (mut flow, _) = loaded(won.clone());

    let effects = flow.dispatch(Event::Cancel).unwrap();
    assert_eq!(effects, vec![Effect::Notice(Notice::GameDeclined)]);
    assert_eq!(flow.status(), &FlowStatus::Halted);
    assert_eq!(flow.session(), &won);

    // Only a new game moves the table on.
    assert!(flow.dispatch(Event::Acknowledge).is_err());
    let effects = flow.dispatch(Event::NewGameRequested).unwrap();
    assert_eq!(requests(&effects), vec![AuthorityRequest::StartNewGame]);
}

#[test]
fn win_outranks_round_exhaustion() {
    let (mut flow, _) = loaded(table(Phase::Play, &["AS"], &[], 5));
    let pending = flow
        .dispatch(Event::CardSelected {
            who: 0,
            card: "AS".parse().unwrap(),
        })
        .unwrap();
    assert_eq!(requests(&pending).len(), 1);

    let mut reply = echo(&flow);
    reply.won = [true, false];
    let effects = flow.dispatch(Event::ReplyReceived(reply)).unwrap();
    assert_eq!(
        effects,
        vec![Effect::Prompt(Prompt::GameWon { winner: 0 })]
    );
    assert_eq!(flow.round().sequencer.stage(), RoundStage::Playing);
}

#[test]
fn go_resets_the_running_sum_and_refreshes_scores() {
    // 28 on the table; a queen and a king cannot follow under either rule.
    let state = table(Phase::Play, &["QS"], &["KD"], 28);
    assert_eq!(state.has_legal_move, [false, false]);
    let (mut flow, effects) = loaded(state);

    assert_eq!(
        effects,
        vec![
            Effect::Notice(Notice::NoLegalMoves),
            Effect::Request(AuthorityRequest::ShowScore)
        ]
    );
    assert_eq!(flow.session().running_sum, 0);

    // The authority keeps its own sum; the stalemate is not reported twice.
    let effects = flow
        .dispatch(Event::ReplyReceived(table(Phase::Play, &["QS"], &["KD"], 28)))
        .unwrap();
    assert!(requests(&effects).is_empty());
    assert!(flow.round().turn_settled);
}

#[test]
fn play_resumes_from_zero_after_a_settled_go() {
    let (mut flow, _) = loaded(table(Phase::Play, &["QS"], &["KD"], 28));
    // The authority still reports 28 until the next card is played.
    flow.dispatch(Event::ReplyReceived(table(Phase::Play, &["QS"], &["KD"], 28)))
        .unwrap();
    assert_eq!(flow.session().running_sum, 28);
    assert_eq!(flow.running_sum_in_play(), 0);
    assert!(flow
        .playability()
        .cards
        .iter()
        .flatten()
        .all(|&(_, playable)| playable));

    let effects = flow
        .dispatch(Event::CardSelected {
            who: 1,
            card: "KD".parse().unwrap(),
        })
        .unwrap();
    assert_eq!(
        requests(&effects),
        vec![AuthorityRequest::PlayCard {
            card: "KD".parse().unwrap(),
            phase: Phase::Play,
        }]
    );

    let effects = flow
        .dispatch(Event::ReplyReceived(table(Phase::Play, &["QS"], &[], 10)))
        .unwrap();
    assert!(requests(&effects).is_empty());
    assert!(!flow.round().turn_settled);
    assert_eq!(flow.running_sum_in_play(), 10);
}

#[test]
fn turn_completed_when_the_sum_is_already_zero() {
    let mut state = table(Phase::Play, &["QS"], &["KD"], 0);
    state.has_legal_move = [false, false];
    let (_, effects) = loaded(state);
    assert_eq!(
        effects,
        vec![
            Effect::Notice(Notice::TurnCompleted),
            Effect::Request(AuthorityRequest::ShowScore)
        ]
    );
}

#[test]
fn one_blocked_player_is_not_a_stalemate() {
    let state = table(Phase::Play, &["QS"], &["AD"], 25);
    assert_eq!(state.has_legal_move, [false, true]);
    let (flow, effects) = loaded(state);
    assert!(effects.is_empty());
    assert_eq!(flow.status(), &FlowStatus::Ready);
}

#[test]
fn failed_go_restores_the_sum_and_retries_after_acknowledgment() {
    let (mut flow, _) = loaded(table(Phase::Play, &["QS"], &["KD"], 28));
    flow.dispatch(Event::NetworkError(ClientError::network("down")))
        .unwrap();
    assert_eq!(flow.session().running_sum, 28);

    let effects = flow.dispatch(Event::Acknowledge).unwrap();
    assert_eq!(requests(&effects), vec![AuthorityRequest::ShowScore]);
    assert_eq!(flow.session().running_sum, 0);
}

#[test]
fn next_submission_rearms_the_stalemate_check() {
    let (mut flow, effects) = loaded(table(Phase::Play, &["QS", "9S"], &["KD"], 28));
    assert_eq!(requests(&effects), vec![AuthorityRequest::ShowScore]);

    // Authority resets its sum after the go.
    let effects = flow
        .dispatch(Event::ReplyReceived(table(Phase::Play, &["QS", "9S"], &["KD"], 0)))
        .unwrap();
    assert!(requests(&effects).is_empty());

    flow.dispatch(Event::CardSelected {
        who: 0,
        card: "QS".parse().unwrap(),
    })
    .unwrap();
    let reply = table(Phase::Play, &["9S"], &["KD"], 25);
    assert_eq!(reply.has_legal_move, [false, false]);
    let effects = flow.dispatch(Event::ReplyReceived(reply)).unwrap();
    assert_eq!(
        effects,
        vec![
            Effect::Notice(Notice::NoLegalMoves),
            Effect::Request(AuthorityRequest::ShowScore)
        ]
    );
}
