use crate::domain::{Card, Destination, PhaseSequencer, Rank, RoundStage, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

fn dest(seq: &mut PhaseSequencer, who: u8) -> Destination {
    seq.route(who).unwrap().destination
}

#[test]
fn first_round_routes_two_to_crib_then_play_area() {
    let mut seq = PhaseSequencer::new_game();
    assert_eq!(seq.required_crib_cards(), 2);

    assert_eq!(dest(&mut seq, 0), Destination::Crib);
    assert_eq!(dest(&mut seq, 0), Destination::Crib);
    assert_eq!(dest(&mut seq, 0), Destination::PlayArea);
    assert_eq!(seq.collected(0), 2);
    // Player 2 has not contributed yet.
    assert_eq!(seq.stage(), RoundStage::CollectingCrib);
}

#[test]
fn later_round_routes_one_to_crib_then_play_area() {
    let mut seq = PhaseSequencer::next_round();
    assert_eq!(seq.required_crib_cards(), 1);

    assert_eq!(dest(&mut seq, 1), Destination::Crib);
    assert_eq!(dest(&mut seq, 1), Destination::PlayArea);
    assert_eq!(seq.collected(1), 1);
}

#[test]
fn play_begins_only_when_every_player_met_the_requirement() {
    let mut seq = PhaseSequencer::new_game();
    for _ in 0..2 {
        assert!(!seq.route(0).unwrap().play_began);
    }
    assert!(!seq.route(1).unwrap().play_began);
    assert_eq!(seq.stage(), RoundStage::CollectingCrib);

    let last = seq.route(1).unwrap();
    assert_eq!(last.destination, Destination::Crib);
    assert!(last.play_began);
    assert_eq!(seq.stage(), RoundStage::Playing);

    let after = seq.route(0).unwrap();
    assert_eq!(after.destination, Destination::PlayArea);
    assert!(!after.play_began);
}

#[test]
fn show_needs_both_hands_empty_while_playing() {
    let ace = Card::new(Rank::Ace, Suit::Clubs);
    let mut seq = PhaseSequencer::next_round();

    // Not playing yet.
    assert!(!seq.observe_hands(&[vec![], vec![]]));

    seq.route(0).unwrap();
    seq.route(1).unwrap();
    assert!(!seq.observe_hands(&[vec![ace], vec![]]));
    assert!(seq.observe_hands(&[vec![], vec![]]));
    assert_eq!(seq.stage(), RoundStage::Showing);
    // Fires once.
    assert!(!seq.observe_hands(&[vec![], vec![]]));
}

#[test]
fn routing_while_showing_is_a_phase_mismatch() {
    let mut seq = PhaseSequencer::next_round();
    seq.route(0).unwrap();
    seq.route(1).unwrap();
    seq.observe_hands(&[vec![], vec![]]);

    assert!(matches!(
        seq.route(0),
        Err(DomainError::Validation(ValidationKind::PhaseMismatch, _))
    ));
}

#[test]
fn unknown_player_is_rejected_without_counting() {
    let mut seq = PhaseSequencer::new_game();
    assert!(matches!(
        seq.route(2),
        Err(DomainError::Validation(ValidationKind::InvalidPlayer, _))
    ));
    assert_eq!(seq.collected(0) + seq.collected(1), 0);
}

#[test]
fn destinations_map_to_wire_phases() {
    use crate::domain::Phase;
    assert_eq!(Destination::Crib.wire_phase(), Phase::CribCollection);
    assert_eq!(Destination::PlayArea.wire_phase(), Phase::Play);
}

#[test]
fn resume_infers_position_from_the_loaded_game() {
    use crate::domain::{Phase, SessionState};

    let c = |r| Card::new(r, Suit::Hearts);
    let mut state = SessionState {
        phase: Phase::CribCollection,
        hands: [
            vec![c(Rank::Ace), c(Rank::Two), c(Rank::Three), c(Rank::Four), c(Rank::Five)],
            vec![
                c(Rank::Six),
                c(Rank::Seven),
                c(Rank::Eight),
                c(Rank::Nine),
                c(Rank::Ten),
                c(Rank::Jack),
            ],
        ],
        ..SessionState::zeroed()
    };
    let mut seq = PhaseSequencer::resume(&state);
    assert_eq!(seq.stage(), RoundStage::CollectingCrib);
    assert_eq!((seq.collected(0), seq.collected(1)), (1, 0));
    assert_eq!(dest(&mut seq, 0), Destination::Crib);
    assert_eq!(dest(&mut seq, 0), Destination::PlayArea);

    state.phase = Phase::Play;
    assert_eq!(PhaseSequencer::resume(&state).stage(), RoundStage::Playing);

    state.phase = Phase::Show;
    assert_eq!(PhaseSequencer::resume(&state).stage(), RoundStage::Showing);
}
