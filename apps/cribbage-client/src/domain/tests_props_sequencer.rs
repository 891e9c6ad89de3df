/// Property-based tests for crib routing
use proptest::prelude::*;

use crate::domain::{test_gens, test_prelude};
use crate::domain::{Destination, PhaseSequencer, RoundStage};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Nobody contributes past the requirement, and play begins exactly when
    /// the last required crib card lands.
    #[test]
    fn prop_crib_never_overfills(
        first_round in any::<bool>(),
        order in test_gens::selection_order(),
    ) {
        let mut seq = if first_round { PhaseSequencer::new_game() } else { PhaseSequencer::next_round() };
        let required = seq.required_crib_cards();
        let mut began = 0;

        for who in order {
            let before = seq.collected(who);
            let routed = seq.route(who).unwrap();
            prop_assert!(seq.collected(0) <= required);
            prop_assert!(seq.collected(1) <= required);

            match routed.destination {
                Destination::Crib => prop_assert_eq!(seq.collected(who), before + 1),
                Destination::PlayArea => prop_assert_eq!(seq.collected(who), before),
            }
            if routed.play_began {
                began += 1;
                prop_assert_eq!(routed.destination, Destination::Crib);
            }
            let complete = seq.collected(0) == required && seq.collected(1) == required;
            prop_assert_eq!(seq.stage() == RoundStage::Playing, complete);
        }
        prop_assert!(began <= 1);
    }
}
