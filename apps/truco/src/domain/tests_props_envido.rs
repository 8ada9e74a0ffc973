use proptest::prelude::*;

use crate::domain::test_prelude::proptest_config;
use crate::domain::{calculate_envido, has_flor, is_pieza, test_gens};

proptest! {
    #![proptest_config(proptest_config())]

    /// Envido never exceeds 30 + 7 and hand order is irrelevant.
    #[test]
    fn prop_envido_bounded_and_order_free((hand, m) in test_gens::hand_and_muestra()) {
        let v = calculate_envido(&hand, m);
        prop_assert!(v <= 37);
        let mut reversed = hand.clone();
        reversed.reverse();
        prop_assert_eq!(calculate_envido(&reversed, m), v);
        prop_assert_eq!(has_flor(&reversed, m), has_flor(&hand, m));
    }

    /// A hand with a pieza scores at least 27.
    #[test]
    fn prop_pieza_hand_scores_high((hand, m) in test_gens::hand_and_muestra()) {
        if hand.iter().any(|&card| is_pieza(card, m)) {
            prop_assert!(calculate_envido(&hand, m) >= 27);
        }
    }

    /// Three cards of one suit are always a flor.
    #[test]
    fn prop_single_suit_is_flor((hand, m) in test_gens::hand_and_muestra()) {
        if hand.iter().all(|card| card.suit() == hand[0].suit()) {
            prop_assert!(has_flor(&hand, m));
        }
    }
}
