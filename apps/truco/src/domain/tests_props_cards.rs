use proptest::prelude::*;

use crate::domain::rules::CARD_NUMBERS;
use crate::domain::test_prelude::{c, proptest_config};
use crate::domain::{card_value, is_pieza, test_gens, Card, Suit};

proptest! {
    #![proptest_config(proptest_config())]

    /// Comparison is antisymmetric and equal ranks beat neither way.
    #[test]
    fn prop_is_greater_than_antisymmetric(a in test_gens::card(), b in test_gens::card(), m in test_gens::card()) {
        let ab = a.is_greater_than(&b, m);
        let ba = b.is_greater_than(&a, m);
        prop_assert!(!(ab && ba));
        if a.value(m) == b.value(m) {
            prop_assert!(!ab && !ba);
        } else {
            prop_assert!(ab || ba);
        }
    }

    /// Every pieza outranks every non-pieza.
    #[test]
    fn prop_pieza_beats_non_pieza(a in test_gens::card(), b in test_gens::card(), m in test_gens::card()) {
        if is_pieza(a, m) && !is_pieza(b, m) {
            prop_assert!(a.is_greater_than(&b, m));
        }
    }

    /// Ranks stay within the three tiers.
    #[test]
    fn prop_value_in_range(a in test_gens::card(), m in test_gens::card()) {
        prop_assert!(card_value(a, m) <= 18);
    }

    /// The ace of espadas is the top mata unless the muestra makes it ordinary.
    #[test]
    fn prop_ace_of_espadas_is_top_mata(suit in test_gens::suit(), idx in 0..CARD_NUMBERS.len()) {
        let m = Card::new(CARD_NUMBERS[idx], suit).unwrap();
        let ace = c("1E");
        if suit != Suit::Espadas {
            prop_assert_eq!(ace.value(m), 13);
        }
        prop_assert!(!ace.is_pieza(m));
    }
}

#[test]
fn two_of_muestra_suit_is_highest_pieza() {
    assert_eq!(c("2O").value(c("10O")), 18);
    assert_eq!(c("7O").value(c("10O")), 10);
    assert_eq!(c("12O").value(c("10O")), 14);
    assert_eq!(c("12O").value(c("7O")), 6);
}
