// Shared setup for domain unit tests.

pub use truco_test_support::proptest_prelude::proptest_config;

use crate::ai::{ActionProvider, AiError};
use crate::domain::{ActionCode, Card, Player, PlayerState};

/// Parse a card token, panicking on typos in test data.
pub fn c(token: &str) -> Card {
    token.parse().unwrap()
}

/// Stacked-deck order for the given hands (seat order) and muestra.
pub fn deal_order(hands: &[[&str; 3]], muestra: &str) -> Vec<Card> {
    let mut cards: Vec<Card> = hands.iter().flatten().map(|t| c(t)).collect();
    cards.push(c(muestra));
    cards
}

/// Provider backed by a plain function of the snapshot and offered codes.
pub struct FnProvider<F>(pub F);

impl<F> ActionProvider for FnProvider<F>
where
    F: Fn(&PlayerState, &[ActionCode]) -> ActionCode + Send + Sync,
{
    fn choose_action(
        &self,
        _player: &Player,
        state: &PlayerState,
        available: &[ActionCode],
    ) -> Result<ActionCode, AiError> {
        Ok((self.0)(state, available))
    }
}

/// Always plays the first card; answers bids with `accept`.
pub fn first_card(accept: bool) -> impl Fn(&PlayerState, &[ActionCode]) -> ActionCode {
    move |_: &PlayerState, available: &[ActionCode]| {
        let wanted = if accept {
            [ActionCode::AcceptTruco, ActionCode::AcceptEnvido]
        } else {
            [ActionCode::RejectTruco, ActionCode::RejectEnvido]
        };
        wanted
            .into_iter()
            .find(|a| available.contains(a))
            .unwrap_or(ActionCode::PlayCard0)
    }
}
