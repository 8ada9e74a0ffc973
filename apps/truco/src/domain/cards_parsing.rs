//! Card parsing from compact tokens (e.g., "1E", "12b", "7O")

use std::str::FromStr;

use super::cards_types::{Card, Suit};
use crate::errors::domain::DomainError;

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "basto" => Ok(Suit::Basto),
            "e" | "espadas" => Ok(Suit::Espadas),
            "o" | "oro" => Ok(Suit::Oro),
            "c" | "copa" => Ok(Suit::Copa),
            _ => Err(DomainError::ParseCard(format!("unknown suit: {s}"))),
        }
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let split = token
            .char_indices()
            .find(|(_, ch)| !ch.is_ascii_digit())
            .map(|(idx, _)| idx)
            .ok_or_else(|| DomainError::ParseCard(format!("missing suit: {s}")))?;
        let (number_part, suit_part) = token.split_at(split);
        if number_part.is_empty() || suit_part.len() != 1 {
            return Err(DomainError::ParseCard(format!("malformed card: {s}")));
        }
        let number: u8 = number_part
            .parse()
            .map_err(|_| DomainError::ParseCard(format!("bad number: {s}")))?;
        let suit: Suit = suit_part.parse()?;
        Card::new(number, suit).map_err(|_| DomainError::ParseCard(format!("invalid card: {s}")))
    }
}

/// Non-panicking helper to parse card tokens (e.g., "1E", "7O") into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
