//! Serialization and deserialization for card types

use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Card, Suit};

impl Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "basto" => Ok(Suit::Basto),
            "espadas" => Ok(Suit::Espadas),
            "oro" => Ok(Suit::Oro),
            "copa" => Ok(Suit::Copa),
            _ => Err(D::Error::custom(format!("Invalid suit: {s}"))),
        }
    }
}

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Card", 2)?;
        state.serialize_field("number", &self.number())?;
        state.serialize_field("suit", &self.suit())?;
        state.end()
    }
}

#[derive(Deserialize)]
struct StoredCard {
    number: u8,
    suit: Suit,
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let stored = StoredCard::deserialize(deserializer)?;
        Card::new(stored.number, stored.suit).map_err(D::Error::custom)
    }
}
