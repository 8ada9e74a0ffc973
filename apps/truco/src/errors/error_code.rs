//! Error codes for the Truco engine.
//!
//! All error codes are SCREAMING_SNAKE_CASE. Harnesses and the simulator
//! report these strings; never pass ad-hoc strings as error codes.

use core::fmt;

/// Centralized error codes for [`DomainError`](super::DomainError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Construction
    /// Card number outside the 40-card deck
    InvalidCard,
    /// Card token could not be parsed
    ParseCard,
    /// Teams are empty, unequal, or share player names
    InvalidTeams,
    /// Configuration value rejected
    InvalidConfig,

    // Resources
    /// Draw exceeds the remaining deck
    InsufficientCards,

    // Hands
    InvalidCardIndex,
    EmptyHand,
    HandFull,
    DuplicateCard,

    // Collaborator contract
    /// Provider returned a code outside the offered set
    InvalidActionSelected,
    /// Provider failed before answering
    ProviderFailure,

    // Engine invariants
    CannotAdvanceTrucoState,
}

impl ErrorCode {
    /// Every code, in declaration order.
    pub const ALL: [ErrorCode; 12] = [
        ErrorCode::InvalidCard,
        ErrorCode::ParseCard,
        ErrorCode::InvalidTeams,
        ErrorCode::InvalidConfig,
        ErrorCode::InsufficientCards,
        ErrorCode::InvalidCardIndex,
        ErrorCode::EmptyHand,
        ErrorCode::HandFull,
        ErrorCode::DuplicateCard,
        ErrorCode::InvalidActionSelected,
        ErrorCode::ProviderFailure,
        ErrorCode::CannotAdvanceTrucoState,
    ];

    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidCard => "INVALID_CARD",
            Self::ParseCard => "PARSE_CARD",
            Self::InvalidTeams => "INVALID_TEAMS",
            Self::InvalidConfig => "INVALID_CONFIG",
            Self::InsufficientCards => "INSUFFICIENT_CARDS",
            Self::InvalidCardIndex => "INVALID_CARD_INDEX",
            Self::EmptyHand => "EMPTY_HAND",
            Self::HandFull => "HAND_FULL",
            Self::DuplicateCard => "DUPLICATE_CARD",
            Self::InvalidActionSelected => "INVALID_ACTION_SELECTED",
            Self::ProviderFailure => "PROVIDER_FAILURE",
            Self::CannotAdvanceTrucoState => "CANNOT_ADVANCE_TRUCO_STATE",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
