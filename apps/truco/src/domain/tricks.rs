//! Trick winners and the tie rules that decide a round from its tricks.

use crate::domain::cards_logic::card_value;
use crate::domain::cards_types::Card;
use crate::domain::rules::{CARDS_PER_PLAYER, HANDS_TO_WIN_ROUND};
use crate::domain::table::{Seat, Team};

/// Running best card of a trick in progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrickTracker {
    best: Option<(Seat, u8)>,
    tied: bool,
}

impl TrickTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a played card. An equal rank to the current best marks a tie
    /// until something strictly higher arrives.
    pub fn observe(&mut self, seat: Seat, card: Card, muestra: Card) {
        let value = card_value(card, muestra);
        match self.best {
            Some((_, best)) if value < best => {}
            Some((_, best)) if value == best => self.tied = true,
            _ => {
                self.best = Some((seat, value));
                self.tied = false;
            }
        }
    }

    /// Seat holding the strict maximum, `None` on a tie or an empty trick.
    pub fn winner(&self) -> Option<Seat> {
        if self.tied {
            return None;
        }
        self.best.map(|(seat, _)| seat)
    }
}

/// Winner of a completed trick given its plays in order.
pub fn trick_winner(plays: &[(Seat, Card)], muestra: Card) -> Option<Seat> {
    let mut tracker = TrickTracker::new();
    for &(seat, card) in plays {
        tracker.observe(seat, card, muestra);
    }
    tracker.winner()
}

/// Team that has won the round after the tricks in `results`, if decided.
///
/// `results` holds each finished trick's winning team (`None` for a tie).
/// `hand_team` is the starting seat's team, which takes a round whose three
/// tricks all tied.
pub fn round_winner(results: &[Option<Team>], hand_team: Team) -> Option<Team> {
    let wins = |team: Team| results.iter().filter(|r| **r == Some(team)).count();
    let (one, two) = (wins(Team::One), wins(Team::Two));

    if one >= HANDS_TO_WIN_ROUND as usize {
        return Some(Team::One);
    }
    if two >= HANDS_TO_WIN_ROUND as usize {
        return Some(Team::Two);
    }

    if results.len() == 2 {
        match (results[0], results[1]) {
            // tied first trick, second decides
            (None, Some(team)) => return Some(team),
            // first winner keeps it when the second ties
            (Some(team), None) => return Some(team),
            _ => {}
        }
    }

    if results.len() >= CARDS_PER_PLAYER {
        if one != two {
            return Some(if one > two { Team::One } else { Team::Two });
        }
        let first_decided = results.iter().flatten().next().copied();
        return Some(first_decided.unwrap_or(hand_team));
    }

    None
}
