//! Seating: two equal teams interleaved around the table.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::player::Player;
use crate::domain::rules::max_seats;
use crate::errors::domain::DomainError;

/// Index into the interleaved seating order (A1, B1, A2, B2, ...).
pub type Seat = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Team {
    One,
    Two,
}

impl Team {
    pub const BOTH: [Team; 2] = [Team::One, Team::Two];

    /// 1 or 2, as reported in scores.
    pub const fn index(self) -> u8 {
        match self {
            Team::One => 1,
            Team::Two => 2,
        }
    }

    pub const fn opponent(self) -> Team {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }

    /// Team sitting at `seat`; even seats belong to team one.
    pub const fn of_seat(seat: Seat) -> Team {
        if seat % 2 == 0 {
            Team::One
        } else {
            Team::Two
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "team {}", self.index())
    }
}

/// Points per team, indexed by `Team`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPoints {
    pub team1: u32,
    pub team2: u32,
}

impl TeamPoints {
    pub const fn new(team1: u32, team2: u32) -> Self {
        Self { team1, team2 }
    }

    pub const fn get(&self, team: Team) -> u32 {
        match team {
            Team::One => self.team1,
            Team::Two => self.team2,
        }
    }

    pub fn add(&mut self, team: Team, points: u32) {
        match team {
            Team::One => self.team1 += points,
            Team::Two => self.team2 += points,
        }
    }

    pub fn add_all(&mut self, other: TeamPoints) {
        self.team1 += other.team1;
        self.team2 += other.team2;
    }

    pub const fn max(&self) -> u32 {
        if self.team1 >= self.team2 {
            self.team1
        } else {
            self.team2
        }
    }

    pub const fn as_tuple(&self) -> (u32, u32) {
        (self.team1, self.team2)
    }
}

/// The seated players of a game, in turn order.
#[derive(Debug, Clone)]
pub struct Table {
    players: Vec<Player>,
}

impl Table {
    /// Interleave two teams into seating order.
    ///
    /// Teams must be non-empty, the same size, and every name must be unique.
    pub fn new(team1: Vec<Player>, team2: Vec<Player>) -> Result<Self, DomainError> {
        if team1.is_empty() || team2.is_empty() {
            return Err(DomainError::invalid_teams("teams must not be empty"));
        }
        if team1.len() != team2.len() {
            return Err(DomainError::invalid_teams(format!(
                "teams must have the same size, got {} and {}",
                team1.len(),
                team2.len()
            )));
        }
        if team1.len() * 2 > max_seats() {
            return Err(DomainError::invalid_teams(format!(
                "at most {} players fit one deck",
                max_seats()
            )));
        }

        let mut players = Vec::with_capacity(team1.len() * 2);
        for (a, b) in team1.into_iter().zip(team2) {
            players.push(a);
            players.push(b);
        }
        for (i, p) in players.iter().enumerate() {
            if players[..i].iter().any(|q| q.name() == p.name()) {
                return Err(DomainError::invalid_teams(format!(
                    "duplicate player name: {}",
                    p.name()
                )));
            }
        }
        Ok(Self { players })
    }

    /// Seat `size` players per team named A1..An and B1..Bn.
    pub fn with_generated_names(size: usize) -> Result<Self, DomainError> {
        let team1 = (1..=size).map(|i| Player::new(format!("A{i}"))).collect();
        let team2 = (1..=size).map(|i| Player::new(format!("B{i}"))).collect();
        Self::new(team1, team2)
    }

    pub fn seat_count(&self) -> usize {
        self.players.len()
    }

    pub fn team_size(&self) -> usize {
        self.players.len() / 2
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat]
    }

    pub(crate) fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat]
    }

    pub fn seat_of(&self, name: &str) -> Option<Seat> {
        self.players.iter().position(|p| p.name() == name)
    }

    pub fn team_of(&self, seat: Seat) -> Team {
        Team::of_seat(seat)
    }

    /// Seats on `team`, in seating order.
    pub fn seats_of(&self, team: Team) -> impl Iterator<Item = Seat> + '_ {
        (0..self.seat_count()).filter(move |&s| Team::of_seat(s) == team)
    }

    /// Other seats on the same team as `seat`.
    pub fn teammates(&self, seat: Seat) -> Vec<Seat> {
        self.seats_of(Team::of_seat(seat))
            .filter(|&s| s != seat)
            .collect()
    }

    /// Every seat once, starting at `start`.
    pub fn rotation_from(&self, start: Seat) -> impl Iterator<Item = Seat> + '_ {
        let n = self.seat_count();
        (0..n).map(move |i| (start + i) % n)
    }

    /// First seat after `seat` (in rotation) that belongs to the other team.
    pub fn next_opponent(&self, seat: Seat) -> Seat {
        let team = Team::of_seat(seat);
        self.rotation_from(seat)
            .skip(1)
            .find(|&s| Team::of_seat(s) != team)
            .unwrap_or((seat + 1) % self.seat_count())
    }

    /// Seat right after `seat`.
    pub fn next_seat(&self, seat: Seat) -> Seat {
        (seat + 1) % self.seat_count()
    }

    /// Last seat of `team` in the rotation that starts at `starting_seat`.
    pub fn team_pie(&self, team: Team, starting_seat: Seat) -> Seat {
        self.rotation_from(starting_seat)
            .filter(|&s| Team::of_seat(s) == team)
            .last()
            .unwrap_or(starting_seat)
    }
}
