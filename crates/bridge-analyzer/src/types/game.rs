use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use super::auction::Auction;
use super::deal::Deal;
use super::player::Player;
use super::positioning::{Direction, Phase};
use super::trick::Trick;
use super::Metadata;
use crate::display::{listed, Record};

/// A full board: who sat where, the auction, the deal and the tricks played
/// so far.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Game {
    pub north: Player,
    pub west: Player,
    pub south: Player,
    pub east: Player,
    pub auction: Auction,
    pub deal: Deal,
    #[serde(default)]
    pub tricks: Vec<Trick>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Game {
    /// The player sitting at `direction`.
    pub fn player(&self, direction: Direction) -> &Player {
        match direction {
            Direction::North => &self.north,
            Direction::West => &self.west,
            Direction::South => &self.south,
            Direction::East => &self.east,
        }
    }

    /// Play starts with the first trick.
    pub fn phase(&self) -> Phase {
        if self.tricks.is_empty() {
            Phase::Bidding
        } else {
            Phase::Card
        }
    }
}

impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.north == other.north
            && self.west == other.west
            && self.south == other.south
            && self.east == other.east
            && self.auction == other.auction
            && self.deal == other.deal
            && self.tricks == other.tricks
    }
}

impl Eq for Game {}

impl Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Record::new(f, "game")
            .field("north", &self.north)
            .field("west", &self.west)
            .field("south", &self.south)
            .field("east", &self.east)
            .field("auction", &self.auction)
            .field("deal", &self.deal)
            .field("tricks", &listed(&self.tricks))
            .finish()
    }
}
