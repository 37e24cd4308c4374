//! Tricks as read off the table, before the played card is identified.
//!
//! Each seat may show several cards at once (the played card next to the
//! auction cards still lying in front of the player), so a raw unit is a list
//! of any kind of card.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::display::{listed, Record};
use crate::types::card::Card;

/// Every card visible in front of one player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawTrickUnit(pub Vec<Card>);

impl RawTrickUnit {
    pub fn new(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

impl FromIterator<Card> for RawTrickUnit {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for RawTrickUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trick_unit {}", listed(&self.0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RawTrick {
    pub north: RawTrickUnit,
    pub west: RawTrickUnit,
    pub south: RawTrickUnit,
    pub east: RawTrickUnit,
}

impl Display for RawTrick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Record::bracketed(f, "trick")
            .field("north", &self.north)
            .field("west", &self.west)
            .field("south", &self.south)
            .field("east", &self.east)
            .finish()
    }
}
