//! Tricks of the card play phase.

pub mod raw;

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use super::card::PlayingCard;
use super::positioning::Direction;
use super::Metadata;
use crate::display::{listed, Record};
use crate::error::TypeError;

pub use raw::{RawTrick, RawTrickUnit};

/// A card and the seat that played it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrickUnit {
    pub card: PlayingCard,
    pub direction: Direction,
}

impl TrickUnit {
    pub fn new(card: PlayingCard, direction: Direction) -> Self {
        Self { card, direction }
    }
}

impl Display for TrickUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Record::new(f, "trick_unit")
            .field("card", &self.card)
            .field("direction", &self.direction)
            .finish()
    }
}

/// Cards of one trick in play order, at most one per seat.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "TrickData")]
pub struct Trick {
    units: Vec<TrickUnit>,
    #[serde(default)]
    pub metadata: Metadata,
}

#[derive(Deserialize)]
struct TrickData {
    units: Vec<TrickUnit>,
    #[serde(default)]
    metadata: Metadata,
}

impl TryFrom<TrickData> for Trick {
    type Error = TypeError;

    fn try_from(data: TrickData) -> Result<Self, TypeError> {
        let mut trick = Self::new(data.units)?;
        trick.metadata = data.metadata;
        Ok(trick)
    }
}

impl Trick {
    /// Most cards a single trick can hold.
    pub const MAX_UNITS: usize = 4;

    /// Build a trick, rejecting more than [`Trick::MAX_UNITS`] cards.
    pub fn new(units: Vec<TrickUnit>) -> Result<Self, TypeError> {
        if units.len() > Self::MAX_UNITS {
            return Err(TypeError::TooManyUnits(units.len()));
        }
        Ok(Self {
            units,
            metadata: Metadata::Null,
        })
    }

    /// Add the next card played to this trick.
    pub fn push(&mut self, unit: TrickUnit) -> Result<(), TypeError> {
        if self.units.len() == Self::MAX_UNITS {
            return Err(TypeError::TooManyUnits(self.units.len() + 1));
        }
        self.units.push(unit);
        Ok(())
    }

    pub fn units(&self) -> &[TrickUnit] {
        &self.units
    }

    /// True once every seat has played.
    pub fn is_complete(&self) -> bool {
        self.units.len() == Self::MAX_UNITS
    }

    /// Seat that played first, if any card was played.
    pub fn leader(&self) -> Option<Direction> {
        self.units.first().map(|unit| unit.direction)
    }
}

impl PartialEq for Trick {
    fn eq(&self, other: &Self) -> bool {
        self.units == other.units
    }
}

impl Eq for Trick {}

impl Display for Trick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Record::new(f, "trick")
            .field("units", &listed(&self.units))
            .finish()
    }
}
