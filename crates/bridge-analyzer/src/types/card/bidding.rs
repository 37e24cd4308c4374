//! Cards played during the auction.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::display::Record;
use crate::error::TypeError;

/// Denomination of a bid, ordered club < diamond < heart < spade < notrump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strain {
    Club,
    Diamond,
    Heart,
    Spade,
    Notrump,
}

impl Strain {
    pub const ALL: [Strain; 5] = [
        Strain::Club,
        Strain::Diamond,
        Strain::Heart,
        Strain::Spade,
        Strain::Notrump,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Strain::Club => "C",
            Strain::Diamond => "D",
            Strain::Heart => "H",
            Strain::Spade => "S",
            Strain::Notrump => "NT",
        }
    }
}

impl Display for Strain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Number of tricks over six a bid contracts for, always in `1..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MIN: Level = Level(1);
    pub const MAX: Level = Level(7);

    pub fn new(value: u8) -> Result<Self, TypeError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeError::LevelOutOfRange(value))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Level {
    type Error = TypeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A numbered bid. Ordered by strain first, then level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Bid {
    pub strain: Strain,
    pub level: Level,
}

impl Bid {
    pub fn new(strain: Strain, level: Level) -> Self {
        Self { strain, level }
    }
}

impl Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card_bid {{ {}{} }}", self.strain, self.level)
    }
}

macro_rules! marker {
    ($($(#[$meta:meta])* $name:ident => $text:literal),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
            pub struct $name;

            impl Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    Record::new(f, $text).finish()
                }
            }
        )+

        crate::impl_display_hash!($($name),+);
    };
}

marker! {
    /// Double the opponents' last bid.
    Double => "card_double",
    Pass => "card_pass",
    /// Redouble a doubled bid.
    Redouble => "card_redouble",
    /// The stop card shown before a jump bid.
    Stop => "card_stop",
}

/// Any card laid down during the auction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiddingCard {
    Bid(Bid),
    Double(Double),
    Pass(Pass),
    Redouble(Redouble),
    Stop(Stop),
}

impl Display for BiddingCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BiddingCard::Bid(card) => card.fmt(f),
            BiddingCard::Double(card) => card.fmt(f),
            BiddingCard::Pass(card) => card.fmt(f),
            BiddingCard::Redouble(card) => card.fmt(f),
            BiddingCard::Stop(card) => card.fmt(f),
        }
    }
}

impl From<Bid> for BiddingCard {
    fn from(card: Bid) -> Self {
        BiddingCard::Bid(card)
    }
}

impl From<Double> for BiddingCard {
    fn from(card: Double) -> Self {
        BiddingCard::Double(card)
    }
}

impl From<Pass> for BiddingCard {
    fn from(card: Pass) -> Self {
        BiddingCard::Pass(card)
    }
}

impl From<Redouble> for BiddingCard {
    fn from(card: Redouble) -> Self {
        BiddingCard::Redouble(card)
    }
}

impl From<Stop> for BiddingCard {
    fn from(card: Stop) -> Self {
        BiddingCard::Stop(card)
    }
}
