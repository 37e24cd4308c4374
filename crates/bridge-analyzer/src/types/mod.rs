//! Bridge domain model.
//!
//! These are the values the analyzer produces from a recorded game. Every
//! type prints through [`Display`](std::fmt::Display) in a canonical
//! `name { field = value }` form and serializes with serde. Metadata attached
//! to aggregates is free-form and never part of equality or the text form.

pub mod auction;
pub mod card;
pub mod deal;
pub mod game;
pub mod player;
pub mod positioning;
pub mod trick;

pub use auction::Auction;
pub use card::{
    Bid, BiddingCard, Card, Double, Level, Pass, PlayingCard, Rank, Redouble, Stop, Strain, Suit,
};
pub use deal::{Deal, DealUnit};
pub use game::Game;
pub use player::Player;
pub use positioning::{Direction, Phase};
pub use trick::{RawTrick, RawTrickUnit, Trick, TrickUnit};

/// Free-form data attached to an aggregate.
pub type Metadata = serde_json::Value;
