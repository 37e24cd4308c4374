//! Cards: either a bidding card from the auction or a playing card.

pub mod bidding;
pub mod playing;

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

pub use bidding::{Bid, BiddingCard, Double, Level, Pass, Redouble, Stop, Strain};
pub use playing::{PlayingCard, Rank, Suit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Card {
    Bidding(BiddingCard),
    Playing(PlayingCard),
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Bidding(card) => card.fmt(f),
            Card::Playing(card) => card.fmt(f),
        }
    }
}

impl From<PlayingCard> for Card {
    fn from(card: PlayingCard) -> Self {
        Card::Playing(card)
    }
}

impl From<BiddingCard> for Card {
    fn from(card: BiddingCard) -> Self {
        Card::Bidding(card)
    }
}

macro_rules! from_bidding {
    ($($card:ty),+) => {
        $(
            impl From<$card> for Card {
                fn from(card: $card) -> Self {
                    Card::Bidding(card.into())
                }
            }
        )+
    };
}

from_bidding!(Bid, Double, Pass, Redouble, Stop);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::to_string;

    #[test]
    fn test_card_display_delegates() {
        let bid = Bid::new(Strain::Heart, Level::MAX);
        assert_eq!(to_string(&Card::from(bid)), "card_bid { H7 }");
        assert_eq!(to_string(&Card::from(Stop)), "card_stop {}");
        assert_eq!(
            to_string(&Card::from(PlayingCard::new(Suit::Diamond, Rank::King))),
            "card { DK }"
        );
    }

    #[test]
    fn test_variants_never_equal() {
        assert_ne!(Card::from(Pass), Card::from(Double));
        assert_ne!(
            Card::from(PlayingCard::new(Suit::Club, Rank::Two)),
            Card::from(Bid::new(Strain::Club, Level::MIN))
        );
    }
}
