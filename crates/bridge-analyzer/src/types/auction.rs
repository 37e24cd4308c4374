use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use super::card::BiddingCard;
use super::positioning::Direction;
use super::Metadata;
use crate::display::{listed, Record};

/// The bidding sequence, starting with the dealer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Auction {
    pub first_player: Direction,
    pub bidding_cards: Vec<BiddingCard>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Auction {
    pub fn new(first_player: Direction, bidding_cards: Vec<BiddingCard>) -> Self {
        Self {
            first_player,
            bidding_cards,
            metadata: Metadata::Null,
        }
    }
}

impl PartialEq for Auction {
    fn eq(&self, other: &Self) -> bool {
        self.first_player == other.first_player && self.bidding_cards == other.bidding_cards
    }
}

impl Eq for Auction {}

impl Display for Auction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Record::new(f, "auction")
            .field("first_player", &self.first_player)
            .field("bidding_card", &listed(&self.bidding_cards))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::to_string;
    use crate::types::card::{Double, Pass};

    #[test]
    fn test_display() {
        let auction = Auction::new(Direction::East, vec![Double.into(), Pass.into()]);
        let expected = "auction { \
            first_player = east, \
            bidding_card = [ card_double {}, card_pass {} ] \
            }";
        assert_eq!(to_string(&auction), expected);
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(
            to_string(&Auction::default()),
            "auction { first_player = north, bidding_card = [] }"
        );
    }
}
