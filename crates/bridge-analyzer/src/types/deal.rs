//! Hands dealt to the four players.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use super::card::PlayingCard;
use super::Metadata;
use crate::display::{listed, Record};

/// The cards held by one player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DealUnit(pub Vec<PlayingCard>);

impl DealUnit {
    pub fn new(cards: Vec<PlayingCard>) -> Self {
        Self(cards)
    }

    pub fn cards(&self) -> &[PlayingCard] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<PlayingCard> for DealUnit {
    fn from_iter<T: IntoIterator<Item = PlayingCard>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DealUnit {
    type Item = &'a PlayingCard;
    type IntoIter = std::slice::Iter<'a, PlayingCard>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for DealUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "deal_unit {}", listed(&self.0))
    }
}

/// One hand per seat. Metadata is carried along but ignored by equality and
/// printing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Deal {
    pub north: DealUnit,
    pub west: DealUnit,
    pub south: DealUnit,
    pub east: DealUnit,
    #[serde(default)]
    pub metadata: Metadata,
}

impl PartialEq for Deal {
    fn eq(&self, other: &Self) -> bool {
        self.north == other.north
            && self.west == other.west
            && self.south == other.south
            && self.east == other.east
    }
}

impl Eq for Deal {}

impl Display for Deal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Record::new(f, "deal")
            .field("north", &self.north)
            .field("west", &self.west)
            .field("south", &self.south)
            .field("east", &self.east)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::to_string;
    use crate::types::card::{Rank, Suit};

    #[test]
    fn test_deal_unit_display() {
        let unit: DealUnit = Rank::ALL
            .into_iter()
            .map(|rank| PlayingCard::new(Suit::Club, rank))
            .collect();

        let expected = "deal_unit [ \
            card { C2 }, \
            card { C3 }, \
            card { C4 }, \
            card { C5 }, \
            card { C6 }, \
            card { C7 }, \
            card { C8 }, \
            card { C9 }, \
            card { C10 }, \
            card { CJ }, \
            card { CQ }, \
            card { CK }, \
            card { CA } \
            ]";

        assert_eq!(unit.len(), 13);
        assert_eq!(to_string(&unit), expected);
    }

    #[test]
    fn test_deal_unit_display_empty() {
        assert_eq!(to_string(&DealUnit::default()), "deal_unit []");
    }

    #[test]
    fn test_deal_unit_display_single() {
        let unit = DealUnit::new(vec![PlayingCard::new(Suit::Heart, Rank::Nine)]);
        assert_eq!(to_string(&unit), "deal_unit [ card { H9 } ]");
    }

    #[test]
    fn test_deal_equal_to_itself() {
        let deal = Deal::default();
        assert_eq!(deal, deal);
    }

    #[test]
    fn test_deal_equality_ignores_metadata() {
        let plain = Deal::default();
        let tagged = Deal {
            metadata: serde_json::json!({ "board": 7 }),
            ..Deal::default()
        };
        assert_eq!(plain, tagged);

        let other = Deal {
            east: DealUnit::new(vec![PlayingCard::new(Suit::Spade, Rank::Ace)]),
            ..Deal::default()
        };
        assert_ne!(plain, other);
    }

    #[test]
    fn test_deal_display_empty() {
        let expected = "deal { \
            north = deal_unit [], \
            west = deal_unit [], \
            south = deal_unit [], \
            east = deal_unit [] \
            }";
        assert_eq!(to_string(&Deal::default()), expected);
    }

    #[test]
    fn test_deal_json_round_trip() {
        let deal = Deal {
            north: DealUnit::new(vec![PlayingCard::new(Suit::Club, Rank::Two)]),
            metadata: serde_json::json!({ "source": "scan-01" }),
            ..Deal::default()
        };
        let json = serde_json::to_string(&deal).unwrap();
        let parsed: Deal = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, deal);
        assert_eq!(parsed.metadata, deal.metadata);
    }
}
