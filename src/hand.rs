use crate::cards::{parse_cards, Card};
use std::collections::HashSet;
use std::str::FromStr;

/// Smallest set that always has a well-defined five-card hand.
pub const MIN_CARDS: usize = 5;

/// Input rejected by the evaluator. These are the only two ways an
/// evaluation can fail.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidInputError {
    #[error("need at least 5 cards to evaluate, got {0}")]
    TooFewCards(usize),
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate cards in hole cards")]
    DuplicateHoleCards,
    #[error("too many board cards: {0}")]
    TooManyBoardCards(usize),
    #[error("duplicate cards on board")]
    DuplicateBoardCards,
    #[error("hole cards overlap with board")]
    Overlap,
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Return the first card that appears twice, if any.
fn first_duplicate(cards: &[Card]) -> Option<Card> {
    let mut seen = HashSet::with_capacity(cards.len());
    cards.iter().copied().find(|c| !seen.insert(*c))
}

/// Validated evaluator input: at least five distinct cards, in caller order.
///
/// ```
/// use poker_eval::cards::parse_cards;
/// use poker_eval::hand::{CardSet, InvalidInputError};
///
/// let set = CardSet::try_new(parse_cards("As Ks Qs Js Ts 2c 3d").unwrap()).unwrap();
/// assert_eq!(set.len(), 7);
///
/// let short = CardSet::try_new(parse_cards("As Ks").unwrap());
/// assert_eq!(short.unwrap_err(), InvalidInputError::TooFewCards(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSet {
    cards: Vec<Card>,
}

impl CardSet {
    pub fn try_new(cards: Vec<Card>) -> Result<Self, InvalidInputError> {
        if cards.len() < MIN_CARDS {
            return Err(InvalidInputError::TooFewCards(cards.len()));
        }
        if let Some(dup) = first_duplicate(&cards) {
            return Err(InvalidInputError::DuplicateCard(dup));
        }
        Ok(Self { cards })
    }

    pub fn from_slice(cards: &[Card]) -> Result<Self, InvalidInputError> {
        Self::try_new(cards.to_vec())
    }

    /// Wrap cards already known to be distinct, such as a subset of a
    /// validated set.
    pub(crate) fn from_distinct(cards: Vec<Card>) -> Self {
        debug_assert!(first_duplicate(&cards).is_none());
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn into_vec(self) -> Vec<Card> {
        self.cards
    }
}

impl TryFrom<Vec<Card>> for CardSet {
    type Error = InvalidInputError;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::try_new(cards)
    }
}

/// A player's two private hole cards.
///
/// ```
/// use poker_eval::cards::{Card, Rank, Suit};
/// use poker_eval::hand::HoleCards;
///
/// let hole = HoleCards::try_new(
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Spades),
/// ).unwrap();
/// assert_eq!(hole.as_array().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCards(Card, Card);

impl HoleCards {
    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        if a == b {
            return Err(HandError::DuplicateHoleCards);
        }
        Ok(Self(a, b))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        if slice.len() != 2 {
            return Err(HandError::HoleCount(slice.len()));
        }
        Self::try_new(slice[0], slice[1])
    }

    pub fn first(&self) -> Card {
        self.0
    }

    pub fn second(&self) -> Card {
        self.1
    }

    pub fn as_array(&self) -> [Card; 2] {
        [self.0, self.1]
    }
}

impl FromStr for HoleCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

/// Community cards shared by every player (up to five).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Build a board without checks; [`validate_holdem`] still runs before
    /// any evaluation.
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > 5 {
            return Err(HandError::TooManyBoardCards(cards.len()));
        }
        if first_duplicate(&cards).is_some() {
            return Err(HandError::DuplicateBoardCards);
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

impl FromStr for Board {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Board::try_new(cards)
    }
}

/// Check that hole cards and board form a consistent Hold'em state.
/// Allows 0..=5 board cards and ensures uniqueness across all cards.
///
/// Hole cards are distinct by construction, so only the board and its
/// overlap with the hole cards are checked here.
pub fn validate_holdem(hole: &HoleCards, board: &Board) -> Result<(), HandError> {
    if board.len() > 5 {
        return Err(HandError::TooManyBoardCards(board.len()));
    }
    let set: HashSet<Card> = board.as_slice().iter().copied().collect();
    if set.len() != board.len() {
        return Err(HandError::DuplicateBoardCards);
    }
    if set.contains(&hole.first()) || set.contains(&hole.second()) {
        return Err(HandError::Overlap);
    }
    Ok(())
}
