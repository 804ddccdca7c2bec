//! Hand classification and comparison.
//!
//! [`evaluate`] runs the category detectors strictly from Royal Flush down
//! to High Card and keeps the first match; [`compare`] orders two results by
//! their [`ComparisonKey`].

pub(crate) mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
mod key;
pub(crate) mod rank_groups;
pub(crate) mod straight;
pub(crate) mod suit_groups;

pub use key::ComparisonKey;

use crate::cards::Card;
use crate::hand::{validate_holdem, Board, CardSet, HandError, HoleCards};
pub use crate::hand::InvalidInputError;
use core::cmp::Ordering;
use core::fmt;
use log::{debug, trace};

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    /// Every category, weakest first.
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one evaluation. `key` drives ordering.
///
/// `cards` holds copies of the five input cards that realize `category`,
/// deciding groups first and kickers after, each part highest first.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct EvaluatedHand {
    pub category: Category,
    pub cards: [Card; 5],
    key: ComparisonKey,
}

impl EvaluatedHand {
    fn new(category: Category, cards: [Card; 5]) -> Self {
        Self { category, cards, key: ComparisonKey::new(category, &cards) }
    }

    pub const fn key(&self) -> &ComparisonKey {
        &self.key
    }
}

impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for EvaluatedHand {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for EvaluatedHand {}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.category)?;
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str("]")
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
}

/// Evaluate a set of at least five distinct cards.
///
/// The only failures are too few cards and duplicate cards.
///
/// ```
/// use poker_eval::cards::parse_cards;
/// use poker_eval::evaluator::{evaluate, Category};
///
/// let cards = parse_cards("2s 3s 4s 5s 6s Qh Kh").unwrap();
/// let hand = evaluate(&cards).unwrap();
/// assert_eq!(hand.category, Category::StraightFlush);
/// assert_eq!(hand.key().as_slice(), &[8, 6]);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<EvaluatedHand, InvalidInputError> {
    let set = CardSet::from_slice(cards)?;
    Ok(evaluate_set(&set))
}

/// Evaluate an already validated card set.
pub fn evaluate_set(set: &CardSet) -> EvaluatedHand {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(set.as_slice());

    // Strict precedence: a set that holds a category also holds some lower
    // ones, so the first match is the answer.
    for detector in DETECTORS.iter() {
        if let Some(result) = detector.detect(&analysis) {
            trace!("{} matched on {} cards", result.category, set.len());
            let hand = EvaluatedHand::new(result.category, result.cards);
            debug!("evaluated {hand} key {:?}", hand.key());
            return hand;
        }
    }

    // Unreachable: HighCard matches any validated set
    unreachable!("HighCard detector should always match")
}

/// Reference evaluation: score every five-card subset with the detector
/// pipeline and keep the best.
///
/// Returns the same category and key as [`evaluate`]; it exists to
/// cross-check the direct selection and costs C(n,5) evaluations.
pub fn evaluate_exhaustive(cards: &[Card]) -> Result<EvaluatedHand, InvalidInputError> {
    use combinations::FiveCardCombinations;

    let set = CardSet::from_slice(cards)?;
    let cards = set.as_slice();
    trace!("exhaustive search over {} subsets", combinations::count(cards.len()));

    let mut best: Option<EvaluatedHand> = None;
    for idx in FiveCardCombinations::new(cards.len()) {
        let five = CardSet::from_distinct(idx.iter().map(|&i| cards[i]).collect());
        let eval = evaluate_set(&five);
        if best.as_ref().map_or(true, |b| eval > *b) {
            best = Some(eval);
        }
    }

    Ok(best.unwrap_or_else(|| evaluate_set(&set)))
}

/// Compare two evaluated hands; `Greater` means `a` wins.
///
/// ```
/// use poker_eval::cards::parse_cards;
/// use poker_eval::evaluator::{compare, evaluate};
/// use std::cmp::Ordering;
///
/// let a = evaluate(&parse_cards("7s 7h Kd Tc 4s 2h").unwrap()).unwrap();
/// let b = evaluate(&parse_cards("7d 7c Kh Ts 3s 2d").unwrap()).unwrap();
/// assert_eq!(compare(&a, &b), Ordering::Greater);
/// ```
pub fn compare(a: &EvaluatedHand, b: &EvaluatedHand) -> Ordering {
    a.cmp(b)
}

/// Evaluate a Hold'em hand given hole cards and a board.
/// Validates inputs and evaluates the hole cards with every board card;
/// a board of at least three cards is needed.
///
/// ```
/// use poker_eval::cards::{Card, Rank, Suit};
/// use poker_eval::evaluator::{evaluate_holdem, Category};
/// use poker_eval::hand::{Board, HoleCards};
///
/// let hole = HoleCards::try_new(
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::Ace, Suit::Hearts),
/// ).unwrap();
/// let board = Board::try_new(vec![
///     Card::new(Rank::Queen, Suit::Clubs),
///     Card::new(Rank::Jack, Suit::Diamonds),
///     Card::new(Rank::Nine, Suit::Hearts),
///     Card::new(Rank::Three, Suit::Spades),
///     Card::new(Rank::Two, Suit::Clubs),
/// ]).unwrap();
/// let eval = evaluate_holdem(&hole, &board).unwrap();
/// assert_eq!(eval.category, Category::Pair);
/// ```
pub fn evaluate_holdem(hole: &HoleCards, board: &Board) -> Result<EvaluatedHand, EvalError> {
    validate_holdem(hole, board)?;
    let mut cards = Vec::with_capacity(2 + board.len());
    cards.extend(hole.as_array());
    cards.extend_from_slice(board.as_slice());
    Ok(evaluate(&cards)?)
}

/// Compare two Hold'em hands on a shared board.
///
/// ```
/// use poker_eval::evaluator::compare_holdem;
/// use poker_eval::hand::{Board, HoleCards};
/// use std::cmp::Ordering;
///
/// let board: Board = "Qc Jd 9h 3s 2c".parse().unwrap();
/// let a: HoleCards = "As Ah".parse().unwrap();
/// let b: HoleCards = "Ks Kh".parse().unwrap();
/// assert_eq!(compare_holdem(&a, &b, &board).unwrap(), Ordering::Greater);
/// ```
pub fn compare_holdem(a: &HoleCards, b: &HoleCards, board: &Board) -> Result<Ordering, EvalError> {
    let va = evaluate_holdem(a, board)?;
    let vb = evaluate_holdem(b, board)?;
    Ok(compare(&va, &vb))
}
