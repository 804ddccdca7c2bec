use super::hand_analysis::HandAnalysis;
use super::straight::{highest_straight, rank_mask, straight_cards};
use super::Category;
use crate::cards::{Card, Rank};

/// A category proven present in a card set, with the five cards that make it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryResult {
    pub category: Category,
    pub cards: [Card; 5],
}

impl CategoryResult {
    fn new(category: Category, cards: [Card; 5]) -> Self {
        Self { category, cards }
    }
}

/// Strategy pattern: each detector proves its own category from the shared
/// analysis and picks the cards that realize it.
///
/// Detectors answer "is this category present", not "is it the best one";
/// precedence is the selector's job.
pub trait CategoryDetector: Sync {
    fn category(&self) -> Category;
    fn detect(&self, analysis: &HandAnalysis) -> Option<CategoryResult>;
}

/// Highest straight flush across every suit holding five or more cards.
fn best_straight_flush(analysis: &HandAnalysis) -> Option<(Rank, [Card; 5])> {
    analysis
        .suit_groups
        .flush_groups()
        .filter_map(|(_, cards)| {
            let top = highest_straight(rank_mask(cards))?;
            Some((top, straight_cards(cards, top)?))
        })
        .max_by_key(|(top, _)| *top)
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Royal Flush: Ace-high straight flush
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn category(&self) -> Category {
        Category::RoyalFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<CategoryResult> {
        let (top, cards) = best_straight_flush(analysis)?;
        (top == Rank::Ace).then(|| CategoryResult::new(self.category(), cards))
    }
}

/// Straight Flush: five consecutive ranks in one suit, wheel included
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<CategoryResult> {
        let (_, cards) = best_straight_flush(analysis)?;
        Some(CategoryResult::new(self.category(), cards))
    }
}

/// Four of a Kind: four cards of one rank plus the best kicker
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<CategoryResult> {
        let quad = analysis.rank_groups.quad()?;
        let cards = analysis.with_kickers(&[(quad, 4)])?;
        Some(CategoryResult::new(self.category(), cards))
    }
}

/// Full House: highest triple plus the highest other rank holding two
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<CategoryResult> {
        let (trips, pair) = analysis.rank_groups.full_house()?;
        let cards = analysis.with_kickers(&[(trips, 3), (pair, 2)])?;
        Some(CategoryResult::new(self.category(), cards))
    }
}

/// Flush: the five highest cards of a suit holding five or more
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<CategoryResult> {
        let cards = analysis
            .suit_groups
            .flush_groups()
            .filter_map(|(_, cards)| <[Card; 5]>::try_from(&cards[..5]).ok())
            .max_by_key(|five| five.map(|c| c.rank()))?;
        Some(CategoryResult::new(self.category(), cards))
    }
}

/// Straight: five consecutive distinct ranks, wheel included
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<CategoryResult> {
        let top = highest_straight(rank_mask(&analysis.sorted_cards))?;
        let cards = straight_cards(&analysis.sorted_cards, top)?;
        Some(CategoryResult::new(self.category(), cards))
    }
}

/// Three of a Kind: a triple plus the two best kickers
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<CategoryResult> {
        let trips = *analysis.rank_groups.trips().first()?;
        let cards = analysis.with_kickers(&[(trips, 3)])?;
        Some(CategoryResult::new(self.category(), cards))
    }
}

/// Two Pair: the two highest pairs plus the best remaining card
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<CategoryResult> {
        let pairs = analysis.rank_groups.pairs();
        let (&high, &low) = (pairs.first()?, pairs.get(1)?);
        let cards = analysis.with_kickers(&[(high, 2), (low, 2)])?;
        Some(CategoryResult::new(self.category(), cards))
    }
}

/// Pair: two cards of one rank plus the three best kickers
pub struct PairDetector;

impl CategoryDetector for PairDetector {
    fn category(&self) -> Category {
        Category::Pair
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<CategoryResult> {
        let pair = *analysis.rank_groups.pairs().first()?;
        let cards = analysis.with_kickers(&[(pair, 2)])?;
        Some(CategoryResult::new(self.category(), cards))
    }
}

/// High Card: the five highest cards; matches any set of five or more
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<CategoryResult> {
        let cards = analysis.with_kickers(&[])?;
        Some(CategoryResult::new(self.category(), cards))
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &PairDetector,
    &HighCardDetector,
];
