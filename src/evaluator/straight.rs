use crate::cards::{Card, Rank};

/// Bit set of the distinct ranks present, bit `n` for rank value `n`.
/// An Ace also sets bit 1 so the wheel (A-2-3-4-5) is an ordinary run.
pub fn rank_mask<'a, I>(cards: I) -> u16
where
    I: IntoIterator<Item = &'a Card>,
{
    cards.into_iter().fold(0u16, |mask, card| {
        let v = card.rank().value();
        let mask = mask | (1 << v);
        if card.rank() == Rank::Ace {
            mask | 0b10
        } else {
            mask
        }
    })
}

/// Top rank of the highest five-rank run in `mask`, if any.
/// The wheel reports Five as its top rank.
pub fn highest_straight(mask: u16) -> Option<Rank> {
    const RUN: u16 = 0b1_1111;
    (5u8..=14)
        .rev()
        .find(|&top| (mask >> (top - 4)) & RUN == RUN)
        .and_then(Rank::from_value)
}

/// The five ranks of a straight topped by `top`, highest first.
/// For the wheel the Ace comes last, since it plays as one.
pub fn straight_ranks(top: Rank) -> [Rank; 5] {
    let v = top.value();
    let at = |offset: u8| match v.saturating_sub(offset) {
        0 | 1 => Rank::Ace,
        n => Rank::from_value(n).unwrap_or(Rank::Ace),
    };
    [at(0), at(1), at(2), at(3), at(4)]
}

/// Pick one card per rank of the straight topped by `top` from
/// rank-descending `cards`.
pub fn straight_cards(cards: &[Card], top: Rank) -> Option<[Card; 5]> {
    let ranks = straight_ranks(top);
    let picked: Vec<Card> = ranks
        .iter()
        .filter_map(|&r| cards.iter().copied().find(|c| c.rank() == r))
        .collect();
    picked.try_into().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn cards(ranks: &[Rank]) -> Vec<Card> {
        let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
        ranks.iter().enumerate().map(|(i, &r)| Card::new(r, suits[i % 4])).collect()
    }

    fn top_of(ranks: &[Rank]) -> Option<Rank> {
        highest_straight(rank_mask(&cards(ranks)))
    }

    #[test]
    fn test_regular_straight() {
        let ranks = [Rank::King, Rank::Queen, Rank::Jack, Rank::Ten, Rank::Nine];
        assert_eq!(top_of(&ranks), Some(Rank::King));
    }

    #[test]
    fn test_ace_high_straight() {
        let ranks = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten];
        assert_eq!(top_of(&ranks), Some(Rank::Ace));
    }

    #[test]
    fn test_wheel() {
        let ranks = [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five];
        assert_eq!(top_of(&ranks), Some(Rank::Five));
    }

    #[test]
    fn six_high_beats_wheel_when_both_present() {
        let ranks = [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six];
        assert_eq!(top_of(&ranks), Some(Rank::Six));
    }

    #[test]
    fn duplicates_collapse_before_run_check() {
        let ranks =
            [Rank::Two, Rank::Three, Rank::Three, Rank::Three, Rank::Four, Rank::Five, Rank::Ace];
        assert_eq!(top_of(&ranks), Some(Rank::Five));
    }

    #[test]
    fn test_not_straight() {
        let ranks = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Nine];
        assert_eq!(top_of(&ranks), None);
        // no wrap-around
        let ranks = [Rank::Queen, Rank::King, Rank::Ace, Rank::Two, Rank::Three];
        assert_eq!(top_of(&ranks), None);
    }

    #[test]
    fn test_gap_in_seven_cards() {
        let ranks =
            [Rank::Two, Rank::Three, Rank::Four, Rank::Six, Rank::Seven, Rank::Eight, Rank::King];
        assert_eq!(top_of(&ranks), None);
    }

    #[test]
    fn wheel_ranks_put_ace_last() {
        assert_eq!(
            straight_ranks(Rank::Five),
            [Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace]
        );
        assert_eq!(
            straight_ranks(Rank::Nine),
            [Rank::Nine, Rank::Eight, Rank::Seven, Rank::Six, Rank::Five]
        );
    }

    #[test]
    fn straight_cards_picks_one_per_rank() {
        let mut xs = cards(&[Rank::Nine, Rank::Eight, Rank::Eight, Rank::Seven, Rank::Six, Rank::Five]);
        xs.sort_by(|a, b| b.cmp(a));
        let picked = straight_cards(&xs, Rank::Nine).unwrap();
        let ranks: Vec<Rank> = picked.iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![Rank::Nine, Rank::Eight, Rank::Seven, Rank::Six, Rank::Five]);
        assert!(straight_cards(&xs, Rank::Ten).is_none());
    }
}
