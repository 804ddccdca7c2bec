use super::straight::{highest_straight, rank_mask};
use super::Category;
use crate::cards::{Card, Rank};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

/// Longest key: category plus five kicker ranks (Flush, High Card).
const MAX_LEN: usize = 6;

/// Ordered tie-break key of an evaluated hand.
///
/// Element 0 is the category ordinal, followed by the rank values of the
/// deciding groups by significance and then the kickers, highest first.
/// Keys compare lexicographically; higher wins.
#[derive(Clone, Copy)]
pub struct ComparisonKey {
    values: [u8; MAX_LEN],
    len: u8,
}

impl ComparisonKey {
    /// Build the key for `category` realized by `cards`.
    pub(crate) fn new(category: Category, cards: &[Card; 5]) -> Self {
        let mut key = Self { values: [0; MAX_LEN], len: 0 };
        key.push(category.ordinal());

        match category {
            Category::RoyalFlush | Category::StraightFlush | Category::Straight => {
                // The wheel's Ace plays low, so the run's top card decides.
                let top = highest_straight(rank_mask(cards)).unwrap_or(Rank::Five);
                key.push(top.value());
            }
            _ => {
                // Group the five ranks by (count desc, rank desc): quads before
                // kicker, trips before pair, pairs high to low, then kickers.
                let mut counts = [0u8; 15];
                for c in cards {
                    counts[c.rank().value() as usize] += 1;
                }
                let mut groups: Vec<(u8, Rank)> = Rank::ALL
                    .iter()
                    .filter(|r| counts[r.value() as usize] > 0)
                    .map(|&r| (counts[r.value() as usize], r))
                    .collect();
                groups.sort_by(|a, b| b.cmp(a));
                for (_, r) in groups {
                    key.push(r.value());
                }
            }
        }
        key
    }

    fn push(&mut self, v: u8) {
        self.values[self.len as usize] = v;
        self.len += 1;
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.values[..self.len as usize]
    }

    /// Category ordinal carried in the first element.
    pub fn category_ordinal(&self) -> u8 {
        self.values[0]
    }

    /// Pack the key into a single comparable integer for caching.
    /// Order of packed values matches the order of keys.
    pub const fn packed(&self) -> u64 {
        let mut v: u64 = 0;
        let mut i = 0;
        while i < MAX_LEN {
            v = (v << 8) | self.values[i] as u64;
            i += 1;
        }
        v
    }
}

impl PartialEq for ComparisonKey {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for ComparisonKey {}

impl Hash for ComparisonKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl Ord for ComparisonKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl PartialOrd for ComparisonKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for ComparisonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn key(category: Category, s: &str) -> Vec<u8> {
        let cards: [Card; 5] = parse_cards(s).unwrap().try_into().unwrap();
        ComparisonKey::new(category, &cards).as_slice().to_vec()
    }

    #[test]
    fn keys_per_category() {
        assert_eq!(key(Category::RoyalFlush, "As Ks Qs Js Ts"), vec![9, 14]);
        assert_eq!(key(Category::StraightFlush, "6s 5s 4s 3s 2s"), vec![8, 6]);
        assert_eq!(key(Category::FourOfAKind, "2s 2h 2d 2c Ks"), vec![7, 2, 13]);
        assert_eq!(key(Category::FullHouse, "2s 2h 2d 3s 3h"), vec![6, 2, 3]);
        assert_eq!(key(Category::Flush, "Ad Jd 9d 7d 5d"), vec![5, 14, 11, 9, 7, 5]);
        assert_eq!(key(Category::Straight, "9s 8h 7d 6c 5s"), vec![4, 9]);
        assert_eq!(key(Category::ThreeOfAKind, "Js Jh Jd 9c 7s"), vec![3, 11, 9, 7]);
        assert_eq!(key(Category::TwoPair, "As Ah 9d 9c 4s"), vec![2, 14, 9, 4]);
        assert_eq!(key(Category::Pair, "7s 7h Kd Tc 4s"), vec![1, 7, 13, 10, 4]);
        assert_eq!(key(Category::HighCard, "As Kh Jd 9c 7s"), vec![0, 14, 13, 11, 9, 7]);
    }

    #[test]
    fn wheel_key_uses_five() {
        assert_eq!(key(Category::Straight, "5s 4h 3d 2c Ah"), vec![4, 5]);
        assert_eq!(key(Category::StraightFlush, "5d 4d 3d 2d Ad"), vec![8, 5]);
    }

    #[test]
    fn packed_preserves_order() {
        let cards: [Card; 5] = parse_cards("7s 7h Kd Tc 4s").unwrap().try_into().unwrap();
        let lower: [Card; 5] = parse_cards("7d 7c Kh Ts 3s").unwrap().try_into().unwrap();
        let a = ComparisonKey::new(Category::Pair, &cards);
        let b = ComparisonKey::new(Category::Pair, &lower);
        assert!(a > b);
        assert!(a.packed() > b.packed());
        assert_eq!(a.category_ordinal(), 1);
    }
}
