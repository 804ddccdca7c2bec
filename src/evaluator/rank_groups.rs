use crate::cards::Rank;

/// Value→count multiset of a card set, grouped and sorted by
/// (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Create RankGroups from a rank count array indexed by rank value (2-14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .map(|rank| (rank, rank_counts[rank.value() as usize]))
            .filter(|&(_, count)| count > 0)
            .collect();

        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// Ranks holding exactly `count` cards, highest first.
    fn with_count(&self, count: u8) -> impl Iterator<Item = Rank> + '_ {
        self.groups.iter().filter(move |(_, c)| *c == count).map(|(r, _)| *r)
    }

    /// Rank of a four-of-a-kind, if present. The highest one wins when a
    /// large set holds several.
    pub fn quad(&self) -> Option<Rank> {
        self.with_count(4).next()
    }

    /// Ranks of every three-of-a-kind, highest first.
    pub fn trips(&self) -> Vec<Rank> {
        self.with_count(3).collect()
    }

    /// Ranks of every pair, highest first.
    pub fn pairs(&self) -> Vec<Rank> {
        self.with_count(2).collect()
    }

    /// Triple and pair ranks of the best full house.
    ///
    /// The triple is the highest rank with at least three cards; the pair is
    /// the highest *other* rank with at least two, so a second triple can
    /// supply the pair.
    pub fn full_house(&self) -> Option<(Rank, Rank)> {
        let triple =
            self.groups.iter().filter(|(_, c)| *c >= 3).map(|(r, _)| *r).max()?;
        let pair = self
            .groups
            .iter()
            .filter(|(r, c)| *c >= 2 && *r != triple)
            .map(|(r, _)| *r)
            .max()?;
        Some((triple, pair))
    }

    /// Largest count of any single rank.
    pub fn max_count(&self) -> u8 {
        self.groups.first().map_or(0, |(_, c)| *c)
    }

    /// Returns the internal groups for debugging/testing.
    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
