use crate::cards::Rank;

/// Groups ranks by their frequency in a hand, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Create RankGroups from a rank count array.
    /// The array should be indexed by rank value (2-14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups = Vec::new();

        for rank in Rank::ALL.iter().copied() {
            let count = rank_counts[rank.value() as usize];
            if count > 0 {
                groups.push((rank, count));
            }
        }

        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    fn with_count(&self, n: u8) -> Vec<Rank> {
        // groups are already rank-descending within a count
        self.groups.iter().filter(|(_, count)| *count == n).map(|(rank, _)| *rank).collect()
    }

    /// Ranks held four times, descending.
    pub fn quads(&self) -> Vec<Rank> {
        self.with_count(4)
    }

    /// Ranks held exactly three times, descending.
    pub fn trips(&self) -> Vec<Rank> {
        self.with_count(3)
    }

    /// Ranks held exactly twice, descending.
    pub fn pairs(&self) -> Vec<Rank> {
        self.with_count(2)
    }

    /// Ranks held exactly once, descending.
    pub fn singles(&self) -> Vec<Rank> {
        self.with_count(1)
    }

    /// Highest `n` distinct ranks not listed in `exclude`, descending.
    pub fn kickers(&self, exclude: &[Rank], n: usize) -> Vec<Rank> {
        let mut ranks: Vec<Rank> =
            self.groups.iter().map(|(rank, _)| *rank).filter(|r| !exclude.contains(r)).collect();
        ranks.sort_by(|a, b| b.cmp(a));
        ranks.truncate(n);
        ranks
    }

    /// Highest rank other than `trips` that is held at least twice.
    pub fn full_house_pair(&self, trips: Rank) -> Option<Rank> {
        self.groups
            .iter()
            .filter(|(rank, count)| *rank != trips && *count >= 2)
            .map(|(rank, _)| *rank)
            .max()
    }

    /// One rank held three times and another held at least twice.
    pub fn has_full_house(&self) -> bool {
        self.trips().first().is_some_and(|&t| self.full_house_pair(t).is_some())
    }

    pub fn count(&self, rank: Rank) -> u8 {
        self.groups.iter().find(|(r, _)| *r == rank).map_or(0, |(_, count)| *count)
    }

    /// Distinct ranks present, descending.
    pub fn ranks(&self) -> Vec<Rank> {
        self.kickers(&[], usize::MAX)
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
