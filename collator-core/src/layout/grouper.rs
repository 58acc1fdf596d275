//! Equivalence grouping of normalized readings.

use collator_types::Ordinal;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Witnesses sharing one normalized reading at a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquivalenceGroup {
    reading: String,
    members: SmallVec<[Ordinal; 8]>,
}

impl EquivalenceGroup {
    fn open(reading: &str, first: Ordinal) -> Self {
        let mut members = SmallVec::new();
        members.push(first);
        Self {
            reading: reading.to_owned(),
            members,
        }
    }

    /// Normalized reading shared by every member.
    #[inline(always)]
    pub fn reading(&self) -> &str {
        &self.reading
    }

    /// Member ordinals, ascending.
    #[inline(always)]
    pub fn members(&self) -> &[Ordinal] {
        &self.members
    }

    /// Lowest member ordinal; the group was opened by this witness.
    #[inline(always)]
    pub fn leader(&self) -> Ordinal {
        self.members[0]
    }

    /// Returns `true` if the shared reading is a gap.
    #[inline(always)]
    pub fn is_gap(&self) -> bool {
        self.reading.is_empty()
    }

    /// Number of members.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`; a group is opened with its first member.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Partitions witnesses by exact equality of their normalized readings.
///
/// `readings[o]` is the normalized reading of witness ordinal `o`. Groups are
/// returned in the order they were opened, which is the ascending order of
/// their lowest member; members within a group are ascending too. The map is
/// only used for lookup, so the result never depends on hash order.
pub fn group_readings<S: AsRef<str>>(readings: &[S]) -> Vec<EquivalenceGroup> {
    let mut groups: Vec<EquivalenceGroup> = Vec::new();
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();

    for (ordinal, reading) in readings.iter().enumerate() {
        let reading = reading.as_ref();
        match index.get(reading) {
            Some(&g) => groups[g].members.push(ordinal),
            None => {
                index.insert(reading, groups.len());
                groups.push(EquivalenceGroup::open(reading, ordinal));
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(groups: &[EquivalenceGroup]) -> Vec<Vec<Ordinal>> {
        groups.iter().map(|g| g.members().to_vec()).collect()
    }

    #[test]
    fn two_pairs() {
        let groups = group_readings(&["a black cat", "a black cat", "a striped cat", "a striped cat"]);
        assert_eq!(members(&groups), vec![vec![0, 1], vec![2, 3]]);
        assert_eq!(groups[0].reading(), "a black cat");
        assert_eq!(groups[1].reading(), "a striped cat");
    }

    #[test]
    fn interleaved_readings_keep_discovery_order() {
        let groups = group_readings(&["x", "y", "x", "z", "y"]);
        assert_eq!(members(&groups), vec![vec![0, 2], vec![1, 4], vec![3]]);
        let leaders: Vec<_> = groups.iter().map(EquivalenceGroup::leader).collect();
        assert_eq!(leaders, vec![0, 1, 3]);
    }

    #[test]
    fn all_agree_is_one_group() {
        let groups = group_readings(&["same", "same", "same"]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 3);
    }

    #[test]
    fn empty_readings_group_together() {
        let groups = group_readings(&["", "cat", ""]);
        assert_eq!(members(&groups), vec![vec![0, 2], vec![1]]);
        assert!(groups[0].is_gap());
        assert!(!groups[1].is_gap());
    }

    #[test]
    fn single_witness() {
        let groups = group_readings(&["solo"]);
        assert_eq!(members(&groups), vec![vec![0]]);
    }

    #[test]
    fn partition_covers_every_ordinal_once() {
        let readings = ["a", "b", "a", "", "c", "b", "", "a", "d"];
        let groups = group_readings(&readings);

        let mut seen: Vec<Ordinal> = groups.iter().flat_map(|g| g.members().iter().copied()).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..readings.len()).collect::<Vec<_>>());

        for g in &groups {
            assert!(g.members().iter().all(|&o| readings[o] == g.reading()));
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let readings = ["q", "r", "q", "s", "r", "t", "q"];
        let first = group_readings(&readings);
        for _ in 0..10 {
            assert_eq!(group_readings(&readings), first);
        }
    }
}
