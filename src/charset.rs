/// Character-set mask type (far cheaper than a HashSet<char> for a fixed
/// 64-symbol alphabet). Bit `i` marks membership of the symbol at alphabet
/// position `i`; the full 64-bit width is meaningful.
pub type CharacterSet = u64;

/// Trait extension providing the classical set operations over masks.
pub trait SetAlgebra {
    /// Members present in both sets.
    fn intersect(self, other: Self) -> Self;

    /// Members present in either set.
    fn union(self, other: Self) -> Self;

    /// Members absent from this set (all 64 bits flip).
    fn complement(self) -> Self;

    /// Members of this set that are not members of `other`.
    fn difference(self, other: Self) -> Self;

    /// Members of exactly one of the two sets.
    fn symmetric_difference(self, other: Self) -> Self;

    /// The number of members in this set.
    fn cardinality(self) -> u32;
}

impl SetAlgebra for CharacterSet {
    #[inline(always)]
    fn intersect(self, other: Self) -> Self {
        self & other
    }

    #[inline(always)]
    fn union(self, other: Self) -> Self {
        self | other
    }

    #[inline(always)]
    fn complement(self) -> Self {
        !self
    }

    #[inline(always)]
    fn difference(self, other: Self) -> Self {
        self & !other
    }

    #[inline(always)]
    fn symmetric_difference(self, other: Self) -> Self {
        self.difference(other).union(other.difference(self))
    }

    #[inline(always)]
    fn cardinality(self) -> u32 {
        self.count_ones()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn random_masks(count: usize) -> Vec<CharacterSet> {
        let mut rng = StdRng::seed_from_u64(0x5e7a16eb);
        (0..count).map(|_| rng.gen()).collect()
    }

    #[test]
    fn test_union_and_intersect_commute() {
        let masks = random_masks(64);
        for &a in &masks {
            for &b in &masks {
                assert_eq!(a.union(b), b.union(a));
                assert_eq!(a.intersect(b), b.intersect(a));
            }
        }
    }

    #[test]
    fn test_complement_is_involutive() {
        for a in random_masks(256) {
            assert_eq!(a.complement().complement(), a);
        }
    }

    #[test]
    fn test_complement_cardinality() {
        for a in random_masks(256) {
            assert_eq!(a.complement().cardinality(), 64 - a.cardinality());
        }
    }

    #[test]
    fn test_self_difference_is_empty() {
        for a in random_masks(256) {
            assert_eq!(a.difference(a), 0);
            assert_eq!(a.symmetric_difference(a), 0);
        }
    }

    #[test]
    fn test_symmetric_difference_commutes() {
        let masks = random_masks(64);
        for &a in &masks {
            for &b in &masks {
                assert_eq!(a.symmetric_difference(b), b.symmetric_difference(a));
            }
        }
    }

    #[test]
    fn test_difference_removes_shared_members() {
        let a: CharacterSet = 0b1111_0000;
        let b: CharacterSet = 0b1010_1010;
        assert_eq!(a.difference(b), 0b0101_0000);
        assert_eq!(b.difference(a), 0b0000_1010);
        assert_eq!(a.symmetric_difference(b), 0b0101_1010);
    }

    #[test]
    fn test_cardinality_counts_every_position() {
        assert_eq!(0_u64.cardinality(), 0);
        assert_eq!(1_u64.cardinality(), 1);
        assert_eq!((1_u64 << 63).cardinality(), 1);
        assert_eq!(u64::MAX.cardinality(), 64);
    }
}
