//! Dice-roll frequency simulation.

use crate::domain::model::DiceTable;
use crate::domain::ports::RandomSource;

pub const DIE_FACES: i64 = 6;
pub const MIN_SUM: u8 = 2;
pub const MAX_SUM: u8 = 12;

/// Rolls two six-sided dice `n_rolls` times and counts each sum.
///
/// Each trial draws two independent values from `rng` in `1..=6`. The
/// returned table only holds sums that occurred, and its [`DiceTable::total`]
/// equals `n_rolls`. A zero or negative `n_rolls` yields an empty table
/// without touching `rng`.
///
/// # Examples
/// ```
/// use numkit::adapters::random::SeededRandom;
/// use numkit::core::simulation::simulate_dice_rolls;
/// let mut rng = SeededRandom::new(42);
/// let table = simulate_dice_rolls(1000, &mut rng);
/// assert_eq!(table.total(), 1000);
/// ```
pub fn simulate_dice_rolls<R: RandomSource + ?Sized>(n_rolls: i64, rng: &mut R) -> DiceTable {
    let mut table = DiceTable::new();
    if n_rolls <= 0 {
        return table;
    }

    for _ in 0..n_rolls {
        let first = rng.uniform_inclusive(1, DIE_FACES);
        let second = rng.uniform_inclusive(1, DIE_FACES);
        // Both draws are in 1..=6, so the sum always fits in 2..=12.
        table.record((first + second) as u8);
    }

    tracing::debug!(n_rolls, distinct_sums = table.len(), "dice simulation finished");
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays a fixed sequence of die faces.
    struct ScriptedRolls {
        faces: VecDeque<i64>,
        draws: usize,
    }

    impl ScriptedRolls {
        fn new(faces: &[i64]) -> Self {
            Self {
                faces: faces.iter().copied().collect(),
                draws: 0,
            }
        }
    }

    impl RandomSource for ScriptedRolls {
        fn uniform_inclusive(&mut self, lo: i64, hi: i64) -> i64 {
            assert_eq!((lo, hi), (1, DIE_FACES));
            self.draws += 1;
            self.faces.pop_front().expect("script exhausted")
        }
    }

    #[test]
    fn test_scripted_rolls_are_summed_pairwise() {
        let mut rng = ScriptedRolls::new(&[1, 1, 6, 6, 3, 4, 2, 5]);
        let table = simulate_dice_rolls(4, &mut rng);

        assert_eq!(table.count(2), 1);
        assert_eq!(table.count(12), 1);
        assert_eq!(table.count(7), 2);
        assert_eq!(table.total(), 4);
        assert_eq!(rng.draws, 8);
    }

    #[test]
    fn test_zero_count_sums_are_omitted() {
        let mut rng = ScriptedRolls::new(&[3, 4, 3, 4]);
        let table = simulate_dice_rolls(2, &mut rng);

        assert_eq!(table.len(), 1);
        assert_eq!(table.iter().collect::<Vec<_>>(), vec![(7, 2)]);
    }

    #[test]
    fn test_non_positive_rolls_give_empty_table() {
        let mut rng = ScriptedRolls::new(&[]);
        assert!(simulate_dice_rolls(0, &mut rng).is_empty());
        assert!(simulate_dice_rolls(-5, &mut rng).is_empty());
        assert_eq!(rng.draws, 0);
    }
}
