//! Utility functions for the tictree crate

use rand::{Rng, prelude::IndexedRandom};

use crate::tictactoe::Player;

/// Check whether every element equals its neighbour.
///
/// Empty and single-element slices are uniform.
///
/// # Examples
///
/// ```
/// use tictree::utils::is_uniform;
///
/// assert!(is_uniform(&[1, 1, 1]));
/// assert!(!is_uniform(&[1, 0, 1]));
/// assert!(is_uniform::<i32>(&[]));
/// ```
pub fn is_uniform<T: PartialEq>(items: &[T]) -> bool {
    items.windows(2).all(|pair| pair[0] == pair[1])
}

/// Pick a mark uniformly at random from the given source.
///
/// The generator is always injected so callers stay reproducible with a
/// seeded `StdRng`.
pub fn random_mark<R: Rng + ?Sized>(rng: &mut R) -> Player {
    const MARKS: [Player; 2] = [Player::O, Player::X];
    *MARKS.choose(rng).unwrap_or(&Player::O)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_is_uniform_short_slices() {
        assert!(is_uniform::<u8>(&[]));
        assert!(is_uniform(&['x']));
    }

    #[test]
    fn test_is_uniform_checks_every_pair() {
        assert!(is_uniform(&[0, 0, 0, 0]));
        assert!(!is_uniform(&[0, 0, 0, 1]));
        assert!(!is_uniform(&[1, 0, 0, 0]));
    }

    #[test]
    fn test_random_mark_is_reproducible() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let first: Vec<_> = (0..16).map(|_| random_mark(&mut a)).collect();
        let second: Vec<_> = (0..16).map(|_| random_mark(&mut b)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_mark_produces_both_players() {
        let mut rng = StdRng::seed_from_u64(42);
        let marks: Vec<_> = (0..64).map(|_| random_mark(&mut rng)).collect();
        assert!(marks.contains(&Player::O));
        assert!(marks.contains(&Player::X));
    }
}
