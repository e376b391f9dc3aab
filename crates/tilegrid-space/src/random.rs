//! Uniform random cell selection.

use crate::grid::Grid;
use rand::Rng;

impl<T> Grid<T> {
    /// The occupant of a uniformly chosen coordinate, using the thread-local
    /// RNG. `None` if the chosen slot is empty.
    pub fn random_cell(&self) -> Option<&T> {
        self.random_cell_with(&mut rand::rng())
    }

    /// The occupant of a uniformly chosen coordinate drawn from `rng`.
    ///
    /// Picks `x` then `y`, each uniformly over its axis.
    pub fn random_cell_with<R: Rng>(&self, rng: &mut R) -> Option<&T> {
        let x = rng.random_range(0..self.width() as i32);
        let y = rng.random_range(0..self.height() as i32);
        self.get_optional(x, y)
    }

    /// A uniformly chosen occupant satisfying `predicate`, using the
    /// thread-local RNG. `None` if no occupant matches.
    pub fn random_cell_matching(&self, predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        self.random_cell_matching_with(&mut rand::rng(), predicate)
    }

    /// A uniformly chosen occupant satisfying `predicate`, drawn from `rng`.
    ///
    /// Collects every match before sampling, so each call is
    /// O(width * height). Empty slots never match. Does not consume
    /// randomness when nothing matches.
    pub fn random_cell_matching_with<R: Rng>(
        &self,
        rng: &mut R,
        mut predicate: impl FnMut(&T) -> bool,
    ) -> Option<&T> {
        let matches: Vec<&T> = self.occupied().filter(|c| predicate(*c)).collect();
        if matches.is_empty() {
            return None;
        }
        let i = rng.random_range(0..matches.len());
        Some(matches[i])
    }
}
