//! Seeded permutation table shared by every noise field.

use seedforge_core::{Algorithm, Generator, Seed};

/// 512-entry permutation table: a shuffled `0..256` stored twice so that
/// `perm[a + b]` never wraps for `a, b < 256`.
#[derive(Clone, Debug)]
pub(crate) struct PermutationTable {
    perm: [u8; 512],
}

impl PermutationTable {
    /// Shuffles the identity permutation with a generator seeded from `seed`.
    pub(crate) fn new(seed: Seed, algorithm: Algorithm) -> Self {
        let mut rng = Generator::new(seed, algorithm);
        let mut base = [0u8; 256];
        for (i, slot) in base.iter_mut().enumerate() {
            *slot = i as u8;
        }
        rng.shuffle(&mut base);

        let mut perm = [0u8; 512];
        perm[..256].copy_from_slice(&base);
        perm[256..].copy_from_slice(&base);

        tracing::debug!(
            seed = %rng.seed(),
            algorithm = %algorithm,
            "permutation table built"
        );
        Self { perm }
    }

    /// Entry at `index`, wrapped to the table.
    #[inline]
    pub(crate) fn get(&self, index: usize) -> usize {
        usize::from(self.perm[index & 511])
    }
}

/// Lattice cell of an already-floored coordinate, masked to the table.
///
/// The cast saturates beyond the `i64` range, so any finite coordinate maps
/// to a cell without overflow.
#[inline]
pub(crate) fn cell(floor: f64) -> usize {
    ((floor as i64) & 255) as usize
}

/// The cell one step along an axis.
#[inline]
pub(crate) fn next_cell(cell: usize) -> usize {
    (cell + 1) & 255
}
