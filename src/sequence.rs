use crate::tile::{Tile, TileRange};
use log::trace;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

struct SequenceCache {
    rng: Pcg64,
    values: Vec<u8>,
}

/// Deterministic, memoized tile values addressed by index.
///
/// Every handle cloned from one `TileSequence` shares the same cache and
/// engine, so index `i` yields the same value no matter which game state asks
/// for it or how often. Values are drawn lazily and never regenerated.
#[derive(Clone)]
pub struct TileSequence {
    seed: u64,
    range: TileRange,
    cache: Rc<RefCell<SequenceCache>>,
}

impl TileSequence {
    pub fn new(seed: u64, range: TileRange) -> Self {
        Self {
            seed,
            range,
            cache: Rc::new(RefCell::new(SequenceCache {
                rng: Pcg64::seed_from_u64(seed),
                values: Vec::new(),
            })),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn range(&self) -> TileRange {
        self.range
    }

    /// Number of values drawn from the engine so far.
    pub fn generated(&self) -> usize {
        self.cache.borrow().values.len()
    }

    pub fn value_at(&self, index: usize) -> u8 {
        let mut cache = self.cache.borrow_mut();
        if index >= cache.values.len() {
            let bound = self.range.cardinality();
            let from = cache.values.len();
            while cache.values.len() <= index {
                let value = cache.rng.gen_range(0..bound);
                cache.values.push(value);
            }
            trace!("sequence {} extended {}..={}", self.seed, from, index);
        }
        cache.values[index]
    }

    pub fn tile_at(&self, index: usize) -> Tile {
        let value = self.value_at(index);
        Tile::from_index(value).expect("tile range exceeds Tile")
    }

    /// Whether two handles read from the same cache.
    #[cfg(test)]
    pub fn shares_cache_with(&self, other: &TileSequence) -> bool {
        Rc::ptr_eq(&self.cache, &other.cache)
    }
}

impl fmt::Debug for TileSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TileSequence")
            .field("seed", &self.seed)
            .field("range", &self.range)
            .field("generated", &self.generated())
            .finish()
    }
}
