//! Display-name allocation with intentional collisions.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Allocates names for one batch, occasionally reusing an earlier mint to
/// model real-world duplicate-name collisions.
///
/// Reused names are always drawn from the minted pool, never synthesized; the
/// pool grows only through the fresh-name path. The first record can never
/// duplicate because the pool starts empty.
#[derive(Debug, Default)]
pub struct NameAllocator {
    minted: Vec<String>,
}

impl NameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name for the record at `index`, with `duplicate_chance` odds of
    /// reusing a previously minted name instead of minting `Human_{id}`.
    pub fn next(
        &mut self,
        index: i64,
        start_id: i64,
        duplicate_chance: f64,
        rng: &mut impl Rng,
    ) -> String {
        if !self.minted.is_empty() && rng.random_bool(duplicate_chance.clamp(0.0, 1.0)) {
            if let Some(existing) = self.minted.choose(rng) {
                return existing.clone();
            }
        }

        let name = format!("Human_{}", index + start_id);
        self.minted.push(name.clone());
        name
    }

    /// Names minted through the fresh-name path, in mint order.
    pub fn minted(&self) -> &[String] {
        &self.minted
    }
}
