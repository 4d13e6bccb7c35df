//! # Chunk Lifecycle
//!
//! The universe is partitioned into a uniform grid of square chunks, the
//! unit of on-demand star generation and unloading.
//!
//! ## State Machine
//!
//! Per coordinate: **Unloaded → Generating → Loaded → Unloaded**, where
//! Unloaded means absent from the load table. At most one generation is in
//! flight per coordinate; concurrent callers for the same chunk wait on a
//! condvar and receive the published result. Distinct coordinates generate
//! independently (chunks are independent given the world seed).
//!
//! ## Reproducibility
//!
//! Regenerating an unloaded chunk yields records bit-identical to the first
//! generation; the load table holds no generation state, only results.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Condvar, Mutex};

use crate::star::{StarGenerator, StarRecord};

/// Chunk coordinate (identifies a chunk in the universe grid).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChunkCoord {
    /// X coordinate (in chunks, not world units).
    pub x: i32,
    /// Y coordinate (in chunks, not world units).
    pub y: i32,
}

impl ChunkCoord {
    /// Creates a new chunk coordinate.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Converts a world-space position to the chunk containing it.
    ///
    /// `chunk_size` must be the same positive constant the generator was
    /// built with; floor division keeps negative positions in the right
    /// chunk.
    #[inline]
    #[must_use]
    pub fn from_world_pos(x: f64, y: f64, chunk_size: i32) -> Self {
        let size = f64::from(chunk_size);
        #[allow(clippy::cast_possible_truncation)]
        let cx = (x / size).floor() as i32;
        #[allow(clippy::cast_possible_truncation)]
        let cy = (y / size).floor() as i32;
        Self { x: cx, y: cy }
    }
}

/// Lifecycle state of one chunk in the load table.
#[derive(Clone)]
pub enum ChunkState {
    /// A generation is in flight for this coordinate.
    Generating,
    /// The chunk's stars are materialized.
    Loaded(Arc<Vec<StarRecord>>),
}

/// Counters for observing chunk churn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChunkStats {
    /// Chunks generated since the manager was created.
    pub generated: u64,
    /// Chunks unloaded since the manager was created.
    pub unloaded: u64,
}

/// On-demand chunk loader keyed by chunk coordinate.
///
/// `ensure_loaded` and `unload` are idempotent; see the module docs for the
/// state machine and the serialization guarantee.
pub struct ChunkManager {
    generator: StarGenerator,
    chunks: Mutex<HashMap<ChunkCoord, ChunkState>>,
    loaded_cond: Condvar,
    generated: AtomicU64,
    unloaded: AtomicU64,
}

impl ChunkManager {
    /// Creates a manager with an empty load table.
    #[must_use]
    pub fn new(generator: StarGenerator) -> Self {
        Self {
            generator,
            chunks: Mutex::new(HashMap::new()),
            loaded_cond: Condvar::new(),
            generated: AtomicU64::new(0),
            unloaded: AtomicU64::new(0),
        }
    }

    /// The generator driving this manager.
    #[must_use]
    pub const fn generator(&self) -> &StarGenerator {
        &self.generator
    }

    /// Loads the chunk if needed and returns its stars.
    ///
    /// No-op when already loaded. When another caller is generating the same
    /// coordinate, waits for that generation and returns its result, so each
    /// coordinate is generated at most once per load.
    #[must_use]
    pub fn ensure_loaded(&self, coord: ChunkCoord) -> Arc<Vec<StarRecord>> {
        let mut chunks = self.chunks.lock();
        loop {
            match chunks.get(&coord) {
                Some(ChunkState::Loaded(stars)) => return Arc::clone(stars),
                Some(ChunkState::Generating) => {
                    self.loaded_cond.wait(&mut chunks);
                }
                None => break,
            }
        }
        chunks.insert(coord, ChunkState::Generating);
        drop(chunks);

        // Generation runs outside the lock; other coordinates proceed freely.
        let stars = Arc::new(self.generator.generate_chunk(coord.x, coord.y));
        self.generated.fetch_add(1, Ordering::Relaxed);

        let mut chunks = self.chunks.lock();
        chunks.insert(coord, ChunkState::Loaded(Arc::clone(&stars)));
        drop(chunks);
        self.loaded_cond.notify_all();
        stars
    }

    /// Loads every chunk in the square neighborhood of a world position.
    ///
    /// Loads the `(2*radius + 1)²` chunks centered on the chunk containing
    /// `(x, y)`.
    pub fn ensure_loaded_around(&self, x: f64, y: f64, radius: i32) {
        let center = ChunkCoord::from_world_pos(x, y, self.generator.chunk_size());
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let _ = self.ensure_loaded(ChunkCoord::new(center.x + dx, center.y + dy));
            }
        }
    }

    /// Unloads a chunk, discarding its stars.
    ///
    /// Unloading an absent chunk is a no-op. If a generation is in flight
    /// for the coordinate, waits for it to publish and then discards the
    /// result, so the state machine never skips Loaded.
    pub fn unload(&self, coord: ChunkCoord) {
        let mut chunks = self.chunks.lock();
        loop {
            match chunks.get(&coord) {
                None => return,
                Some(ChunkState::Loaded(_)) => {
                    chunks.remove(&coord);
                    self.unloaded.fetch_add(1, Ordering::Relaxed);
                    return;
                }
                Some(ChunkState::Generating) => {
                    self.loaded_cond.wait(&mut chunks);
                }
            }
        }
    }

    /// Unloads every loaded chunk.
    pub fn unload_all(&self) {
        let coords: Vec<ChunkCoord> = {
            let chunks = self.chunks.lock();
            chunks.keys().copied().collect()
        };
        for coord in coords {
            self.unload(coord);
        }
    }

    /// Whether the chunk is currently loaded.
    #[must_use]
    pub fn is_loaded(&self, coord: ChunkCoord) -> bool {
        matches!(self.chunks.lock().get(&coord), Some(ChunkState::Loaded(_)))
    }

    /// Number of loaded chunks.
    #[must_use]
    pub fn loaded_count(&self) -> usize {
        self.chunks
            .lock()
            .values()
            .filter(|state| matches!(state, ChunkState::Loaded(_)))
            .count()
    }

    /// Generation/unload counters.
    #[must_use]
    pub fn stats(&self) -> ChunkStats {
        ChunkStats {
            generated: self.generated.load(Ordering::Relaxed),
            unloaded: self.unloaded.load(Ordering::Relaxed),
        }
    }
}
