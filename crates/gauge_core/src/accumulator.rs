//! Fixed-capacity retention ring with independent running aggregates
//!
//! The ring keeps the `N` most recent readings in chronological order; the
//! aggregates run over every reading since the last reset and are not bounded
//! by the ring. The two halves never touch each other's state: `clear()` and
//! `reset_avg()` leave the ring alone, `delete_retained()` leaves the
//! aggregates alone.

use std::fmt;

use crate::summary::Summary;

/// Ring-plus-aggregates accumulator over `f32` readings.
///
/// The logical view is chronological: index `N - 1` is always the most recent
/// reading, lower indices progressively older. Only the trailing `stored()`
/// logical slots hold real data; leading slots read as `0.0` until the ring
/// fills. A stale slot is indistinguishable from a genuine zero reading
/// through [`member`](Self::member) — use
/// [`member_filled`](Self::member_filled) when the distinction matters.
///
/// Internally the ring is a cursor over a flat array, so `include()` is O(1)
/// and no element ever moves.
#[derive(Debug, Clone)]
pub struct Accumulator<const N: usize> {
    /// Physical ring storage; logical order is recovered through `cursor`.
    values: [f32; N],
    /// Next physical write position.
    cursor: usize,
    /// Slots holding a real included reading, in `[0, N]`.
    stored: usize,
    /// Readings included since construction or the last full reset.
    count: u32,
    total: f32,
    average: f32,
    max: f32,
    min: f32,
    /// True until the first inclusion seeds both extrema; without this the
    /// extrema would compare against stale zeros after a reset.
    seed_extrema: bool,
}

impl<const N: usize> Accumulator<N> {
    const MIN_CAPACITY: () = assert!(N >= 1, "Accumulator capacity must be at least 1");

    /// Create a fresh accumulator with a zeroed ring and zeroed aggregates.
    ///
    /// Instantiating with `N == 0` fails to compile.
    pub const fn new() -> Self {
        let () = Self::MIN_CAPACITY;
        Self {
            values: [0.0; N],
            cursor: 0,
            stored: 0,
            count: 0,
            total: 0.0,
            average: 0.0,
            max: 0.0,
            min: 0.0,
            seed_extrema: true,
        }
    }

    /// Re-zero the physical buffer without touching anything else.
    ///
    /// Idempotent. `stored()` and the aggregates are deliberately left alone;
    /// callers that want the stored count reset use
    /// [`delete_retained`](Self::delete_retained).
    pub fn begin(&mut self) {
        self.values = [0.0; N];
    }

    /// Feed one new reading into the accumulator.
    ///
    /// Updates the running aggregates, then appends the reading as the newest
    /// ring entry, overwriting the oldest once the ring is full. Any `f32` is
    /// accepted, including non-finite values; no validation is performed.
    pub fn include(&mut self, value: f32) {
        self.count += 1;
        self.total += value;
        if self.seed_extrema {
            self.max = value;
            self.min = value;
            self.seed_extrema = false;
        } else {
            if value > self.max {
                self.max = value;
            }
            if value < self.min {
                self.min = value;
            }
        }
        self.average = self.total / self.count as f32;

        self.values[self.cursor] = value;
        self.cursor = (self.cursor + 1) % N;
        if self.stored < N {
            self.stored += 1;
        }
    }

    /// Reading at a logical slot, oldest (`0`) to newest (`N - 1`).
    ///
    /// Out-of-range indices clamp silently to the nearest valid slot; there
    /// is no error signal. Slots not yet filled read as `0.0` and cannot be
    /// told apart from a real zero reading.
    pub fn member(&self, index: isize) -> f32 {
        self.values[self.physical(Self::clamp_index(index))]
    }

    /// Whether the (clamped) logical slot holds a real included reading.
    pub fn member_filled(&self, index: isize) -> bool {
        Self::clamp_index(index) >= N - self.stored
    }

    /// Most recent reading, or `0.0` when nothing has been stored.
    pub fn current(&self) -> f32 {
        self.member(N as isize - 1)
    }

    /// Size of the retention ring.
    pub fn capacity(&self) -> usize {
        N
    }

    /// Number of slots holding a real included reading.
    pub fn stored(&self) -> usize {
        self.stored
    }

    /// Readings included since construction or the last full reset.
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn total(&self) -> f32 {
        self.total
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    /// Running average, `0.0` while no readings have been included.
    pub fn average(&self) -> f32 {
        self.average
    }

    /// Reset every aggregate (count, total, average, extrema) so the next
    /// reading restarts accumulation. The ring is untouched; use
    /// [`delete_retained`](Self::delete_retained) to discard history.
    pub fn clear(&mut self) {
        self.total = 0.0;
        self.average = 0.0;
        self.count = 0;
        self.max = 0.0;
        self.min = 0.0;
        self.seed_extrema = true;
    }

    /// Reset only the averaging state (count, total, average), leaving the
    /// extrema running. Use this to start a new sampling interval while
    /// keeping the long-term observed min/max.
    pub fn reset_avg(&mut self) {
        self.total = 0.0;
        self.average = 0.0;
        self.count = 0;
    }

    /// Discard all retained readings and zero the stored count.
    ///
    /// Kept separate from [`clear`](Self::clear) and
    /// [`reset_avg`](Self::reset_avg) so the application decides when to
    /// abandon history that might be used independently of the aggregates,
    /// e.g. for graphing.
    pub fn delete_retained(&mut self) {
        self.values = [0.0; N];
        self.cursor = 0;
        self.stored = 0;
    }

    /// Point-in-time copy of the aggregate state.
    pub fn summary(&self) -> Summary {
        Summary {
            count: self.count,
            total: self.total,
            average: self.average,
            min: self.min,
            max: self.max,
        }
    }

    /// Borrowed view of the retained readings, rendering as
    /// `[<stored> of <capacity>]:(<oldest>,...,<newest>)`.
    pub fn retained(&self) -> Retained<'_, N> {
        Retained(self)
    }

    /// Write the retained-readings line to stdout. Mutates nothing.
    pub fn print_retained(&self) {
        println!("{}", self.retained());
    }

    fn clamp_index(index: isize) -> usize {
        if index < 0 {
            0
        } else if index as usize >= N {
            N - 1
        } else {
            index as usize
        }
    }

    fn physical(&self, logical: usize) -> usize {
        (self.cursor + logical) % N
    }
}

impl<const N: usize> Default for Accumulator<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Display adapter for the retained readings.
///
/// Renders `[<stored> of <capacity>]:(<v1>,<v2>,...,<vk>)` with the real
/// readings oldest-to-newest at two decimal places, or `[0 of <capacity>]:()`
/// when nothing is stored.
pub struct Retained<'a, const N: usize>(&'a Accumulator<N>);

impl<const N: usize> fmt::Display for Retained<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stored = self.0.stored();
        write!(f, "[{} of {}]:(", stored, N)?;
        for i in 0..stored {
            if i != 0 {
                f.write_str(",")?;
            }
            write!(f, "{:.2}", self.0.member((N - stored + i) as isize))?;
        }
        f.write_str(")")
    }
}
