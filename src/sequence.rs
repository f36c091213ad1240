//! Hash-seeded pseudo-random sequences
//!
//! Some styles need more independent values than a single 32-bit hash can
//! supply. [`Sequence`] stretches the hash into an unbounded, reproducible
//! stream of floats in `[0, 1)` using the `fract(sin(h) * 10000)` construction.
//!
//! A sequence is owned by exactly one draw call and never shared, so the
//! order of draws inside a style fully determines its output.

/// Deterministic stream of floats in `[0, 1)` seeded from a hash.
///
/// Not suitable for anything where unpredictability matters.
///
/// # Examples
///
/// ```
/// use seedavatar::sequence::Sequence;
///
/// let mut a = Sequence::new(42);
/// let mut b = Sequence::new(42);
/// for _ in 0..10 {
///     let x = a.next_f64();
///     assert_eq!(x, b.next_f64());
///     assert!((0.0..1.0).contains(&x));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Sequence {
    state: f64,
}

impl Sequence {
    /// Start a new sequence from `seed`.
    ///
    /// Seed `0` is a fixed point of `sin`, so that sequence yields `0.0`
    /// forever. Any seed string hashing to `0`, such as `"\0"`, gets a
    /// constant layout.
    pub fn new(seed: u32) -> Self {
        Self { state: f64::from(seed) }
    }

    /// Advance the sequence and return the next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.sin() * 10000.0;
        let value = self.state - self.state.floor();
        // fract of a value within float epsilon of an integer can round up to 1.0
        if value >= 1.0 {
            0.0
        } else {
            value
        }
    }

    /// Next value scaled into `[min, max)`.
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Next integer in `[min, max]` (inclusive).
    pub fn int_range(&mut self, min: u32, max: u32) -> u32 {
        debug_assert!(min <= max);
        let span = f64::from(max - min + 1);
        let offset = (self.next_f64() * span).floor() as u32;
        min + offset.min(max - min)
    }

    /// Pick an item uniformly from a non-empty slice.
    ///
    /// Returns `None` for an empty slice without consuming a value.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.int_range(0, (items.len() - 1) as u32) as usize;
        items.get(index)
    }
}

impl Iterator for Sequence {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}
