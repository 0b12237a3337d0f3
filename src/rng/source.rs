use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, instrument, trace};

use super::RandomError;
use crate::config::SourceConfig;

/// Largest value [`RandomSource::get`] can return (`2^31 - 1`).
pub const MAX_DRAW: u32 = i32::MAX as u32;

/// Seedable random source with bounded, percentage and bulk draws.
///
/// Every instance owns its generator, seeded from a recorded `u64`. Reseeding
/// one source never affects another.
///
/// # Examples
///
/// ```rust
/// use randgen::RandomSource;
///
/// let mut a = RandomSource::seeded(42);
/// let mut b = RandomSource::seeded(42);
/// assert_eq!(a.get(), b.get());
///
/// let roll = a.get_between(7, 1).unwrap();
/// assert!((1..7).contains(&roll));
/// ```
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
    seed: u64,
}

impl RandomSource {
    /// Create a source from an optional seed.
    ///
    /// With `None`, an unpredictable seed is taken from the OS and recorded,
    /// so [`seed`](Self::seed) can still report it.
    ///
    /// # Parameters
    /// * `seed` - Explicit seed, or `None` for an OS-chosen one
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Create a source with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        debug!(seed, "seeding random source");
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a source with a seed drawn from the OS.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = StdRng::from_os_rng().next_u64();
        Self::seeded(seed)
    }

    /// Create a source from a [`SourceConfig`].
    #[must_use]
    pub fn from_config(config: &SourceConfig) -> Self {
        Self::new(config.seed)
    }

    /// Upper bound of [`get`](Self::get), inclusive.
    #[must_use]
    pub const fn max_draw() -> u32 {
        MAX_DRAW
    }

    /// Replace the seed and reinitialize the generator from it.
    ///
    /// All later draws depend only on `seed`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randgen::RandomSource;
    ///
    /// let mut source = RandomSource::seeded(1);
    /// let first = source.set_seed(7).get();
    /// assert_eq!(source.seed(), 7);
    /// assert_eq!(RandomSource::seeded(7).get(), first);
    /// ```
    pub fn set_seed(&mut self, seed: u64) -> &mut Self {
        debug!(seed, previous = self.seed, "reseeding random source");
        self.seed = seed;
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// The seed the current stream was started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Reseed from OS entropy, then record a freshly drawn value as the seed.
    ///
    /// The recorded seed is the one actually in use afterwards: a new source
    /// built from [`seed`](Self::seed) replays the same draws.
    #[instrument(skip(self), fields(previous = self.seed))]
    pub fn scramble(&mut self) -> &mut Self {
        self.rng = StdRng::from_os_rng();
        let fresh = u64::from(self.get());
        self.set_seed(fresh)
    }

    /// Rewind to the start of the stream for the stored seed.
    pub fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }

    /// Create an independent source seeded from this one's next draw.
    ///
    /// Forks of two sources with equal seeds are themselves equal.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        let seed = self.rng.next_u64();
        Self::seeded(seed)
    }

    /// One raw draw in `[0, MAX_DRAW]`.
    pub fn get(&mut self) -> u32 {
        self.rng.next_u32() >> 1
    }

    /// A draw in `[min, max)`.
    ///
    /// Computed as `get() % (max - min) + min`. When `max - min` does not
    /// divide `MAX_DRAW + 1` the low end of the range is slightly favoured,
    /// and ranges wider than `MAX_DRAW + 1` only reach `min + MAX_DRAW`.
    ///
    /// # Errors
    /// [`RandomError::InvalidRange`] when `max <= min`.
    pub fn get_between(&mut self, max: i64, min: i64) -> Result<i64, RandomError> {
        let range = Self::range_size(max, min)?;
        Ok(self.reduce(range, min))
    }

    /// A draw in `[0, max)`.
    ///
    /// # Errors
    /// [`RandomError::InvalidRange`] when `max <= 0`.
    pub fn get_below(&mut self, max: i64) -> Result<i64, RandomError> {
        self.get_between(max, 0)
    }

    /// A value in `{0.00, 0.01, ..., 0.99}`.
    pub fn get_percent(&mut self) -> f64 {
        self.reduce(100, 0) as f64 / 100.0
    }

    /// A new vector as long as `container`, filled with draws in `[min, max)`.
    ///
    /// Only the length of `container` is used. `max` defaults to
    /// [`MAX_DRAW`]. The range is checked before anything is drawn, so an
    /// invalid range fails even for an empty container.
    ///
    /// # Errors
    /// [`RandomError::InvalidRange`] when `max <= min`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randgen::RandomSource;
    ///
    /// let mut source = RandomSource::seeded(9);
    /// let filled = source.fill_container(&[0u8; 4], 10, Some(20)).unwrap();
    /// assert_eq!(filled.len(), 4);
    /// assert!(filled.iter().all(|v| (10..20).contains(v)));
    /// ```
    #[instrument(skip(self, container), fields(len = container.len()))]
    pub fn fill_container<T>(
        &mut self,
        container: &[T],
        min: i64,
        max: Option<i64>,
    ) -> Result<Vec<i64>, RandomError> {
        self.fill_len(container.len(), min, max)
    }

    /// Like [`fill_container`](Self::fill_container) but takes the length directly.
    ///
    /// # Errors
    /// [`RandomError::InvalidRange`] when `max <= min`.
    pub fn fill_len(
        &mut self,
        len: usize,
        min: i64,
        max: Option<i64>,
    ) -> Result<Vec<i64>, RandomError> {
        let max = max.unwrap_or(i64::from(MAX_DRAW));
        let range = Self::range_size(max, min)?;
        Ok((0..len).map(|_| self.reduce(range, min)).collect())
    }

    fn range_size(max: i64, min: i64) -> Result<i128, RandomError> {
        let range = i128::from(max) - i128::from(min);
        if range <= 0 {
            trace!(max, min, "rejecting empty range");
            return Err(RandomError::InvalidRange { max, min });
        }
        Ok(range)
    }

    // `range` is positive, so the result lies in [min, max) and fits in i64.
    fn reduce(&mut self, range: i128, min: i64) -> i64 {
        let draw = i128::from(self.get());
        (draw % range + i128::from(min)) as i64
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RngCore for RandomSource {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.fill_bytes(dst)
    }
}
