/// Source of uniformly distributed integers.
///
/// The dice simulation draws every value through this trait so tests can
/// inject a seeded generator or a fixed script of rolls.
pub trait RandomSource {
    /// Returns an integer drawn uniformly from `lo..=hi`.
    fn uniform_inclusive(&mut self, lo: i64, hi: i64) -> i64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform_inclusive(&mut self, lo: i64, hi: i64) -> i64 {
        (**self).uniform_inclusive(lo, hi)
    }
}

/// Settings the application layer needs, wherever they were loaded from.
pub trait ConfigProvider {
    fn default_rolls(&self) -> i64;
    fn seed(&self) -> Option<u64>;
    fn display_limit(&self) -> usize;
    fn times_per_year(&self) -> u32;
    fn currency_decimals(&self) -> usize;
}
