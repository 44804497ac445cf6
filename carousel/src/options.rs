use crate::space::DEFAULT_MULTIPLIER;
use crate::timer::DEFAULT_AUTOPLAY_INTERVAL_MS;

/// Configuration for [`crate::PagingController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselOptions {
    /// Number of item-set copies in the virtual range. Floored at
    /// [`crate::MIN_MULTIPLIER`].
    pub multiplier: usize,

    /// Whether the autoplay timer is re-armed automatically (after every settle and after the
    /// surface acknowledges a data swap).
    ///
    /// `start_animating` works regardless of this flag.
    pub autoplay: bool,

    pub autoplay_interval_ms: u64,

    /// Real index seeded for the very first item set.
    ///
    /// Later installations keep the previous real index (modulo the new length) unless
    /// `set_data_with_index` is used.
    pub initial_index: usize,
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self {
            multiplier: DEFAULT_MULTIPLIER,
            autoplay: true,
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            initial_index: 0,
        }
    }

    pub fn with_multiplier(mut self, multiplier: usize) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_autoplay_interval_ms(mut self, interval_ms: u64) -> Self {
        self.autoplay_interval_ms = interval_ms;
        self
    }

    pub fn with_initial_index(mut self, initial_index: usize) -> Self {
        self.initial_index = initial_index;
        self
    }
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self::new()
    }
}
