/// Smallest multiplier for which a re-centered index is always outside the re-center zone.
///
/// With `multiplier = 4` and `len >= 2`, `recenter` can land above `len * (multiplier - 2)`.
/// From 6 upwards the midpoint band `[len * m / 2, len * m / 2 + len)` sits strictly between
/// `len + 1` and `len * (m - 2)` for every `len >= 1`.
pub const MIN_MULTIPLIER: usize = 6;

/// Default multiplier: the virtual range holds 512 copies of the item set.
pub const DEFAULT_MULTIPLIER: usize = 512;

/// Pure arithmetic over the virtual index range `[0, len * multiplier)`.
///
/// A *real index* addresses the finite item set (`0..len`). A *virtual index* addresses the much
/// larger scroll range presented to the surface; the real index of a virtual index `v` is
/// always `v % len`.
///
/// Every method returns `None`/`false` for an empty item set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VirtualIndexSpace {
    len: usize,
    multiplier: usize,
}

impl VirtualIndexSpace {
    /// Creates a space for `len` items. `multiplier` is floored at [`MIN_MULTIPLIER`] and
    /// reduced if `len * multiplier` would overflow.
    ///
    /// Only sets of zero-sized items can be long enough to push the multiplier below the floor;
    /// such a space still maps and re-centers without overflowing, with less slack.
    pub fn new(len: usize, multiplier: usize) -> Self {
        let mut multiplier = multiplier.max(MIN_MULTIPLIER);
        if len > 0 {
            multiplier = multiplier.min(usize::MAX / len);
        }
        Self { len, multiplier }
    }

    pub fn empty() -> Self {
        Self::new(0, DEFAULT_MULTIPLIER)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn multiplier(&self) -> usize {
        self.multiplier
    }

    /// Exclusive upper bound of the virtual range (`len * multiplier`).
    pub fn bound(&self) -> usize {
        self.len * self.multiplier
    }

    /// The seeding point, `(len * multiplier) / 2`.
    pub fn midpoint(&self) -> usize {
        self.bound() / 2
    }

    pub fn contains(&self, virtual_index: usize) -> bool {
        virtual_index < self.bound()
    }

    /// Real index for a virtual slot. Slots outside the range wrap instead of failing.
    pub fn real_index(&self, virtual_index: usize) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        Some(virtual_index % self.len)
    }

    /// Returns the virtual index in the same item-set copy as `approx` whose real index is
    /// `real % len`.
    ///
    /// `approx` is clamped into the range first, so the result always satisfies
    /// `result < bound()`.
    pub fn to_virtual(&self, real: usize, approx: usize) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let approx = approx.min(self.bound() - 1);
        Some((approx / self.len) * self.len + real % self.len)
    }

    /// Seeds `real` around the midpoint.
    pub fn seed(&self, real: usize) -> Option<usize> {
        self.to_virtual(real, self.midpoint())
    }

    /// Whether `virtual_index` is within one item-set width (plus one page) of either edge.
    pub fn needs_recenter(&self, virtual_index: usize) -> bool {
        if self.is_empty() {
            return false;
        }
        let left_max = self.len.saturating_add(1);
        let right_min = self.len * self.multiplier.saturating_sub(2);
        virtual_index < left_max || virtual_index > right_min
    }

    /// Moves `virtual_index` back to the midpoint band, keeping its real index.
    ///
    /// The result is the index with the same real index in the item-set copy containing the
    /// midpoint, which is `virtual_index % len + midpoint()` whenever the midpoint starts a copy.
    pub fn recenter(&self, virtual_index: usize) -> Option<usize> {
        self.to_virtual(virtual_index, self.midpoint())
    }
}

impl Default for VirtualIndexSpace {
    fn default() -> Self {
        Self::empty()
    }
}
