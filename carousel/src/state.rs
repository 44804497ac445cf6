use crate::{AutoplayState, Generation, Phase};

/// A lightweight, serializable snapshot of the controller.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    pub generation: Generation,
    pub len: usize,
    /// `None` until the current item set has been seeded.
    pub virtual_index: Option<usize>,
    pub real_index: Option<usize>,
    pub phase: Phase,
    pub autoplay: AutoplayState,
}
