/// Identifies one `set_data` installation.
///
/// Surface acknowledgements and content bindings carry the generation they were issued for, so
/// callbacks that outlive an item-set swap can be recognised and dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Generation(pub u64);

impl Generation {
    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// No page has been displayed for the current item set yet.
    Uninitialized,
    /// Seeded at the midpoint; no motion has been observed since.
    Seeded,
    Idle,
    /// The user is dragging the surface.
    Dragging,
    /// The surface is decelerating or running a programmatic animation.
    Settling,
}

impl Phase {
    pub fn is_initialized(self) -> bool {
        !matches!(self, Self::Uninitialized)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AutoplayState {
    /// The timer is scheduled and will tick.
    Active,
    /// Cancelled for the duration of a drag; resumes on the next settle.
    Suspended,
    Stopped,
}

/// A command issued by the core to the rendering surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurfaceCommand {
    /// Show `index` immediately, without animation.
    JumpTo { index: usize },
    /// Show `from` immediately, then animate to `to`. The surface reports the end of the
    /// animation through `on_settle(to)`.
    AnimateTo { from: usize, to: usize },
    /// Drop every cached page and re-query the item count, then acknowledge through
    /// `on_reload_complete(generation)`.
    Reload { generation: Generation },
    SetInteractionEnabled(bool),
}

/// A notification for the host application. Indexes are real indexes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarouselEvent {
    PageChanged { index: usize },
    ItemSelected { index: usize },
    ContentReady { index: usize },
}
