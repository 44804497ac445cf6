use alloc::vec::Vec;
use core::ops::Range;

use carousel::{
    CarouselEvent, CarouselOptions, ContentBinder, Generation, PagingController, SurfaceCommand,
};

use crate::{Easing, Tween};

/// Geometry and animation settings for [`Pager`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagerOptions {
    /// Width of one page in surface pixels. Pages fill the viewport, so this is usually the
    /// viewport width.
    pub page_width: u32,
    /// Duration of an autoplay advance.
    pub advance_duration_ms: u64,
    /// Duration of the snap animation after a drag is released.
    pub snap_duration_ms: u64,
    pub easing: Easing,
}

impl PagerOptions {
    pub fn new(page_width: u32) -> Self {
        Self {
            page_width: page_width.max(1),
            advance_duration_ms: 300,
            snap_duration_ms: 250,
            easing: Easing::SmoothStep,
        }
    }

    pub fn with_advance_duration_ms(mut self, duration_ms: u64) -> Self {
        self.advance_duration_ms = duration_ms;
        self
    }

    pub fn with_snap_duration_ms(mut self, duration_ms: u64) -> Self {
        self.snap_duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Drag {
    start_page: usize,
}

/// A framework-neutral horizontal paging surface wrapped around a
/// [`carousel::PagingController`].
///
/// Hosts that only own a scroll offset in pixels drive it by calling:
/// - `on_drag_start` / `on_drag` / `on_drag_end` for pointer input
/// - `tick(now_ms)` each frame (animations, autoplay, deferred reload acknowledgement)
///
/// and render the pages in [`visible_slots`](Pager::visible_slots) at the returned offset.
/// Every [`SurfaceCommand`] the controller issues is executed here: jumps move the offset,
/// animations become tweens whose end is reported back as a settle, and reloads are
/// acknowledged on the next tick.
#[derive(Clone, Debug)]
pub struct Pager<T> {
    controller: PagingController<T>,
    options: PagerOptions,
    offset: u64,
    tween: Option<Tween>,
    drag: Option<Drag>,
    pending_reload: Option<Generation>,
    interaction_enabled: bool,
}

impl<T> Pager<T> {
    pub fn new(carousel: CarouselOptions, options: PagerOptions) -> Self {
        Self::from_controller(PagingController::new(carousel), options)
    }

    pub fn from_controller(controller: PagingController<T>, options: PagerOptions) -> Self {
        let mut pager = Self {
            interaction_enabled: controller.interaction_enabled(),
            controller,
            options: PagerOptions {
                page_width: options.page_width.max(1),
                ..options
            },
            offset: 0,
            tween: None,
            drag: None,
            pending_reload: None,
        };
        pager.apply_commands(0);
        pager
    }

    pub fn controller(&self) -> &PagingController<T> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut PagingController<T> {
        &mut self.controller
    }

    pub fn into_controller(self) -> PagingController<T> {
        self.controller
    }

    pub fn options(&self) -> &PagerOptions {
        &self.options
    }

    pub fn page_width(&self) -> u32 {
        self.options.page_width
    }

    /// Current scroll offset in surface pixels.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn interaction_enabled(&self) -> bool {
        self.interaction_enabled
    }

    /// The page under the leading edge of the viewport: `floor(offset / page_width)`.
    pub fn page_at_offset(&self, offset: u64) -> usize {
        (offset / self.options.page_width as u64) as usize
    }

    pub fn current_page(&self) -> usize {
        self.page_at_offset(self.offset)
    }

    pub fn page_offset(&self, page: usize) -> u64 {
        (page as u64).saturating_mul(self.options.page_width as u64)
    }

    fn max_offset(&self) -> u64 {
        self.page_offset(self.controller.slot_count().saturating_sub(1))
    }

    /// Virtual slots intersecting the viewport (one page, two while between pages).
    pub fn visible_slots(&self) -> Range<usize> {
        let count = self.controller.slot_count();
        if count == 0 || !self.controller.is_initialized() {
            return 0..0;
        }
        let width = self.options.page_width as u64;
        let start = self.current_page();
        let end = self.page_at_offset(self.offset.saturating_add(width - 1)) + 1;
        start.min(count)..end.min(count)
    }

    /// Calls `f(slot, real_index)` for every visible page.
    pub fn for_each_visible_page(&self, mut f: impl FnMut(usize, usize)) {
        for slot in self.visible_slots() {
            if let Some(index) = self.controller.resolve_page_index(slot) {
                f(slot, index);
            }
        }
    }

    /// Binds content for every visible page, returning the handles the binder produced.
    pub fn bind_visible<B: ContentBinder<T>>(&self, binder: &mut B) -> Vec<(usize, B::Handle)> {
        self.visible_slots()
            .filter_map(|slot| Some((slot, self.controller.bind_slot(slot, binder)?)))
            .collect()
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = CarouselEvent> + '_ {
        self.controller.drain_events()
    }

    /// Replaces the item set. The reload is acknowledged and the first page displayed on the
    /// next `tick`.
    pub fn set_data(&mut self, items: Vec<T>) -> Generation {
        let generation = self.controller.set_data(items);
        self.apply_commands(0);
        generation
    }

    pub fn set_data_with_index(&mut self, items: Vec<T>, index: usize) -> Generation {
        let generation = self.controller.set_data_with_index(items, index);
        self.apply_commands(0);
        generation
    }

    /// Changes the page width (e.g. on viewport resize), keeping the current page in place.
    pub fn set_page_width(&mut self, page_width: u32) {
        let page_width = page_width.max(1);
        if page_width == self.options.page_width {
            return;
        }
        let page = self.current_page();
        self.options.page_width = page_width;
        self.tween = None;
        self.offset = self.page_offset(page);
    }

    pub fn start_animating(&mut self) {
        self.controller.start_animating();
    }

    pub fn stop_animating(&mut self) {
        self.controller.stop_animating();
    }

    /// Starts a user drag. Ignored while interaction is disabled (before the first page of a new
    /// item set is shown). Cancels any running animation.
    pub fn on_drag_start(&mut self) -> bool {
        if !self.interaction_enabled || self.drag.is_some() {
            return false;
        }
        self.tween = None;
        self.drag = Some(Drag {
            start_page: self.current_page(),
        });
        self.controller.on_drag_start();
        true
    }

    /// Moves the surface to `offset` while dragging.
    pub fn on_drag(&mut self, offset: u64) {
        if self.drag.is_none() {
            return;
        }
        self.offset = offset.min(self.max_offset());
    }

    /// Releases the drag and snaps to the nearest page, at most one page away from the page the
    /// drag started on. The settle is reported when the snap animation finishes.
    pub fn on_drag_end(&mut self, now_ms: u64) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let width = self.options.page_width as u64;
        let nearest = self.page_at_offset(self.offset.saturating_add(width / 2));
        let last = self.controller.slot_count().saturating_sub(1);
        let target = nearest
            .clamp(drag.start_page.saturating_sub(1), drag.start_page.saturating_add(1))
            .min(last);
        atrace!(
            start_page = drag.start_page,
            target,
            offset = self.offset,
            "Pager::on_drag_end"
        );

        self.controller.on_drag_end();
        self.tween = Some(Tween::new(
            self.offset,
            self.page_offset(target),
            now_ms,
            self.options.snap_duration_ms,
            self.options.easing,
        ));
    }

    /// Reports a tap on the current page.
    pub fn on_tap(&mut self) -> bool {
        let page = self.current_page();
        self.controller.on_select(page)
    }

    /// Advances the surface.
    ///
    /// - Acknowledges a pending reload and displays the first page.
    /// - If an animation is active, updates the offset; when it finishes, reports the settle.
    /// - Otherwise, feeds `now_ms` to the autoplay timer.
    ///
    /// Returns the new offset when it changed.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        let before = self.offset;

        if let Some(generation) = self.pending_reload.take() {
            if self.controller.on_reload_complete(generation) {
                self.controller.on_first_display();
            }
            self.apply_commands(now_ms);
        }

        if let Some(tween) = self.tween {
            self.offset = tween.sample(now_ms);
            if tween.is_done(now_ms) {
                self.tween = None;
                let page = self.current_page();
                self.controller.on_settle(page);
                self.apply_commands(now_ms);
            }
        } else if self.drag.is_none() && self.controller.tick(now_ms) {
            self.apply_commands(now_ms);
        }

        (self.offset != before).then_some(self.offset)
    }

    fn apply_commands(&mut self, now_ms: u64) {
        let commands: Vec<SurfaceCommand> = self.controller.drain_commands().collect();
        for command in commands {
            match command {
                SurfaceCommand::JumpTo { index } => {
                    self.tween = None;
                    self.offset = self.page_offset(index);
                }
                SurfaceCommand::AnimateTo { from, to } => {
                    self.offset = self.page_offset(from);
                    self.tween = Some(Tween::new(
                        self.offset,
                        self.page_offset(to),
                        now_ms,
                        self.options.advance_duration_ms,
                        self.options.easing,
                    ));
                }
                SurfaceCommand::Reload { generation } => {
                    self.tween = None;
                    self.drag = None;
                    self.offset = 0;
                    self.pending_reload = Some(generation);
                }
                SurfaceCommand::SetInteractionEnabled(enabled) => {
                    self.interaction_enabled = enabled;
                }
            }
        }
    }
}
