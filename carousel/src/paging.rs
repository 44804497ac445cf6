use alloc::vec::{Drain, Vec};

use crate::{
    AutoplayState, AutoplayTimer, BindTicket, CarouselEvent, CarouselOptions, CarouselState,
    ContentBinder, Generation, Phase, SurfaceCommand, VirtualIndexSpace,
};

/// The paging core of an infinitely looping carousel.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - The surface reports what happened (`on_first_display`, `on_drag_start`, `on_settle`, ...)
///   and executes the [`SurfaceCommand`]s drained from [`drain_commands`].
/// - Host notifications are queued as [`CarouselEvent`]s and drained from [`drain_events`].
///
/// The virtual index is written only by `on_first_display` (seeding) and `on_settle`. Autoplay
/// advances go through the surface: [`advance_one_step`] asks it to animate and the resulting
/// settle report performs the update.
///
/// All methods take `&mut self`; hosts with several threads should move the controller into a
/// single owner and forward events to it.
///
/// [`drain_commands`]: PagingController::drain_commands
/// [`drain_events`]: PagingController::drain_events
/// [`advance_one_step`]: PagingController::advance_one_step
#[derive(Clone, Debug)]
pub struct PagingController<T> {
    options: CarouselOptions,
    items: Vec<T>,
    space: VirtualIndexSpace,
    generation: Generation,
    reload_acknowledged: bool,

    virtual_index: Option<usize>,
    seed_index: usize,
    phase: Phase,
    /// Set from drag start until the settle that ends the gesture.
    in_gesture: bool,
    interaction_enabled: bool,

    timer: AutoplayTimer,
    autoplay: AutoplayState,

    commands: Vec<SurfaceCommand>,
    events: Vec<CarouselEvent>,
}

impl<T> PagingController<T> {
    /// Creates a controller with an empty item set.
    pub fn new(options: CarouselOptions) -> Self {
        Self {
            space: VirtualIndexSpace::new(0, options.multiplier),
            items: Vec::new(),
            generation: Generation::default(),
            reload_acknowledged: true,
            virtual_index: None,
            seed_index: options.initial_index,
            phase: Phase::Uninitialized,
            in_gesture: false,
            interaction_enabled: false,
            timer: AutoplayTimer::new(options.autoplay_interval_ms),
            autoplay: AutoplayState::Stopped,
            commands: Vec::new(),
            events: Vec::new(),
            options,
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Enables/disables automatic re-arming of the autoplay timer.
    pub fn set_autoplay(&mut self, autoplay: bool) {
        self.options.autoplay = autoplay;
    }

    pub fn set_autoplay_interval_ms(&mut self, interval_ms: u64) {
        self.options.autoplay_interval_ms = interval_ms;
        self.timer.set_interval_ms(interval_ms);
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn space(&self) -> VirtualIndexSpace {
        self.space
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Total number of virtual slots the surface should present (`0` for an empty set).
    pub fn slot_count(&self) -> usize {
        self.space.bound()
    }

    pub fn virtual_index(&self) -> Option<usize> {
        self.virtual_index
    }

    pub fn real_index(&self) -> Option<usize> {
        self.virtual_index.and_then(|v| self.space.real_index(v))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn autoplay_state(&self) -> AutoplayState {
        self.autoplay
    }

    pub fn timer(&self) -> &AutoplayTimer {
        &self.timer
    }

    pub fn interaction_enabled(&self) -> bool {
        self.interaction_enabled
    }

    /// Whether the current item set has been acknowledged by the surface and seeded.
    pub fn is_initialized(&self) -> bool {
        self.virtual_index.is_some()
    }

    /// Returns a lightweight snapshot of the controller state.
    pub fn state(&self) -> CarouselState {
        CarouselState {
            generation: self.generation,
            len: self.items.len(),
            virtual_index: self.virtual_index,
            real_index: self.real_index(),
            phase: self.phase,
            autoplay: self.autoplay,
        }
    }

    pub fn drain_commands(&mut self) -> Drain<'_, SurfaceCommand> {
        self.commands.drain(..)
    }

    pub fn drain_events(&mut self) -> Drain<'_, CarouselEvent> {
        self.events.drain(..)
    }

    /// Replaces the item set, keeping the current real index (modulo the new length).
    ///
    /// See [`set_data_with_index`](Self::set_data_with_index).
    pub fn set_data(&mut self, items: Vec<T>) -> Generation {
        let index = self.real_index().unwrap_or(self.seed_index);
        self.set_data_with_index(items, index)
    }

    /// Replaces the item set and seeds real index `index` (modulo the new length) on the next
    /// first display.
    ///
    /// Until the surface acknowledges the returned generation through `on_reload_complete` and
    /// then reports `on_first_display`, page requests and settle/select reports are dropped.
    /// The autoplay timer is cancelled and user interaction disabled.
    pub fn set_data_with_index(&mut self, items: Vec<T>, index: usize) -> Generation {
        self.timer.stop();
        self.autoplay = AutoplayState::Stopped;

        self.generation = self.generation.next();
        self.space = VirtualIndexSpace::new(items.len(), self.options.multiplier);
        self.items = items;
        self.virtual_index = None;
        self.seed_index = index;
        self.phase = Phase::Uninitialized;
        self.in_gesture = false;
        self.reload_acknowledged = false;
        cdebug!(
            generation = self.generation.0,
            len = self.items.len(),
            seed_index = index,
            "PagingController::set_data"
        );

        self.set_interaction_enabled(false);
        self.commands.push(SurfaceCommand::Reload {
            generation: self.generation,
        });
        self.generation
    }

    /// Call this once the surface has dropped its cached pages for `generation`.
    ///
    /// Returns `false` for an acknowledgement of a replaced item set. Starts autoplay when it
    /// is enabled and the set is non-empty.
    pub fn on_reload_complete(&mut self, generation: Generation) -> bool {
        if generation != self.generation || self.reload_acknowledged {
            cwarn!(
                stale = generation.0,
                current = self.generation.0,
                "PagingController: dropped reload acknowledgement"
            );
            return false;
        }
        self.reload_acknowledged = true;
        if self.options.autoplay && !self.items.is_empty() {
            self.start_animating();
        }
        true
    }

    /// Call this when the surface is about to display its first page for the current item set.
    ///
    /// Seeds the virtual index at the midpoint and re-enables interaction. Only the first call
    /// after an acknowledged `set_data` has an effect; returns whether seeding happened.
    pub fn on_first_display(&mut self) -> bool {
        if self.phase.is_initialized() || !self.reload_acknowledged {
            return false;
        }
        let Some(v) = self.space.seed(self.seed_index) else {
            return false;
        };
        cdebug!(
            virtual_index = v,
            real_index = v % self.items.len(),
            "PagingController::on_first_display"
        );
        self.virtual_index = Some(v);
        self.phase = Phase::Seeded;
        self.commands.push(SurfaceCommand::JumpTo { index: v });
        self.set_interaction_enabled(true);
        true
    }

    /// Maps a virtual slot requested by the surface to the real index to bind.
    ///
    /// Slots outside the virtual range wrap. Returns `None` for an empty set and while a data
    /// swap is in flight.
    pub fn resolve_page_index(&self, slot: usize) -> Option<usize> {
        if !self.is_initialized() {
            return None;
        }
        self.space.real_index(slot)
    }

    pub fn item_for_slot(&self, slot: usize) -> Option<&T> {
        self.resolve_page_index(slot).and_then(|i| self.items.get(i))
    }

    /// Resolves `slot` and asks `binder` to fill it.
    ///
    /// The binder receives a [`BindTicket`]; passing it to [`on_content_ready`] later forwards
    /// a [`CarouselEvent::ContentReady`] notification.
    ///
    /// [`on_content_ready`]: PagingController::on_content_ready
    pub fn bind_slot<B: ContentBinder<T>>(&self, slot: usize, binder: &mut B) -> Option<B::Handle> {
        let index = self.resolve_page_index(slot)?;
        let item = self.items.get(index)?;
        let ticket = BindTicket {
            generation: self.generation,
            index,
        };
        binder.bind(ticket, item)
    }

    /// Forwards a completed content binding as a host notification.
    ///
    /// Tickets issued for a replaced item set are dropped. State is not touched.
    pub fn on_content_ready(&mut self, ticket: BindTicket) -> bool {
        if ticket.generation != self.generation
            || !self.is_initialized()
            || ticket.index >= self.items.len()
        {
            cwarn!(
                generation = ticket.generation.0,
                index = ticket.index,
                "PagingController: dropped stale content notification"
            );
            return false;
        }
        self.events.push(CarouselEvent::ContentReady { index: ticket.index });
        true
    }

    /// Call this when the user starts dragging. Suspends autoplay until the next settle.
    pub fn on_drag_start(&mut self) {
        if !self.is_initialized() {
            return;
        }
        ctrace!("PagingController::on_drag_start");
        self.phase = Phase::Dragging;
        self.in_gesture = true;
        if self.timer.is_running() {
            self.timer.stop();
            self.autoplay = AutoplayState::Suspended;
        }
    }

    /// Call this when the user releases the surface and it starts decelerating.
    pub fn on_drag_end(&mut self) {
        if self.phase == Phase::Dragging {
            self.phase = Phase::Settling;
        }
    }

    /// Call this when the surface has come to rest at virtual index `observed`, after either a
    /// user gesture or a programmatic animation.
    ///
    /// Reports of the current index and of index `0` leave the state untouched. Otherwise the
    /// virtual index moves to `observed` (re-centered when it approaches either edge), a
    /// [`CarouselEvent::PageChanged`] is queued and the surface is told to hold there.
    ///
    /// Autoplay resumes after every settle. Returns whether the virtual index changed.
    pub fn on_settle(&mut self, observed: usize) -> bool {
        let Some(current) = self.virtual_index else {
            cwarn!(observed, "PagingController: dropped settle before seeding");
            return false;
        };
        let changed = self.apply_settle(current, observed);
        self.phase = Phase::Idle;
        self.in_gesture = false;
        if self.options.autoplay || self.autoplay == AutoplayState::Suspended {
            self.start_animating();
        }
        changed
    }

    fn apply_settle(&mut self, current: usize, observed: usize) -> bool {
        if observed == current || observed == 0 {
            return false;
        }
        if !self.space.contains(observed) {
            cwarn!(
                observed,
                bound = self.space.bound(),
                "PagingController: settle outside the virtual range"
            );
            self.commands.push(SurfaceCommand::JumpTo { index: current });
            return false;
        }

        let mut v = observed;
        if self.space.needs_recenter(v) {
            if let Some(centered) = self.space.recenter(v) {
                cdebug!(from = v, to = centered, "PagingController: recenter");
                v = centered;
            }
        }
        let len = self.items.len();
        ctrace!(virtual_index = v, real_index = v % len, "PagingController::on_settle");

        self.virtual_index = Some(v);
        self.events.push(CarouselEvent::PageChanged { index: v % len });
        self.commands.push(SurfaceCommand::JumpTo { index: v });
        true
    }

    /// Call this when the user taps the page at virtual slot `slot`.
    pub fn on_select(&mut self, slot: usize) -> bool {
        let Some(index) = self.resolve_page_index(slot) else {
            return false;
        };
        self.events.push(CarouselEvent::ItemSelected { index });
        true
    }

    /// Asks the surface to animate to the next page.
    ///
    /// The virtual index is not written here; the settle report that ends the animation does
    /// that. Ignored before seeding and from drag start until the gesture settles.
    pub fn advance_one_step(&mut self) -> bool {
        let Some(current) = self.virtual_index else {
            return false;
        };
        if self.in_gesture {
            return false;
        }
        let mut from = current;
        if !self.space.contains(from.saturating_add(1)) {
            // Settles re-center long before this; keep `to` in range regardless.
            from = self.space.recenter(from).unwrap_or(from);
        }
        let to = from + 1;
        ctrace!(from, to, "PagingController::advance_one_step");
        self.phase = Phase::Settling;
        self.commands.push(SurfaceCommand::AnimateTo { from, to });
        true
    }

    /// Feeds the host clock to the autoplay timer; advances one page when a tick is due.
    ///
    /// Returns whether an advance was issued.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.timer.poll(now_ms) {
            return false;
        }
        self.advance_one_step()
    }

    /// Starts autoplay (idempotent).
    ///
    /// During a user gesture autoplay is only marked [`AutoplayState::Suspended`]; the timer
    /// starts with the settle that ends the gesture.
    pub fn start_animating(&mut self) {
        if self.in_gesture {
            self.timer.stop();
            self.autoplay = AutoplayState::Suspended;
            return;
        }
        self.timer.start();
        self.autoplay = AutoplayState::Active;
    }

    /// Stops autoplay (idempotent). No tick fires after this returns.
    pub fn stop_animating(&mut self) {
        self.timer.stop();
        self.autoplay = AutoplayState::Stopped;
    }

    fn set_interaction_enabled(&mut self, enabled: bool) {
        if self.interaction_enabled == enabled {
            return;
        }
        self.interaction_enabled = enabled;
        self.commands.push(SurfaceCommand::SetInteractionEnabled(enabled));
    }
}

impl<T> Default for PagingController<T> {
    fn default() -> Self {
        Self::new(CarouselOptions::default())
    }
}
