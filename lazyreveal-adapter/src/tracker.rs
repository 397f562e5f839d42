use alloc::vec::Vec;

use lazyreveal::{DelayMethod, Revealer, RevealerOptions, ScrollPosition, ScrollSource};

use crate::ScrollHost;

/// Identifier for a revealer registered with a [`ScrollTracker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackedId(u64);

/// Whether an instance with these options needs environment tracking.
///
/// A valid scroll-position override means the caller drives positions itself;
/// the tracker (and its listener registration) is skipped entirely for such
/// instances.
pub fn tracking_required(options: &RevealerOptions) -> bool {
    !options.has_valid_override()
}

/// A framework-neutral decorator that shares one environment subscription and
/// one delay gate across any number of [`Revealer`]s.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_scroll_signal` / `on_resize_signal` when the host reports events
/// - `tick(now_ms)` each frame/timer tick (to flush the gate's deferred
///   sample)
///
/// The host's listener slot is acquired on the first `register` and released
/// on the last `deregister` (or `clear`), so a tracker that never holds a
/// revealer never subscribes to anything.
#[derive(Debug)]
pub struct ScrollTracker<H> {
    host: H,
    source: ScrollSource,
    slots: Vec<(TrackedId, Revealer)>,
    next_id: u64,
    attached: bool,
}

impl<H: ScrollHost> ScrollTracker<H> {
    /// Creates a tracker over `host`, gating signals with `method`/`delay_ms`
    /// (the per-instance `delay_method`/`delay_time_ms` configuration of the
    /// revealers it will carry).
    pub fn new(host: H, method: DelayMethod, delay_ms: u64) -> Self {
        let initial = host.scroll_position();
        Self {
            source: ScrollSource::tracked(method, delay_ms, initial),
            host,
            slots: Vec::new(),
            next_id: 0,
            attached: false,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The most recently emitted scroll position.
    pub fn current_position(&self) -> ScrollPosition {
        self.source.current()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Adds a revealer to the tracking scope.
    ///
    /// Seeds the revealer with the host's viewport dimensions and current
    /// position, and attaches the host listeners if this is the first
    /// occupant.
    pub fn register(&mut self, mut revealer: Revealer) -> TrackedId {
        let id = TrackedId(self.next_id);
        self.next_id += 1;

        revealer.set_viewport_size(self.host.viewport_size());
        revealer.on_scroll_position_change(self.source.current());
        self.slots.push((id, revealer));

        if !self.attached {
            self.host.attach();
            self.attached = true;
        }
        id
    }

    /// Removes a revealer, returning it to the caller (which owns its
    /// lifecycle and calls `on_unmount` at the right point). Detaches the
    /// host listeners when the tracker empties.
    pub fn deregister(&mut self, id: TrackedId) -> Option<Revealer> {
        let index = self.slots.iter().position(|(slot, _)| *slot == id)?;
        let (_, revealer) = self.slots.remove(index);
        if self.slots.is_empty() {
            self.release();
        }
        Some(revealer)
    }

    pub fn revealer(&self, id: TrackedId) -> Option<&Revealer> {
        self.slots
            .iter()
            .find(|(slot, _)| *slot == id)
            .map(|(_, r)| r)
    }

    pub fn revealer_mut(&mut self, id: TrackedId) -> Option<&mut Revealer> {
        self.slots
            .iter_mut()
            .find(|(slot, _)| *slot == id)
            .map(|(_, r)| r)
    }

    /// The host's scroll event. Reads the current position and pushes it
    /// through the gate; an emitted sample fans out to every revealer.
    pub fn on_scroll_signal(&mut self, now_ms: u64) {
        self.signal(now_ms);
    }

    /// The host's resize event. Shares the scroll path (and its gate): the
    /// fan-out re-reads viewport dimensions, so a resize re-checks regions
    /// even when the offset is unchanged.
    pub fn on_resize_signal(&mut self, now_ms: u64) {
        self.signal(now_ms);
    }

    /// Advances the tracker: flushes the gate's deferred sample if its delay
    /// window has closed.
    pub fn tick(&mut self, now_ms: u64) {
        if let Some(pos) = self.source.poll(now_ms) {
            self.fan_out(pos);
        }
    }

    /// Unmounts and drops every revealer and releases the host listeners.
    pub fn clear(&mut self) {
        for (_, revealer) in &mut self.slots {
            revealer.on_unmount();
        }
        self.slots.clear();
        self.release();
    }

    fn signal(&mut self, now_ms: u64) {
        let pos = self.host.scroll_position();
        if let Some(pos) = self.source.on_signal(pos, now_ms) {
            self.fan_out(pos);
        }
    }

    fn fan_out(&mut self, pos: ScrollPosition) {
        let size = self.host.viewport_size();
        for (_, revealer) in &mut self.slots {
            revealer.set_viewport_size(size);
            revealer.on_scroll_position_change(pos);
        }
    }

    fn release(&mut self) {
        if self.attached {
            self.host.detach();
            self.attached = false;
        }
        self.source.cancel();
    }
}
