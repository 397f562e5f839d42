use lazyreveal::{ScrollPosition, ViewportSize};

/// The scrollable environment a tracker observes (a window or an overflowed
/// container).
///
/// `attach`/`detach` bracket the host's scroll+resize listener registration.
/// The tracker calls them as a strict pair tied to its occupancy: `attach` on
/// the first registered revealer, `detach` when the last one leaves. Never
/// registered at module load, and never left dangling after teardown.
pub trait ScrollHost {
    /// Current scroll offset of the environment.
    fn scroll_position(&self) -> ScrollPosition;

    /// Client dimensions of the environment, or `None` when no viewport
    /// exists (headless/server contexts). `None` makes every visibility
    /// check read as "not in viewport" without subscribing to anything.
    fn viewport_size(&self) -> Option<ViewportSize>;

    /// Registers the host's scroll and resize listeners.
    fn attach(&mut self);

    /// Deregisters everything `attach` registered. Must be safe to call when
    /// nothing is attached.
    fn detach(&mut self);
}
