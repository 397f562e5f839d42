use alloc::boxed::Box;

use crate::geometry::Viewport;
use crate::options::PlaceholderProbe;
use crate::{
    IntersectionDriver, ObservationStrategy, RevealerOptions, ScrollPosition, ViewportSize,
    VisibilityState,
};

/// The visibility controller for one lazily revealed region.
///
/// Owns the `NotVisible → Visible` state machine and decides transition
/// timing: in polling mode by testing the placeholder's bounding box against
/// the threshold-expanded viewport on every (gated) position sample, in
/// native mode by reacting to the platform's intersection notification. The
/// transition is monotonic and fires `before_reveal`/`after_reveal` exactly
/// once each (or zero times if the region is never revealed).
///
/// This type holds no UI objects. The rendering layer drives it through the
/// lifecycle hooks (`on_mount`, `on_update`, `on_unmount`) and supplies a
/// probe for the placeholder's geometry; scroll positions arrive through
/// [`Self::on_scroll_position_change`], already rate-limited by the caller's
/// tracking layer where applicable.
pub struct Revealer {
    options: RevealerOptions,
    strategy: ObservationStrategy,
    state: VisibilityState,
    scroll_position: ScrollPosition,
    viewport: Option<ViewportSize>,
    probe: Option<PlaceholderProbe>,
    driver: Option<Box<dyn IntersectionDriver + Send>>,
    observing: bool,
    after_pending: bool,
    loaded: bool,
    mounted: bool,
}

impl Revealer {
    /// Creates a polling-only instance.
    pub fn new(options: RevealerOptions) -> Self {
        Self::build(options, None)
    }

    /// Creates an instance that may use the platform's native intersection
    /// mechanism.
    ///
    /// Native observation is selected iff `use_native_intersection` is set
    /// and no scroll-position override is honored; otherwise the driver is
    /// kept but never observed and the instance polls.
    pub fn with_driver(
        options: RevealerOptions,
        driver: Box<dyn IntersectionDriver + Send>,
    ) -> Self {
        Self::build(options, Some(driver))
    }

    fn build(options: RevealerOptions, driver: Option<Box<dyn IntersectionDriver + Send>>) -> Self {
        let has_override = options.has_valid_override();
        let strategy = ObservationStrategy::choose(
            has_override,
            options.use_native_intersection,
            driver.is_some(),
        );
        let scroll_position = options
            .scroll_position_override
            .filter(ScrollPosition::is_valid)
            .unwrap_or(ScrollPosition::ORIGIN);
        ldebug!(
            ?strategy,
            eager = options.visible_by_default,
            has_override,
            "Revealer::new"
        );

        let mut r = Self {
            strategy,
            state: VisibilityState::NotVisible,
            scroll_position,
            viewport: None,
            probe: None,
            driver,
            observing: false,
            after_pending: false,
            loaded: false,
            mounted: false,
            options,
        };

        if r.options.visible_by_default {
            // Eager show: both callbacks fire synchronously during
            // construction and no geometry check ever runs.
            r.fire_before();
            r.state = VisibilityState::Visible;
            r.fire_after();
        }

        r
    }

    pub fn options(&self) -> &RevealerOptions {
        &self.options
    }

    pub fn strategy(&self) -> ObservationStrategy {
        self.strategy
    }

    pub fn visibility_state(&self) -> VisibilityState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    /// Whether the revealed content has reported load completion.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether the native driver currently observes the placeholder.
    pub fn is_observing(&self) -> bool {
        self.observing
    }

    pub fn scroll_position(&self) -> ScrollPosition {
        self.scroll_position
    }

    pub fn viewport_size(&self) -> Option<ViewportSize> {
        self.viewport
    }

    /// Updates the threshold used by polling checks.
    ///
    /// A native observer keeps the root margin it was observed with; call
    /// this before `on_mount` to affect that path.
    pub fn set_threshold(&mut self, threshold: f64) {
        if threshold < 0.0 {
            lwarn!(threshold, "negative threshold shrinks the viewport");
            debug_assert!(threshold >= 0.0, "negative threshold (got {threshold})");
        }
        self.options.threshold = threshold;
    }

    /// Supplies the geometry probe for the placeholder element.
    ///
    /// The rendering layer sets this once the placeholder is mounted; until
    /// then every check reads as "not in viewport". The next `on_update` or
    /// position sample re-evaluates.
    pub fn set_placeholder_probe(&mut self, probe: PlaceholderProbe) {
        self.probe = Some(probe);
    }

    pub fn clear_placeholder_probe(&mut self) {
        self.probe = None;
    }

    /// Updates the observing window's client dimensions.
    ///
    /// `None` means no viewport environment exists; every check then reads as
    /// "not in viewport". A resize that makes a still-hidden region fit
    /// re-evaluates immediately (no scroll delta required).
    pub fn set_viewport_size(&mut self, size: Option<ViewportSize>) {
        self.viewport = size;
        if self.mounted && self.strategy.is_polling() {
            self.check_and_reveal();
        }
    }

    /// Called by the rendering layer once the placeholder is in the tree.
    ///
    /// Polling runs its first visibility check here; native observation
    /// starts here with a root margin equal to the threshold.
    pub fn on_mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        if self.state.is_visible() {
            return;
        }
        match self.strategy {
            ObservationStrategy::NativeIntersection => self.start_observing(),
            ObservationStrategy::Polling => self.check_and_reveal(),
        }
    }

    /// Called by the rendering layer after each committed update.
    ///
    /// This is the commit signal for a pending reveal: `after_reveal` fires
    /// here, strictly after `before_reveal` and exactly once. When still not
    /// visible, polling re-checks (layout may have shifted without a scroll).
    pub fn on_update(&mut self) {
        if !self.mounted {
            return;
        }
        if self.after_pending {
            self.after_pending = false;
            self.fire_after();
            return;
        }
        if !self.state.is_visible() && self.strategy.is_polling() {
            self.check_and_reveal();
        }
    }

    /// Teardown. Unconditionally stops observation regardless of visibility
    /// state; signals arriving after this are ignored.
    pub fn on_unmount(&mut self) {
        self.mounted = false;
        self.stop_observing();
    }

    /// A new scroll position from the tracking layer (gated) or the caller
    /// (verbatim, when an override is in use). Polling path only; under
    /// native observation this is a no-op.
    pub fn on_scroll_position_change(&mut self, pos: ScrollPosition) {
        if !self.mounted || self.strategy.is_native() {
            return;
        }
        self.scroll_position = pos;
        self.check_and_reveal();
    }

    /// The platform's intersection notification. Native path only.
    pub fn on_intersection(&mut self) {
        if !self.mounted || !self.strategy.is_native() {
            return;
        }
        self.reveal();
    }

    /// Reports that the revealed content finished loading (e.g. image
    /// decode). Independent of visibility; fires `on_content_loaded` at most
    /// once per instance.
    pub fn notify_content_loaded(&mut self) {
        if self.loaded {
            return;
        }
        self.loaded = true;
        ldebug!("content loaded");
        if let Some(cb) = &self.options.on_content_loaded {
            cb();
        }
    }

    fn check_and_reveal(&mut self) {
        if self.state.is_visible() {
            return;
        }
        if self.is_placeholder_in_viewport() {
            self.reveal();
        }
    }

    fn is_placeholder_in_viewport(&self) -> bool {
        let Some(probe) = &self.probe else {
            // Not yet mounted or detached; a normal transient state.
            return false;
        };
        let Some(geometry) = probe() else {
            return false;
        };
        let Some(size) = self.viewport else {
            return false;
        };
        let bounding_box = geometry.bounding_box(self.scroll_position);
        let viewport = Viewport::from_scroll(self.scroll_position, size);
        bounding_box.in_viewport(viewport, self.options.threshold)
    }

    fn reveal(&mut self) {
        if self.state.is_visible() {
            return;
        }
        ldebug!(strategy = ?self.strategy, "reveal");
        self.fire_before();
        self.state = VisibilityState::Visible;
        self.after_pending = true;
        self.stop_observing();
    }

    fn start_observing(&mut self) {
        if self.observing {
            return;
        }
        if let Some(driver) = &mut self.driver {
            driver.observe(self.options.threshold);
            self.observing = true;
        }
    }

    fn stop_observing(&mut self) {
        if !self.observing {
            return;
        }
        if let Some(driver) = &mut self.driver {
            driver.unobserve();
        }
        self.observing = false;
    }

    fn fire_before(&self) {
        if let Some(cb) = &self.options.before_reveal {
            cb();
        }
    }

    fn fire_after(&self) {
        if let Some(cb) = &self.options.after_reveal {
            cb();
        }
    }
}

impl core::fmt::Debug for Revealer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Revealer")
            .field("strategy", &self.strategy)
            .field("state", &self.state)
            .field("scroll_position", &self.scroll_position)
            .field("viewport", &self.viewport)
            .field("observing", &self.observing)
            .field("after_pending", &self.after_pending)
            .field("loaded", &self.loaded)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}
