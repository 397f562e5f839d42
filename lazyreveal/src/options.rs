use alloc::string::String;
use alloc::sync::Arc;

use crate::geometry::PlaceholderGeometry;
use crate::{DelayMethod, ScrollPosition};

/// A one-shot observer callback (`before_reveal`, `after_reveal`,
/// `on_content_loaded`). Defaults to a no-op when unset.
pub type RevealCallback = Arc<dyn Fn() + Send + Sync>;

/// Measures the placeholder element.
///
/// The rendering layer supplies this after it mounts the placeholder; the
/// controller calls it on every visibility check. Returning `None` (element
/// not yet mounted, detached, …) is a normal transient state and reads as
/// "not in viewport".
pub type PlaceholderProbe = Arc<dyn Fn() -> Option<PlaceholderGeometry> + Send + Sync>;

/// Configuration for [`crate::Revealer`].
///
/// This type is designed to be cheap to clone: callbacks are stored in `Arc`s
/// so adapters can tweak a few fields and rebuild an instance without
/// reallocating closures.
pub struct RevealerOptions {
    /// Margin (pixels) added to the viewport on all four sides before the
    /// intersection test, enabling early reveal. Negative values are left to
    /// the caller (not validated).
    pub threshold: f64,

    /// Rate-limiting policy applied to tracked scroll/resize signals.
    pub delay_method: DelayMethod,

    /// Delay window for `delay_method`, in milliseconds.
    pub delay_time_ms: u64,

    /// Eager show: the instance is constructed already `Visible`, both reveal
    /// callbacks fire synchronously during construction and no geometry check
    /// ever runs.
    pub visible_by_default: bool,

    /// Whether to prefer the platform's native intersection mechanism when a
    /// driver is available. Ignored when an override is honored.
    pub use_native_intersection: bool,

    /// Externally supplied scroll position. When valid (finite, ≥ 0 on both
    /// axes) it is honored: the strategy is forced to polling, the position
    /// seeds the instance, and adapters skip environment tracking entirely.
    pub scroll_position_override: Option<ScrollPosition>,

    /// Decorative-wrapper effect name (e.g. "blur"). Consumed by
    /// [`crate::wrapper_effect`]; the styling itself is the rendering layer's
    /// concern.
    pub effect: Option<String>,

    /// Placeholder image source shown by the decorative wrapper until the
    /// real content finishes loading.
    pub placeholder_src: Option<String>,

    /// Fires synchronously, immediately before the state flips to `Visible`.
    pub before_reveal: Option<RevealCallback>,

    /// Fires once the transition has been committed by the rendering layer
    /// (on the next `on_update`), strictly after `before_reveal`.
    pub after_reveal: Option<RevealCallback>,

    /// Fires when the revealed content reports load completion: a second,
    /// independent one-shot, distinct from visibility.
    pub on_content_loaded: Option<RevealCallback>,
}

impl RevealerOptions {
    pub fn new() -> Self {
        Self {
            threshold: 100.0,
            delay_method: DelayMethod::Throttle,
            delay_time_ms: 300,
            visible_by_default: false,
            use_native_intersection: true,
            scroll_position_override: None,
            effect: None,
            placeholder_src: None,
            before_reveal: None,
            after_reveal: None,
            on_content_loaded: None,
        }
    }

    /// Whether the configured override is present and honored.
    pub fn has_valid_override(&self) -> bool {
        self.scroll_position_override
            .as_ref()
            .is_some_and(ScrollPosition::is_valid)
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        if threshold < 0.0 {
            lwarn!(threshold, "negative threshold shrinks the viewport");
            debug_assert!(threshold >= 0.0, "negative threshold (got {threshold})");
        }
        self.threshold = threshold;
        self
    }

    pub fn with_delay_method(mut self, delay_method: DelayMethod) -> Self {
        self.delay_method = delay_method;
        self
    }

    pub fn with_delay_time_ms(mut self, delay_time_ms: u64) -> Self {
        self.delay_time_ms = delay_time_ms;
        self
    }

    pub fn with_visible_by_default(mut self, visible_by_default: bool) -> Self {
        self.visible_by_default = visible_by_default;
        self
    }

    pub fn with_use_native_intersection(mut self, use_native_intersection: bool) -> Self {
        self.use_native_intersection = use_native_intersection;
        self
    }

    pub fn with_scroll_position_override(mut self, over: Option<ScrollPosition>) -> Self {
        self.scroll_position_override = over;
        self
    }

    pub fn with_effect(mut self, effect: Option<impl Into<String>>) -> Self {
        self.effect = effect.map(Into::into);
        self
    }

    pub fn with_placeholder_src(mut self, placeholder_src: Option<impl Into<String>>) -> Self {
        self.placeholder_src = placeholder_src.map(Into::into);
        self
    }

    pub fn with_before_reveal(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.before_reveal = Some(Arc::new(f));
        self
    }

    pub fn with_after_reveal(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.after_reveal = Some(Arc::new(f));
        self
    }

    pub fn with_on_content_loaded(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_content_loaded = Some(Arc::new(f));
        self
    }
}

impl Default for RevealerOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RevealerOptions {
    fn clone(&self) -> Self {
        Self {
            threshold: self.threshold,
            delay_method: self.delay_method,
            delay_time_ms: self.delay_time_ms,
            visible_by_default: self.visible_by_default,
            use_native_intersection: self.use_native_intersection,
            scroll_position_override: self.scroll_position_override,
            effect: self.effect.clone(),
            placeholder_src: self.placeholder_src.clone(),
            before_reveal: self.before_reveal.clone(),
            after_reveal: self.after_reveal.clone(),
            on_content_loaded: self.on_content_loaded.clone(),
        }
    }
}

impl core::fmt::Debug for RevealerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RevealerOptions")
            .field("threshold", &self.threshold)
            .field("delay_method", &self.delay_method)
            .field("delay_time_ms", &self.delay_time_ms)
            .field("visible_by_default", &self.visible_by_default)
            .field("use_native_intersection", &self.use_native_intersection)
            .field("scroll_position_override", &self.scroll_position_override)
            .field("effect", &self.effect)
            .field("placeholder_src", &self.placeholder_src)
            .finish_non_exhaustive()
    }
}
