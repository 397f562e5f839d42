/// A document-space scroll offset.
///
/// Positions sourced from a real window are finite and non-negative. A caller
/// supplied override may use an arbitrary coordinate system; [`Self::is_valid`]
/// only decides whether the override is honored (see `RevealerOptions`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollPosition {
    pub x: f64,
    pub y: f64,
}

impl ScrollPosition {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether this position qualifies as an honored external override:
    /// both coordinates finite and ≥ 0.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.x >= 0.0 && self.y.is_finite() && self.y >= 0.0
    }
}

/// Client dimensions of the observing window (inner width/height).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Visibility of a tracked region. Transitions `NotVisible → Visible` exactly
/// once and is never reversed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisibilityState {
    #[default]
    NotVisible,
    Visible,
}

impl VisibilityState {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Rate-limiting policy for scroll/resize signals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DelayMethod {
    /// Emit only after a quiet period of `delay_time_ms` with no new signal.
    Debounce,
    /// Emit at most once per `delay_time_ms`; the last suppressed sample is
    /// flushed once the window closes.
    #[default]
    Throttle,
}

/// How visibility is observed. Chosen once at construction and never changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObservationStrategy {
    /// Geometry is re-tested against every (gated) scroll/resize sample.
    Polling,
    /// The platform's intersection mechanism notifies the controller directly.
    NativeIntersection,
}

impl ObservationStrategy {
    /// Selects the strategy for an instance.
    ///
    /// An honored scroll-position override forces `Polling`: a native observer
    /// cannot honor a synthetic coordinate system. Otherwise native
    /// intersection is used when a driver exists and the configuration allows
    /// it; any detection failure falls back to `Polling` silently.
    pub fn choose(has_override: bool, use_native: bool, driver_available: bool) -> Self {
        if has_override {
            return Self::Polling;
        }
        if use_native && driver_available {
            Self::NativeIntersection
        } else {
            Self::Polling
        }
    }

    pub fn is_polling(&self) -> bool {
        matches!(self, Self::Polling)
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Self::NativeIntersection)
    }
}
