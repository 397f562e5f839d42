use crate::{DelayMethod, RevealerOptions, ScrollPosition};

/// An explicit, timer-owning rate limiter for scroll/resize signals.
///
/// Time is modeled as `now_ms` samples supplied by the caller; there are no
/// real timers. The "timer" is the retained `pending` sample, flushed by
/// [`Self::poll`] and dropped by [`Self::cancel`]; teardown must call
/// `cancel` explicitly rather than rely on the gate going out of scope while
/// a flush is still due.
#[derive(Clone, Copy, Debug)]
pub struct DelayGate {
    method: DelayMethod,
    delay_ms: u64,
    last_emit_ms: Option<u64>,
    last_signal_ms: Option<u64>,
    pending: Option<ScrollPosition>,
}

impl DelayGate {
    pub fn new(method: DelayMethod, delay_ms: u64) -> Self {
        Self {
            method,
            delay_ms,
            last_emit_ms: None,
            last_signal_ms: None,
            pending: None,
        }
    }

    pub fn method(&self) -> DelayMethod {
        self.method
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Feeds one raw signal through the gate.
    ///
    /// Throttle emits on the leading edge when at least `delay_ms` has passed
    /// since the previous emit; otherwise the sample is retained for
    /// [`Self::poll`]. Debounce always retains, re-arming the quiet period.
    /// A zero delay emits synchronously in both modes.
    pub fn on_signal(&mut self, pos: ScrollPosition, now_ms: u64) -> Option<ScrollPosition> {
        if self.delay_ms == 0 {
            return Some(self.emit(pos, now_ms));
        }

        match self.method {
            DelayMethod::Throttle => {
                let open = self
                    .last_emit_ms
                    .is_none_or(|t| now_ms.saturating_sub(t) >= self.delay_ms);
                if open {
                    Some(self.emit(pos, now_ms))
                } else {
                    self.pending = Some(pos);
                    self.last_signal_ms = Some(now_ms);
                    None
                }
            }
            DelayMethod::Debounce => {
                self.pending = Some(pos);
                self.last_signal_ms = Some(now_ms);
                None
            }
        }
    }

    /// Flushes the retained sample once its delay window has closed.
    pub fn poll(&mut self, now_ms: u64) -> Option<ScrollPosition> {
        let pos = self.pending?;
        let due = match self.method {
            DelayMethod::Throttle => self
                .last_emit_ms
                .is_none_or(|t| now_ms.saturating_sub(t) >= self.delay_ms),
            DelayMethod::Debounce => self
                .last_signal_ms
                .is_none_or(|t| now_ms.saturating_sub(t) >= self.delay_ms),
        };
        due.then(|| self.emit(pos, now_ms))
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Unconditionally drops the pending sample and timer state.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.last_signal_ms = None;
    }

    fn emit(&mut self, pos: ScrollPosition, now_ms: u64) -> ScrollPosition {
        ltrace!(x = pos.x, y = pos.y, now_ms, "DelayGate::emit");
        self.last_emit_ms = Some(now_ms);
        self.pending = None;
        pos
    }
}

/// The scroll-position stream for one tracking scope.
///
/// Two modes, fixed at construction:
/// - **tracked**: environment signals are rate-limited through a
///   [`DelayGate`];
/// - **external**: an honored caller override, where samples pass straight
///   through verbatim and no environment subscription should ever be made
///   (adapters consult [`Self::is_external`] before attaching listeners).
#[derive(Clone, Copy, Debug)]
pub struct ScrollSource {
    current: ScrollPosition,
    gate: Option<DelayGate>,
}

impl ScrollSource {
    pub fn tracked(method: DelayMethod, delay_ms: u64, initial: ScrollPosition) -> Self {
        Self {
            current: initial,
            gate: Some(DelayGate::new(method, delay_ms)),
        }
    }

    pub fn external(initial: ScrollPosition) -> Self {
        Self {
            current: initial,
            gate: None,
        }
    }

    pub fn from_options(options: &RevealerOptions) -> Self {
        match options.scroll_position_override {
            Some(over) if over.is_valid() => Self::external(over),
            _ => Self::tracked(
                options.delay_method,
                options.delay_time_ms,
                ScrollPosition::ORIGIN,
            ),
        }
    }

    pub fn is_external(&self) -> bool {
        self.gate.is_none()
    }

    /// The most recently emitted (or externally supplied) position.
    pub fn current(&self) -> ScrollPosition {
        self.current
    }

    pub fn on_signal(&mut self, pos: ScrollPosition, now_ms: u64) -> Option<ScrollPosition> {
        let emitted = match &mut self.gate {
            Some(gate) => gate.on_signal(pos, now_ms),
            None => Some(pos),
        };
        if let Some(pos) = emitted {
            self.current = pos;
        }
        emitted
    }

    pub fn poll(&mut self, now_ms: u64) -> Option<ScrollPosition> {
        let emitted = self.gate.as_mut()?.poll(now_ms);
        if let Some(pos) = emitted {
            self.current = pos;
        }
        emitted
    }

    pub fn has_pending(&self) -> bool {
        self.gate.is_some_and(|g| g.has_pending())
    }

    pub fn cancel(&mut self) {
        if let Some(gate) = &mut self.gate {
            gate.cancel();
        }
    }
}
