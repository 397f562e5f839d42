/// The seam to a platform-native intersection mechanism.
///
/// The controller drives it: `observe` on mount with a root margin equal to
/// the configured threshold, `unobserve` on reveal (the notification is a
/// one-shot) and again, unconditionally, on unmount. The platform side calls
/// [`crate::Revealer::on_intersection`] when the observed placeholder
/// intersects the expanded viewport.
///
/// Implementations must tolerate repeated `unobserve` calls.
pub trait IntersectionDriver {
    fn observe(&mut self, root_margin_px: f64);
    fn unobserve(&mut self);
}
