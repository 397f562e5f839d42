// Example: reveal a region by scripting scroll positions.
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use lazyreveal::{
    ClientRect, Margins, PlaceholderGeometry, Revealer, RevealerOptions, ScrollPosition,
    ViewportSize,
};

fn main() {
    let scroll_y = Arc::new(AtomicU64::new(0f64.to_bits()));
    let probe_scroll = Arc::clone(&scroll_y);

    let options = RevealerOptions::new()
        .with_before_reveal(|| println!("before_reveal"))
        .with_after_reveal(|| println!("after_reveal"));
    let mut revealer = Revealer::new(options);

    // A 100px-tall region sitting 2000px down the document.
    revealer.set_placeholder_probe(Arc::new(move || {
        let y = f64::from_bits(probe_scroll.load(Ordering::Relaxed));
        Some(PlaceholderGeometry::new(
            ClientRect::new(2000.0 - y, 2100.0 - y, 0.0, 100.0),
            Margins::ZERO,
        ))
    }));
    revealer.set_viewport_size(Some(ViewportSize::new(600.0, 800.0)));
    revealer.on_mount();

    for y in [0.0f64, 600.0, 1200.0, 1800.0] {
        scroll_y.store(y.to_bits(), Ordering::Relaxed);
        revealer.on_scroll_position_change(ScrollPosition::new(0.0, y));
        revealer.on_update();
        println!("y={y}: visible={}", revealer.is_visible());
    }
}
