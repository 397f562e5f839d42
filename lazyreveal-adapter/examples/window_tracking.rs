// Example: one shared tracker driving two lazy regions.
use std::sync::{Arc, Mutex};

use lazyreveal::{
    ClientRect, DelayMethod, Margins, PlaceholderGeometry, Revealer, RevealerOptions,
    ScrollPosition, ViewportSize,
};
use lazyreveal_adapter::{ScrollHost, ScrollTracker};

#[derive(Clone, Debug, Default)]
struct SimHost {
    pos: Arc<Mutex<ScrollPosition>>,
}

impl ScrollHost for SimHost {
    fn scroll_position(&self) -> ScrollPosition {
        *self.pos.lock().unwrap()
    }

    fn viewport_size(&self) -> Option<ViewportSize> {
        Some(ViewportSize::new(600.0, 800.0))
    }

    fn attach(&mut self) {
        println!("host: listeners attached");
    }

    fn detach(&mut self) {
        println!("host: listeners detached");
    }
}

fn region(doc_top: f64, host: &SimHost, name: &'static str) -> Revealer {
    let pos = Arc::clone(&host.pos);
    let options = RevealerOptions::new()
        .with_before_reveal(move || println!("{name}: before_reveal"));
    let mut revealer = Revealer::new(options);
    revealer.set_placeholder_probe(Arc::new(move || {
        let s = *pos.lock().unwrap();
        Some(PlaceholderGeometry::new(
            ClientRect::new(doc_top - s.y, doc_top + 100.0 - s.y, 0.0, 100.0),
            Margins::ZERO,
        ))
    }));
    revealer.on_mount();
    revealer
}

fn main() {
    let host = SimHost::default();
    let mut tracker = ScrollTracker::new(host.clone(), DelayMethod::Throttle, 300);
    let hero = tracker.register(region(1_500.0, &host, "hero"));
    let footer = tracker.register(region(5_000.0, &host, "footer"));

    let mut now = 0u64;
    for y in [300.0, 900.0, 2_000.0, 4_500.0] {
        *host.pos.lock().unwrap() = ScrollPosition::new(0.0, y);
        tracker.on_scroll_signal(now);
        now += 400;
    }
    tracker.tick(now);

    println!("hero visible={}", tracker.revealer(hero).unwrap().is_visible());
    println!("footer visible={}", tracker.revealer(footer).unwrap().is_visible());
    tracker.clear();
}
