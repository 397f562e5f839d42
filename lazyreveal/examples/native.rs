// Example: native intersection strategy with a logging driver.
use lazyreveal::{IntersectionDriver, Revealer, RevealerOptions};

struct LoggingDriver;

impl IntersectionDriver for LoggingDriver {
    fn observe(&mut self, root_margin_px: f64) {
        println!("observe (root margin {root_margin_px}px)");
    }

    fn unobserve(&mut self) {
        println!("unobserve");
    }
}

fn main() {
    let options = RevealerOptions::new()
        .with_threshold(200.0)
        .with_before_reveal(|| println!("before_reveal"))
        .with_after_reveal(|| println!("after_reveal"));
    let mut revealer = Revealer::with_driver(options, Box::new(LoggingDriver));
    println!("strategy={:?}", revealer.strategy());

    revealer.on_mount();
    // The platform reports an intersection with the expanded viewport.
    revealer.on_intersection();
    revealer.on_update();
    println!("visible={}", revealer.is_visible());
}
