// Example: cycle through the built-in testimonials with a simulated timer.
use carousel::{CarouselOptions, SlideController, TestimonialStore};

fn main() {
    let mut c = SlideController::new(
        TestimonialStore::default_testimonials(),
        CarouselOptions::default(),
    );

    let mut now_ms = 0u64;
    for step in 0..4 {
        let start = if step % 2 == 0 {
            c.advance(now_ms)
        } else {
            c.retreat(now_ms)
        };
        println!(
            "t={now_ms}ms hide -> track={}% opacity={} due={}ms",
            start.track_offset_percent, start.hidden_style.opacity, start.swap.due_ms
        );

        // A host timer would fire here.
        now_ms = start.swap.due_ms;
        if let Some(view) = c.complete_swap(&start.swap) {
            println!(
                "t={now_ms}ms show {} {} ({}): {}",
                view.label(),
                view.name(),
                view.role(),
                view.quote()
            );
        }
        now_ms += 1_000;
    }
}
