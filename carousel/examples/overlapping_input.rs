// Example: rapid input before the swap delay elapses; only the last transition lands.
use carousel::{CarouselOptions, SlideController, TestimonialStore};

fn main() {
    let mut c = SlideController::new(
        TestimonialStore::default_testimonials(),
        CarouselOptions::default(),
    );

    // Three clicks 50ms apart, all inside the 300ms delay.
    let pending: Vec<_> = (0..3u64).map(|i| c.advance(i * 50).swap).collect();

    for swap in &pending {
        match c.complete_swap(swap) {
            Some(view) => println!(
                "t={}ms gen={} applied {} {}",
                swap.due_ms,
                swap.generation.0,
                view.label(),
                view.name()
            ),
            None => println!(
                "t={}ms gen={} discarded (superseded)",
                swap.due_ms, swap.generation.0
            ),
        }
    }
    println!("final state: {:?}", c.state());
}
