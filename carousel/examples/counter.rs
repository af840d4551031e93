// Example: drive the counter from a simulated 60fps refresh loop.
use carousel::{CounterAnimator, Easing};

fn main() {
    let mut counter = CounterAnimator::animate(0, 100, 2000).with_easing(Easing::Linear);

    let mut now_ms = 1_000u64;
    let mut frame = 0u64;
    loop {
        let f = counter.frame(now_ms);
        if frame % 15 == 0 || f.done {
            println!("t={now_ms}ms value={}", f.value);
        }
        if f.done {
            break;
        }
        now_ms += 16;
        frame += 1;
    }
}
