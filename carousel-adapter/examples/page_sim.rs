// Example: a host event loop driving a `Page` with a printing surface.
use carousel::{Block, BlockStyle, CarouselOptions, IndexLabel, TestimonialStore};
use carousel_adapter::{Input, Key, Page, Surface};

struct Stdout;

impl Surface for Stdout {
    fn set_quote(&mut self, quote: &str) {
        println!("  quote   = {quote:?}");
    }

    fn set_author(&mut self, name: &str, role: &str) {
        println!("  author  = {name} / {role}");
    }

    fn set_index_label(&mut self, label: IndexLabel) {
        println!("  label   = {label}");
    }

    fn set_track_offset(&mut self, percent: i64) {
        println!("  track   = translateX({percent}%)");
    }

    fn set_block_style(&mut self, block: Block, style: BlockStyle) {
        println!(
            "  {block:?} opacity={} translateY({}px)",
            style.opacity, style.offset_y_px
        );
    }

    fn set_counter(&mut self, value: i64) {
        println!("  counter = {value}");
    }
}

fn main() {
    let mut page = Page::new(
        TestimonialStore::default_testimonials(),
        CarouselOptions::default(),
        Stdout,
    );

    // (time, input) pairs a browser would deliver.
    let events = [
        (0u64, Input::PageLoaded),
        (400, Input::Next),
        (450, Input::Key(Key::from_name("ArrowRight"))),
        (1200, Input::Key(Key::from_name("Escape"))),
        (1500, Input::Previous),
    ];

    let mut events = events.into_iter().peekable();
    let mut now_ms = 0u64;
    while events.peek().is_some() || page.needs_refresh() {
        while let Some((_, input)) = events.next_if(|(at, _)| *at <= now_ms) {
            println!("t={now_ms}ms input {input:?}");
            page.dispatch(input, now_ms);
        }
        if let Some(frame) = page.tick(now_ms) {
            if frame.done {
                println!("t={now_ms}ms counter finished");
            }
        }
        now_ms += 16;
    }

    println!("final: {:?}", page.controller().state());
}
