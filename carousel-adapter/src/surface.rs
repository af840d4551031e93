use carousel::{Block, BlockStyle, IndexLabel};

/// The output surface a host exposes to [`crate::Page`].
///
/// Implementations map each call onto their real widgets (DOM nodes, TUI cells, GUI labels).
/// Calls are only made when the value changes as part of a transition, swap, or counter frame.
pub trait Surface {
    fn set_quote(&mut self, quote: &str);
    fn set_author(&mut self, name: &str, role: &str);
    /// Renders as `[NN]` via `Display`.
    fn set_index_label(&mut self, label: IndexLabel);
    /// Horizontal track offset, in percent of one slide width.
    fn set_track_offset(&mut self, percent: i64);
    fn set_block_style(&mut self, block: Block, style: BlockStyle);
    fn set_counter(&mut self, value: i64);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn set_quote(&mut self, quote: &str) {
        (**self).set_quote(quote);
    }

    fn set_author(&mut self, name: &str, role: &str) {
        (**self).set_author(name, role);
    }

    fn set_index_label(&mut self, label: IndexLabel) {
        (**self).set_index_label(label);
    }

    fn set_track_offset(&mut self, percent: i64) {
        (**self).set_track_offset(percent);
    }

    fn set_block_style(&mut self, block: Block, style: BlockStyle) {
        (**self).set_block_style(block, style);
    }

    fn set_counter(&mut self, value: i64) {
        (**self).set_counter(value);
    }
}
