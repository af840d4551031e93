use crate::{Generation, Visibility};

/// A lightweight snapshot of the slide controller.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    /// Cursor position targeted by the latest transition.
    pub index: usize,
    /// Slide whose content is on screen.
    pub displayed_index: usize,
    pub generation: Generation,
    pub visibility: Visibility,
    pub track_offset_percent: i64,
}
