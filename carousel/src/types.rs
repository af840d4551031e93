use alloc::format;
use alloc::string::String;
use core::fmt;

/// A single testimonial record.
///
/// Records are immutable once a [`crate::TestimonialStore`] has been built from them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Testimonial {
    /// Positive, unique identifier. Also drives the `[NN]` index label.
    pub id: u32,
    pub quote: String,
    pub name: String,
    pub role: String,
}

impl Testimonial {
    pub fn new(
        id: u32,
        quote: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id,
            quote: quote.into(),
            name: name.into(),
            role: role.into(),
        }
    }

    pub fn label(&self) -> IndexLabel {
        IndexLabel(self.id)
    }
}

/// The bracketed, zero-padded id label shown next to a quote (e.g. `[02]`).
///
/// Padding is a fixed two-digit minimum: ids of three or more digits render unpadded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IndexLabel(pub u32);

impl fmt::Display for IndexLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:02}]", self.0)
    }
}

/// Formats `id` as an index label string.
pub fn format_index_label(id: u32) -> String {
    format!("{}", IndexLabel(id))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

/// One of the two content blocks that fade during a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Block {
    Quote,
    Author,
}

impl Block {
    pub const ALL: [Block; 2] = [Block::Quote, Block::Author];
}

/// Style values for a content block.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockStyle {
    /// `0.0` (hidden) or `1.0` (visible).
    pub opacity: f32,
    /// Downward offset in pixels.
    pub offset_y_px: u32,
}

impl BlockStyle {
    pub const VISIBLE: BlockStyle = BlockStyle {
        opacity: 1.0,
        offset_y_px: 0,
    };

    pub fn hidden(offset_y_px: u32) -> Self {
        Self {
            opacity: 0.0,
            offset_y_px,
        }
    }
}

/// The content a swap writes into the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideView<'a> {
    pub index: usize,
    pub testimonial: &'a Testimonial,
}

impl<'a> SlideView<'a> {
    pub fn quote(&self) -> &'a str {
        &self.testimonial.quote
    }

    pub fn name(&self) -> &'a str {
        &self.testimonial.name
    }

    pub fn role(&self) -> &'a str {
        &self.testimonial.role
    }

    pub fn label(&self) -> IndexLabel {
        self.testimonial.label()
    }
}
