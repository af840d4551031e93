use core::num::NonZeroUsize;

/// A wraparound index into a non-empty sequence.
///
/// Always in `[0, len)`. Only `advance`, `retreat` and `go_to` move it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SlideCursor {
    index: usize,
    len: NonZeroUsize,
}

impl SlideCursor {
    /// Creates a cursor seeded at index 0.
    pub fn new(len: NonZeroUsize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> NonZeroUsize {
        self.len
    }

    /// `index = (index + 1) mod len`.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len.get();
        self.index
    }

    /// `index = (index - 1 + len) mod len`.
    pub fn retreat(&mut self) -> usize {
        self.index = match self.index {
            0 => self.len.get() - 1,
            i => i - 1,
        };
        self.index
    }

    /// Moves to `index mod len`.
    pub fn go_to(&mut self, index: usize) -> usize {
        self.index = index % self.len.get();
        self.index
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SlideCursor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            index: usize,
            len: NonZeroUsize,
        }

        let Raw { index, len } = Raw::deserialize(deserializer)?;
        if index >= len.get() {
            return Err(serde::de::Error::custom(format_args!(
                "cursor index {index} out of range for length {len}"
            )));
        }
        Ok(Self { index, len })
    }
}
