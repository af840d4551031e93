/// Keys the carousel reacts to. Everything else maps to `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Maps a host key name (DOM `KeyboardEvent.key` style) to a `Key`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

/// Unit input signals consumed by [`crate::Page`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// "Next" control activation.
    Next,
    /// "Previous" control activation.
    Previous,
    /// Direct jump, e.g. from a pager dot.
    GoTo(usize),
    Key(Key),
    /// Page finished loading. Starts the counter the first time only.
    PageLoaded,
}

/// Which way a navigation input moves the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Forward,
    Backward,
    Jump(usize),
}

impl Input {
    /// Resolves keyboard input to the same navigation as the on-screen controls.
    pub fn navigation(self) -> Option<Navigation> {
        match self {
            Self::Next | Self::Key(Key::ArrowRight) => Some(Navigation::Forward),
            Self::Previous | Self::Key(Key::ArrowLeft) => Some(Navigation::Backward),
            Self::GoTo(index) => Some(Navigation::Jump(index)),
            Self::Key(Key::Other) | Self::PageLoaded => None,
        }
    }
}

impl From<Key> for Input {
    fn from(key: Key) -> Self {
        Self::Key(key)
    }
}
