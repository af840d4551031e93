use thiserror::Error;

/// Which text field of a [`crate::Testimonial`] failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Quote,
    Name,
    Role,
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Quote => "quote",
            Self::Name => "name",
            Self::Role => "role",
        })
    }
}

/// Errors reported while building a [`crate::TestimonialStore`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("testimonial list is empty")]
    Empty,
    #[error("testimonial at index {index} has id 0; ids must be positive")]
    ZeroId { index: usize },
    #[error("duplicate testimonial id {id} at indexes {first} and {second}")]
    DuplicateId {
        id: u32,
        first: usize,
        second: usize,
    },
    #[error("testimonial at index {index} has an empty {field}")]
    EmptyField { index: usize, field: Field },
}
