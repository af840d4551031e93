use alloc::sync::Arc;
use alloc::vec::Vec;
use core::num::NonZeroUsize;

use crate::{Field, StoreError, Testimonial};

/// An ordered, read-only list of testimonials.
///
/// The store is guaranteed non-empty, so every wrapped index lookup succeeds. Cloning is cheap:
/// records live behind an `Arc`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestimonialStore {
    items: Arc<[Testimonial]>,
}

impl TestimonialStore {
    /// Validates `items` and builds a store.
    ///
    /// Rejects an empty list, zero ids, duplicate ids, and blank text fields.
    pub fn new(items: Vec<Testimonial>) -> Result<Self, StoreError> {
        if items.is_empty() {
            return Err(StoreError::Empty);
        }

        for (index, t) in items.iter().enumerate() {
            if t.id == 0 {
                return Err(StoreError::ZeroId { index });
            }
            if let Some(first) = items[..index].iter().position(|prev| prev.id == t.id) {
                return Err(StoreError::DuplicateId {
                    id: t.id,
                    first,
                    second: index,
                });
            }
            for (field, text) in [
                (Field::Quote, &t.quote),
                (Field::Name, &t.name),
                (Field::Role, &t.role),
            ] {
                if text.trim().is_empty() {
                    return Err(StoreError::EmptyField { index, field });
                }
            }
        }

        Ok(Self {
            items: items.into(),
        })
    }

    /// The built-in three-entry list shown when no content is provisioned.
    pub fn default_testimonials() -> Self {
        Self {
            items: default_items().into(),
        }
    }

    pub fn len(&self) -> NonZeroUsize {
        // Construction rejects empty lists.
        NonZeroUsize::new(self.items.len()).unwrap_or(NonZeroUsize::MIN)
    }

    pub fn get(&self, index: usize) -> Option<&Testimonial> {
        self.items.get(index)
    }

    /// Looks up `index` modulo the store length. Never fails.
    pub fn get_wrapped(&self, index: usize) -> &Testimonial {
        &self.items[index % self.items.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Testimonial> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Testimonial] {
        &self.items
    }

    pub fn index_of_id(&self, id: u32) -> Option<usize> {
        self.items.iter().position(|t| t.id == id)
    }
}

impl Default for TestimonialStore {
    fn default() -> Self {
        Self::default_testimonials()
    }
}

impl TryFrom<Vec<Testimonial>> for TestimonialStore {
    type Error = StoreError;

    fn try_from(items: Vec<Testimonial>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

fn default_items() -> Vec<Testimonial> {
    alloc::vec![
        Testimonial::new(
            1,
            "They rebuilt our storefront in six weeks and conversions have not stopped climbing.",
            "Elena M.",
            "Founder, Atelier Nord",
        ),
        Testimonial::new(
            2,
            "The cleanest handoff we have ever had. Every component came documented and tested.",
            "Marcus Chen",
            "Head of Product, Lumen Labs",
        ),
        Testimonial::new(
            3,
            "Fast, thoughtful, and honest about trade-offs. We will be back for the next launch.",
            "Sarah Jenkins",
            "Marketing Director, Fieldwork",
        ),
    ]
}

#[cfg(feature = "serde")]
impl serde::Serialize for TestimonialStore {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TestimonialStore {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<Testimonial>::deserialize(deserializer)?;
        Self::new(items).map_err(serde::de::Error::custom)
    }
}
