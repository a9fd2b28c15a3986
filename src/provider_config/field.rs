//! Tri-state field tracking for sparse updates.
//!
//! A field in an update request is either left alone, set to a meaningful
//! value, or explicitly cleared to its zero value. Collapsing the last two
//! into a plain `Option` would make an intentional `false` or `""`
//! indistinguishable from "not specified", so the state is modelled
//! explicitly.

/// Change requested for a single field of an update request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldChange<T> {
    /// The caller never touched the field; it is omitted from payload and mask.
    #[default]
    Untouched,
    /// The field is set to a non-zero value.
    Set(T),
    /// The field is explicitly set to its zero value (`""`, `false`, `[]`).
    Cleared,
}

impl<T> FieldChange<T> {
    /// Whether the caller touched this field at all.
    pub fn is_touched(&self) -> bool {
        !matches!(self, Self::Untouched)
    }

    /// Whether the field was explicitly cleared.
    pub fn is_cleared(&self) -> bool {
        matches!(self, Self::Cleared)
    }

    /// The value the field is set to, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Set(value) => Some(value),
            _ => None,
        }
    }
}

/// Values with a natural "empty" representation.
pub trait ZeroValue {
    /// Whether this value is the zero value of its type.
    fn is_zero(&self) -> bool;
}

impl ZeroValue for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl ZeroValue for bool {
    fn is_zero(&self) -> bool {
        !*self
    }
}

impl<T> ZeroValue for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: ZeroValue> FieldChange<T> {
    /// Record a touched field, mapping zero values to [`FieldChange::Cleared`].
    pub fn touch(value: T) -> Self {
        if value.is_zero() {
            Self::Cleared
        } else {
            Self::Set(value)
        }
    }
}
