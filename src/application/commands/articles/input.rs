use crate::application::error::{ApplicationError, ApplicationResult};

/// A single input field as it arrived on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldInput<T> {
    #[default]
    Omitted,
    Null,
    Value(T),
}

impl<T> FieldInput<T> {
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Omitted | Self::Null => None,
        }
    }

    pub fn as_ref(&self) -> FieldInput<&T> {
        match self {
            Self::Omitted => FieldInput::Omitted,
            Self::Null => FieldInput::Null,
            Self::Value(value) => FieldInput::Value(value),
        }
    }

    /// `None` when omitted, `Some(None)` when null, `Some(Some(v))` otherwise.
    pub fn into_patch(self) -> Option<Option<T>> {
        match self {
            Self::Omitted => None,
            Self::Null => Some(None),
            Self::Value(value) => Some(Some(value)),
        }
    }

    /// Like [`FieldInput::into_patch`] but rejects an explicit null.
    pub fn into_required_patch(self, field: &str) -> ApplicationResult<Option<T>> {
        match self {
            Self::Omitted => Ok(None),
            Self::Null => Err(ApplicationError::validation(format!(
                "{field} cannot be null"
            ))),
            Self::Value(value) => Ok(Some(value)),
        }
    }
}
