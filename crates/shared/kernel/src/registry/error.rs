use std::borrow::Cow;

/// A malformed route table. Fatal at start-up: the shell must not mount.
#[shelf_derive::shelf_error]
#[derive(Clone, PartialEq, Eq)]
pub enum RegistryValidationError {
    #[error("Route table is empty{}", format_context(.context))]
    Empty { context: Option<Cow<'static, str>> },

    #[error("Route table has an empty slot at index {index}{}", format_context(.context))]
    EmptySlot { index: usize, context: Option<Cow<'static, str>> },

    #[error("Route at index {index} is missing `{field}`{}", format_context(.context))]
    MissingField { index: usize, field: &'static str, context: Option<Cow<'static, str>> },

    #[error("Route at index {index} has an invalid path '{path}'{}", format_context(.context))]
    InvalidPath { index: usize, path: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error(
        "Route at index {index} repeats path '{path}' first declared at index {first}{}",
        format_context(.context)
    )]
    DuplicatePath {
        index: usize,
        first: usize,
        path: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    #[error(
        "Route at index {index} repeats id {id} first declared at index {first}{}",
        format_context(.context)
    )]
    DuplicateId { index: usize, first: usize, id: u32, context: Option<Cow<'static, str>> },
}

impl RegistryValidationError {
    /// Table index of the offending entry, if the error concerns a single entry.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Empty { .. } => None,
            Self::EmptySlot { index, .. }
            | Self::MissingField { index, .. }
            | Self::InvalidPath { index, .. }
            | Self::DuplicatePath { index, .. }
            | Self::DuplicateId { index, .. } => Some(*index),
        }
    }
}
