//! Bucket entries that may hold either a plain value or a builder.
//!
//! Module authors may register a finished definition or the builder that
//! produced it. Readers go through [`Declared::state`] and never need to
//! know which style was used.

use serde::{Serialize, Serializer};
use std::fmt;

/// A builder that exposes the plain state it accumulates.
pub trait Builder {
    /// The plain, serializable value this builder produces.
    type State;

    /// Borrow the current plain state.
    fn state(&self) -> &Self::State;
}

/// A bucket entry: a plain state value or a builder instance.
pub enum Declared<B: Builder> {
    Plain(B::State),
    Builder(B),
}

impl<B: Builder> Declared<B> {
    /// The plain state, unwrapping a builder if that is what was stored.
    pub fn state(&self) -> &B::State {
        match self {
            Self::Plain(state) => state,
            Self::Builder(builder) => builder.state(),
        }
    }

    /// Whether this entry was registered as a builder.
    pub fn is_builder(&self) -> bool {
        matches!(self, Self::Builder(_))
    }
}

impl<B> Clone for Declared<B>
where
    B: Builder + Clone,
    B::State: Clone,
{
    fn clone(&self) -> Self {
        match self {
            Self::Plain(state) => Self::Plain(state.clone()),
            Self::Builder(builder) => Self::Builder(builder.clone()),
        }
    }
}

impl<B> fmt::Debug for Declared<B>
where
    B: Builder + fmt::Debug,
    B::State: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(state) => f.debug_tuple("Plain").field(state).finish(),
            Self::Builder(builder) => f.debug_tuple("Builder").field(builder).finish(),
        }
    }
}

impl<B> PartialEq for Declared<B>
where
    B: Builder,
    B::State: PartialEq,
{
    /// Entries compare by resolved state, regardless of declaration style.
    fn eq(&self, other: &Self) -> bool {
        self.state() == other.state()
    }
}

impl<B> Serialize for Declared<B>
where
    B: Builder,
    B::State: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.state().serialize(serializer)
    }
}
