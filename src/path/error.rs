use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An error returned when appending or inserting an absolute path into a path which already has
/// content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display("cannot append an absolute path onto a non-empty path")]
pub struct AbsoluteAppendError;

/// An error returned when removing the last segment of a path which doesn't have one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display("cannot move further upwards in path")]
pub struct NoParentError;

/// A combination of [`AbsoluteAppendError`] and [`NoParentError`] for callers which mix fallible
/// path operations behind a single error type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum PathError {
    /// See [`AbsoluteAppendError`].
    AbsoluteAppend(AbsoluteAppendError),
    /// See [`NoParentError`].
    NoParent(NoParentError),
}
