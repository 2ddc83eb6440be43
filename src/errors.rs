/*
 * tupson - immutable fixed-arity tuples as positional JSON arrays
 * Written starting in 2026 by contributors (see CREDITS.txt at repository's root)
 * To the extent possible under law, the author(s) have dedicated all copyright and related and neighboring rights to this software to the public domain worldwide. This software is distributed without any warranty.
 * A copy of the Unlicense should have been supplied as COPYING.txt in this repository. Alternatively, you can find it at <https://unlicense.org/>.
 */

use core::fmt::Display;

use crate::{TupleShape, TupsonTokenType};

/// Byte offset into the source text.
/// Tokens produced by other means than [crate::TupsonLexer] may carry 0 here.
pub type TupsonOffset = usize;

/// Broad classification of an error.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TupsonErrorKind {
    /// The token stream ended in the middle of a structure.
    Interrupted,
    /// The input is not well-formed JSON, or a token appeared somewhere it
    /// makes no sense (say, an object key that isn't a string).
    BadData,
    /// An array element appeared after every slot of the target tuple was
    /// already filled. Found while scanning, so the offending token is known.
    ArityMismatch,
    /// The constructed tuple's arity is not acceptable to the requested
    /// shape: too few elements, or more than [crate::MAX_TUPLE_ARITY].
    ShapeMismatch,
}

/// An error, describing the kind, the rough location, and (given the
/// `detailed_errors` feature) a human-readable message.
/// Decode errors also carry the requested [TupleShape] and the type of the
/// offending token where one exists.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TupsonError {
    pub kind: TupsonErrorKind,
    pub offset: TupsonOffset,
    /// The requested tuple shape, for errors raised by the tuple decoder.
    pub shape: Option<TupleShape>,
    /// The token that triggered the error, if any single token did.
    pub unexpected: Option<TupsonTokenType>,
    #[cfg(feature = "detailed_errors")]
    pub message: &'static str,
}

impl TupsonError {
    /// Creates an error. The message is dropped without `detailed_errors`.
    #[allow(unused_variables)]
    pub fn new(kind: TupsonErrorKind, offset: TupsonOffset, message: &'static str) -> Self {
        Self {
            kind,
            offset,
            shape: None,
            unexpected: None,
            #[cfg(feature = "detailed_errors")]
            message,
        }
    }

    /// Attaches the requested tuple shape.
    pub fn with_shape(mut self, shape: TupleShape) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Attaches the offending token's type.
    pub fn with_unexpected(mut self, token_type: TupsonTokenType) -> Self {
        self.unexpected = Some(token_type);
        self
    }
}

impl Display for TupsonError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}@{}", self.kind, self.offset)?;
        #[cfg(feature = "detailed_errors")]
        write!(f, ": {}", self.message)?;
        if let Some(shape) = &self.shape {
            write!(f, " (target: {})", shape)?;
        }
        if let Some(token_type) = &self.unexpected {
            write!(f, " (got: {:?})", token_type)?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TupsonError {}

/// Shorthand error construction, so the messages don't cost anything when
/// `detailed_errors` is disabled.
#[macro_export]
macro_rules! tupson_error {
    ($kind:ident, $at:expr, $msg:literal) => {
        $crate::TupsonError::new($crate::TupsonErrorKind::$kind, $at, $msg)
    };
}

/// Result type used throughout the crate.
pub type TupsonResult<T> = Result<T, TupsonError>;
