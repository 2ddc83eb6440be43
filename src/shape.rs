/*
 * tupson - immutable fixed-arity tuples as positional JSON arrays
 * Written starting in 2026 by contributors (see CREDITS.txt at repository's root)
 * To the extent possible under law, the author(s) have dedicated all copyright and related and neighboring rights to this software to the public domain worldwide. This software is distributed without any warranty.
 * A copy of the Unlicense should have been supplied as COPYING.txt in this repository. Alternatively, you can find it at <https://unlicense.org/>.
 */

use core::fmt::Display;

use crate::MAX_TUPLE_ARITY;

/// The arity a caller asks the decoder for: the tuple-relevant slice of a
/// type descriptor.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TupleShape {
    /// A declared arity, 0 through [MAX_TUPLE_ARITY].
    Exact(u8),
    /// "Any tuple": the caller takes whatever arity the array holds, up to
    /// the maximum.
    Any,
}

impl TupleShape {
    /// How many slot readers this shape can put to use; a surplus element
    /// past this count can never be stored.
    pub fn capacity(&self) -> usize {
        match self {
            Self::Exact(n) => *n as usize,
            Self::Any => MAX_TUPLE_ARITY,
        }
    }

    /// Whether a constructed tuple of the given arity satisfies the request.
    pub fn accepts(&self, arity: usize) -> bool {
        match self {
            Self::Exact(n) => arity == *n as usize,
            Self::Any => true,
        }
    }
}

impl Display for TupleShape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "arity-{} tuple", n),
            Self::Any => f.write_str("any tuple"),
        }
    }
}
