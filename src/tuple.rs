/*
 * tupson - immutable fixed-arity tuples as positional JSON arrays
 * Written starting in 2026 by contributors (see CREDITS.txt at repository's root)
 * To the extent possible under law, the author(s) have dedicated all copyright and related and neighboring rights to this software to the public domain worldwide. This software is distributed without any warranty.
 * A copy of the Unlicense should have been supplied as COPYING.txt in this repository. Alternatively, you can find it at <https://unlicense.org/>.
 */

use alloc::{vec, vec::Vec};

/// The largest arity a [Tuple] can hold.
pub const MAX_TUPLE_ARITY: usize = 8;

/// Immutable fixed-arity ordered sequence: one variant per arity, 0 through
/// [MAX_TUPLE_ARITY]. A closed set, deliberately, so construction can
/// dispatch on an element count and shape checks are a plain arity compare.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Tuple<V> {
    Empty,
    Of1(V),
    Of2(V, V),
    Of3(V, V, V),
    Of4(V, V, V, V),
    Of5(V, V, V, V, V),
    Of6(V, V, V, V, V, V),
    Of7(V, V, V, V, V, V, V),
    Of8(V, V, V, V, V, V, V, V),
}

impl<V> Default for Tuple<V> {
    fn default() -> Self {
        Self::Empty
    }
}

/// Pulls the next accumulated element; only reachable when the length was
/// already checked.
macro_rules! grab {
    ($it:expr) => {
        match $it.next() {
            Some(v) => v,
            None => return None,
        }
    };
}

impl<V> Tuple<V> {
    /// Constructs the variant matching the element count.
    /// More than [MAX_TUPLE_ARITY] elements construct nothing; callers decide
    /// whether that is an error (the decoder always does).
    pub fn from_vec(values: Vec<V>) -> Option<Tuple<V>> {
        if values.len() > MAX_TUPLE_ARITY {
            return None;
        }
        let arity = values.len();
        let mut it = values.into_iter();
        Some(match arity {
            0 => Tuple::Empty,
            1 => Tuple::Of1(grab!(it)),
            2 => Tuple::Of2(grab!(it), grab!(it)),
            3 => Tuple::Of3(grab!(it), grab!(it), grab!(it)),
            4 => Tuple::Of4(grab!(it), grab!(it), grab!(it), grab!(it)),
            5 => Tuple::Of5(grab!(it), grab!(it), grab!(it), grab!(it), grab!(it)),
            6 => Tuple::Of6(
                grab!(it),
                grab!(it),
                grab!(it),
                grab!(it),
                grab!(it),
                grab!(it),
            ),
            7 => Tuple::Of7(
                grab!(it),
                grab!(it),
                grab!(it),
                grab!(it),
                grab!(it),
                grab!(it),
                grab!(it),
            ),
            _ => Tuple::Of8(
                grab!(it),
                grab!(it),
                grab!(it),
                grab!(it),
                grab!(it),
                grab!(it),
                grab!(it),
                grab!(it),
            ),
        })
    }

    /// The number of elements in this tuple.
    pub fn arity(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Of1(..) => 1,
            Self::Of2(..) => 2,
            Self::Of3(..) => 3,
            Self::Of4(..) => 4,
            Self::Of5(..) => 5,
            Self::Of6(..) => 6,
            Self::Of7(..) => 7,
            Self::Of8(..) => 8,
        }
    }

    /// Iterates the elements in positional order.
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        let refs: Vec<&V> = match self {
            Self::Empty => vec![],
            Self::Of1(a) => vec![a],
            Self::Of2(a, b) => vec![a, b],
            Self::Of3(a, b, c) => vec![a, b, c],
            Self::Of4(a, b, c, d) => vec![a, b, c, d],
            Self::Of5(a, b, c, d, e) => vec![a, b, c, d, e],
            Self::Of6(a, b, c, d, e, g) => vec![a, b, c, d, e, g],
            Self::Of7(a, b, c, d, e, g, h) => vec![a, b, c, d, e, g, h],
            Self::Of8(a, b, c, d, e, g, h, i) => vec![a, b, c, d, e, g, h, i],
        };
        refs.into_iter()
    }

    /// Positional access, 0-based.
    pub fn get(&self, index: usize) -> Option<&V> {
        self.iter().nth(index)
    }

    /// Unmakes the tuple.
    pub fn into_vec(self) -> Vec<V> {
        match self {
            Self::Empty => vec![],
            Self::Of1(a) => vec![a],
            Self::Of2(a, b) => vec![a, b],
            Self::Of3(a, b, c) => vec![a, b, c],
            Self::Of4(a, b, c, d) => vec![a, b, c, d],
            Self::Of5(a, b, c, d, e) => vec![a, b, c, d, e],
            Self::Of6(a, b, c, d, e, g) => vec![a, b, c, d, e, g],
            Self::Of7(a, b, c, d, e, g, h) => vec![a, b, c, d, e, g, h],
            Self::Of8(a, b, c, d, e, g, h, i) => vec![a, b, c, d, e, g, h, i],
        }
    }
}
