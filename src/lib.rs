/*
 * tupson - immutable fixed-arity tuples as positional JSON arrays
 * Written starting in 2026 by contributors (see CREDITS.txt at repository's root)
 * To the extent possible under law, the author(s) have dedicated all copyright and related and neighboring rights to this software to the public domain worldwide. This software is distributed without any warranty.
 * A copy of the Unlicense should have been supplied as COPYING.txt in this repository. Alternatively, you can find it at <https://unlicense.org/>.
 */

//! The `tupson` crate provides immutable fixed-arity tuples (arity 0 through
//! 8) together with their JSON wire form: one positional array per tuple.
//! The decoding core works over an explicit token cursor with pluggable
//! per-slot readers; the `serde` feature plugs the same types into any
//! Serde-shaped data-binding pipeline.

// Meta

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod errors;
pub use errors::*;

// Tokenization

mod token;
pub use token::*;

mod lexer;
pub use lexer::*;

mod cursor;
pub use cursor::*;

// Values

mod value;
pub use value::*;

mod tuple;
pub use tuple::*;

// Decoding

mod shape;
pub use shape::*;

mod decoder;
pub use decoder::*;

// Big test battery

#[cfg(test)]
mod tests;

// Integrations

#[cfg(feature = "serde")]
pub mod serde;
