//! Line-oriented text buffer.
//!
//! Holds a file as an ordered sequence of lines addressed by 1-based
//! position, with index-validated insert/delete/replace/append and
//! block copy/paste. Every successful mutation marks the buffer modified.

mod buffer;

pub use buffer::LineBuffer;
