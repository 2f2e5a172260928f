//! Statement text for the students table and its stored routines.

mod builder;
pub use builder::*;
