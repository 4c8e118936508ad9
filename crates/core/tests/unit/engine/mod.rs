//! Decision engine tests.

pub mod insertion;
