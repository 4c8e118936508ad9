//! # Unit Components
//!
//! Tests grouped the way the library is laid out: configuration, the leaf
//! units, and the composed engine.


/// Decision engine: contract, insertion precedence, scenarios, and properties.
pub mod engine;
