//! Storage abstractions for service layer
//!
//! Process-local containers shared between concurrent request handlers.

pub mod memory_map_store;
