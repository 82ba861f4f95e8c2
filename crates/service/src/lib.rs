//! Service layer for the todo items API.
//! - `items` holds the domain model and the store contract handlers depend on.
//! - `storage` holds the lock-guarded map the in-memory store is built on.

pub mod items;
pub mod storage;
