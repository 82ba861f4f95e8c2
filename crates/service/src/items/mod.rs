pub mod domain;
pub mod memory;
pub mod repository;

pub use domain::{DescriptionInput, Item, UpdateResult};
pub use memory::InMemoryItemStore;
pub use repository::ItemStore;
