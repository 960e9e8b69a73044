//! Account store backends and the factory that chooses between them.

pub mod data_store_factory;
pub mod in_memory;
pub mod json_file;
