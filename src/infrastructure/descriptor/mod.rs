//! Descriptor persistence

mod toml_store;

pub use toml_store::TomlDescriptorStore;
