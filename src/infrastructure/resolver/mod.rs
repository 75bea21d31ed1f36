//! Artifact resolution backed by the local cache

mod local_cache;
mod pinned;

pub use local_cache::LocalCacheResolver;
pub use pinned::PinnedFilesResolver;
