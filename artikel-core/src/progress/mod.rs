use crate::{CoreError, ProgressSet};
use async_trait::async_trait;

pub mod memory;

pub use memory::MemoryProgressStore;

/// Durable home of the progress set. `save` always replaces the stored
/// record; there is no merging.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Missing or unparsable records read as an empty set.
    async fn load(&self) -> Result<ProgressSet, CoreError>;
    async fn save(&self, progress: &ProgressSet) -> Result<(), CoreError>;
}
