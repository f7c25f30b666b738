use crate::{CoreError, ProgressSet};
use async_trait::async_trait;
use parking_lot::RwLock;

#[derive(Default)]
pub struct MemoryProgressStore {
    saved: RwLock<Option<ProgressSet>>,
    saves: RwLock<u32>,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_progress(progress: ProgressSet) -> Self {
        Self {
            saved: RwLock::new(Some(progress)),
            saves: RwLock::new(0),
        }
    }

    /// Number of `save` calls seen so far.
    pub fn save_count(&self) -> u32 {
        *self.saves.read()
    }
}

#[async_trait]
impl crate::progress::ProgressStore for MemoryProgressStore {
    async fn load(&self) -> Result<ProgressSet, CoreError> {
        Ok(self.saved.read().clone().unwrap_or_default())
    }

    async fn save(&self, progress: &ProgressSet) -> Result<(), CoreError> {
        *self.saved.write() = Some(progress.clone());
        *self.saves.write() += 1;
        Ok(())
    }
}
