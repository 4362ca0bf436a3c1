use tokio::sync::Mutex;

use handlerlab_core::error::{LabError, Result};

/// Request counter shared by every connection.
#[derive(Debug, Default)]
pub struct HitCounter {
    count: Mutex<u64>,
}

impl HitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment and return the new value, read under the same lock.
    /// At `u64::MAX` the count is left as is and an internal error returned.
    pub async fn hit(&self) -> Result<u64> {
        let mut count = self.count.lock().await;
        *count = count
            .checked_add(1)
            .ok_or_else(|| LabError::Internal("hit counter overflow".into()))?;
        Ok(*count)
    }

    /// Current value without incrementing. Diagnostics and test hook; the
    /// `/count` route always goes through `hit`.
    pub async fn current(&self) -> u64 {
        *self.count.lock().await
    }
}
