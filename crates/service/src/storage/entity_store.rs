use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::records::Record;

/// Trait abstraction for append-only record storage with server-assigned ids.
/// Implementations must serialize every operation against the others.
#[async_trait]
pub trait EntityStore<R: Record>: Send + Sync {
    async fn list(&self) -> Vec<R>;
    async fn get(&self, id: &str) -> Result<R, ServiceError>;
    async fn insert(&self, candidate: R) -> R;
}
