//! Record types served by the services.

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

pub mod product;
pub mod user;

/// A flat entity whose string `id` is assigned by the store. `Default` is the
/// zero-valued record a create body is decoded onto.
pub trait Record: Clone + Debug + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Path segment the collection is served under, e.g. `products`.
    const RESOURCE: &'static str;
    /// Singular display name used in messages, e.g. `Product`.
    const ENTITY: &'static str;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);

    /// Fixed records inserted at startup, in id order.
    fn seed() -> Vec<Self>;
}
