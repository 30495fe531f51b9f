//! Repository implementations for the Shop domain
//!
//! Thin wrappers over the injected document store, one per collection.

pub mod carts;
pub mod products;
pub mod reviews;
pub mod users;

use std::sync::Arc;

use storefront_store::DocumentStore;

pub use carts::CartRepository;
pub use products::ProductRepository;
pub use reviews::ReviewRepository;
pub use users::UserRepository;

/// Combined repository access for the Shop domain
#[derive(Clone)]
pub struct ShopRepositories {
    store: Arc<dyn DocumentStore>,
    pub products: ProductRepository,
    pub reviews: ReviewRepository,
    pub carts: CartRepository,
    pub users: UserRepository,
}

impl ShopRepositories {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            products: ProductRepository::new(store.clone()),
            reviews: ReviewRepository::new(store.clone()),
            carts: CartRepository::new(store.clone()),
            users: UserRepository::new(store.clone()),
            store,
        }
    }

    /// Confirm the backing store is reachable
    pub async fn ping(&self) -> storefront_common::Result<()> {
        self.store.ping().await?;
        Ok(())
    }
}
