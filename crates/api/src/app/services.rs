use std::sync::Arc;

use workboard_auth::Hs256TokenCodec;
use workboard_store::{
    ApplicationStore, IdentityStore, InMemoryApplicationStore, InMemoryIdentityStore,
    InMemoryJobStore, JobStore,
};

/// Shared service handles for the HTTP handlers.
///
/// Store handles are trait objects so the wiring — not the handlers — decides
/// which implementation backs each collection.
pub struct AppServices {
    pub tokens: Arc<Hs256TokenCodec>,
    pub identities: Arc<dyn IdentityStore>,
    pub jobs: Arc<dyn JobStore>,
    pub applications: Arc<dyn ApplicationStore>,
}

pub fn build_services(jwt_secret: &str) -> AppServices {
    AppServices {
        tokens: Arc::new(Hs256TokenCodec::new(jwt_secret.as_bytes())),
        identities: Arc::new(InMemoryIdentityStore::new()),
        jobs: Arc::new(InMemoryJobStore::new()),
        applications: Arc::new(InMemoryApplicationStore::new()),
    }
}
