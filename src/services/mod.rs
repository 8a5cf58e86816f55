//! Business logic services

pub mod auth;
pub mod catalog;
pub mod lending;
pub mod members;

use crate::{error::AppResult, repository::Repository, storage::KvStore};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub catalog: catalog::CatalogService,
    pub members: members::MembersService,
    pub lending: lending::LendingService,
}

impl Services {
    /// Create all services with the given repository and key-value store
    pub fn new(repository: Repository, kv: KvStore) -> AppResult<Self> {
        Ok(Self {
            auth: auth::AuthService::new(kv),
            catalog: catalog::CatalogService::new(repository.clone()),
            members: members::MembersService::new(repository.clone()),
            lending: lending::LendingService::new(repository),
        })
    }
}
