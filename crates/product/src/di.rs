use crate::{
    abstract_trait::product::repository::{
        DynProductCommandRepository, DynProductQueryRepository,
    },
    repository::ProductRepository,
};
use shared::config::ConnectionPool;
use std::fmt;

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryRepository,
    pub product_command: DynProductCommandRepository,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"Arc<dyn ProductQueryRepositoryTrait>")
            .field("product_command", &"Arc<dyn ProductCommandRepositoryTrait>")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let ProductRepository { query, command } = ProductRepository::new(pool);

        Self {
            product_query: query,
            product_command: command,
        }
    }
}
