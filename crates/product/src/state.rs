use crate::di::DependenciesInject;
use shared::config::ConnectionPool;

#[derive(Clone, Debug)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    pub fn new(pool: ConnectionPool) -> Self {
        Self::with_dependencies(DependenciesInject::new(pool))
    }

    pub fn with_dependencies(di_container: DependenciesInject) -> Self {
        Self { di_container }
    }
}
