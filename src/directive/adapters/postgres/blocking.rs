//! Offloading Diesel calls from the async executor.

use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

use crate::directive::ports::{CrossReferenceError, DirectoryError};

/// `PostgreSQL` connection pool shared by the directive adapters.
pub type DirectivePgPool = Pool<ConnectionManager<PgConnection>>;

/// Port errors able to wrap a persistence failure.
pub(super) trait PersistenceFailure: Send + 'static {
    fn persistence_failure(err: impl std::error::Error + Send + Sync + 'static) -> Self;
}

impl PersistenceFailure for DirectoryError {
    fn persistence_failure(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::persistence(err)
    }
}

impl PersistenceFailure for CrossReferenceError {
    fn persistence_failure(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::persistence(err)
    }
}

/// Runs `operation` with a pooled connection on the blocking thread pool.
pub(super) async fn run_blocking<F, T, E>(pool: &DirectivePgPool, operation: F) -> Result<T, E>
where
    F: FnOnce(&mut PgConnection) -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: PersistenceFailure,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool.get().map_err(E::persistence_failure)?;
        operation(&mut connection)
    })
    .await
    .map_err(E::persistence_failure)?
}
