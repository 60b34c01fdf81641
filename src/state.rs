use crate::{
    config::RuntimeConfiguration,
    error::{GetDatabaseConnectionSnafu, MigrateSnafu, OpenDatabaseSnafu, RollbookResult},
};
use snafu::ResultExt;
use sqlx::{Pool, Sqlite, Transaction, pool::PoolConnection, sqlite::SqlitePoolOptions};
use std::ops::Deref;

#[derive(Clone, Debug)]
pub struct AppState {
    pool: Pool<Sqlite>,
    config: RuntimeConfiguration,
}

impl AppState {
    pub async fn new(
        options: SqlitePoolOptions,
        config: RuntimeConfiguration,
    ) -> RollbookResult<Self> {
        let pool = options
            .connect(&config.db_config().get_db_path())
            .await
            .context(OpenDatabaseSnafu)?;

        sqlx::migrate!().run(&pool).await.context(MigrateSnafu)?;

        Ok(Self { pool, config })
    }

    pub async fn get_connection(&self) -> RollbookResult<PoolConnection<Sqlite>> {
        self.pool
            .acquire()
            .await
            .context(GetDatabaseConnectionSnafu)
    }

    /// Mutating handlers run their store calls inside one of these so each
    /// request commits or rolls back atomically. The test suites also lean
    /// on it to undo seeded mutations.
    pub async fn get_transaction(&self) -> RollbookResult<Transaction<'static, Sqlite>> {
        self.pool.begin().await.context(GetDatabaseConnectionSnafu)
    }

    #[must_use]
    pub const fn config(&self) -> &RuntimeConfiguration {
        &self.config
    }
}

impl Deref for AppState {
    type Target = Pool<Sqlite>;

    fn deref(&self) -> &Self::Target {
        &self.pool
    }
}
