use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

use crate::config::EnvConfig;

#[derive(Clone)]
pub struct DatabaseService {
    pub(crate) database_connection: DatabaseConnection,
}

impl DatabaseService {
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        Self::connect(ConnectOptions::new(uri.to_owned())).await
    }

    pub async fn from_config(config: &EnvConfig) -> Result<Self, DbErr> {
        let mut opts = ConnectOptions::new(config.db_url.clone());
        opts.max_connections(config.db_max_connections);
        Self::connect(opts).await
    }

    pub async fn connect(opts: ConnectOptions) -> Result<Self, DbErr> {
        info!("Connecting to database...");
        let db = Database::connect(opts).await?;
        info!("Running migrations...");
        Migrator::up(&db, None).await?;
        info!("Database ready.");
        Ok(Self { database_connection: db })
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.database_connection
    }
}
