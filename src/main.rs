use pingpong::config::config;
use pingpong::db::database_service::DatabaseService;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), sea_orm::DbErr> {
    env_logger::init();
    let config = config();

    match DatabaseService::from_config(config).await {
        Ok(_) => {
            info!("Schema is up to date.");
            Ok(())
        }
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            Err(e)
        }
    }
}
