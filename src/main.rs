use catalog::CatalogImporter;
use catalog::utils::TimeEstimation;
use database::GameStore;
use env_logger::Env;
use log::info;
use web::{AppState, GameCatalogServer, ServerConfig};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let config = ServerConfig::from_env()?;

    let (store, estimated) = TimeEstimation::estimate(|| GameStore::open(&config.database_path));
    let store = store?;

    info!("database {} opened: {} ms", config.database_path.display(), estimated);

    let importer = CatalogImporter::new(config.catalog.clone(), config.catalog_timeout)?;

    let state = AppState::new(store, importer);

    GameCatalogServer::new(config, state).run().await?;

    Ok(())
}
