use tracing::{error, info};

use projecthub::file::FileStorage;
use projecthub::{Config, Database, WebServer};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    // Initialize logging
    if let Err(e) = projecthub::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        projecthub::logging::init_console_only(&config.logging.level);
    }

    info!("ProjectHub starting");

    let db = match Database::open(&config.database.path).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to open database {}: {}", config.database.path, e);
            std::process::exit(1);
        }
    };
    info!("Database opened at {}", config.database.path);

    let storage = match FileStorage::new(&config.files.storage_root) {
        Ok(storage) => storage,
        Err(e) => {
            error!("Failed to initialize file storage: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "File storage at {}/{}",
        storage.root().display(),
        config.files.base_dir
    );

    let server = match WebServer::new(&config, db, storage) {
        Ok(server) => server,
        Err(e) => {
            error!("Failed to create web server: {}", e);
            std::process::exit(1);
        }
    };

    info!("Serving API on http://{}/api/v1", server.addr());
    if let Err(e) = server.run().await {
        error!("Web server error: {}", e);
        std::process::exit(1);
    }
}
