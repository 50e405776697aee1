use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info, warn};
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use weaving_net::cache::enums::cache_engine::CacheEngine;
use weaving_net::cache::structs::cache_connector::CacheConnector;
use weaving_net::common::common::setup_logging;
use weaving_net::config::structs::configuration::Configuration;
use weaving_net::dao::structs::repositories::Repositories;
use weaving_net::database::structs::database_connector::DatabaseConnector;
use weaving_net::model::structs::educations::Educations;
use weaving_net::model::structs::projects::Projects;
use weaving_net::model::structs::skills::Skills;
use weaving_net::model::structs::user_introductions::UserIntroductions;
use weaving_net::model::structs::users::Users;
use weaving_net::model::structs::workexperiences::Workexperiences;
use weaving_net::model::traits::entity::Entity;
use weaving_net::structs::Cli;

async fn create_tables(store: &DatabaseConnector) -> Result<(), sqlx::Error> {
    store.create_table::<Users>().await?;
    store.create_table::<Educations>().await?;
    store.create_table::<Projects>().await?;
    store.create_table::<Skills>().await?;
    store.create_table::<Workexperiences>().await?;
    store.create_table::<UserIntroductions>().await?;
    Ok(())
}

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("{e}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let _sentry_guard: ClientInitGuard;
    if config.sentry.enabled {
        _sentry_guard = sentry::init((config.sentry.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry.debug,
            sample_rate: config.sentry.sample_rate,
            max_breadcrumbs: config.sentry.max_breadcrumbs,
            attach_stacktrace: config.sentry.attach_stacktrace,
            send_default_pii: config.sentry.send_default_pii,
            traces_sample_rate: config.sentry.traces_sample_rate,
            ..Default::default()
        }));
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let store = match DatabaseConnector::connect(&config.database).await {
                Ok(store) => Arc::new(store),
                Err(e) => {
                    error!("[BOOT] Unable to connect to the {} database: {}", config.database.engine, e);
                    sentry::capture_error(&e);
                    exit(1);
                }
            };

            if args.create_databases {
                info!("[BOOT] Database creation triggered for {}.", store.builder().engine_name());
                if let Err(e) = create_tables(&store).await {
                    error!("[BOOT] Unable to create tables: {}", e);
                    exit(1);
                }
                info!("[BOOT] All tables created, exiting.");
                return Ok(());
            }

            let cache = if config.cache.enabled {
                match CacheConnector::new(&config.cache).await {
                    Ok(connector) => {
                        if let Err(e) = connector.ping().await {
                            error!("[BOOT] Cache {} did not answer: {}", config.cache.engine, e);
                            exit(1);
                        }
                        Some(connector)
                    }
                    Err(e) => {
                        error!("[BOOT] Unable to connect to the {} cache: {}", config.cache.engine, e);
                        exit(1);
                    }
                }
            } else {
                warn!("[BOOT] Cache disabled, every read hits the database");
                None
            };

            let repositories = Arc::new(Repositories::new(store.clone(), cache.clone(), &config.cache));
            info!(
                "[BOOT] Data access ready for {} (ttl {:?}, placeholder ttl {:?})",
                Configuration::tables().join(", "),
                config.cache.ttl_for(Users::TABLE),
                config.cache.not_found_ttl()
            );

            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(_) => {
                    error!("[BOOT] Unable to install the shutdown handler");
                    exit(1);
                }
            };

            if let Some(connector) = cache.filter(|connector| connector.engine() == CacheEngine::memory) {
                let purge_handler = tokio_shutdown.clone();
                let purge_interval = config.cache.ttl.max(1);
                info!("[BOOT] Starting thread for memory cache purge with {purge_interval} seconds delay...");
                tokio::spawn(async move {
                    let mut interval = tokio::time::interval(Duration::from_secs(purge_interval));
                    loop {
                        tokio::select! {
                            _ = interval.tick() => {
                                let removed = connector.purge_expired();
                                if removed > 0 {
                                    info!("[CACHE] Purged {removed} expired entries");
                                }
                            }
                            _ = purge_handler.handle() => {
                                info!("[BOOT] Shutting down thread for memory cache purge...");
                                return;
                            }
                        }
                    }
                });
            }

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");
                    tokio_shutdown.handle().await;
                    drop(repositories);
                    info!("Server shutting down completed");
                    Ok(())
                }
            }
        })
}
