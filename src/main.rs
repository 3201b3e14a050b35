use crate::config::Config;
use crate::loader::HttpDataSource;
use crate::responses::error_response;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod auth;
mod config;
mod domain;
mod errors;
mod loader;
mod responses;
mod router;
mod sources;
mod state;
mod templates;
mod views;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let catalog = match config.load_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(error = %e, "catalog could not be loaded");
            std::process::exit(1);
        }
    };

    let source = match HttpDataSource::new(&config) {
        Ok(source) => source,
        Err(e) => {
            error!(error = %e, "http client could not be built");
            std::process::exit(1);
        }
    };

    let addr = config.addr;
    let workers = config.workers;
    let state = Arc::new(AppState::new(config, catalog, Box::new(source)));

    info!(%addr, workers, "starting server");

    let server = Server::bind(&addr).max_workers(workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => {
            if err.status() >= 500 {
                error!(error = %err, "request failed");
            } else {
                info!(error = %err, "request rejected");
            }
            error_response(err)
        }
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down");
}
