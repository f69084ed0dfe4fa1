use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use movie_catalog_api::{catalog_config, not_found, CatalogRootSpan};
use movie_catalog_common::environment::get_env_var_or;
use movie_catalog_common::environment::variables::{WEB_HOST, WEB_PORT};
use movie_catalog_db::PgCatalogStore;
use std::str::FromStr;
use tracing_actix_web::TracingLogger;

pub fn initialize_web_server(store: PgCatalogStore) -> Result<Server> {
    let address = format!("{}:{}", get_env_var_or(WEB_HOST, "127.0.0.1"), get_port()?);
    let http_server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::<CatalogRootSpan>::new())
            .app_data(web::Data::new(store.clone()))
            .service(web::scope("/api").configure(catalog_config::<PgCatalogStore>))
            .default_service(web::route().to(not_found))
    })
    .bind(&address)
    .with_context(|| format!("Failed to bind the web server to {}.", address))?
    .run();
    Ok(http_server)
}

fn get_port() -> Result<String> {
    let value = get_env_var_or(WEB_PORT, "8080");
    match u16::from_str(&value) {
        Ok(_) => Ok(value),
        Err(e) => Err(e).context(format!("Failed to parse \"{}\" as a valid port.", value)),
    }
}
