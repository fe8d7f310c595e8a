use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::{error, info};

use travel_planner_api::app_state::AppState;
use travel_planner_api::config::AppConfig;
use travel_planner_api::configure_routes;
use travel_planner_api::db::catalog_source::load_catalog;
use travel_planner_api::db::plan_store::JsonFilePlanStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();
    info!("Starting with {:?}", config);

    let catalog = match load_catalog(&config.catalog_path) {
        Ok(catalog) => catalog,
        Err(err) => {
            error!(
                "Cannot start without the place catalog ({}): {}",
                config.catalog_path.display(),
                err
            );
            std::process::exit(1);
        }
    };

    let state = AppState::new(catalog, JsonFilePlanStore::new(config.plan_store_path.clone()));

    info!("Binding to {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
