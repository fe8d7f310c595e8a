use actix_web::web;

pub mod app_state;
pub mod config;
pub mod db;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

/// Mounts every route. Shared by the server binary and the integration tests.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(routes::health::health_check))
        .service(
            web::scope("/api")
                .wrap(middleware::identity::IdentityMiddleware)
                .route("/auth/signin", web::post().to(routes::account::signin))
                .service(
                    web::scope("/catalog")
                        .route("/regions", web::get().to(routes::catalog::get_regions))
                        .route(
                            "/regions/{region}/localities",
                            web::get().to(routes::catalog::get_localities),
                        )
                        .route(
                            "/regions/{region}/categories",
                            web::get().to(routes::catalog::get_categories),
                        )
                        .route("/seasons", web::get().to(routes::catalog::get_seasons)),
                )
                .route("/places", web::get().to(routes::places::get_places))
                .route("/places/{name}", web::get().to(routes::places::get_place))
                .service(
                    web::scope("/plans")
                        .route("", web::get().to(routes::plans::get_plans))
                        .route("", web::delete().to(routes::plans::clear_all))
                        .route("/places", web::post().to(routes::plans::add_place))
                        .route(
                            "/regions/{region}",
                            web::delete().to(routes::plans::remove_region),
                        ),
                )
                .route("/chat", web::post().to(routes::chat::chat)),
        );
}
