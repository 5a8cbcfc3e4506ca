use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use quiz_service::{
    app_state::AppState, config::Config, configure_routes, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let bind_address = (config.web_server_host.clone(), config.web_server_port);

    let state = AppState::new(config).await.map_err(|e| {
        log::error!("Failed to initialize application state: {}", e);
        std::io::Error::other(e)
    })?;
    let data = web::Data::new(state);

    log::info!("Starting HTTP server on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .configure(configure_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}
