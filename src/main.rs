use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use cl_author_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config).expect("failed to initialise application state");

    log::info!("Starting authoring server on {}:{}", host, port);

    HttpServer::new(move || {
        // The caller is a browser page served from elsewhere
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(cors)
            .service(handlers::generate_analysis)
            .service(handlers::list_models)
            .service(handlers::render_snippets)
            .service(handlers::health_check)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
