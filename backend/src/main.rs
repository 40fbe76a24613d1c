use actix_cors::Cors;
use actix_files::{Files, NamedFile};
use actix_web::{middleware::Logger, web, App, HttpServer};

mod config;
mod handlers;

use config::Config;

async fn index(config: web::Data<Config>) -> actix_web::Result<NamedFile> {
    let static_path = config.static_files_path.as_deref().unwrap_or("./static");
    Ok(NamedFile::open(format!("{}/index.html", static_path))?)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Load configuration
    let config = Config::from_env().map_err(|e| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    log::info!("Starting server at {}:{}", config.host, config.port);

    match config.static_files_path {
        Some(ref path) => log::info!("Serving static files from: {}", path),
        None => log::info!("No static bundle configured, serving the rendered gallery at /"),
    }

    let config_data = web::Data::new(config.clone());
    let static_files_path = config.static_files_path.clone();

    // Start HTTP server
    HttpServer::new(move || {
        let config = config_data.clone();
        let cors_config = config.clone();
        let cors = Cors::default()
            .allowed_origin_fn(move |origin, _req_head| {
                origin
                    .to_str()
                    .map(|origin| cors_config.allows_origin(origin))
                    .unwrap_or(false)
            })
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec!["Content-Type"])
            .max_age(3600);

        let app = App::new()
            .app_data(config)
            .wrap(Logger::default())
            .wrap(cors)
            .configure(handlers::configure_routes)
            .configure(handlers::gallery::configure);

        // Serve the client bundle if configured, the server-rendered gallery otherwise
        if let Some(ref path) = static_files_path {
            app.service(Files::new("/pkg", format!("{}/pkg", path)))
                .service(Files::new("/assets", format!("{}/assets", path)))
                .default_service(web::route().to(index))
        } else {
            app.default_service(web::route().to(handlers::gallery::gallery_page))
        }
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
