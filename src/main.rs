use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use khmer_sentiment::api::{configure_routes, handlers, AppState};
use khmer_sentiment::banner;
use khmer_sentiment::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Print the startup banner
    banner::print_banner();

    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  Warning: Could not load .env file: {}", e);
        eprintln!("   Make sure SENTIMENT_API_URL is set in your environment");
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let app_config = match std::env::var("SENTIMENT_CONFIG") {
        Ok(path) => {
            println!("📄 Loading configuration from {}", path);
            AppConfig::from_file(&path)
        }
        Err(_) => AppConfig::from_env(),
    }
    .map_err(|e| {
        eprintln!("❌ {}", e);
        std::io::Error::other(e)
    })?;

    println!("✅ Sentiment API: {}", app_config.sentiment_api.endpoint());

    let bind = (app_config.server.host.clone(), app_config.server.port);
    let state = AppState::new(app_config);

    println!("🚀 Starting server...");
    println!("📊 Frontend available at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
            .route("/{_:.*}", web::get().to(handlers::static_file_handler))
    })
    .bind(bind)?
    .run()
    .await
}
