use actix_web::{App, HttpServer, web};
use mock_auth_api::application::auth_service::AuthService;
use mock_auth_api::data::user_directory::InMemoryUserDirectory;
use mock_auth_api::infrastructure::config::AppConfig;
use mock_auth_api::infrastructure::logging::init_logging;
use mock_auth_api::infrastructure::security::verifier_for;
use mock_auth_api::presentation::handlers::AppState;
use mock_auth_api::presentation::middleware::RequestTracing;
use mock_auth_api::presentation::routes::{API_PREFIX, api_cors, configure_routes};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    init_logging(&config.log_level);
    info!(
        scheme = %config.password_scheme,
        origins = ?config.cors_origins,
        "Configuration loaded"
    );

    let verifier = verifier_for(config.password_scheme);
    let directory = InMemoryUserDirectory::seeded(verifier.as_ref())?;
    let users = directory.user_count().await;
    info!(users = users, "User directory ready");

    let auth_service = AuthService::new(Arc::new(directory), verifier);
    let state = web::Data::new(AppState { auth_service });

    let origins = config.cors_origins.clone();
    let server = HttpServer::new(move || {
        tracing::trace!("Creating new application instance");
        App::new()
            .app_data(state.clone())
            .wrap(RequestTracing)
            .configure(configure_routes)
            .service(
                web::scope(API_PREFIX)
                    .wrap(api_cors(&origins))
                    .configure(configure_routes),
            )
    });

    let bind_addr = config.bind_address();
    info!(address = %bind_addr, "Binding server to address");
    let server = server.bind(bind_addr.as_str())?;

    info!(
        address = %bind_addr,
        routes = %"GET /example, POST /register, POST /login, POST /emailConfirm (also under /api)",
        "Starting HTTP server"
    );
    server.run().await?;
    Ok(())
}
