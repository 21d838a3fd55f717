use std::sync::Arc;

use axum::Router;
use dotenvy::dotenv;

use membership_auth::generate_signing_secret;
use membership_auth_axum::{
    AuthConfig, SessionAuthenticator, SharedAuthenticator, membership_auth_router,
};

mod protected;
mod server;
use server::{init_tracing, spawn_http_server, spawn_https_server, wait_server};

fn env_port(var: &str, default: u16) -> Result<u16, Box<dyn std::error::Error>> {
    match std::env::var(var) {
        Ok(value) => Ok(value.parse()?),
        Err(_) => Ok(default),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::args().any(|arg| arg == "--generate-secret") {
        println!("{}", generate_signing_secret()?);
        return Ok(());
    }

    dotenv().ok();
    init_tracing("demo_membership");

    let config = AuthConfig::from_env()?;
    let auth: SharedAuthenticator = Arc::new(SessionAuthenticator::new(config));
    if !auth.secure_cookies() {
        tracing::warn!("Session cookies are not marked Secure; set APP_ENV=production behind HTTPS");
    }

    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| "Failed to install default CryptoProvider")?;

    let app: Router = Router::new()
        .merge(protected::router(auth.clone()))
        .merge(membership_auth_router())
        .with_state(auth);

    let http_server = spawn_http_server(env_port("PORT", 3000)?, app.clone());

    match (std::env::var("TLS_CERT_PATH"), std::env::var("TLS_KEY_PATH")) {
        (Ok(cert_path), Ok(key_path)) => {
            let https_server =
                spawn_https_server(env_port("HTTPS_PORT", 3443)?, app, cert_path, key_path)
                    .await?;
            tokio::try_join!(wait_server(http_server), wait_server(https_server))?;
        }
        _ => {
            wait_server(http_server).await?;
        }
    }
    Ok(())
}
