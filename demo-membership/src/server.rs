use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use std::io;
use std::net::SocketAddr;
use tokio::task::JoinHandle;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub(crate) fn spawn_http_server(port: u16, app: Router) -> JoinHandle<io::Result<()>> {
    tokio::spawn(async move {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        tracing::info!("HTTP server listening on {}", addr);
        axum_server::bind(addr)
            .serve(app.into_make_service())
            .await
            .inspect_err(|e| tracing::error!("HTTP server on {} stopped: {}", addr, e))
    })
}

pub(crate) async fn spawn_https_server(
    port: u16,
    app: Router,
    cert_path: String,
    key_path: String,
) -> io::Result<JoinHandle<io::Result<()>>> {
    let config = RustlsConfig::from_pem_file(&cert_path, &key_path).await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("HTTPS server listening on {} (cert: {})", addr, cert_path);
    Ok(tokio::spawn(async move {
        axum_server::bind_rustls(addr, config)
            .serve(app.into_make_service())
            .await
            .inspect_err(|e| tracing::error!("HTTPS server on {} stopped: {}", addr, e))
    }))
}

/// Resolves when the server task ends, with its bind or serve error if any
pub(crate) async fn wait_server(
    handle: JoinHandle<io::Result<()>>,
) -> Result<(), Box<dyn std::error::Error>> {
    handle.await??;
    Ok(())
}

pub(crate) fn init_tracing(app_name: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        #[cfg(debug_assertions)]
        {
            format!(
                "membership_auth_axum=trace,membership_auth=trace,{}=trace,info",
                app_name
            )
            .into()
        }

        #[cfg(not(debug_assertions))]
        {
            "info".into()
        }
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(debug_assertions)]
    tracing::info!("Debug mode enabled - showing detailed logs by default");
    tracing::info!("You can increase verbosity by setting the RUST_LOG environment variable.");
    tracing::info!("Example: RUST_LOG=debug ./{}", app_name.replace('_', "-"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;

    #[tokio::test]
    async fn test_http_bind_failure_is_reported() {
        let occupied = tokio::net::TcpListener::bind("0.0.0.0:0").await.unwrap();
        let port = occupied.local_addr().unwrap().port();

        let app = Router::new().route("/", get(|| async { "ok" }));
        let result = wait_server(spawn_http_server(port, app)).await;

        assert!(result.is_err());
    }
}
