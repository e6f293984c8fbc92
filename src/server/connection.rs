// Connection handling: accept loop and per-connection hyper service.

use crate::domain::ports::HttpClient;
use crate::server::router::{handle_request, AppState};
use crate::utils::error::{LookupError, Result};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};

pub async fn bind(addr: &str) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|e| LookupError::ServerError {
            message: format!("Failed to bind {}: {}", addr, e),
        })
}

/// Accepts connections until `shutdown` resolves.
///
/// Connections already being served keep running on their own tasks.
pub async fn serve<H, F>(listener: TcpListener, state: Arc<AppState<H>>, shutdown: F) -> Result<()>
where
    H: HttpClient + 'static,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => handle_connection(stream, peer_addr, Arc::clone(&state)),
                    Err(e) => tracing::error!("Failed to accept connection: {}", e),
                }
            }
            _ = &mut shutdown => {
                tracing::info!("Shutdown signal received, no longer accepting connections");
                break;
            }
        }
    }

    Ok(())
}

fn handle_connection<H>(stream: TcpStream, peer_addr: SocketAddr, state: Arc<AppState<H>>)
where
    H: HttpClient + 'static,
{
    tracing::debug!("Accepted connection from {}", peer_addr);

    tokio::spawn(async move {
        let io = TokioIo::new(stream);
        let service = service_fn(move |req| handle_request(req, Arc::clone(&state)));

        if let Err(err) = http1::Builder::new()
            .keep_alive(true)
            .serve_connection(io, service)
            .await
        {
            tracing::debug!("Connection error from {}: {}", peer_addr, err);
        }
    });
}
