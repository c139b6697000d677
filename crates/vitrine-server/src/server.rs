//! HTTP/1 connection loop.

use crate::api::VitrineApp;
use crate::error::{ApiError, Result};
use bytes::Bytes;
use http_body_util::{BodyExt, Full, Limited};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::Service;
use hyper_util::rt::TokioIo;
use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};

/// Largest request body read before answering 413.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Serves a [`VitrineApp`] over HTTP/1.1, one task per connection.
pub struct HttpServer {
	app: Arc<VitrineApp>,
}

impl HttpServer {
	/// Creates a server for `app`.
	pub fn new(app: Arc<VitrineApp>) -> Self {
		Self { app }
	}

	/// Binds `addr` and serves until an accept error.
	pub async fn listen(self, addr: SocketAddr) -> Result<()> {
		let listener = TcpListener::bind(addr).await?;
		self.serve(listener, std::future::pending()).await
	}

	/// Serves connections from `listener` until `shutdown` resolves.
	///
	/// Connections already accepted keep running to completion.
	pub async fn serve(self, listener: TcpListener, shutdown: impl Future<Output = ()>) -> Result<()> {
		let local_addr = listener.local_addr()?;
		tracing::info!(addr = %local_addr, "vitrine server listening");
		tokio::pin!(shutdown);

		loop {
			tokio::select! {
				accepted = listener.accept() => {
					let (stream, remote_addr) = accepted?;
					let app = self.app.clone();
					tokio::task::spawn(async move {
						if let Err(error) = Self::handle_connection(stream, remote_addr, app).await {
							tracing::warn!(%remote_addr, %error, "connection error");
						}
					});
				}
				_ = &mut shutdown => {
					tracing::info!("shutdown signal received, no longer accepting connections");
					break;
				}
			}
		}
		Ok(())
	}

	/// Serves the requests of one TCP connection.
	pub async fn handle_connection(
		stream: TcpStream,
		remote_addr: SocketAddr,
		app: Arc<VitrineApp>,
	) -> std::result::Result<(), hyper::Error> {
		let io = TokioIo::new(stream);
		let service = RequestService { app, remote_addr };
		http1::Builder::new().serve_connection(io, service).await
	}
}

struct RequestService {
	app: Arc<VitrineApp>,
	remote_addr: SocketAddr,
}

impl Service<hyper::Request<Incoming>> for RequestService {
	type Response = hyper::Response<Full<Bytes>>;
	type Error = hyper::Error;
	type Future = Pin<Box<dyn Future<Output = std::result::Result<Self::Response, Self::Error>> + Send + 'static>>;

	fn call(&self, req: hyper::Request<Incoming>) -> Self::Future {
		let app = self.app.clone();
		let remote_addr = self.remote_addr;

		Box::pin(async move {
			let (parts, body) = req.into_parts();
			let body = match Limited::new(body, MAX_BODY_BYTES).collect().await {
				Ok(collected) => collected.to_bytes(),
				Err(error) => match error.downcast::<hyper::Error>() {
					Ok(error) => return Err(*error),
					Err(error) => {
						tracing::debug!(%remote_addr, %error, "rejected request body");
						return Ok(ApiError::PayloadTooLarge {
							limit: MAX_BODY_BYTES,
						}
						.into_response());
					}
				},
			};
			let response = app.handle(&parts.method, parts.uri.path(), body).await;
			tracing::debug!(
				%remote_addr,
				method = %parts.method,
				path = parts.uri.path(),
				status = response.status().as_u16(),
				"handled request"
			);
			Ok(response)
		})
	}
}
