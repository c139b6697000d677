//! `vitrine-server [SETTINGS_FILE]`
//!
//! Serves the tables of the configured table file over the products of the
//! configured JSON catalog. Settings come from the optional `.toml`/`.json`
//! file and `VITRINE_*` environment variables.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::net::TcpListener;
use vitrine_conf::{ServerSettings, TableRegistry};
use vitrine_query::InMemoryDataSource;
use vitrine_render::TableRenderer;
use vitrine_server::{HttpServer, InMemoryCart, VitrineApp, init_tracing, load_catalog};

#[tokio::main]
async fn main() -> ExitCode {
	match run().await {
		Ok(()) => ExitCode::SUCCESS,
		Err(error) => {
			tracing::error!(%error, "vitrine server stopped");
			eprintln!("vitrine-server: {error}");
			ExitCode::FAILURE
		}
	}
}

async fn run() -> vitrine_server::Result<()> {
	let settings_path = std::env::args_os().nth(1).map(PathBuf::from);
	let settings = ServerSettings::load(settings_path.as_deref())?;
	init_tracing(&settings.log_level);
	let addr = settings.bind_addr()?;

	let tables = match &settings.tables {
		Some(path) => TableRegistry::load(path)?,
		None => {
			tracing::warn!("no table file configured, every table request will be answered with 404");
			TableRegistry::new()
		}
	};
	let products = match &settings.catalog {
		Some(path) => load_catalog(path)?,
		None => Vec::new(),
	};

	let renderer = TableRenderer::new(Arc::new(InMemoryDataSource::new(products.clone())));
	let app = VitrineApp::new(
		Arc::new(renderer),
		Arc::new(tables),
		Arc::new(InMemoryCart::with_products(products)),
	)
	.with_page_url(settings.page_url.clone());

	let listener = TcpListener::bind(addr).await?;
	HttpServer::new(Arc::new(app))
		.serve(listener, shutdown_signal())
		.await
}

async fn shutdown_signal() {
	if let Err(error) = tokio::signal::ctrl_c().await {
		tracing::warn!(%error, "cannot listen for ctrl-c, running until killed");
		std::future::pending::<()>().await;
	}
}
