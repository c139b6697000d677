//! Service errors.

use bytes::Bytes;
use http_body_util::Full;
use hyper::StatusCode;
use hyper::header::{ALLOW, HeaderValue};
use serde::Serialize;
use vitrine_conf::ConfError;
use vitrine_render::RenderError;

/// Errors that stop the service from starting or serving.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Configuration error: {0}")]
	Conf(#[from] ConfError),

	#[error("Catalog error: {0}")]
	Catalog(String),
}

/// Result type for starting and running the service.
pub type Result<T> = std::result::Result<T, ServerError>;

/// A request that could not be answered with a success body.
///
/// Every variant renders as a JSON `{"error": "..."}` body.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
	#[error("{0}")]
	NotFound(String),

	#[error("method not allowed")]
	MethodNotAllowed,

	#[error("{0}")]
	BadRequest(String),

	#[error("request body exceeds {limit} bytes")]
	PayloadTooLarge { limit: usize },

	#[error("{0}")]
	Internal(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
	error: &'a str,
}

impl ApiError {
	/// Status code of the error response.
	pub fn status(&self) -> StatusCode {
		match self {
			Self::NotFound(_) => StatusCode::NOT_FOUND,
			Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
			Self::BadRequest(_) => StatusCode::BAD_REQUEST,
			Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
			Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	/// Builds the error response.
	pub fn into_response(self) -> hyper::Response<Full<Bytes>> {
		let message = self.to_string();
		let mut response = json_response(self.status(), &ErrorBody { error: &message });
		if matches!(self, Self::MethodNotAllowed) {
			response
				.headers_mut()
				.insert(ALLOW, HeaderValue::from_static("POST"));
		}
		response
	}
}

impl From<serde_json::Error> for ApiError {
	fn from(error: serde_json::Error) -> Self {
		Self::BadRequest(format!("invalid JSON body: {error}"))
	}
}

impl From<RenderError> for ApiError {
	fn from(error: RenderError) -> Self {
		tracing::error!(%error, "table render failed");
		Self::Internal("failed to render table".to_string())
	}
}

/// Serializes `body` into a JSON response with the given status.
pub fn json_response(status: StatusCode, body: &impl Serialize) -> hyper::Response<Full<Bytes>> {
	let (status, bytes) = match serde_json::to_vec(body) {
		Ok(bytes) => (status, Bytes::from(bytes)),
		Err(error) => {
			tracing::error!(%error, "failed to encode response body");
			(
				StatusCode::INTERNAL_SERVER_ERROR,
				Bytes::from_static(br#"{"error":"failed to encode response"}"#),
			)
		}
	};
	let mut response = hyper::Response::new(Full::new(bytes));
	*response.status_mut() = status;
	response.headers_mut().insert(
		hyper::header::CONTENT_TYPE,
		HeaderValue::from_static("application/json"),
	);
	response
}
