
use bytes::Bytes;
use fixtures::*;
use http_body_util::{BodyExt, Full};
use hyper::client::conn::http1;
use hyper_util::rt::TokioIo;
use rstest::*;
use serde_json::Value;
use std::net::SocketAddr;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;
use vitrine_server::{HttpServer, MAX_BODY_BYTES};

async fn send(addr: SocketAddr, method: &str, path: &str, body: &str) -> (u16, Value) {
	let stream = TcpStream::connect(addr).await.unwrap();
	let (mut sender, connection) = http1::handshake(TokioIo::new(stream)).await.unwrap();
	tokio::spawn(connection);

	let request = hyper::Request::builder()
		.method(method)
		.uri(path)
		.header("host", addr.to_string())
		.header("content-type", "application/json")
		.body(Full::new(Bytes::from(body.to_string())))
		.unwrap();
	let response = sender.send_request(request).await.unwrap();
	let status = response.status().as_u16();
	let bytes = response.into_body().collect().await.unwrap().to_bytes();
	(status, serde_json::from_slice(&bytes).unwrap())
}

#[rstest]
#[tokio::test]
async fn test_serves_until_shutdown(test_app: TestApp) {
	let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	let (stop, stopped) = oneshot::channel::<()>();
	let server = tokio::spawn(HttpServer::new(test_app.app.clone()).serve(listener, async {
		let _ = stopped.await;
	}));

	let (status, json) = send(addr, "POST", "/tables/rows", r#"{"tableId": "mugs"}"#).await;
	assert_eq!(status, 200);
	assert!(json["rowsMarkup"].as_str().unwrap().contains("data-product-id=\"101\""));

	let (status, json) = send(
		addr,
		"POST",
		"/cart/batch",
		r#"{"items": [{"productId": 101, "quantity": 1}]}"#,
	)
	.await;
	assert_eq!(status, 200);
	assert_eq!(json["added"], 1);

	let (status, _) = send(addr, "GET", "/cart/batch", "").await;
	assert_eq!(status, 405);

	let oversized = format!(r#"{{"tableId": "{}"}}"#, "m".repeat(MAX_BODY_BYTES));
	let (status, json) = send(addr, "POST", "/tables/rows", &oversized).await;
	assert_eq!(status, 413);
	assert_eq!(json["error"], format!("request body exceeds {MAX_BODY_BYTES} bytes"));

	stop.send(()).unwrap();
	server.await.unwrap().unwrap();
}
