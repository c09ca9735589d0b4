//! Where interaction payloads come from.

use std::cell::Cell;
use std::collections::HashMap;

use async_trait::async_trait;

use super::error::LoadFailure;

/// Fetches the raw bytes of a delimited table.
///
/// One call is one attempt; implementations must not retry.
#[async_trait(?Send)]
pub trait DataSource {
	/// Raw payload at `location`, or why it could not be fetched.
	async fn fetch(&self, location: &str) -> Result<Vec<u8>, LoadFailure>;
}

/// Plain HTTP GET. Any non-2xx status is a failure.
#[derive(Clone, Debug, Default)]
pub struct HttpSource {
	client: reqwest::Client,
}

impl HttpSource {
	/// Source backed by a default `reqwest` client.
	pub fn new() -> Self {
		Self::default()
	}

	/// Source backed by a preconfigured client.
	pub fn with_client(client: reqwest::Client) -> Self {
		Self { client }
	}
}

#[async_trait(?Send)]
impl DataSource for HttpSource {
	async fn fetch(&self, location: &str) -> Result<Vec<u8>, LoadFailure> {
		let response = self
			.client
			.get(location)
			.send()
			.await
			.map_err(|e| LoadFailure::transport(location, e))?;

		let status = response.status();
		if !status.is_success() {
			return Err(LoadFailure::status(location, status.as_u16()));
		}

		let body = response
			.bytes()
			.await
			.map_err(|e| LoadFailure::transport(location, e))?;
		Ok(body.to_vec())
	}
}

/// Serves fixed payloads from memory and counts fetch attempts.
///
/// Locations without a registered payload answer with HTTP 404.
#[derive(Debug, Default)]
pub struct StaticSource {
	payloads: HashMap<String, Result<Vec<u8>, LoadFailure>>,
	fetches: Cell<usize>,
}

impl StaticSource {
	/// Source that answers 404 everywhere until payloads are added.
	pub fn new() -> Self {
		Self::default()
	}

	/// Serve `payload` for `location`.
	pub fn with_payload(mut self, location: &str, payload: impl Into<Vec<u8>>) -> Self {
		self.payloads
			.insert(location.to_string(), Ok(payload.into()));
		self
	}

	/// Fail every fetch of `location` with `failure`.
	pub fn with_failure(mut self, location: &str, failure: LoadFailure) -> Self {
		self.payloads.insert(location.to_string(), Err(failure));
		self
	}

	/// Number of `fetch` calls served so far.
	pub fn fetches(&self) -> usize {
		self.fetches.get()
	}
}

#[async_trait(?Send)]
impl DataSource for StaticSource {
	async fn fetch(&self, location: &str) -> Result<Vec<u8>, LoadFailure> {
		self.fetches.set(self.fetches.get() + 1);
		match self.payloads.get(location) {
			Some(payload) => payload.clone(),
			None => Err(LoadFailure::status(location, 404)),
		}
	}
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
	use std::io::{Read, Write};
	use std::net::TcpListener;
	use std::thread;

	use super::*;

	/// Answer exactly one request with `response`, returning the URL to hit.
	fn serve_once(response: &'static str) -> String {
		let listener = TcpListener::bind("127.0.0.1:0").unwrap();
		let url = format!("http://{}/ppi.csv", listener.local_addr().unwrap());
		thread::spawn(move || {
			let (mut stream, _) = listener.accept().unwrap();
			let mut request = Vec::new();
			let mut buf = [0u8; 1024];
			while !request.windows(4).any(|w| w == b"\r\n\r\n") {
				match stream.read(&mut buf) {
					Ok(0) | Err(_) => break,
					Ok(n) => request.extend_from_slice(&buf[..n]),
				}
			}
			stream.write_all(response.as_bytes()).unwrap();
			stream.flush().unwrap();
		});
		url
	}

	fn source() -> HttpSource {
		HttpSource::with_client(reqwest::Client::builder().no_proxy().build().unwrap())
	}

	#[tokio::test]
	async fn success_returns_body_bytes() {
		let url = serve_once(
			"HTTP/1.1 200 OK\r\nContent-Type: text/csv\r\nContent-Length: 30\r\nConnection: close\r\n\r\nProtein_A,Protein_B\nTP53,MDM2\n",
		);

		let body = source().fetch(&url).await.unwrap();
		assert_eq!(body, b"Protein_A,Protein_B\nTP53,MDM2\n");
	}

	#[tokio::test]
	async fn server_error_is_a_status_failure() {
		let url = serve_once(
			"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
		);

		let failure = source().fetch(&url).await.unwrap_err();
		assert_eq!(failure, LoadFailure::status(&url, 500));
	}

	#[tokio::test]
	async fn refused_connection_is_a_transport_failure() {
		let url = {
			let listener = TcpListener::bind("127.0.0.1:0").unwrap();
			format!("http://{}/ppi.csv", listener.local_addr().unwrap())
		};

		match source().fetch(&url).await {
			Err(LoadFailure::Transport { location, .. }) => assert_eq!(location, url),
			other => panic!("expected a transport failure, got {other:?}"),
		}
	}
}
