//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use hello_server::{handler, server};
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::{Method, Request, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;

/// A response reduced to the parts the tests compare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Bytes,
}

/// Start the greeting server on an ephemeral loopback port.
pub async fn start_server() -> SocketAddr {
    let listener = server::bind("127.0.0.1:0".parse().unwrap()).unwrap();
    let addr = listener.local_addr().unwrap();
    let mux = Arc::new(handler::greeting_mux().unwrap());

    tokio::spawn(server::serve(listener, mux));
    addr
}

/// Open a connection and send one request on it.
pub async fn request(addr: SocketAddr, method: Method, path: &str) -> Reply {
    let mut client = Client::connect(addr).await;
    client.send(method, path).await
}

/// An HTTP/1.1 client connection, reused across requests.
pub struct Client {
    addr: SocketAddr,
    sender: hyper::client::conn::http1::SendRequest<Empty<Bytes>>,
}

impl Client {
    pub async fn connect(addr: SocketAddr) -> Self {
        let stream = TcpStream::connect(addr).await.unwrap();
        let (sender, conn) = hyper::client::conn::http1::handshake(TokioIo::new(stream))
            .await
            .unwrap();
        tokio::spawn(async move {
            let _ = conn.await;
        });
        Self { addr, sender }
    }

    pub async fn send(&mut self, method: Method, path: &str) -> Reply {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Host", self.addr.to_string())
            .body(Empty::<Bytes>::new())
            .unwrap();

        self.sender.ready().await.unwrap();
        let resp = self.sender.send_request(req).await.unwrap();
        let status = resp.status();
        let content_type = resp
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        let body = resp.into_body().collect().await.unwrap().to_bytes();

        Reply {
            status,
            content_type,
            body,
        }
    }
}
