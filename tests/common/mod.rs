//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use http_proxy::{HttpServer, ProxyConfig, Shutdown};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A request as the mock backend saw it on the wire.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub head: String,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn request_line(&self) -> &str {
        self.head.lines().next().unwrap_or_default()
    }

    /// Header value, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<String> {
        self.head.lines().skip(1).find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim()
                .eq_ignore_ascii_case(name)
                .then(|| value.trim().to_string())
        })
    }
}

/// Raw TCP backend that records every request and answers with a fixed
/// status and body.
pub struct MockBackend {
    pub addr: SocketAddr,
    pub hits: Arc<AtomicUsize>,
    requests: mpsc::UnboundedReceiver<CapturedRequest>,
}

impl MockBackend {
    pub async fn start(status: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let (tx, requests) = mpsc::unbounded_channel();

        let counter = hits.clone();
        tokio::spawn(async move {
            loop {
                match listener.accept().await {
                    Ok((socket, _)) => {
                        let tx = tx.clone();
                        let counter = counter.clone();
                        tokio::spawn(async move {
                            if let Some(captured) = serve_one(socket, status, body).await {
                                counter.fetch_add(1, Ordering::SeqCst);
                                let _ = tx.send(captured);
                            }
                        });
                    }
                    Err(_) => break,
                }
            }
        });

        Self {
            addr,
            hits,
            requests,
        }
    }

    pub fn port(&self) -> String {
        self.addr.port().to_string()
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Next request the backend received.
    pub async fn next_request(&mut self) -> CapturedRequest {
        tokio::time::timeout(std::time::Duration::from_secs(5), self.requests.recv())
            .await
            .expect("backend saw no request")
            .expect("backend channel closed")
    }
}

async fn serve_one(mut socket: TcpStream, status: &str, body: &str) -> Option<CapturedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let head_end = loop {
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
    let mut captured = CapturedRequest {
        head,
        body: Vec::new(),
    };
    let content_length: usize = captured
        .header("content-length")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    let mut request_body = buf[head_end + 4..].to_vec();
    while request_body.len() < content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        request_body.extend_from_slice(&chunk[..n]);
    }
    captured.body = request_body;

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nX-Backend: mock\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;

    Some(captured)
}

/// A running proxy bound to an ephemeral port.
pub struct RunningProxy {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

impl RunningProxy {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

pub async fn start_proxy(config: ProxyConfig) -> RunningProxy {
    let server = HttpServer::new(config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    RunningProxy {
        addr,
        shutdown,
        handle,
    }
}

/// Proxy config targeting `127.0.0.1:port`.
pub fn config_for(port: &str, with_cors: bool) -> ProxyConfig {
    ProxyConfig {
        target_host: "127.0.0.1".into(),
        target_port: Some(port.to_string()),
        source_addr: "127.0.0.1".into(),
        source_port: "0".into(),
        with_cors,
        ..Default::default()
    }
}

/// A port with nothing listening on it.
pub async fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port.to_string()
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
