//! Minimal HTTP/1.1 server serving canned responses on localhost.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// A canned response.
#[derive(Debug, Clone)]
pub struct Route {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
    pub delay: Duration,
}

impl Route {
    pub fn pdf(body: &[u8]) -> Self {
        Self::new(200, Some("application/pdf"), body)
    }

    pub fn html(body: &str) -> Self {
        Self::new(200, Some("text/html; charset=utf-8"), body.as_bytes())
    }

    pub fn new(status: u16, content_type: Option<&str>, body: &[u8]) -> Self {
        Self {
            status,
            content_type: content_type.map(String::from),
            body: body.to_vec(),
            delay: Duration::ZERO,
        }
    }

    /// Holds the response back for `delay` after the request is read.
    pub fn with_delay(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }
}

/// Requests currently being answered, and the most seen at once.
#[derive(Debug, Default)]
struct Gauge {
    current: AtomicUsize,
    peak: AtomicUsize,
}

impl Gauge {
    fn enter(&self) {
        let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
    }

    fn leave(&self) {
        self.current.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Server answering with [`Route`]s keyed by request path (query included).
///
/// Unknown paths get a `404`. Every request is counted, and so is the
/// number of requests in flight.
pub struct TestServer {
    addr: SocketAddr,
    hits: Arc<Mutex<HashMap<String, usize>>>,
    gauge: Arc<Gauge>,
}

impl TestServer {
    pub async fn start(routes: Vec<(&str, Route)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");
        let addr = listener.local_addr().expect("Failed to get local address");
        let routes: Arc<HashMap<String, Route>> = Arc::new(
            routes
                .into_iter()
                .map(|(path, route)| (path.to_string(), route))
                .collect(),
        );
        let hits = Arc::new(Mutex::new(HashMap::new()));
        let gauge = Arc::new(Gauge::default());

        let server_hits = hits.clone();
        let server_gauge = gauge.clone();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let routes = routes.clone();
                let hits = server_hits.clone();
                let gauge = server_gauge.clone();
                tokio::spawn(async move {
                    let _ = handle(stream, &routes, &hits, &gauge).await;
                });
            }
        });

        Self { addr, hits, gauge }
    }

    /// Absolute URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Number of requests received for `path`.
    pub fn hits(&self, path: &str) -> usize {
        *self.hits.lock().unwrap().get(path).unwrap_or(&0)
    }

    /// Number of requests received overall.
    pub fn total_hits(&self) -> usize {
        self.hits.lock().unwrap().values().sum()
    }

    /// Highest number of requests answered at the same time.
    pub fn peak_in_flight(&self) -> usize {
        self.gauge.peak.load(Ordering::SeqCst)
    }
}

async fn handle(
    mut stream: TcpStream,
    routes: &HashMap<String, Route>,
    hits: &Mutex<HashMap<String, usize>>,
    gauge: &Gauge,
) -> std::io::Result<()> {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf).await?;
        if n == 0 {
            return Ok(());
        }
        request.extend_from_slice(&buf[..n]);
    }

    let head = String::from_utf8_lossy(&request);
    let path = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    *hits.lock().unwrap().entry(path.clone()).or_insert(0) += 1;

    let not_found = Route::new(404, Some("text/plain"), b"not found");
    let route = routes.get(&path).unwrap_or(&not_found);

    gauge.enter();
    tokio::time::sleep(route.delay).await;
    let written = respond(&mut stream, route).await;
    gauge.leave();
    written
}

async fn respond(stream: &mut TcpStream, route: &Route) -> std::io::Result<()> {
    let mut response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n",
        route.status,
        if route.status == 200 { "OK" } else { "Status" },
        route.body.len()
    );
    if let Some(ref content_type) = route.content_type {
        response.push_str(&format!("Content-Type: {}\r\n", content_type));
    }
    response.push_str("\r\n");

    stream.write_all(response.as_bytes()).await?;
    stream.write_all(&route.body).await?;
    stream.shutdown().await
}
