// src/probe/test_server.rs
// =============================================================================
// A tiny HTTP/1.1 responder for tests, so nothing needs internet access.
//
// Each route is (path, status, body), optionally with a delay before the
// answer. Unknown paths get a 404. Every connection is answered once and then
// closed, so one connection == one request.
//
// The server also tracks how many requests it is holding at once; tests use
// the peak to check the scanner's concurrency limit.
// =============================================================================

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

struct Route {
    status: u16,
    body: String,
    delay: Duration,
}

/// Requests currently being answered, and the most seen at once
#[derive(Default)]
pub struct Load {
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl Load {
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    fn enter(&self) {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
    }

    fn leave(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Starts the server in the background and returns its base URL
/// (e.g. "http://127.0.0.1:40123").
pub async fn spawn(routes: Vec<(&str, u16, &str)>) -> String {
    let routes = routes
        .into_iter()
        .map(|(path, status, body)| (path, status, body, 0))
        .collect();

    let (base, _) = spawn_slow(routes).await;
    base
}

/// Like spawn(), but every route waits `delay_ms` before answering.
pub async fn spawn_slow(routes: Vec<(&str, u16, &str, u64)>) -> (String, Arc<Load>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(path, status, body, delay_ms)| {
                let route = Route {
                    status,
                    body: body.to_string(),
                    delay: Duration::from_millis(delay_ms),
                };
                (path.to_string(), route)
            })
            .collect(),
    );
    let load = Arc::new(Load::default());

    let server_load = load.clone();
    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            tokio::spawn(respond(socket, routes.clone(), server_load.clone()));
        }
    });

    (format!("http://{}", addr), load)
}

async fn respond(mut socket: TcpStream, routes: Arc<HashMap<String, Route>>, load: Arc<Load>) {
    load.enter();

    let mut request = Vec::new();
    let mut chunk = [0u8; 1024];

    // Read until the end of the headers; GET requests have no body
    loop {
        let n = socket.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        request.extend_from_slice(&chunk[..n]);
        if request.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }

    let request = String::from_utf8_lossy(&request);
    let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();

    let (status, body, delay) = match routes.get(&path) {
        Some(route) => (route.status, route.body.clone(), route.delay),
        None => (404, "not found".to_string(), Duration::ZERO),
    };

    tokio::time::sleep(delay).await;

    // Leave before answering: once the client has the response it may open
    // the next connection straight away
    load.leave();

    let mut response = format!(
        "HTTP/1.1 {} Test\r\nContent-Length: {}\r\nConnection: close\r\n",
        status,
        body.len()
    );
    if (300..400).contains(&status) {
        response.push_str("Location: /moved\r\n");
    }
    response.push_str("\r\n");
    response.push_str(&body);

    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}
