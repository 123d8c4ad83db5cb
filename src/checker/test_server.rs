// Minimal HTTP/1.1 server for the checker tests.
//
// Answers every request by path:
// - /missing -> 404 Not Found
// - /slow    -> waits 3 seconds, then 200 OK
// - /hold    -> waits 100 milliseconds, then 200 OK
// - anything else -> 200 OK

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// How many requests the server was handling at the same time
#[derive(Debug, Default)]
pub struct ServerStats {
    active: AtomicUsize,
    peak: AtomicUsize,
}

impl ServerStats {
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

/// Starts the server on a random local port and returns its base URL
/// (e.g. "http://127.0.0.1:12345/"). It runs until the test process exits.
pub fn start() -> String {
    start_with_stats().0
}

/// Like `start`, but also returns the server's concurrency counters
pub fn start_with_stats() -> (String, Arc<ServerStats>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let stats = Arc::new(ServerStats::default());
    let server_stats = Arc::clone(&stats);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let stats = Arc::clone(&server_stats);
            thread::spawn(move || handle(stream, &stats));
        }
    });
    (format!("http://127.0.0.1:{}/", port), stats)
}

/// A URL on a port nobody is listening on
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: TcpStream, stats: &ServerStats) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 4096];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    let path = request.split_whitespace().nth(1).unwrap_or("/");

    // Counted between reading the request and answering it, so a client
    // can't start its next request before this one is released
    let active = stats.active.fetch_add(1, Ordering::SeqCst) + 1;
    stats.peak.fetch_max(active, Ordering::SeqCst);

    let status = match path {
        "/missing" => "404 Not Found",
        "/slow" => {
            thread::sleep(Duration::from_secs(3));
            "200 OK"
        }
        "/hold" => {
            thread::sleep(Duration::from_millis(100));
            "200 OK"
        }
        _ => "200 OK",
    };

    stats.active.fetch_sub(1, Ordering::SeqCst);

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        status
    );
    let _ = stream.write_all(response.as_bytes());
}
