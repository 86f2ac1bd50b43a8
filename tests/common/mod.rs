//! In-process stub of the analysis server
//!
//! Serves one connection at a time on a random local port and records every
//! request it sees.

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use std::time::Duration;

/// Request as seen by the stub
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Canned answer
#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
    pub delay: Option<Duration>,
}

impl StubResponse {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

pub struct StubServer {
    pub url: String,
    requests: Receiver<RecordedRequest>,
}

impl StubServer {
    /// Start a stub answering every request through `handler`
    pub fn start<F>(handler: F) -> Self
    where
        F: Fn(&RecordedRequest) -> StubResponse + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind stub server");
        let port = listener.local_addr().unwrap().port();
        let (tx, rx) = channel();

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                serve(stream, &handler, &tx);
            }
        });

        Self {
            url: format!("http://127.0.0.1:{}", port),
            requests: rx,
        }
    }

    /// Stub with the usual routes: healthy `/health`, `analyze` for `/analyze`
    pub fn with_analyze(analyze: StubResponse) -> Self {
        Self::start(move |req| match req.path.as_str() {
            "/health" => StubResponse::json(200, r#"{"status": "healthy"}"#),
            "/analyze" => analyze.clone(),
            _ => StubResponse::json(404, r#"{"error": "not found"}"#),
        })
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.try_iter().collect()
    }
}

/// URL of a local port nobody listens on
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn serve<F>(stream: TcpStream, handler: &F, tx: &Sender<RecordedRequest>)
where
    F: Fn(&RecordedRequest) -> StubResponse,
{
    let mut reader = BufReader::new(stream);
    let Some(request) = read_request(&mut reader) else {
        return;
    };

    let response = handler(&request);
    let _ = tx.send(request);

    if let Some(delay) = response.delay {
        thread::sleep(delay);
    }

    let reason = match response.status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let raw = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        reason,
        response.body.len(),
        response.body
    );

    let mut stream = reader.into_inner();
    let _ = stream.write_all(raw.as_bytes());
    let _ = stream.flush();
}

fn read_request(reader: &mut BufReader<TcpStream>) -> Option<RecordedRequest> {
    let mut line = String::new();
    reader.read_line(&mut line).ok()?;
    let mut parts = line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    let mut content_length = 0usize;
    let mut chunked = false;
    loop {
        let mut header = String::new();
        if reader.read_line(&mut header).ok()? == 0 {
            break;
        }
        let header = header.trim_end();
        if header.is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':') {
            let name = name.trim().to_ascii_lowercase();
            let value = value.trim();
            if name == "content-length" {
                content_length = value.parse().unwrap_or(0);
            } else if name == "transfer-encoding" && value.eq_ignore_ascii_case("chunked") {
                chunked = true;
            }
        }
    }

    let body = if chunked {
        read_chunked(reader)?
    } else {
        let mut body = vec![0u8; content_length];
        reader.read_exact(&mut body).ok()?;
        body
    };

    Some(RecordedRequest { method, path, body })
}

fn read_chunked(reader: &mut BufReader<TcpStream>) -> Option<Vec<u8>> {
    let mut body = Vec::new();
    loop {
        let mut size_line = String::new();
        reader.read_line(&mut size_line).ok()?;
        let size_hex = size_line.trim().split(';').next()?;
        let size = usize::from_str_radix(size_hex, 16).ok()?;

        if size == 0 {
            let mut trailer = String::new();
            reader.read_line(&mut trailer).ok()?;
            return Some(body);
        }

        let mut chunk = vec![0u8; size];
        reader.read_exact(&mut chunk).ok()?;
        body.extend_from_slice(&chunk);

        let mut crlf = String::new();
        reader.read_line(&mut crlf).ok()?;
    }
}

/// Payload of a successful analysis of the 5s test tone
pub const TONE_ANALYSIS: &str = r#"{"success": true, "analysis": {"key": "A", "scale": "major", "tempo": 120.0, "confidence": 0.9, "energy": 0.5, "duration": 5.0, "beat_times": [0.5, 1.0], "onset_times": [0.1]}}"#;
