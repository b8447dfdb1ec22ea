#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

pub fn trucknow() -> Command {
    cargo_bin_cmd!("trucknow")
}

/// Launch the binary against a stub endpoint, with ambient configuration
/// cleared so the test environment cannot leak in.
pub fn trucknow_at(url: &str) -> Command {
    let mut cmd = trucknow();
    cmd.env("TRUCKNOW_DATASET_URL", url)
        .env_remove("APP_TOKEN")
        .env_remove("app_token")
        .env_remove("TRUCKNOW_TIMEOUT_SECS")
        .env_remove("RUST_LOG");
    cmd
}

/// One request the stub saw: the request-line target plus the raw header
/// lines.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub target: String,
    pub headers: Vec<String>,
}

impl RecordedRequest {
    /// Case-insensitive header lookup, returning the trimmed value.
    pub fn header(&self, name: &str) -> Option<String> {
        let prefix = format!("{}:", name.to_ascii_lowercase());
        self.headers.iter().find_map(|line| {
            line.to_ascii_lowercase()
                .strip_prefix(&prefix)
                .map(|_| line[prefix.len()..].trim().to_string())
        })
    }
}

/// Canned response for one stub connection.
pub enum Canned {
    Json(String),
    Status(u16),
}

/// Minimal canned-response HTTP server standing in for the dataset
/// endpoint. Serves one response per connection, in order, on an
/// ephemeral port, and records what was requested. The accept thread is
/// left to die with the test process if the binary asks for fewer pages
/// than were canned.
pub struct StubServer {
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    pub fn serve(responses: Vec<Canned>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let port = listener.local_addr().expect("stub addr").port();
        let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        thread::spawn(move || {
            for canned in responses {
                let Ok((stream, _)) = listener.accept() else {
                    return;
                };
                handle_connection(stream, canned, &seen);
            }
        });

        Self {
            url: format!("http://127.0.0.1:{port}/resource/bbb8-hzi6.json"),
            requests,
        }
    }

    /// Requests handled so far. Complete once the binary has exited,
    /// since it is the stub's only client.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("requests lock").len()
    }
}

fn handle_connection(mut stream: TcpStream, canned: Canned, seen: &Arc<Mutex<Vec<RecordedRequest>>>) {
    let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    let target = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or_default()
        .to_string();

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) if line.trim_end().is_empty() => break,
            Ok(_) => headers.push(line.trim_end().to_string()),
            Err(_) => break,
        }
    }

    seen.lock()
        .expect("requests lock")
        .push(RecordedRequest { target, headers });

    let (status_line, body) = match canned {
        Canned::Json(body) => ("200 OK".to_string(), body),
        Canned::Status(code) => (format!("{code} Stub"), String::new()),
    };
    let response = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

/// A URL nothing is listening on, for connection-failure tests.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let port = listener.local_addr().expect("probe addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}/resource/bbb8-hzi6.json")
}

pub fn truck_json(name: &str, address: &str) -> serde_json::Value {
    serde_json::json!({
        "applicant": name,
        "location": address,
        "start24": "09:00",
        "end24": "21:00",
    })
}

/// A page of `n` records named `Truck <start>`, `Truck <start+1>`, ...
pub fn page_json(start: usize, n: usize) -> String {
    let rows: Vec<serde_json::Value> = (start..start + n)
        .map(|i| truck_json(&format!("Truck {i:02}"), &format!("{i} MARKET ST")))
        .collect();
    serde_json::Value::Array(rows).to_string()
}

/// Decode percent-escapes and `+` so assertions can read query strings.
pub fn decoded(target: &str) -> String {
    let bytes = target.as_bytes();
    let mut out = String::new();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                let escaped = std::str::from_utf8(&bytes[i + 1..i + 3])
                    .ok()
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok());
                match escaped {
                    Some(byte) => {
                        out.push(byte as char);
                        i += 3;
                    }
                    None => {
                        out.push('%');
                        i += 1;
                    }
                }
            }
            byte => {
                out.push(byte as char);
                i += 1;
            }
        }
    }
    out
}
