#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        std::fs::create_dir_all(&home).expect("create isolated home");
        Self { _tmp: tmp, home }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("tipuy").expect("tipuy binary");
        cmd.env("HOME", &self.home);
        cmd
    }

    pub fn login(&self) {
        self.cmd()
            .args([
                "session", "login", "--id", "u1", "--email", "ana@uni.pe", "--name", "Ana B",
            ])
            .assert()
            .success();
    }

    pub fn run_json(&self, api: &str, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .arg("--api")
            .arg(api)
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn state_json(&self) -> Value {
        let raw = std::fs::read_to_string(self.home.join(".config/tipuy/state.json"))
            .expect("state file");
        serde_json::from_str(&raw).expect("valid state json")
    }
}

pub struct Route {
    pub method: &'static str,
    pub path: String,
    pub status: u16,
    pub body: Vec<u8>,
}

impl Route {
    pub fn json(method: &'static str, path: &str, status: u16, body: Value) -> Self {
        Self {
            method,
            path: path.to_string(),
            status,
            body: body.to_string().into_bytes(),
        }
    }
}

#[derive(Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub body: String,
}

/// Single-threaded canned-response portal. Every request is recorded, so
/// tests can assert that format/precondition failures never reach the wire.
pub struct MockPortal {
    pub base: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockPortal {
    pub fn serve(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock portal");
        let base = format!("http://{}", listener.local_addr().expect("local addr"));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);
        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                respond(&mut stream, &routes, &recorded);
            }
        });
        Self { base, requests }
    }

    /// An address nothing listens on, for transport-failure cases.
    pub fn unreachable() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe");
        let base = format!("http://{}", listener.local_addr().expect("local addr"));
        drop(listener);
        base
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn request_bodies(&self, path: &str) -> Vec<Value> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .map(|r| serde_json::from_str(&r.body).expect("json request body"))
            .collect()
    }
}

fn respond(stream: &mut TcpStream, routes: &[Route], recorded: &Arc<Mutex<Vec<Recorded>>>) {
    let mut reader = BufReader::new(match stream.try_clone() {
        Ok(s) => s,
        Err(_) => return,
    });
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("").to_string();
    let path = parts.next().unwrap_or("").to_string();

    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        let lower = line.to_ascii_lowercase();
        if let Some(v) = lower.strip_prefix("content-length:") {
            content_length = v.trim().parse().unwrap_or(0);
        }
    }
    let mut body = vec![0u8; content_length];
    if content_length > 0 && reader.read_exact(&mut body).is_err() {
        return;
    }

    recorded.lock().expect("requests lock").push(Recorded {
        method: method.clone(),
        path: path.clone(),
        body: String::from_utf8_lossy(&body).to_string(),
    });

    let (status, payload) = match routes
        .iter()
        .find(|r| r.method == method && r.path == path)
    {
        Some(r) => (r.status, r.body.clone()),
        None => (404, br#"{"error":"not found"}"#.to_vec()),
    };
    let head = format!(
        "HTTP/1.1 {} MOCK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        payload.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&payload);
}

pub fn dni_ok(nombre: &str, dni: &str) -> Route {
    Route::json(
        "POST",
        "/api/validar-dni",
        200,
        serde_json::json!({
            "success": true,
            "datos_persona": { "nombre_completo": nombre, "dni": dni }
        }),
    )
}

pub fn dni_fail(error: &str) -> Route {
    Route::json(
        "POST",
        "/api/validar-dni",
        200,
        serde_json::json!({ "success": false, "error": error }),
    )
}

pub fn uni_ok(nombre: &str, codigo: &str, carrera: &str) -> Route {
    Route::json(
        "POST",
        "/api/validar-uni",
        200,
        serde_json::json!({
            "success": true,
            "data": { "nombre": nombre, "codigo": codigo, "carrera": carrera }
        }),
    )
}

pub fn uni_fail(message: &str) -> Route {
    Route::json(
        "POST",
        "/api/validar-uni",
        200,
        serde_json::json!({ "success": false, "message": message }),
    )
}
