use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// Status and JSON body served for one path
pub type Route = (u16, String);

/// Tiny blocking HTTP server standing in for the catalog
///
/// Routes are keyed by path and query (`/api/people/1/`,
/// `/api/people/?page=1`). Unknown paths answer 404. The server thread lives
/// as long as the test process.
pub struct CatalogServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl CatalogServer {
    /// Starts the server; `routes` receives the base URL so bodies can hold absolute links
    pub fn start<F>(routes: F) -> Self
    where
        F: FnOnce(&str) -> HashMap<String, Route>,
    {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}/api", listener.local_addr().unwrap());
        let routes = routes(&base_url);
        let requests = Arc::new(Mutex::new(Vec::new()));

        let log = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                handle(stream, &routes, &log);
            }
        });

        Self { base_url, requests }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request targets in arrival order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn handle(mut stream: TcpStream, routes: &HashMap<String, Route>, log: &Mutex<Vec<String>>) {
    let mut raw = Vec::new();
    let mut buf = [0u8; 4096];
    while !raw.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => raw.extend_from_slice(&buf[..n]),
        }
    }

    let request = String::from_utf8_lossy(&raw);
    let target = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    log.lock().unwrap().push(target.clone());

    let (status, body) = routes
        .get(&target)
        .cloned()
        .unwrap_or((404, r#"{"detail":"Not found"}"#.to_string()));
    let response = format!(
        "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

/// Route table of a small catalog: Luke, C-3PO and a two-page people list
pub fn sample_catalog(base_url: &str) -> HashMap<String, Route> {
    let people = |id: u32| format!("{}/people/{}/", base_url, id);
    let films = |ids: &[u32]| {
        ids.iter()
            .map(|id| format!("\"{}/films/{}/\"", base_url, id))
            .collect::<Vec<_>>()
            .join(",")
    };

    let mut routes = HashMap::new();
    routes.insert(
        "/api/people/1/".to_string(),
        (
            200,
            format!(
                r#"{{"name":"Luke Skywalker","height":"172","mass":"77","hair_color":"blond","skin_color":"fair","eye_color":"blue","birth_year":"19BBY","gender":"male","homeworld":"{}/planets/1/","films":[{}],"species":[],"created":"2014-12-09T13:50:51.644000Z","url":"{}"}}"#,
                base_url,
                films(&[1, 2]),
                people(1)
            ),
        ),
    );
    routes.insert(
        "/api/people/2/".to_string(),
        (
            200,
            format!(
                r#"{{"name":"C-3PO","height":"167","mass":"75","hair_color":"n/a","skin_color":"gold","eye_color":"yellow","birth_year":"112BBY","gender":"n/a","homeworld":"{}/planets/1/","films":[{}],"species":["{}/species/2/"],"created":"2014-12-10T15:10:51.357000Z","url":"{}"}}"#,
                base_url,
                films(&[2, 1]),
                base_url,
                people(2)
            ),
        ),
    );
    routes.insert(
        "/api/planets/1/".to_string(),
        (
            200,
            r#"{"name":"Tatooine","terrain":"desert","climate":"arid","population":"200000"}"#
                .to_string(),
        ),
    );
    routes.insert(
        "/api/species/2/".to_string(),
        (200, r#"{"name":"Droid"}"#.to_string()),
    );
    routes.insert(
        "/api/films/1/".to_string(),
        (200, r#"{"title":"A New Hope"}"#.to_string()),
    );
    routes.insert(
        "/api/films/2/".to_string(),
        (200, r#"{"title":"The Empire Strikes Back"}"#.to_string()),
    );
    routes.insert(
        "/api/people/?page=1".to_string(),
        (
            200,
            format!(
                r#"{{"count":12,"next":"{}/people/?page=2","previous":null,"results":[{{"name":"Luke Skywalker","films":[{}],"url":"{}"}},{{"name":"C-3PO","films":[{}],"url":"{}"}}]}}"#,
                base_url,
                films(&[1, 2]),
                people(1),
                films(&[2, 1]),
                people(2)
            ),
        ),
    );
    routes.insert(
        "/api/people/?search=3po&page=1".to_string(),
        (
            200,
            format!(
                r#"{{"count":1,"next":null,"previous":null,"results":[{{"name":"C-3PO","films":[{}],"url":"{}"}}]}}"#,
                films(&[2, 1]),
                people(2)
            ),
        ),
    );
    routes.insert(
        "/api/people/?page=9".to_string(),
        (500, r#"{"detail":"boom"}"#.to_string()),
    );
    routes
}
