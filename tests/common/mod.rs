//! Shared harness for integration tests: a wiremock stub of the /books backend.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use serde_json::json;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use bookshelf::{Book, BookPayload, BooksApi, Config, Encoding, ListController};

pub fn book(id: i64, name: &str, price: i64) -> Book {
    Book {
        id,
        name: name.to_string(),
        price,
    }
}

pub fn list_body(books: &[Book]) -> serde_json::Value {
    json!({ "books": books })
}

pub fn controller(server: &MockServer) -> ListController {
    controller_with(&server.uri(), Encoding::Json)
}

pub fn controller_with(base_url: &str, encoding: Encoding) -> ListController {
    let config = Config::new(base_url).unwrap().with_encoding(encoding);
    ListController::new(BooksApi::new(&config).unwrap())
}

/// Mount a fixed `GET /books` response expected `times` times.
pub async fn mount_list(server: &MockServer, books: &[Book], times: u64) {
    Mock::given(method("GET"))
        .and(path("/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(books)))
        .expect(times)
        .named("list books")
        .mount(server)
        .await;
}

/// `METHOD path` of every request the server saw, in order.
pub async fn request_log(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|req| format!("{} {}", req.method, req.url.path()))
        .collect()
}

/// A loopback address nothing is listening on.
pub async fn closed_server_uri() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

// =============================================================================
// FakeBackend — stateful stand-in that assigns ids like the real server
// =============================================================================

#[derive(Clone, Default)]
pub struct FakeBackend {
    books: Arc<Mutex<Vec<Book>>>,
    next_id: Arc<Mutex<i64>>,
}

impl FakeBackend {
    pub fn seeded(books: Vec<Book>) -> Self {
        let next = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        FakeBackend {
            books: Arc::new(Mutex::new(books)),
            next_id: Arc::new(Mutex::new(next)),
        }
    }

    pub fn books(&self) -> Vec<Book> {
        self.books.lock().unwrap().clone()
    }

    pub async fn mount(&self, server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/books"))
            .respond_with(self.clone())
            .mount(server)
            .await;
        Mock::given(method("POST"))
            .and(path("/books"))
            .respond_with(self.clone())
            .mount(server)
            .await;
        Mock::given(path_regex(r"^/books/-?\d+$"))
            .respond_with(self.clone())
            .mount(server)
            .await;
    }

    fn item_id(request: &Request) -> Option<i64> {
        request.url.path().rsplit('/').next()?.parse().ok()
    }
}

impl Respond for FakeBackend {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut books = self.books.lock().unwrap();
        match (request.method.as_str(), Self::item_id(request)) {
            ("GET", None) => ResponseTemplate::new(200).set_body_json(list_body(&books)),
            ("POST", None) => {
                let payload: BookPayload = match serde_json::from_slice(&request.body) {
                    Ok(payload) => payload,
                    Err(_) => return ResponseTemplate::new(422),
                };
                let mut next_id = self.next_id.lock().unwrap();
                let created = book(*next_id, &payload.name, payload.price);
                *next_id += 1;
                books.push(created.clone());
                ResponseTemplate::new(201).set_body_json(created)
            }
            ("PUT", Some(id)) => {
                let payload: BookPayload = match serde_json::from_slice(&request.body) {
                    Ok(payload) => payload,
                    Err(_) => return ResponseTemplate::new(422),
                };
                match books.iter_mut().find(|b| b.id == id) {
                    Some(existing) => {
                        existing.name = payload.name;
                        existing.price = payload.price;
                        ResponseTemplate::new(200).set_body_json(existing.clone())
                    }
                    None => ResponseTemplate::new(404),
                }
            }
            ("DELETE", Some(id)) => {
                let before = books.len();
                books.retain(|b| b.id != id);
                if books.len() == before {
                    ResponseTemplate::new(404)
                } else {
                    ResponseTemplate::new(204)
                }
            }
            _ => ResponseTemplate::new(405),
        }
    }
}
