//! Fake Artist Data API served by actix-web on an ephemeral port.

use std::net::TcpListener;

use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, HttpServer, web};
use serde_json::{Value, json};

/// Artist payload mirroring what the backend serves.
pub fn artists_json(count: i64) -> Value {
    let artists: Vec<Value> = (1..=count)
        .map(|id| {
            json!({
                "id": id,
                "name": format!("Artist #{id}"),
                "birth_year": if id % 5 == 0 { Value::Null } else { json!(1800 + id) },
                "death_year": null,
                "nationality": if id % 2 == 0 { "French" } else { "Spanish" },
                "art_movement": "Impressionism",
                "bio": null,
                "image_url": null
            })
        })
        .collect();
    Value::Array(artists)
}

async fn artist_detail(path: web::Path<i64>) -> HttpResponse {
    let id = path.into_inner();
    if id == 1 {
        HttpResponse::Ok().json(json!({"id": 1, "name": "Claude Monet", "birth_year": 1840}))
    } else {
        HttpResponse::NotFound().json(json!({"detail": "Artist not found"}))
    }
}

/// Starts a backend answering `GET /api/v1/artists/` with `status` and `body`.
/// Returns the API base url.
pub fn spawn_backend(status: StatusCode, body: String) -> String {
    let listener = TcpListener::bind(("127.0.0.1", 0)).unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(move || {
        let body = body.clone();
        App::new()
            .route(
                "/api/v1/artists/",
                web::get().to(move || {
                    let body = body.clone();
                    async move {
                        HttpResponse::build(status)
                            .content_type("application/json")
                            .body(body)
                    }
                }),
            )
            .route("/api/v1/artists/{id}", web::get().to(artist_detail))
    })
    .workers(1)
    .listen(listener)
    .unwrap()
    .run();

    actix_web::rt::spawn(server);

    format!("http://{addr}/api/v1")
}

/// Base url on which nothing is listening.
pub fn dead_backend() -> String {
    let listener = TcpListener::bind(("127.0.0.1", 0)).unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api/v1")
}
