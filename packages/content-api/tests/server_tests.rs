//! End-to-end test over a real TCP connection.

use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use content_api::config::ApiConfig;
use content_api::router::Router;
use content_api::server::Server;
use content_store::ContentStore;

async fn raw_request(addr: std::net::SocketAddr, request: String) -> anyhow::Result<String> {
    let mut stream = TcpStream::connect(addr).await?;
    stream.write_all(request.as_bytes()).await?;
    let mut response = Vec::new();
    stream.read_to_end(&mut response).await?;
    Ok(String::from_utf8(response)?)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_create_and_fetch_over_tcp() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let store = Arc::new(ContentStore::new());
    let router = Arc::new(Router::new(
        Arc::clone(&store),
        Arc::new(ApiConfig::default()),
        None,
    ));
    let server = tokio::spawn(Server::run(listener, router));

    let body = r#"{"title":"Over the wire"}"#;
    let response = raw_request(
        addr,
        format!(
            "POST /api/courses HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        ),
    )
    .await?;
    assert!(response.starts_with("HTTP/1.1 201"), "{}", response);
    assert!(response.contains("\"title\":\"Over the wire\""));

    let courses = store.list_courses()?;
    assert_eq!(courses.len(), 1);

    let response = raw_request(
        addr,
        format!(
            "GET /api/courses/{} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
            courses[0].id
        ),
    )
    .await?;
    assert!(response.starts_with("HTTP/1.1 200"), "{}", response);
    assert!(response.contains(&courses[0].id));

    let response = raw_request(
        addr,
        "GET /nowhere HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n".to_string(),
    )
    .await?;
    assert!(response.starts_with("HTTP/1.1 404"), "{}", response);

    server.abort();
    Ok(())
}
