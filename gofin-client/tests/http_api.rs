//! `HttpApi` against a one-shot local HTTP server.

use std::time::Duration;

use gofin_client::{ApiError, HttpApi, ImportPayload, TransactionsApi};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Answers a single request with `status` and a JSON `body`, returning the raw request.
async fn serve_once(status: &'static str, body: &'static str) -> (HttpApi, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.unwrap();
        let request = read_request(&mut sock).await;

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        sock.write_all(response.as_bytes()).await.unwrap();
        sock.shutdown().await.ok();
        request
    });

    let api = HttpApi::new(&format!("http://{addr}"), Duration::from_secs(5)).unwrap();
    (api, handle)
}

async fn read_request(sock: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = sock.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf).to_string();
        let Some(header_end) = text.find("\r\n\r\n") else { continue };
        let headers = text[..header_end].to_lowercase();
        let body_len = buf.len() - (header_end + 4);

        let content_length = headers
            .lines()
            .find_map(|l| l.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok());
        let done = match content_length {
            Some(len) => body_len >= len,
            None if headers.contains("transfer-encoding: chunked") => text.ends_with("0\r\n\r\n"),
            None => true,
        };
        if done {
            break;
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

const CSV: &str = "title, type, value, category\nLoan, income, 1500, Others\n";

#[tokio::test]
async fn test_import_sends_single_file_field() {
    let (api, server) = serve_once("201 Created", "{}").await;

    api.import_transactions(ImportPayload::new("janeiro.csv", CSV.as_bytes().to_vec()))
        .await
        .unwrap();

    let request = server.await.unwrap();
    let lower = request.to_lowercase();
    assert!(request.starts_with("POST /transactions/import HTTP/1.1"));
    assert!(lower.contains("content-type: multipart/form-data; boundary="));
    assert!(lower.contains(r#"name="file""#));
    assert!(lower.contains(r#"filename="janeiro.csv""#));
    assert!(lower.contains("content-type: text/csv"));
    assert!(request.contains(CSV));
    assert_eq!(lower.matches("content-disposition: form-data").count(), 1);
}

#[tokio::test]
async fn test_import_error_body_becomes_message() {
    let (api, server) = serve_once(
        "400 Bad Request",
        r#"{"status":"error","message":"Invalid CSV header"}"#,
    )
    .await;

    let err = api
        .import_transactions(ImportPayload::new("a.csv", CSV.as_bytes().to_vec()))
        .await
        .unwrap_err();
    server.await.unwrap();

    assert_eq!(
        err,
        ApiError::Status {
            status: 400,
            message: "Invalid CSV header".to_string(),
        }
    );
}

#[tokio::test]
async fn test_list_decodes_response() {
    let (api, server) = serve_once(
        "200 OK",
        r#"{"transactions":[{"id":"1","title":"Salary","value":4000,"type":"income","category":{"title":"Work"},"created_at":"2020-01-05T00:00:00.000Z"}],"balance":{"income":4000,"outcome":0,"total":4000}}"#,
    )
    .await;

    let resp = api.list_transactions().await.unwrap();
    let request = server.await.unwrap();

    assert!(request.starts_with("GET /transactions HTTP/1.1"));
    assert_eq!(resp.transactions.len(), 1);
    assert_eq!(resp.transactions[0].title, "Salary");
    assert_eq!(resp.balance.total, 4000.0);
}

#[tokio::test]
async fn test_list_bad_json_is_malformed() {
    let (api, server) = serve_once("200 OK", r#"{"transactions": "nope"}"#).await;

    let err = api.list_transactions().await.unwrap_err();
    server.await.unwrap();

    assert!(matches!(err, ApiError::Malformed(_)), "got {err:?}");
}

#[tokio::test]
async fn test_list_server_error_without_message() {
    let (api, server) = serve_once("503 Service Unavailable", "").await;

    let err = api.list_transactions().await.unwrap_err();
    server.await.unwrap();

    assert_eq!(
        err,
        ApiError::Status {
            status: 503,
            message: "Service Unavailable".to_string(),
        }
    );
}
