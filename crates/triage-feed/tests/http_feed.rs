//! Integration tests for loading reports over HTTP.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use triage_feed::{load, FeedError, FeedSource};
use triage_models::Seed;

/// Serves exactly one HTTP response on a local port and returns its URL.
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut line = String::new();
        while reader.read_line(&mut line).unwrap() > 0 {
            if line == "\r\n" {
                break;
            }
            line.clear();
        }

        let mut stream = stream;
        let response = format!(
            "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
    });

    format!("http://{}/reports", addr)
}

#[test]
fn test_http_legacy_feed() {
    let url = serve_once(
        "HTTP/1.1 200 OK",
        r#"[{"report_url": "http://r/0", "image_name": "flood.jpg", "timestamp": "2026-02-10 14:23:00"}]"#,
    );
    let source: FeedSource = url.parse().unwrap();

    let seed = load(&source, Duration::from_secs(5)).unwrap();

    let Seed::Flat(reports) = seed else {
        panic!("expected flat seed");
    };
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].id.as_str(), "api-0");
    assert_eq!(reports[0].label, "flood.jpg");
}

#[test]
fn test_http_error_status() {
    let url = serve_once("HTTP/1.1 503 Service Unavailable", "");
    let source: FeedSource = url.parse().unwrap();

    let err = load(&source, Duration::from_secs(5)).unwrap_err();

    assert!(matches!(err, FeedError::Status { status: 503, .. }));
    assert!(err.to_string().contains("503"));
}
