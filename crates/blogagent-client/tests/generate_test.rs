//! Wire-level tests for the generation client against a one-shot local
//! HTTP server.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use blogagent_client::{GenerateError, GenerationClient};
use blogagent_core::FormInput;

/// Serve exactly one request with the given status line and JSON body,
/// returning the base URL and a handle yielding the raw request text.
fn spawn_one_shot(
    status_line: &'static str,
    body: &'static str,
) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut buf = [0u8; 4096];
        let mut request = String::new();

        loop {
            let n = stream.read(&mut buf).expect("read");
            if n == 0 {
                break;
            }
            request.push_str(&String::from_utf8_lossy(&buf[..n]));
            if let Some(header_end) = request.find("\r\n\r\n") {
                let content_length = request
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())?
                    })
                    .unwrap_or(0);
                if request.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }

        let response = format!(
            "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).expect("write");
        request
    });

    (format!("http://{}", addr), handle)
}

#[tokio::test]
async fn success_response_yields_content() {
    let (base, server) = spawn_one_shot("HTTP/1.1 200 OK", r#"{"content":"X"}"#);
    let client = GenerationClient::with_defaults(&base).expect("client");

    let request = FormInput::new("Rust").to_request().expect("request");
    let result = client.generate(&request).await.expect("generate");
    assert_eq!(result.content, "X");

    // The outbound request carries the documented body and headers.
    let raw = server.join().expect("server thread");
    assert!(raw.starts_with("POST /api/generate_blog "));
    assert!(raw.to_ascii_lowercase().contains("content-type: application/json"));
    assert!(raw.ends_with(r#"{"title":"Rust","keywords":"","tone":"neutral"}"#));
}

#[tokio::test]
async fn application_error_is_not_success() {
    let (base, server) = spawn_one_shot("HTTP/1.1 200 OK", r#"{"error":"Y"}"#);
    let client = GenerationClient::with_defaults(&base).expect("client");

    let request = FormInput::new("Rust").to_request().expect("request");
    let err = client.generate(&request).await.expect_err("must fail");
    assert!(matches!(
        err,
        GenerateError::Application { ref message } if message == "Y"
    ));
    server.join().expect("server thread");
}

#[tokio::test]
async fn non_success_status_is_failure() {
    let (base, server) = spawn_one_shot(
        "HTTP/1.1 500 Internal Server Error",
        r#"{"error":"model overloaded"}"#,
    );
    let client = GenerationClient::with_defaults(&base).expect("client");

    let request = FormInput::new("Rust").to_request().expect("request");
    let err = client.generate(&request).await.expect_err("must fail");
    assert!(matches!(
        err,
        GenerateError::Status { code: 500, ref message } if message == "model overloaded"
    ));
    server.join().expect("server thread");
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    // Bind and immediately drop to get a port nothing is listening on.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("local addr").port()
    };
    let client =
        GenerationClient::with_defaults(format!("http://127.0.0.1:{}", port)).expect("client");

    let request = FormInput::new("Rust").to_request().expect("request");
    let err = client.generate(&request).await.expect_err("must fail");
    assert!(err.is_transient());
}

#[tokio::test]
async fn hung_backend_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");

    // Accept the connection but never answer.
    let server = thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept");
        thread::sleep(Duration::from_secs(2));
        drop(stream);
    });

    let client = GenerationClient::new(
        format!("http://{}", addr),
        Duration::from_millis(300),
    )
    .expect("client");

    let request = FormInput::new("Rust").to_request().expect("request");
    let err = client.generate(&request).await.expect_err("must time out");
    assert!(matches!(err, GenerateError::Timeout));
    server.join().expect("server thread");
}
