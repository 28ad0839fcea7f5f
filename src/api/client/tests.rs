use super::*;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

type CapturedRequest = (String, Vec<(String, String)>, Vec<u8>);

async fn read_http_request(stream: &mut TcpStream) -> Result<CapturedRequest, String> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        if let Some(pos) = buffer.windows(4).position(|window| window == b"\r\n\r\n") {
            break pos;
        }
        let read = stream
            .read(&mut chunk)
            .await
            .map_err(|err| err.to_string())?;
        if read == 0 {
            return Err("Unexpected EOF while reading HTTP headers".to_string());
        }
        buffer.extend_from_slice(&chunk[..read]);
    };

    let head = String::from_utf8_lossy(&buffer[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let request_line = lines.next().unwrap_or_default().to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = buffer[header_end + 4..].to_vec();
    while body.len() < content_length {
        let read = stream
            .read(&mut chunk)
            .await
            .map_err(|err| err.to_string())?;
        if read == 0 {
            return Err("Unexpected EOF while reading HTTP body".to_string());
        }
        body.extend_from_slice(&chunk[..read]);
    }
    body.truncate(content_length);

    Ok((request_line, headers, body))
}

/// Accepts one connection, answers it with `status_line` and `body`, and
/// hands back what the client sent.
async fn serve_once(
    status_line: &'static str,
    body: &'static str,
) -> (String, JoinHandle<Result<CapturedRequest, String>>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener should bind");
    let addr = listener.local_addr().expect("local addr should resolve");

    let server_task = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.map_err(|err| err.to_string())?;
        let captured = read_http_request(&mut stream).await?;
        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\nconnection: close\r\ncontent-length: {}\r\n\r\n{body}",
            body.len()
        );
        stream
            .write_all(response.as_bytes())
            .await
            .map_err(|err| err.to_string())?;
        stream.shutdown().await.map_err(|err| err.to_string())?;
        Ok(captured)
    });

    (format!("http://{addr}"), server_task)
}

fn request(prompt: &str) -> AskRequest {
    AskRequest {
        prompt: prompt.to_string(),
        session_id: "session-1".to_string(),
    }
}

#[tokio::test]
async fn posts_prompt_and_session_id_and_returns_reply() {
    let (base_url, server) = serve_once("200 OK", r#"{"response":"Hi there"}"#).await;
    let assistant = HttpAssistant::new(reqwest::Client::new(), &base_url, "api/ask");

    let reply = assistant.ask(&request("Hello")).await;
    assert_eq!(reply, Ok("Hi there".to_string()));

    let (request_line, headers, body) = server
        .await
        .expect("server task should join")
        .expect("server should capture the request");
    assert_eq!(request_line, "POST /api/ask HTTP/1.1");
    let content_type = headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
        .map(|(_, value)| value.as_str());
    assert_eq!(content_type, Some("application/json"));

    let body: serde_json::Value = serde_json::from_slice(&body).expect("body should be JSON");
    assert_eq!(
        body,
        serde_json::json!({ "prompt": "Hello", "sessionId": "session-1" })
    );
}

#[tokio::test]
async fn non_success_status_maps_to_server_error() {
    let (base_url, server) = serve_once(
        "500 Internal Server Error",
        r#"{"error":"database unavailable"}"#,
    )
    .await;
    let assistant = HttpAssistant::new(reqwest::Client::new(), &base_url, "/api/ask");

    let err = assistant
        .ask(&request("Hello"))
        .await
        .expect_err("500 should fail");
    assert_eq!(err, AskError::Status(StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(err.user_message(), "Server Error");
    let _ = server.await;
}

#[tokio::test]
async fn client_errors_are_not_distinguished_from_server_errors() {
    let (base_url, server) = serve_once("404 Not Found", "{}").await;
    let assistant = HttpAssistant::new(reqwest::Client::new(), &base_url, "api/ask");

    let err = assistant.ask(&request("Hello")).await.unwrap_err();
    assert_eq!(err.user_message(), "Server Error");
    let _ = server.await;
}

#[tokio::test]
async fn malformed_reply_is_a_decode_error() {
    let (base_url, server) = serve_once("200 OK", r#"{"answer":"Hi there"}"#).await;
    let assistant = HttpAssistant::new(reqwest::Client::new(), &base_url, "api/ask");

    let err = assistant.ask(&request("Hello")).await.unwrap_err();
    assert!(matches!(err, AskError::Decode(_)));
    assert!(!err.user_message().is_empty());
    let _ = server.await;
}

#[tokio::test]
async fn connection_failure_is_a_transport_error_with_text() {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener should bind");
    let addr = listener.local_addr().expect("local addr should resolve");
    drop(listener);

    let assistant = HttpAssistant::new(reqwest::Client::new(), &format!("http://{addr}"), "api/ask");
    let err = assistant.ask(&request("Hello")).await.unwrap_err();

    assert!(matches!(err, AskError::Transport(_)));
    let message = err.user_message();
    assert!(!message.is_empty());
    assert_ne!(message, SERVER_ERROR_MESSAGE);
}

#[test]
fn empty_failure_text_falls_back_to_generic_message() {
    assert_eq!(
        AskError::Transport(String::new()).user_message(),
        GENERIC_ERROR_MESSAGE
    );
    assert_eq!(
        AskError::Decode(String::new()).user_message(),
        GENERIC_ERROR_MESSAGE
    );
    assert_eq!(
        AskError::Decode("expected value at line 1".to_string()).user_message(),
        "expected value at line 1"
    );
}

#[test]
fn failure_text_is_shown_verbatim() {
    assert_eq!(
        AskError::Transport(" connection reset \n".to_string()).user_message(),
        " connection reset \n"
    );
}

#[test]
fn endpoint_joins_base_url_and_path() {
    let assistant = HttpAssistant::new(
        reqwest::Client::new(),
        "http://localhost:5001/",
        "/api/ask",
    );
    assert_eq!(assistant.endpoint(), "http://localhost:5001/api/ask");
}
