//! Envelope contract test against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then fetches every endpoint over
//! real HTTP using ureq and deserializes the bodies back through
//! `envelope_core` types. Validates that the envelopes this crate builds
//! survive the axum/serde round-trip unchanged: codes, messages, page totals
//! and the 403/401 statuses.

use envelope_core::{PageData, ResponseEnvelope, FORBIDDEN_MSG, UNAUTHORIZED_MSG};

/// Fetch `url` and return the status plus the raw body.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx responses
/// come back as data rather than `Err`; the envelope, not the transport,
/// decides what counts as an error.
fn fetch(url: &str) -> (u16, String) {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = agent.get(url).call().expect("HTTP transport error");
    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();
    (status, body)
}

fn spawn_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, mock_server::config::ServerConfig::default()).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn envelope_contract_over_the_wire() {
    let base = spawn_server();

    // Paged table: success envelope with a full first page.
    let (status, body) = fetch(&format!("{base}/api/table/list?page=1&pageSize=10"));
    assert_eq!(status, 200);
    let envelope: ResponseEnvelope<PageData<serde_json::Value>> =
        serde_json::from_str(&body).unwrap();
    assert_eq!(envelope.code, 0);
    assert_eq!(envelope.msg, "ok");
    assert!(envelope.error.is_none());
    let page = envelope.data.unwrap();
    assert_eq!(page.total, 25);
    assert_eq!(page.items.len(), 10);

    // Tail page.
    let (_, body) = fetch(&format!("{base}/api/table/list?page=3&pageSize=10"));
    let envelope: ResponseEnvelope<PageData<serde_json::Value>> =
        serde_json::from_str(&body).unwrap();
    assert_eq!(envelope.data.unwrap().items.len(), 5);

    // Non-numeric page parameter: still a success envelope, empty slice.
    let (status, body) = fetch(&format!("{base}/api/table/list?page=oops"));
    assert_eq!(status, 200);
    let envelope: ResponseEnvelope<PageData<serde_json::Value>> =
        serde_json::from_str(&body).unwrap();
    assert_eq!(envelope.code, 0);
    let page = envelope.data.unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total, 25);

    // Route table.
    let (status, body) = fetch(&format!("{base}/api/menu/all"));
    assert_eq!(status, 200);
    let envelope: ResponseEnvelope<serde_json::Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(envelope.code, 0);
    let routes = envelope.data.unwrap();
    assert_eq!(routes.as_array().unwrap().len(), 2);

    // Forbidden demo: HTTP 403 plus the error envelope.
    let (status, body) = fetch(&format!("{base}/api/status?status=403"));
    assert_eq!(status, 403);
    let envelope: ResponseEnvelope<()> = serde_json::from_str(&body).unwrap();
    assert_eq!(envelope.code, -1);
    assert_eq!(envelope.msg, FORBIDDEN_MSG);
    assert_eq!(envelope.error.as_deref(), Some(FORBIDDEN_MSG));

    // Unauthorized demo.
    let (status, body) = fetch(&format!("{base}/api/status?status=401"));
    assert_eq!(status, 401);
    let envelope: ResponseEnvelope<()> = serde_json::from_str(&body).unwrap();
    assert_eq!(envelope.code, -1);
    assert_eq!(envelope.msg, UNAUTHORIZED_MSG);
    assert_eq!(envelope.error.as_deref(), Some(UNAUTHORIZED_MSG));
}
