//! Integration tests for stats-graphs crate.
//!
//! These drive the HTTP fetcher against a minimal local server.

use prost::Message;
use stats_common::test_utils::init_test_logging;
use stats_common::StatsError;
use stats_config::BackendConfig;
use stats_graphs::{
    default_graph_bounds, millisecond_cutoff_for_range, set_data_available, Card, DataFetcher,
    GraphRange, GraphsContext, GraphsOut, HttpTransport, RevlogEntry, RevlogRange, Scene, SceneNode,
    SurfaceNode, GRAPH_DATA_PATH, NO_DATA_SELECTOR, OPACITY, POINTER_EVENTS,
};
use std::time::Duration;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    sync::oneshot,
};

/// A request as seen by the test server.
struct Captured {
    request_line: String,
    body: Vec<u8>,
}

/// Serves one request with the given status line and body.
async fn serve_once(
    status_line: &'static str,
    body: Vec<u8>,
) -> (String, oneshot::Receiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];

        let header_end = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "client closed before sending headers");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let content_length = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);

        while buf.len() < header_end + content_length {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        let reply_head = format!(
            "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        socket.write_all(reply_head.as_bytes()).await.unwrap();
        socket.write_all(&body).await.unwrap();
        socket.shutdown().await.unwrap();

        let _ = tx.send(Captured {
            request_line: head.lines().next().unwrap_or_default().to_string(),
            body: buf[header_end..].to_vec(),
        });
    });

    (base_url, rx)
}

fn fetcher_for(base_url: String, timeout_secs: u64) -> DataFetcher<HttpTransport> {
    DataFetcher::from_config(&BackendConfig {
        base_url,
        timeout_secs,
    })
    .unwrap()
}

#[tokio::test]
async fn test_get_graph_data_over_http() {
    init_test_logging();

    let message = GraphsOut {
        cards: vec![Card {
            id: 1,
            note_id: 2,
            deck_id: 3,
            ..Default::default()
        }],
        revlog: vec![RevlogEntry {
            id: 1_699_990_000_000,
            cid: 1,
            button_chosen: 3,
            ..Default::default()
        }],
        next_day_at_secs: 1_700_000_000,
        ..Default::default()
    };
    let (base_url, captured) = serve_once("200 OK", message.encode_to_vec()).await;

    let decoded = fetcher_for(base_url, 5)
        .get_graph_data("deck:current", RevlogRange::Year.days())
        .await
        .unwrap();
    assert_eq!(decoded, message);

    let captured = captured.await.unwrap();
    let request_line = format!("POST {GRAPH_DATA_PATH} HTTP/1.1");
    assert_eq!(captured.request_line, request_line);

    let body: serde_json::Value = serde_json::from_slice(&captured.body).unwrap();
    let expected = serde_json::json!({"search": "deck:current", "days": 365});
    assert_eq!(body, expected);
}

#[tokio::test]
async fn test_error_status_carries_status_text() {
    init_test_logging();

    let (base_url, _captured) = serve_once("503 Service Unavailable", b"busy".to_vec()).await;
    let fetcher = fetcher_for(base_url, 5);
    let err = fetcher.fetch_data("", 0).await.unwrap_err();

    assert!(matches!(err, StatsError::UnexpectedReply { .. }));
    assert_eq!(err.status(), Some(503));
    assert_eq!(err.to_string(), "unexpected reply: Service Unavailable");
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let fetcher = fetcher_for(base_url, 5);
    let err = fetcher.fetch_data("", 0).await.unwrap_err();
    assert!(matches!(err, StatsError::Network { .. }));
}

#[tokio::test]
async fn test_unanswered_request_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    // Accept the connection and keep it open without ever replying.
    let server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(30)).await;
        drop(socket);
    });

    let fetcher = fetcher_for(base_url, 1);
    let err = fetcher.fetch_data("", 0).await.unwrap_err();
    server.abort();

    assert!(matches!(err, StatsError::Network { .. }));
    assert_eq!(err.to_string(), "Network error: Request timeout");
}

#[tokio::test]
async fn test_fetch_filter_and_toggle_overlay() {
    let message = GraphsOut {
        revlog: vec![
            RevlogEntry {
                id: 1_699_900_000_000,
                ..Default::default()
            },
            RevlogEntry {
                id: 1_600_000_000_000,
                ..Default::default()
            },
        ],
        next_day_at_secs: 1_700_000_000,
        ..Default::default()
    };
    let (base_url, _captured) = serve_once("200 OK", message.encode_to_vec()).await;

    let fetcher = fetcher_for(base_url, 5);
    let data = fetcher.get_graph_data("", 0).await.unwrap();
    let next_day = i64::from(data.next_day_at_secs);
    let ctx = GraphsContext::new(data, RevlogRange::All, false);

    let mut scene = Scene::new();
    scene.push(SceneNode::with_class("no-data").attr_init(OPACITY, "1"));

    let in_month = ctx.revlog_in_range(GraphRange::Month, next_day);
    assert_eq!(in_month.len(), 1);
    let cutoff = millisecond_cutoff_for_range(GraphRange::Month, next_day);
    assert!(in_month[0].id >= cutoff);

    set_data_available(&mut scene, !in_month.is_empty());
    scene.advance(Duration::from_millis(600));

    let overlay = scene.node(NO_DATA_SELECTOR).unwrap();
    assert_eq!(overlay.attr(POINTER_EVENTS).as_deref(), Some("none"));
    assert_eq!(overlay.attr(OPACITY).as_deref(), Some("0"));
    assert!(scene.is_settled());
}

#[test]
fn test_overlay_reappears_when_data_is_missing() {
    let mut scene = Scene::new();
    scene.push(SceneNode::with_class("no-data").attr_init(OPACITY, "0"));

    set_data_available(&mut scene, false);
    let overlay = scene.node(NO_DATA_SELECTOR).unwrap();
    let transition = overlay.transition(OPACITY).unwrap();
    assert_eq!(transition.to, 1.0);
    assert_eq!(transition.duration, Duration::from_millis(600));
    assert_eq!(overlay.attr(POINTER_EVENTS).as_deref(), Some("all"));
}

#[test]
fn test_default_bounds_leave_room_to_draw() {
    let bounds = default_graph_bounds();
    assert!(bounds.inner_width() > 0.0);
    assert!(bounds.inner_height() > 0.0);
}
