//! Tests for candidate iteration in the connector

use std::net::SocketAddr;

use httpget::client::connector::{connect, connect_any};
use httpget::error::ConnectError;
use tokio::net::TcpListener;

/// An address nothing listens on: bind, note the port, release it.
async fn refused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

#[tokio::test]
async fn test_connects_to_listening_host() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let stream = connect("127.0.0.1", port).await.unwrap();
    assert_eq!(stream.peer_addr().unwrap().port(), port);
}

#[tokio::test]
async fn test_refused_is_no_route() {
    let addr = refused_addr().await;

    let err = connect("127.0.0.1", addr.port()).await.unwrap_err();
    assert!(matches!(err, ConnectError::NoRoute { .. }));
}

#[tokio::test]
async fn test_falls_through_to_later_candidate() {
    let dead = refused_addr().await;
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let live = listener.local_addr().unwrap();

    let stream = connect_any("test", &[dead, live]).await.unwrap();
    assert_eq!(stream.peer_addr().unwrap(), live);
}

#[tokio::test]
async fn test_first_candidate_wins() {
    let first = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let second = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let first_addr = first.local_addr().unwrap();
    let second_addr = second.local_addr().unwrap();

    let stream = connect_any("test", &[first_addr, second_addr]).await.unwrap();
    assert_eq!(stream.peer_addr().unwrap(), first_addr);
}

#[tokio::test]
async fn test_every_candidate_refusing_is_no_route() {
    let a = refused_addr().await;
    let b = refused_addr().await;

    let err = connect_any("test", &[a, b]).await.unwrap_err();
    assert!(matches!(err, ConnectError::NoRoute { ref authority } if authority == "test"));
}

#[tokio::test]
async fn test_unresolvable_host_fails() {
    let result = connect("host.invalid", 80).await;
    assert!(matches!(
        result,
        Err(ConnectError::Resolve { .. } | ConnectError::NoRoute { .. })
    ));
}
