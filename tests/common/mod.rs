//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

static NEXT_DIR: AtomicU32 = AtomicU32::new(0);

/// Create a fresh scratch directory under the system temp dir.
pub fn scratch_root(prefix: &str) -> PathBuf {
    let n = NEXT_DIR.fetch_add(1, Ordering::SeqCst);
    let root = std::env::temp_dir().join(format!(
        "quicfile-{prefix}-{}-{n}",
        std::process::id()
    ));
    std::fs::create_dir_all(&root).unwrap();
    root
}

/// Wait until a TCP listener on `addr` accepts connections.
pub async fn wait_until_ready(addr: SocketAddr) {
    for _ in 0..100 {
        if TcpStream::connect(addr).await.is_ok() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("server at {addr} never became ready");
}

/// Issue a raw HTTP/1.1 GET and return (status, body bytes).
#[allow(dead_code)]
pub async fn http_get(addr: SocketAddr, path: &str) -> (u16, Vec<u8>) {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request =
        format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();

    let header_end = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("no header terminator in response")
        + 4;
    let head = std::str::from_utf8(&raw[..header_end]).unwrap();
    let status: u16 = head
        .split_whitespace()
        .nth(1)
        .expect("malformed status line")
        .parse()
        .unwrap();
    (status, raw[header_end..].to_vec())
}
