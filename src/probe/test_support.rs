use std::future::Future;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use super::EndpointDescriptor;

/// Local HTTP server with a few fixed routes:
/// `/status/<code>`, `/redirect` (302 to `/status/200`), `/delay/<ms>`.
pub(crate) struct TestServer {
    pub(crate) base_url: String,
    task: JoinHandle<()>,
}

impl TestServer {
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub(crate) async fn spawn_test_server() -> Result<TestServer, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;

    let task = tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(handle_connection(stream));
        }
    });

    Ok(TestServer {
        base_url: format!("http://{}", addr),
        task,
    })
}

async fn handle_connection(mut stream: TcpStream) {
    let mut buffer = [0u8; 2048];
    let Ok(read) = stream.read(&mut buffer).await else {
        return;
    };
    let request = String::from_utf8_lossy(buffer.get(..read).unwrap_or_default());
    let path = request.split_whitespace().nth(1).unwrap_or("/").to_owned();

    let response = route(&path).await;
    if stream.write_all(response.as_bytes()).await.is_err() {
        return;
    }
    drop(stream.shutdown().await);
}

async fn route(path: &str) -> String {
    if let Some(code) = path.strip_prefix("/status/") {
        let code = code.parse::<u16>().unwrap_or(500);
        return response(code, "");
    }
    if path == "/redirect" {
        return response(302, "Location: /status/200\r\n");
    }
    if let Some(ms) = path.strip_prefix("/delay/") {
        let ms = ms.parse::<u64>().unwrap_or(0);
        tokio::time::sleep(Duration::from_millis(ms)).await;
        return response(200, "");
    }
    response(404, "")
}

fn response(code: u16, extra_headers: &str) -> String {
    let reason = reqwest::StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("Unknown");
    format!(
        "HTTP/1.1 {} {}\r\n{}Content-Length: 0\r\nConnection: close\r\n\r\n",
        code, reason, extra_headers
    )
}

pub(crate) fn endpoint(name: &str, url: String, timeout_ms: u64) -> Result<EndpointDescriptor, String> {
    EndpointDescriptor::new(name, url, timeout_ms)
        .ok_or_else(|| format!("invalid timeout for {}", name))
}

pub(crate) fn run_async_test<F>(future: F) -> Result<(), String>
where
    F: Future<Output = Result<(), String>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    runtime.block_on(future)
}
