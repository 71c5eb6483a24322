use std::ffi::OsStr;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::path::Path;
use std::process::{Command, Output};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Spawn a small HTTP server answering `/status/<code>` and `/delay/<ms>`.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_http_server() -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    thread::spawn(move || handle_client(stream));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(10));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}", addr),
        ServerHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
        },
    ))
}

fn request_path(request: &str) -> &str {
    request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
}

fn handle_client(mut stream: TcpStream) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    let mut buffer = [0u8; 1024];
    let Ok(read) = stream.read(&mut buffer) else {
        return;
    };
    let request = String::from_utf8_lossy(buffer.get(..read).unwrap_or_default()).into_owned();
    let path = request_path(&request);

    let status_line = if let Some(code) = path.strip_prefix("/status/") {
        match code {
            "200" => "200 OK",
            "204" => "204 No Content",
            "500" => "500 Internal Server Error",
            _ => "404 Not Found",
        }
    } else if let Some(delay) = path.strip_prefix("/delay/") {
        let delay_ms = delay.parse::<u64>().unwrap_or(0);
        thread::sleep(Duration::from_millis(delay_ms));
        "200 OK"
    } else {
        "404 Not Found"
    };

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        status_line
    );
    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

/// Returns a loopback URL whose port has no listener.
///
/// # Errors
///
/// Returns an error if a port cannot be reserved.
pub fn unreachable_url() -> Result<String, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind placeholder failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("placeholder addr failed: {}", err))?;
    drop(listener);
    Ok(format!("http://{}/", addr))
}

/// Write a TOML config with one `[[endpoint]]` table per entry.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_config(path: &Path, endpoints: &[(&str, String, i64)]) -> Result<(), String> {
    let content = endpoints
        .iter()
        .map(|(name, url, timeout)| {
            format!(
                "[[endpoint]]\nname = \"{}\"\nurl = \"{}\"\ntimeout = {}\n",
                name, url, timeout
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    std::fs::write(path, content).map_err(|err| format!("write config failed: {}", err))
}

/// Run the `pulsecheck` binary with the default log level and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_pulsecheck<I, S>(args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = pulsecheck_bin()?;
    Command::new(bin)
        .args(args)
        .env_remove("PULSECHECK_CONFIG")
        .env_remove("PULSECHECK_LOG")
        .env_remove("RUST_LOG")
        .output()
        .map_err(|err| format!("run pulsecheck failed: {}", err))
}

fn pulsecheck_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_pulsecheck").map_or_else(
        || Err("CARGO_BIN_EXE_pulsecheck missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
