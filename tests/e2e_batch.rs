mod support;

use std::path::PathBuf;

use tempfile::tempdir;

use support::{run_pulsecheck, spawn_http_server, unreachable_url, write_config};

fn config_path(dir: &tempfile::TempDir) -> (PathBuf, String) {
    let path = dir.path().join("config.toml");
    let display = path.to_string_lossy().into_owned();
    (path, display)
}

fn describe(output: &std::process::Output) -> String {
    format!(
        "status: {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

#[test]
fn e2e_batch_reports_success_and_timeout() -> Result<(), String> {
    let (base, _server) = spawn_http_server()?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let (path, path_arg) = config_path(&dir);
    write_config(
        &path,
        &[
            ("ok", format!("{}/status/200", base), 2000),
            ("slow", format!("{}/delay/3000", base), 200),
        ],
    )?;

    let output = run_pulsecheck(["--config", path_arg.as_str(), "--no-ui", "--no-color"])?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    let ok_prefix = format!("200 OK | ok | {}/status/200 | ", base);
    if !stdout.lines().any(|line| line.starts_with(&ok_prefix)) {
        return Err(format!("Missing ok line\n{}", describe(&output)));
    }
    if stdout.contains("| slow |") {
        return Err(format!("Timed out probe printed a result\n{}", describe(&output)));
    }
    let slow_prefix = format!("slow ({}/delay/3000): ", base);
    let diagnostics: Vec<&str> = stderr.lines().collect();
    if diagnostics.len() != 1
        || !diagnostics
            .first()
            .is_some_and(|line| line.starts_with(&slow_prefix))
    {
        return Err(format!(
            "Expected exactly one slow diagnostic\n{}",
            describe(&output)
        ));
    }
    Ok(())
}

#[test]
fn e2e_each_failure_is_reported_once() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let (path, path_arg) = config_path(&dir);
    let first = unreachable_url()?;
    let second = unreachable_url()?;
    write_config(
        &path,
        &[("down", first.clone(), 2000), ("gone", second.clone(), 2000)],
    )?;

    let output = run_pulsecheck(["--config", path_arg.as_str(), "--no-ui", "--no-color"])?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    if !output.stdout.is_empty() {
        return Err(format!("Failed probes printed results\n{}", describe(&output)));
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().collect();
    if lines.len() != 2 {
        return Err(format!("Expected one line per failure\n{}", describe(&output)));
    }
    for expected in [format!("down ({}): ", first), format!("gone ({}): ", second)] {
        let count = lines
            .iter()
            .filter(|line| line.starts_with(expected.as_str()))
            .count();
        if count != 1 {
            return Err(format!(
                "Expected {:?} exactly once\n{}",
                expected,
                describe(&output)
            ));
        }
    }
    Ok(())
}

#[test]
fn e2e_piped_stdout_falls_back_to_batch() -> Result<(), String> {
    let (base, _server) = spawn_http_server()?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let (path, path_arg) = config_path(&dir);
    write_config(
        &path,
        &[
            ("first", format!("{}/status/204", base), 2000),
            ("second", format!("{}/status/500", base), 2000),
        ],
    )?;

    let output = run_pulsecheck(["--config", path_arg.as_str()])?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    if stdout.lines().count() != 2 {
        return Err(format!("Expected two result lines\n{}", describe(&output)));
    }
    if !stdout.contains("204 No Content | first |")
        || !stdout.contains("500 Internal Server Error | second |")
    {
        return Err(format!("Unexpected report\n{}", describe(&output)));
    }
    if stdout.contains("\u{1b}[") {
        return Err("Piped output must not carry color codes".to_owned());
    }
    Ok(())
}

#[test]
fn e2e_missing_config_fails_before_probing() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let (_path, path_arg) = config_path(&dir);

    let output = run_pulsecheck(["--config", path_arg.as_str(), "--no-ui"])?;
    if output.status.success() {
        return Err(format!("Expected failure\n{}", describe(&output)));
    }
    if !output.stdout.is_empty() {
        return Err(format!("No probe output expected\n{}", describe(&output)));
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().collect();
    if lines.len() != 1 || !lines.iter().all(|line| line.contains(path_arg.as_str())) {
        return Err(format!(
            "Config error must be reported exactly once\n{}",
            describe(&output)
        ));
    }
    Ok(())
}

#[test]
fn e2e_invalid_timeout_is_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let (path, path_arg) = config_path(&dir);
    write_config(&path, &[("zero", "http://127.0.0.1:9/".to_owned(), 0)])?;

    let output = run_pulsecheck(["--config", path_arg.as_str(), "--no-ui"])?;
    if output.status.success() {
        return Err(format!("Expected failure\n{}", describe(&output)));
    }
    Ok(())
}
