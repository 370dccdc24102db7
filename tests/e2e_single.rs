
use std::process::Output;

use support_single::{run_limitprobe, spawn_scripted_server_or_skip, unreachable_url};

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn describe(output: &Output) -> String {
    format!(
        "status: {:?}\nstdout: {}\nstderr: {}",
        output.status.code(),
        stdout_of(output),
        stderr_of(output)
    )
}

#[test]
fn e2e_missing_url_is_a_usage_error() -> Result<(), String> {
    let output = run_limitprobe(["-t", "5"])?;
    if output.status.code() != Some(1) {
        return Err(describe(&output));
    }
    if !stderr_of(&output).contains("Please provide a URL using the -u flag") {
        return Err(describe(&output));
    }
    Ok(())
}

#[test]
fn e2e_malformed_url_fails_before_sending() -> Result<(), String> {
    let output = run_limitprobe(["-u", "not a url", "-t", "5"])?;
    if output.status.code() != Some(1) {
        return Err(describe(&output));
    }
    if !stderr_of(&output).contains("Failed to create HTTP request") {
        return Err(describe(&output));
    }
    Ok(())
}

#[test]
fn e2e_zero_duration_sends_nothing() -> Result<(), String> {
    let Some((url, server)) = spawn_scripted_server_or_skip(vec![], 200)? else {
        return Ok(());
    };

    let output = run_limitprobe(["-u", url.as_str()])?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    if server.hits() != 0 {
        return Err(format!("Expected no requests, server saw {}", server.hits()));
    }
    if stdout_of(&output).contains("received:") {
        return Err(describe(&output));
    }
    Ok(())
}

#[test]
fn e2e_negative_duration_sends_nothing() -> Result<(), String> {
    let Some((url, server)) = spawn_scripted_server_or_skip(vec![], 200)? else {
        return Ok(());
    };

    let output = run_limitprobe(["-u", url.as_str(), "-t", "-5"])?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    if server.hits() != 0 {
        return Err(format!("Expected no requests, server saw {}", server.hits()));
    }
    Ok(())
}

#[test]
fn e2e_success_until_deadline() -> Result<(), String> {
    let Some((url, server)) = spawn_scripted_server_or_skip(vec![], 200)? else {
        return Ok(());
    };

    let output = run_limitprobe(["-u", url.as_str(), "-t", "1"])?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    let stdout = stdout_of(&output);
    let success_lines = stdout
        .lines()
        .filter(|line| line.contains("Success! Expected HTTP success code received: 200"))
        .count();
    if success_lines == 0 || success_lines != server.hits() {
        return Err(format!(
            "Expected one success line per request ({} hits)\n{}",
            server.hits(),
            describe(&output)
        ));
    }
    Ok(())
}

#[test]
fn e2e_rate_limit_on_fifth_request() -> Result<(), String> {
    let Some((url, server)) = spawn_scripted_server_or_skip(vec![200, 200, 200, 200, 429], 200)?
    else {
        return Ok(());
    };

    let output = run_limitprobe(["-u", url.as_str(), "-t", "30"])?;
    if output.status.code() != Some(1) {
        return Err(describe(&output));
    }
    let stdout = stdout_of(&output);
    if !stdout.contains("Error! Expected HTTP error code received: 429") {
        return Err(describe(&output));
    }
    if !stdout.contains("Rate limit hit: 4 requests") {
        return Err(describe(&output));
    }
    if server.hits() != 5 {
        return Err(format!("Expected 5 requests, server saw {}", server.hits()));
    }
    Ok(())
}

#[test]
fn e2e_legacy_flags_and_headers() -> Result<(), String> {
    let Some((url, server)) = spawn_scripted_server_or_skip(vec![201, 500, 503], 201)? else {
        return Ok(());
    };

    let output = run_limitprobe([
        "-u",
        url.as_str(),
        "-H",
        "X-Api-Key: secret, Authorization: Bearer a:b",
        "-success",
        "201",
        "-error",
        "503",
        "-t",
        "30",
    ])?;
    if output.status.code() != Some(1) {
        return Err(describe(&output));
    }
    let stdout = stdout_of(&output);
    if !stdout.contains("Unexpected HTTP response code received: 500") {
        return Err(describe(&output));
    }
    if !stdout.contains("Rate limit hit: 2 requests") {
        return Err(describe(&output));
    }
    if server.hits() != 3 {
        return Err(format!("Expected 3 requests, server saw {}", server.hits()));
    }
    Ok(())
}

#[test]
fn e2e_unreachable_target_fails_on_first_attempt() -> Result<(), String> {
    let url = unreachable_url()?;
    let output = run_limitprobe(["-u", url.as_str(), "-t", "30"])?;
    if output.status.code() != Some(1) {
        return Err(describe(&output));
    }
    let stderr = stderr_of(&output);
    if !stderr.contains("Failed to send HTTP request") || !stderr.contains("refused") {
        return Err(describe(&output));
    }
    if stdout_of(&output).contains("received:") {
        return Err(describe(&output));
    }
    Ok(())
}

#[test]
fn e2e_help_exits_zero() -> Result<(), String> {
    let output = run_limitprobe(["-h"])?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    let stdout = stdout_of(&output);
    if !stdout.contains("Usage") || !stdout.contains("--success") {
        return Err(describe(&output));
    }
    Ok(())
}
