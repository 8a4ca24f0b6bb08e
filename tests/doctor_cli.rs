//! Smoke test: `claude doctor` should succeed where the Claude CLI exists.
//! Skips (passes without asserting) when `claude` is not on PATH or the run
//! times out waiting for interactive input.

use std::io::{Read, Write};
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

const DOCTOR_TIMEOUT: Duration = Duration::from_secs(5);

#[test]
fn claude_doctor_succeeds_if_cli_available() {
    let Ok(claude) = which::which("claude") else {
        eprintln!("skipping: claude CLI not found in PATH");
        return;
    };

    let mut child = Command::new(claude)
        .arg("doctor")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn claude doctor");

    // doctor may prompt; answer like an operator pressing enter, then close stdin
    if let Some(mut stdin) = child.stdin.take() {
        let _ = stdin.write_all(b"\n");
    }

    // Drain pipes on threads so a chatty doctor cannot deadlock on a full pipe.
    let mut stdout_pipe = child.stdout.take().expect("stdout pipe");
    let mut stderr_pipe = child.stderr.take().expect("stderr pipe");
    let stdout_thread = thread::spawn(move || {
        let mut buf = String::new();
        let _ = stdout_pipe.read_to_string(&mut buf);
        buf
    });
    let stderr_thread = thread::spawn(move || {
        let mut buf = String::new();
        let _ = stderr_pipe.read_to_string(&mut buf);
        buf
    });

    let deadline = Instant::now() + DOCTOR_TIMEOUT;
    let status = loop {
        match child.try_wait().expect("poll claude doctor") {
            Some(status) => break status,
            None if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                eprintln!("skipping: claude doctor timed out (likely waiting for interactive input)");
                return;
            }
            None => thread::sleep(Duration::from_millis(50)),
        }
    };

    let stdout = stdout_thread.join().unwrap_or_default();
    let stderr = stderr_thread.join().unwrap_or_default();
    assert!(
        status.success(),
        "claude doctor failed (stdout: {stdout}, stderr: {stderr})"
    );
}
