// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Exit status and diagnostics of the `contrib-feed` binary.

use std::{
    path::Path,
    process::{Command, Output},
    thread,
    time::Duration,
};

use tempfile::tempdir;
use tiny_http::{Response, Server};

fn contrib_feed(dir: &Path, args: &[&str],) -> Output
{
    Command::new(env!("CARGO_BIN_EXE_contrib-feed"),)
        .args(args,)
        .current_dir(dir,)
        .env_remove("GH_TOKEN",)
        .output()
        .expect("failed to run contrib-feed",)
}

#[test]
fn missing_token_exits_with_status_one()
{
    let dir = tempdir().unwrap();
    let output = dir.path().join("contributors.svg",);

    let result = contrib_feed(dir.path(), &[
        "--owner",
        "octocat",
        "--repo",
        "hello-world",
        "--output",
        output.to_str().unwrap(),
    ],);

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr,);
    assert!(stderr.contains("GH_TOKEN env var is required"), "stderr: {stderr}");
    assert!(!output.exists());
}

#[test]
fn upstream_not_found_exits_with_status_one()
{
    let server = Server::http("127.0.0.1:0",).unwrap();
    let addr = server.server_addr().to_ip().expect("tcp listener",);
    let handle = thread::spawn(move || {
        if let Ok(Some(request,),) = server.recv_timeout(Duration::from_secs(10,),) {
            let response =
                Response::from_string("{\"message\":\"Not Found\"}",).with_status_code(404,);
            let _ = request.respond(response,);
        }
    },);

    let dir = tempdir().unwrap();
    let output = dir.path().join("contributors.svg",);
    let api_url = format!("http://{addr}");

    let result = Command::new(env!("CARGO_BIN_EXE_contrib-feed"),)
        .args([
            "--owner",
            "octocat",
            "--repo",
            "hello-world",
            "--output",
            output.to_str().unwrap(),
            "--api-url",
            api_url.as_str(),
        ],)
        .current_dir(dir.path(),)
        .env("GH_TOKEN", "ghp_test",)
        .output()
        .expect("failed to run contrib-feed",);
    handle.join().unwrap();

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr,);
    assert!(stderr.contains("404"), "stderr: {stderr}");
    assert!(!output.exists());
}

#[test]
fn malformed_flag_exits_with_status_one()
{
    let dir = tempdir().unwrap();

    let result = contrib_feed(dir.path(), &["--timeout-secs", "abc",],);

    assert_eq!(result.status.code(), Some(1));
    assert!(!result.stderr.is_empty());
}

#[test]
fn version_flag_exits_successfully()
{
    let dir = tempdir().unwrap();

    let result = contrib_feed(dir.path(), &["--version",],);

    assert_eq!(result.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&result.stdout,);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
