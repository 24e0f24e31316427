//! End-to-end runs against a temporary filesystem and a mocked qBittorrent
//! Web API.

use std::fs;
use std::path::Path;

use clap::Parser;
use flotsam_app::{Cli, execute};
use httpmock::prelude::*;
use serde_json::json;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn mock_login(server: &MockServer) {
    server.mock(|when, then| {
        when.method(POST).path("/api/v2/auth/login");
        then.status(200)
            .header("set-cookie", "SID=test-session")
            .body("Ok.");
    });
}

fn write_clients_file(path: &Path, server: &MockServer, names: &[&str]) -> TestResult {
    let mut rendered = String::new();
    for name in names {
        rendered.push_str(&format!(
            "[[clients]]\nname = \"{name}\"\nhost = \"{}\"\nport = {}\nusername = \"admin\"\npassword = \"secret\"\n\n",
            server.host(),
            server.port()
        ));
    }
    fs::write(path, rendered)?;
    Ok(())
}

fn cli_for(temp: &TempDir) -> Result<Cli, clap::Error> {
    Cli::try_parse_from([
        "flotsam",
        &temp.path().join("clients.toml").to_string_lossy(),
        "--roots",
        &temp.path().join("paths.txt").to_string_lossy(),
        "--output",
        &temp.path().join("orphans.txt").to_string_lossy(),
        "--quiet",
    ])
}

#[tokio::test]
async fn reports_exactly_the_unmanaged_local_files() -> TestResult {
    let temp = TempDir::new()?;
    let movies = temp.path().join("movies");
    let shows = temp.path().join("shows");
    fs::create_dir_all(&movies)?;
    fs::create_dir_all(&shows)?;
    fs::write(movies.join("a.mkv"), b"video")?;
    fs::write(shows.join("b.mkv"), b"video")?;
    fs::write(movies.join("orphan.nfo"), b"meta")?;
    fs::write(
        temp.path().join("paths.txt"),
        format!("{}\n{}\n", movies.display(), shows.display()),
    )?;

    let server = MockServer::start();
    mock_login(&server);
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/torrents/info");
        then.status(200).json_body(json!([
            {"hash": "aa", "save_path": movies.to_string_lossy()},
            {"hash": "bb", "save_path": shows.to_string_lossy()}
        ]));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/torrents/files")
            .query_param("hash", "aa");
        then.status(200).json_body(json!([{"name": "a.mkv"}]));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/torrents/files")
            .query_param("hash", "bb");
        then.status(200).json_body(json!([{"name": "b.mkv"}]));
    });
    write_clients_file(&temp.path().join("clients.toml"), &server, &["main"])?;

    let summary = execute(&cli_for(&temp)?).await?;
    assert_eq!(summary.orphans, 1);

    let report = fs::read_to_string(temp.path().join("orphans.txt"))?;
    let expected = movies.join("orphan.nfo");
    assert_eq!(report, format!("{}\n", expected.display()));
    Ok(())
}

#[tokio::test]
async fn overlapping_endpoints_do_not_create_false_orphans() -> TestResult {
    let temp = TempDir::new()?;
    let movies = temp.path().join("movies");
    fs::create_dir_all(&movies)?;
    fs::write(movies.join("a.mkv"), b"video")?;
    fs::write(temp.path().join("paths.txt"), format!("{}\n", movies.display()))?;

    // Both configured endpoints resolve to the same mock server, so the
    // same file is reported twice across the remote inventory.
    let server = MockServer::start();
    mock_login(&server);
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/torrents/info");
        then.status(200)
            .json_body(json!([{"hash": "aa", "save_path": movies.to_string_lossy()}]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/torrents/files");
        then.status(200).json_body(json!([{"name": "a.mkv"}]));
    });
    write_clients_file(&temp.path().join("clients.toml"), &server, &["first", "second"])?;

    let summary = execute(&cli_for(&temp)?).await?;
    assert_eq!(summary.orphans, 0);

    let report = fs::read_to_string(temp.path().join("orphans.txt"))?;
    assert!(report.is_empty());
    Ok(())
}

#[tokio::test]
async fn case_differences_do_not_create_orphans() -> TestResult {
    let temp = TempDir::new()?;
    let movies = temp.path().join("movies");
    fs::create_dir_all(&movies)?;
    fs::write(movies.join("Film.MKV"), b"video")?;
    fs::write(temp.path().join("paths.txt"), format!("{}\n", movies.display()))?;

    let server = MockServer::start();
    mock_login(&server);
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/torrents/info");
        then.status(200)
            .json_body(json!([{"hash": "aa", "save_path": movies.to_string_lossy()}]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/torrents/files");
        then.status(200).json_body(json!([{"name": "film.mkv"}]));
    });
    write_clients_file(&temp.path().join("clients.toml"), &server, &["main"])?;

    let summary = execute(&cli_for(&temp)?).await?;
    assert_eq!(summary.orphans, 0);
    Ok(())
}

#[tokio::test]
async fn authentication_failure_leaves_no_report_behind() -> TestResult {
    let temp = TempDir::new()?;
    let movies = temp.path().join("movies");
    fs::create_dir_all(&movies)?;
    fs::write(movies.join("a.mkv"), b"video")?;
    fs::write(temp.path().join("paths.txt"), format!("{}\n", movies.display()))?;

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v2/auth/login");
        then.status(200).body("Fails.");
    });
    write_clients_file(&temp.path().join("clients.toml"), &server, &["main"])?;

    let err = execute(&cli_for(&temp)?)
        .await
        .expect_err("rejected login should abort the run");
    assert_eq!(err.exit_code(), 3);
    assert!(!temp.path().join("orphans.txt").exists());
    Ok(())
}

#[tokio::test]
async fn empty_endpoint_list_is_a_validation_error() -> TestResult {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("paths.txt"), "")?;
    fs::write(temp.path().join("clients.toml"), "")?;

    let err = execute(&cli_for(&temp)?)
        .await
        .expect_err("empty endpoint list should be rejected");
    assert_eq!(err.exit_code(), 2);
    assert!(!temp.path().join("orphans.txt").exists());
    Ok(())
}
