use assert_cmd::Command;
use assert_cmd::cargo;
use mockito::Server;
use predicates::prelude::*;

fn uci_site() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("uci-site"));
    cmd.env_remove("SITE_URL")
        .env_remove("UCI_SITE_LINK_POLICY")
        .env_remove("UCI_SITE_BIND");
    cmd
}

#[test]
fn test_render_full_release() {
    let mut server = Server::new();

    let _mock_version = server
        .mock("GET", "/api/version")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "version": "1.0.0",
                "notes": "First public release",
                "pub_date": "2024-06-01T12:00:00Z",
                "platforms": {
                    "linux-x86_64": { "signature": "s", "url": "https://dl.example.com/v1.0.0/uci_1.0.0_amd64.AppImage.tar.gz" },
                    "windows-x86_64": { "signature": "s", "url": "https://dl.example.com/v1.0.0/uci_1.0.0_x64_en-US.msi.zip" },
                    "darwin-x86_64": { "signature": "s", "url": "https://dl.example.com/v1.0.0/uci_x64.app.tar.gz" },
                    "darwin-aarch64": { "signature": "s", "url": "https://dl.example.com/v1.0.0/uci_aarch64.app.tar.gz" }
                }
            }"#,
        )
        .expect(1)
        .create();

    uci_site()
        .arg("--site-url")
        .arg(server.url())
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::contains("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("Sat, 01 Jun 2024 12:00:00 GMT"))
        .stdout(predicate::str::contains(
            "https://dl.example.com/v1.0.0/uci_1.0.0_amd64.AppImage",
        ))
        .stdout(predicate::str::contains(
            "https://dl.example.com/v1.0.0/uci_1.0.0_aarch64.dmg",
        ))
        .stdout(predicate::str::contains(
            "https://dl.example.com/v1.0.0/uci_1.0.0_x64.dmg",
        ))
        .stdout(predicate::str::contains(
            "https://dl.example.com/v1.0.0/uci_1.0.0_x64_en-US.msi\"",
        ))
        .stdout(predicate::str::contains("Updating for").not());
}

#[test]
fn test_render_same_key_policy() {
    let mut server = Server::new();

    let _mock_version = server
        .mock("GET", "/api/version")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "version": "1.0.0",
                "platforms": {
                    "darwin-aarch64": { "url": "https://dl.example.com/v1.0.0/uci_aarch64.app.tar.gz" }
                }
            }"#,
        )
        .create();

    uci_site()
        .args(["render", "--link-policy", "same-key"])
        .env("SITE_URL", server.url())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "href=\"https://dl.example.com/v1.0.0/uci_aarch64.app\"",
        ))
        .stdout(predicate::str::contains("Updating for Mac OS - Intel..."));
}

#[test]
fn test_render_empty_feed() {
    let mut server = Server::new();

    let _mock_version = server
        .mock("GET", "/api/version")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create();

    uci_site()
        .arg("render")
        .arg("--site-url")
        .arg(server.url())
        .assert()
        .success()
        .stdout(predicate::str::contains("Updating for Linux..."))
        .stdout(predicate::str::contains("Updating for Windows..."))
        .stdout(predicate::str::contains("<em>Last release: </em>"));
}

#[test]
fn test_render_fails_when_feed_is_down() {
    let mut server = Server::new();

    let _mock_version = server
        .mock("GET", "/api/version")
        .with_status(500)
        .create();

    uci_site()
        .arg("render")
        .arg("--site-url")
        .arg(server.url())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to fetch release metadata"));
}

#[test]
fn test_missing_site_url() {
    uci_site()
        .arg("render")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing site URL"));
}

#[test]
fn test_version_flag() {
    uci_site()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("uci-site "));
}
