use assert_cmd::Command;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RELEASE_PATH: &str = "/repos/AEGIS-GAME/aegis/releases/latest";

struct TestEnv {
    tmp: TempDir,
    api_base: String,
}

impl TestEnv {
    fn new(server: &MockServer, client_version: &str) -> Self {
        let tmp = tempfile::tempdir().expect("tempdir");
        let env = Self {
            tmp,
            api_base: server.uri(),
        };
        env.install_client(client_version);
        env.notice()
            .args(["path", "set"])
            .arg(env.install_dir())
            .assert()
            .success();
        env
    }

    fn install_dir(&self) -> std::path::PathBuf {
        self.tmp.path().join("aegis")
    }

    fn install_client(&self, version: &str) {
        let client = self.install_dir().join("client");
        fs::create_dir_all(&client).expect("mkdir client");
        fs::write(
            client.join("package.json"),
            json!({ "name": "aegis-client", "version": version }).to_string(),
        )
        .expect("write package.json");
    }

    fn notice(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_aegis-notice"));
        cmd.env("AEGIS_NOTICE_CONFIG_DIR", self.tmp.path().join("config"))
            .env("AEGIS_NOTICE_STATE_DIR", self.tmp.path().join("state"))
            .env("AEGIS_NOTICE_API_BASE_URL", &self.api_base)
            .env("NO_COLOR", "1");
        cmd
    }

    fn check_json(&self) -> Value {
        let output = self
            .notice()
            .args(["check", "--json", "--no-delay"])
            .output()
            .expect("run check");
        assert!(output.status.success(), "check must never fail the host");
        serde_json::from_slice(&output.stdout).expect("check --json emits JSON")
    }

    fn state_file(&self) -> std::path::PathBuf {
        self.tmp.path().join("state").join("store.json")
    }
}

async fn serve_release(server: &MockServer, tag: &str) {
    server.reset().await;
    Mock::given(method("GET"))
        .and(path(RELEASE_PATH))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tag_name": tag,
            "name": format!("AEGIS {}", tag),
        })))
        .mount(server)
        .await;
}

fn assert_no_store(path: &Path) {
    if let Ok(raw) = fs::read_to_string(path) {
        assert!(!raw.contains("aegis_version_dismissed"));
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn newer_release_shows_notice() {
    let server = MockServer::start().await;
    serve_release(&server, "client-v2.8.0").await;
    let env = TestEnv::new(&server, "2.7.5");

    let report = env.check_json();
    assert_eq!(report["localVersion"], "2.7.5");
    assert_eq!(report["latestVersion"], "2.8.0");
    assert_eq!(report["updateAvailable"], true);
    assert_eq!(report["isLoading"], false);
    assert_eq!(report["error"], Value::Null);
    assert_eq!(report["showNotice"], true);

    let output = env.notice().args(["check", "--no-delay"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Update available: 2.7.5 → 2.8.0"));
    assert!(stdout.contains("https://github.com/AEGIS-GAME/aegis/releases/latest"));
}

#[tokio::test(flavor = "multi_thread")]
async fn same_or_older_release_hides_notice() {
    let server = MockServer::start().await;
    serve_release(&server, "v2.8.0").await;
    let env = TestEnv::new(&server, "2.8.0");
    assert_eq!(env.check_json()["updateAvailable"], false);

    serve_release(&server, "v2.7.9").await;
    let report = env.check_json();
    assert_eq!(report["updateAvailable"], false);
    assert_eq!(report["showNotice"], false);
}

#[tokio::test(flavor = "multi_thread")]
async fn server_error_surfaces_in_error_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RELEASE_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let env = TestEnv::new(&server, "2.7.5");

    let report = env.check_json();
    assert_eq!(report["isLoading"], false);
    assert_eq!(report["updateAvailable"], false);
    assert_eq!(report["localVersion"], "2.7.5");
    assert!(
        report["error"]
            .as_str()
            .is_some_and(|e| e.contains("Failed to fetch latest version"))
    );
    assert_eq!(report["showNotice"], false);
}

#[tokio::test(flavor = "multi_thread")]
async fn payload_without_tag_is_nothing_to_report() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RELEASE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "draft" })))
        .mount(&server)
        .await;
    let env = TestEnv::new(&server, "2.7.5");

    let report = env.check_json();
    assert_eq!(report["latestVersion"], Value::Null);
    assert_eq!(report["updateAvailable"], false);
    assert_eq!(report["error"], Value::Null);
}

#[tokio::test(flavor = "multi_thread")]
async fn dismissal_holds_until_a_newer_release() {
    let server = MockServer::start().await;
    serve_release(&server, "v2.8.0").await;
    let env = TestEnv::new(&server, "2.7.5");
    assert_no_store(&env.state_file());

    // Dismiss without a version picks the latest release
    env.notice().arg("dismiss").assert().success();
    let report = env.check_json();
    assert_eq!(report["updateAvailable"], true);
    assert_eq!(report["suppressed"], true);
    assert_eq!(report["showNotice"], false);

    serve_release(&server, "v2.9.0").await;
    let report = env.check_json();
    assert_eq!(report["latestVersion"], "2.9.0");
    assert_eq!(report["suppressed"], false);
    assert_eq!(report["showNotice"], true);
}

#[tokio::test(flavor = "multi_thread")]
async fn inequality_policy_is_selectable() {
    let server = MockServer::start().await;
    serve_release(&server, "v2.9").await;
    let env = TestEnv::new(&server, "2.10");
    assert_eq!(env.check_json()["updateAvailable"], false);

    env.notice()
        .args(["settings", "set", "comparison", "inequality"])
        .assert()
        .success();
    assert_eq!(env.check_json()["updateAvailable"], true);
}

#[tokio::test(flavor = "multi_thread")]
async fn status_reports_up_to_date_client() {
    let server = MockServer::start().await;
    serve_release(&server, "v2.8.0").await;
    let env = TestEnv::new(&server, "2.8.0");

    let output = env.notice().arg("status").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Client installed: yes"));
    assert!(stdout.contains("Client is up to date (version 2.8.0)"));
}
