/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const FIXTURE_ROOT: &str = "tests/fixtures/repos";

fn pasted_text() -> String {
    "package main\n\nfunc main() { fmt.Println(\"inventory service\") }\n".repeat(4)
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("repo-catalog").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("repo-catalog")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("repo-catalog")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("repo-catalog")
            .args(["catalog", "-f", "invalid_format"])
            .assert()
            .code(2);
    }

    /// Exit code 2: analyze needs exactly one source
    #[test]
    fn test_exit_code_analyze_without_source() {
        cargo_bin_cmd!("repo-catalog")
            .arg("analyze")
            .assert()
            .code(2);
    }

    /// Exit code 2: file count must be positive
    #[test]
    fn test_exit_code_zero_file_count() {
        cargo_bin_cmd!("repo-catalog")
            .args(["analyze", "-r", "sample-shop", "-n", "0"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - no stored analysis
    #[test]
    fn test_exit_code_catalog_without_analysis() {
        let session = TempDir::new().unwrap();
        cargo_bin_cmd!("repo-catalog")
            .arg("catalog")
            .arg("--session-dir")
            .arg(session.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("No analysis result is available"));
    }

    /// Exit code 3: Application error - unknown repository
    #[test]
    fn test_exit_code_repository_not_found() {
        let session = TempDir::new().unwrap();
        cargo_bin_cmd!("repo-catalog")
            .args(["analyze", "-r", "ghost", "--repo-root", FIXTURE_ROOT])
            .arg("--session-dir")
            .arg(session.path())
            .env_remove("GEMINI_API_KEY")
            .env_remove("GOOGLE_API_KEY")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Not Found"))
            .stderr(predicate::str::contains("Repository not found"));
    }

    /// Exit code 3: Application error - pasted text below the minimum
    #[test]
    fn test_exit_code_short_text() {
        let dir = TempDir::new().unwrap();
        let text_file = dir.path().join("snippet.txt");
        fs::write(&text_file, "fn main() {}").unwrap();

        cargo_bin_cmd!("repo-catalog")
            .arg("analyze")
            .arg("--text-file")
            .arg(&text_file)
            .arg("--session-dir")
            .arg(dir.path().join("session"))
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid Input"))
            .stderr(predicate::str::contains("at least 100 characters"));
    }

    /// Exit code 3: Application error - repository identifier escapes the root
    #[test]
    fn test_exit_code_repository_traversal() {
        let session = TempDir::new().unwrap();
        cargo_bin_cmd!("repo-catalog")
            .args(["analyze", "-r", "../fixtures", "--repo-root", FIXTURE_ROOT])
            .arg("--session-dir")
            .arg(session.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid Input"));
    }
}

mod repos_tests {
    use super::*;

    #[test]
    fn test_repos_lists_fixture_repositories() {
        cargo_bin_cmd!("repo-catalog")
            .args(["repos", "--repo-root", FIXTURE_ROOT])
            .assert()
            .success()
            .stdout("inventory\nsample-shop\n");
    }

    #[test]
    fn test_repos_empty_root() {
        let root = TempDir::new().unwrap();
        cargo_bin_cmd!("repo-catalog")
            .arg("repos")
            .arg("--repo-root")
            .arg(root.path())
            .assert()
            .success()
            .stdout("")
            .stderr(predicate::str::contains("No repositories found under"));
    }
}

mod analysis_flow_tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MODEL_OUTPUT: &str = r#"{"components":[
        {"name":"ShopServer","description":"HTTP entry point","type":"service","language":"JavaScript","dependencies":["CheckoutService","Logger"]},
        {"name":"CheckoutService","description":"Handles checkout and payments","type":"service","language":"JavaScript","dependencies":["Logger","PaymentGateway"]},
        {"name":"Logger","description":"Structured logging helper","type":"library","language":"JavaScript","dependencies":[]}
    ]}"#;

    async fn start_backend(model: &str, output: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/models/{}:generateContent", model)))
            .and(header("x-goog-api-key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": { "role": "model", "parts": [{ "text": output }] },
                    "finishReason": "STOP"
                }]
            })))
            .mount(&server)
            .await;
        server
    }

    fn write_config(dir: &TempDir, server: &MockServer) -> std::path::PathBuf {
        let config_path = dir.path().join("repo-catalog.config.yml");
        fs::write(
            &config_path,
            format!(
                "repo_root: {}\nsession_dir: {}\napi_base_url: {}\n",
                std::env::current_dir().unwrap().join(FIXTURE_ROOT).display(),
                dir.path().join("session").display(),
                server.uri()
            ),
        )
        .unwrap();
        config_path
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_analyze_then_browse_then_clear() {
        let server = start_backend("gemini-1.5-flash", MODEL_OUTPUT).await;
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, &server);

        cargo_bin_cmd!("repo-catalog")
            .arg("--config")
            .arg(&config_path)
            .args(["analyze", "-r", "sample-shop", "--api-key", "test-key"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Analysis successful."))
            .stdout(predicate::str::contains("# Component Catalog"))
            .stdout(predicate::str::contains("- **Source**: sample-shop"))
            .stdout(predicate::str::contains("[ShopServer](component/ShopServer)"))
            .stdout(predicate::str::contains("~~PaymentGateway~~ ⚠️ not found"));

        cargo_bin_cmd!("repo-catalog")
            .arg("--config")
            .arg(&config_path)
            .args(["show", "Logger"])
            .assert()
            .success()
            .stdout(predicate::str::contains("## 📚 Logger"))
            .stdout(predicate::str::contains(
                "### Dependents\n\n- [ShopServer](component/ShopServer)\n- [CheckoutService](component/CheckoutService)\n",
            ));

        cargo_bin_cmd!("repo-catalog")
            .arg("--config")
            .arg(&config_path)
            .args(["catalog", "-s", "CHECKOUT", "-f", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"name\": \"CheckoutService\""))
            .stdout(predicate::str::contains("\"total_count\": 3"))
            .stdout(predicate::str::contains("\"name\": \"ShopServer\"").not());

        cargo_bin_cmd!("repo-catalog")
            .arg("--config")
            .arg(&config_path)
            .arg("map")
            .assert()
            .success()
            .stdout(predicate::str::contains("## Component Relationships"))
            .stdout(predicate::str::contains(
                "- [ShopServer](component/ShopServer) depends on: [CheckoutService](component/CheckoutService), [Logger](component/Logger)\n",
            ));

        cargo_bin_cmd!("repo-catalog")
            .arg("--config")
            .arg(&config_path)
            .arg("clear")
            .assert()
            .success()
            .stderr(predicate::str::contains("Session cleared"));

        cargo_bin_cmd!("repo-catalog")
            .arg("--config")
            .arg(&config_path)
            .arg("catalog")
            .assert()
            .code(3);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_show_unknown_component_is_not_an_error() {
        let server = start_backend("gemini-1.5-flash", MODEL_OUTPUT).await;
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, &server);

        cargo_bin_cmd!("repo-catalog")
            .arg("--config")
            .arg(&config_path)
            .args(["analyze", "-r", "sample-shop", "--api-key", "test-key"])
            .assert()
            .success();

        cargo_bin_cmd!("repo-catalog")
            .arg("--config")
            .arg(&config_path)
            .args(["show", "Ghost"])
            .assert()
            .success()
            .stdout(predicate::str::contains("## Component Not Found"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_analyze_from_stdin_with_no_components() {
        let server = start_backend("gemini-1.5-pro", r#"{"components":[]}"#).await;
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, &server);

        cargo_bin_cmd!("repo-catalog")
            .arg("--config")
            .arg(&config_path)
            .args(["analyze", "--stdin", "-m", "gemini-1.5-pro", "--api-key", "test-key"])
            .write_stdin(pasted_text())
            .assert()
            .success()
            .stderr(predicate::str::contains("no components were identified"))
            .stdout(predicate::str::contains("- **Source**: pasted text"))
            .stdout(predicate::str::contains("No components to display in the map."));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_analyze_writes_output_file() {
        let server = start_backend("gemini-1.5-flash", MODEL_OUTPUT).await;
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, &server);
        let output_path = dir.path().join("catalog.json");

        cargo_bin_cmd!("repo-catalog")
            .arg("--config")
            .arg(&config_path)
            .args(["analyze", "-r", "sample-shop", "--api-key", "test-key", "-f", "json"])
            .arg("-o")
            .arg(&output_path)
            .assert()
            .success();

        let written = fs::read_to_string(&output_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["metadata"]["component_count"], 3);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_backend_failure_exits_with_analysis_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&server)
            .await;
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, &server);

        cargo_bin_cmd!("repo-catalog")
            .arg("--config")
            .arg(&config_path)
            .args(["analyze", "-r", "sample-shop", "--api-key", "test-key"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Analysis Failed"))
            .stderr(predicate::str::contains("upstream exploded"));

        // Nothing was stored
        cargo_bin_cmd!("repo-catalog")
            .arg("--config")
            .arg(&config_path)
            .arg("catalog")
            .assert()
            .code(3);
    }
}
