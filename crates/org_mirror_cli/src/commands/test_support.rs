//! Shared fixtures for the command tests.

use serde_json::{json, Value};
use std::{fs, path::PathBuf};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::commands::GlobalOptions;

pub const ORG_NAME: &str = "The Imaging Collective";

/// Writes a token file and a configuration pointing at `mock_server`.
pub fn options_for(temp_dir: &TempDir, mock_server: &MockServer) -> (GlobalOptions, PathBuf) {
    let config_path = temp_dir.path().join("org-mirror.toml");
    fs::write(
        &config_path,
        format!(
            "[organization]\nname = \"{ORG_NAME}\"\n\n[github]\napi_base_uri = \"{}\"\n",
            mock_server.uri()
        ),
    )
    .expect("Failed to write config");

    let token_path = temp_dir.path().join("token.txt");
    fs::write(&token_path, "# read:org, delete_repo\nghp_test_token\n")
        .expect("Failed to write token");

    let options = GlobalOptions {
        config: Some(config_path),
        org: None,
    };
    (options, token_path)
}

/// Serves one organization, `tic`, holding `repositories`.
pub async fn mount_organization(mock_server: &MockServer, repositories: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/user/orgs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "login": "tic", "id": 1 }
        ])))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/orgs/tic"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "login": "tic",
            "id": 1,
            "name": ORG_NAME
        })))
        .mount(mock_server)
        .await;

    let records: Vec<Value> = repositories
        .iter()
        .map(|name| {
            json!({
                "id": 1,
                "name": name,
                "full_name": format!("tic/{name}"),
                "html_url": format!("file:///nonexistent-org-mirror-source/{name}"),
                "private": true
            })
        })
        .collect();

    Mock::given(method("GET"))
        .and(path("/orgs/tic/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(records)))
        .mount(mock_server)
        .await;
}
