//
//  azure-devops-rest
//  tests/rest_client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Service clients against a local HTTP server.

use std::sync::Arc;

use azure_devops_rest::api::git::{GetItemOptions, GetRefsOptions, GitClient};
use azure_devops_rest::api::release::{GetReleasesOptions, ReleaseClient};
use azure_devops_rest::api::{ApiError, Connection, ReqwestTransport};
use azure_devops_rest::auth::AuthCredential;
use mockito::{Matcher, Server};

const GIT_AREA: &str = "4e080c62-fa21-4fbc-8fef-2a10a2b38049";
const RELEASE_AREA: &str = "efc2f575-36ef-48e9-b672-0c6fb4a48ac5";

fn connect(server: &Server) -> Connection {
    let transport = ReqwestTransport::new()
        .unwrap()
        .with_auth(AuthCredential::PersonalAccessToken {
            token: "pat".to_string(),
        });
    Connection::new(&format!("{}/contoso", server.url()), Arc::new(transport)).unwrap()
}

#[tokio::test]
async fn test_get_refs_reads_continuation_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            Matcher::Regex(r"^/contoso/Fabrikam/_apis/git/repositories/web/refs".to_string()),
        )
        .match_header("authorization", "Basic OnBhdA==")
        .match_header("accept", "application/json;api-version=7.1-preview.1")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_header("x-ms-continuationtoken", "next-page")
        .with_body(
            r#"{"count":2,"value":[
                {"name":"refs/heads/main","objectId":"a1"},
                {"name":"refs/heads/dev","objectId":"b2"}
            ]}"#,
        )
        .create_async()
        .await;

    let git: GitClient = connect(&server).client();
    let page = git
        .get_refs("web", Some("Fabrikam"), &GetRefsOptions::default())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].name.as_deref(), Some("refs/heads/main"));
    assert_eq!(page.continuation_token.as_deref(), Some("next-page"));
    assert!(page.has_more());
}

#[tokio::test]
async fn test_error_payload_becomes_status_error() {
    let mut server = Server::new_async().await;
    server
        .mock(
            "GET",
            Matcher::Regex(r"^/contoso/Fabrikam/_apis/git/Repositories/missing".to_string()),
        )
        .match_query(Matcher::Any)
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"message":"TF401019: The Git repository with name or identifier missing does not exist.","typeKey":"GitRepositoryNotFoundException"}"#,
        )
        .create_async()
        .await;

    let git: GitClient = connect(&server).client();
    let err = git
        .get_repository("missing", Some("Fabrikam"))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    match err {
        ApiError::Status {
            message, type_key, ..
        } => {
            assert!(message.starts_with("TF401019"));
            assert_eq!(type_key.as_deref(), Some("GitRepositoryNotFoundException"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_get_item_text_returns_raw_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            Matcher::Regex(r"^/contoso/Fabrikam/_apis/git/repositories/web/Items".to_string()),
        )
        .match_header("accept", Matcher::Regex("text/plain".to_string()))
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body("# Fabrikam\n")
        .create_async()
        .await;

    let git: GitClient = connect(&server).client();
    let text = git
        .get_item_text(
            "web",
            "/README.md",
            Some("Fabrikam"),
            &GetItemOptions::default(),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(text, "# Fabrikam\n");
}

#[tokio::test]
async fn test_resolve_client_uses_area_location() {
    let mut server = Server::new_async().await;
    let area_body = serde_json::json!({
        "id": RELEASE_AREA,
        "name": "Release",
        "locationUrl": format!("{}/vsrm/contoso/", server.url()),
    });
    server
        .mock(
            "GET",
            Matcher::Regex(format!("^/contoso/_apis/resourceAreas/{RELEASE_AREA}")),
        )
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(area_body.to_string())
        .create_async()
        .await;
    let releases = server
        .mock(
            "GET",
            Matcher::Regex(r"^/vsrm/contoso/Fabrikam/_apis/Release/releases".to_string()),
        )
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"count":1,"value":[{"id":12,"name":"Release-12"}]}"#)
        .create_async()
        .await;

    let client: ReleaseClient = connect(&server).resolve_client().await.unwrap();
    let page = client
        .get_releases(Some("Fabrikam"), &GetReleasesOptions::default())
        .await
        .unwrap();

    releases.assert_async().await;
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, Some(12));
    assert!(!page.has_more());
}

#[tokio::test]
async fn test_resolve_client_falls_back_on_unknown_area() {
    let mut server = Server::new_async().await;
    server
        .mock(
            "GET",
            Matcher::Regex(format!("^/contoso/_apis/resourceAreas/{GIT_AREA}")),
        )
        .match_query(Matcher::Any)
        .with_status(404)
        .create_async()
        .await;
    let repositories = server
        .mock(
            "GET",
            Matcher::Regex(r"^/contoso/Fabrikam/_apis/git/Repositories".to_string()),
        )
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"count":1,"value":[{"id":"r1","name":"web"}]}"#)
        .create_async()
        .await;

    let git: GitClient = connect(&server).resolve_client().await.unwrap();
    let repos = git
        .get_repositories(Some("Fabrikam"), &Default::default())
        .await
        .unwrap();

    repositories.assert_async().await;
    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].name.as_deref(), Some("web"));
}
