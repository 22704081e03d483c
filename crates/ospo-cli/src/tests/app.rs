use crate::commands::Commands;
use crate::project_commands::ProjectCommands;
use crate::request_commands::{RequestCommands, SubmitCommands};
use crate::tests::now;
use crate::App;

use std::sync::Arc;

use googletest::assert_that;
use googletest::prelude::eq;
use ospo_client::{HttpClient, InMemoryApi};
use ospo_core::fixtures::{self, MOCK_USER_ID};
use ospo_core::{RequestStatus, SubmitRequest, ValidationLimits};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn demo_app() -> (Arc<InMemoryApi>, App) {
    let api = Arc::new(InMemoryApi::seeded());
    let app = App::new(api.clone(), fixtures::mock_user(), ValidationLimits::default());
    (api, app)
}

fn request(action: RequestCommands) -> Commands {
    Commands::Request { action }
}

#[tokio::test]
async fn given_demo_backend_when_listing_then_cards_newest_first() {
    // Given
    let (_, app) = demo_app();

    // When
    let outcome = app
        .run(request(RequestCommands::List { status: None }), now())
        .await
        .unwrap();

    // Then
    assert!(outcome.success);
    let cards = outcome.output.as_array().unwrap();
    assert_that!(cards.len(), eq(3));
    assert_eq!(cards[0]["id"], "req-1");
    assert_eq!(cards[0]["age"], "3 days ago");
    assert_eq!(cards[2]["age"], "5 days ago");
}

#[tokio::test]
async fn given_status_filter_when_listing_then_filtered() {
    let (_, app) = demo_app();

    let outcome = app
        .run(
            request(RequestCommands::List {
                status: Some(RequestStatus::InReview),
            }),
            now(),
        )
        .await
        .unwrap();

    let cards = outcome.output.as_array().unwrap();
    assert_that!(cards.len(), eq(1));
    assert_eq!(cards[0]["typeLabel"], "Project Request");
}

#[tokio::test]
async fn given_backend_down_when_listing_then_error_output_and_failure() {
    let (api, app) = demo_app();
    api.fail_next(1);

    let outcome = app
        .run(request(RequestCommands::List { status: None }), now())
        .await
        .unwrap();

    assert!(!outcome.success);
    assert_eq!(
        outcome.output,
        json!({ "error": "API call failed: Service Unavailable" })
    );
}

#[tokio::test]
async fn given_decided_requests_when_open_then_only_open_ones() {
    let (api, app) = demo_app();
    api.set_status("req-1", RequestStatus::Approved);

    let outcome = app
        .run(request(RequestCommands::Open { page: 1 }), now())
        .await
        .unwrap();

    assert_eq!(outcome.output["total"], 2);
    assert_eq!(outcome.output["pageCount"], 1);
    assert_eq!(outcome.output["requests"][0]["id"], "req-3");
}

#[tokio::test]
async fn given_demo_backend_when_stats_then_counts() {
    let (api, app) = demo_app();
    api.set_status("req-3", RequestStatus::Rejected);

    let outcome = app.run(request(RequestCommands::Stats), now()).await.unwrap();

    assert_eq!(
        outcome.output,
        json!({ "pending": 1, "in_review": 1, "approved": 0, "rejected": 1, "total": 3 })
    );
}

#[tokio::test]
async fn given_invalid_form_when_submitting_then_report_and_nothing_sent() {
    // Given
    let (api, app) = demo_app();
    let kind = SubmitCommands::Project {
        title: "Go".to_string(),
        project_name: Some("tool".to_string()),
        project_url: Some("https://gitlab.com/acme/tool".to_string()),
        license: None,
    };

    // When
    let outcome = app
        .run(request(RequestCommands::Submit { kind }), now())
        .await
        .unwrap();

    // Then
    assert!(!outcome.success);
    assert_that!(api.call_count(), eq(0));
    let summary = outcome.output["error"].as_str().unwrap();
    assert!(
        summary.starts_with("title: Title must be at least 3 characters long; "),
        "{summary}"
    );
    assert!(summary.ends_with("License selection is required"), "{summary}");
    let errors = outcome.output["validation"]["errors"].as_array().unwrap();
    let messages: Vec<&str> = errors
        .iter()
        .filter_map(|e| e["message"].as_str())
        .collect();
    assert_eq!(
        messages,
        vec![
            "Title must be at least 3 characters long",
            "Only GitHub URLs are currently supported",
            "License selection is required",
        ]
    );
}

#[tokio::test]
async fn given_valid_form_when_submitting_then_refetched_list_reported() {
    // Given
    let (api, app) = demo_app();
    let data = SubmitRequest::pull_request(
        "Fix login race",
        "Authentication Service",
        "https://github.com/acme/auth/pull/42",
    );

    // When
    let outcome = app.submit(data, now()).await.unwrap();

    // Then
    assert!(outcome.success);
    assert_eq!(
        outcome.output["message"],
        "Pull request approval submitted successfully"
    );
    assert_that!(api.stored_requests().len(), eq(4));
    assert_that!(app.store().requests().len(), eq(4));
    assert_eq!(outcome.output["requests"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn given_backend_down_when_submitting_then_failure_with_error() {
    let (api, app) = demo_app();
    api.fail_next(1);
    let data = SubmitRequest::access("Need write access", "the muppets", "maintainer");

    let outcome = app.submit(data, now()).await.unwrap();

    assert!(!outcome.success);
    assert_eq!(outcome.output["success"], false);
    assert_eq!(outcome.output["error"], "API call failed: Service Unavailable");
    assert_that!(api.stored_requests().len(), eq(3));
}

#[tokio::test]
async fn given_demo_backend_when_dashboard_then_summary() {
    let (_, app) = demo_app();

    let outcome = app.run(Commands::Dashboard, now()).await.unwrap();

    assert!(outcome.success);
    assert_eq!(outcome.output["user"]["corporateId"], MOCK_USER_ID);
    assert_eq!(outcome.output["authoredProjects"], 3);
    assert_eq!(outcome.output["contributedProjects"], 4);
    assert_eq!(outcome.output["approvedProjects"], 8);
    assert_eq!(outcome.output["openRequests"]["total"], 3);
    assert_eq!(outcome.output["stats"]["in_review"], 1);
}

#[tokio::test]
async fn given_demo_backend_when_listing_own_projects_then_fixture_projects() {
    let (_, app) = demo_app();
    let project = |action| Commands::Project { action };

    let authored = app.run(project(ProjectCommands::Authored), now()).await.unwrap();
    let contributed = app
        .run(project(ProjectCommands::Contributed), now())
        .await
        .unwrap();

    assert_eq!(authored.output.as_array().unwrap().len(), 3);
    assert_eq!(contributed.output.as_array().unwrap().len(), 4);
    assert_eq!(
        authored.output[0]["name"],
        fixtures::authored_projects()[0].name.as_str()
    );
}

#[tokio::test]
async fn given_new_user_on_http_backend_when_dashboard_then_counts_from_backend() {
    // Given
    let mock_server = MockServer::start().await;
    for (endpoint, body) in [
        ("/api/get-requests", json!({ "requests": [], "total": 0 })),
        ("/api/get-approved-projects", json!({ "approvedProjects": [], "total": 0 })),
        ("/api/get-authored-projects", json!({ "projects": [], "total": 0 })),
        ("/api/get-contributed-projects", json!({ "projects": [], "total": 0 })),
    ] {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&mock_server)
            .await;
    }

    let mut user = fixtures::mock_user();
    user.corporate_id = "NEWHIRE42".to_string();
    let api = Arc::new(HttpClient::new(&mock_server.uri()));
    let app = App::new(api, user, ValidationLimits::default());

    // When
    let outcome = app.run(Commands::Dashboard, now()).await.unwrap();

    // Then
    assert!(outcome.success);
    assert_eq!(outcome.output["authoredProjects"], 0);
    assert_eq!(outcome.output["contributedProjects"], 0);
    assert_eq!(outcome.output["approvedProjects"], 0);

    let received = mock_server.received_requests().await.unwrap();
    let paths: Vec<&str> = received.iter().map(|r| r.url.path()).collect();
    assert!(paths.contains(&"/api/get-authored-projects"), "{paths:?}");
    assert!(paths.contains(&"/api/get-contributed-projects"), "{paths:?}");
    let authored = received
        .iter()
        .find(|r| r.url.path() == "/api/get-authored-projects")
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&authored.body).unwrap();
    assert_eq!(body["userId"], "NEWHIRE42");
}

#[tokio::test]
async fn given_project_lists_failing_when_dashboard_then_counts_null() {
    // Given
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/get-requests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "requests": [] })))
        .mount(&mock_server)
        .await;

    let api = Arc::new(HttpClient::new(&mock_server.uri()));
    let app = App::new(api, fixtures::mock_user(), ValidationLimits::default());

    // When
    let outcome = app.run(Commands::Dashboard, now()).await.unwrap();

    // Then
    assert!(outcome.success);
    assert!(outcome.output["authoredProjects"].is_null());
    assert!(outcome.output["contributedProjects"].is_null());
    assert!(outcome.output["approvedProjects"].is_null());
}

#[tokio::test]
async fn given_user_command_then_session_user() {
    let (_, app) = demo_app();

    let outcome = app.run(Commands::User, now()).await.unwrap();

    assert_eq!(outcome.output["githubUsername"], "john.doe");
    assert_eq!(outcome.output["role"], "user");
}

#[tokio::test]
async fn given_http_backend_when_catalog_fails_then_command_errors() {
    // Given
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/get-approved-projects"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": { "message": "catalog offline" }
        })))
        .mount(&mock_server)
        .await;

    let api = Arc::new(HttpClient::new(&mock_server.uri()));
    let app = App::new(api, fixtures::mock_user(), ValidationLimits::default());

    // When
    let result = app
        .run(
            Commands::Project {
                action: ProjectCommands::Approved,
            },
            now(),
        )
        .await;

    // Then
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "API call failed: catalog offline");
}
