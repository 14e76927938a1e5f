//! End-to-end scenarios over real loopback servers.

use crate::common::{spawn_pipeline, spawn_unconfigured_pipeline};
use std::sync::atomic::Ordering;
use waitlist_client::OutcomeKind;
use waitlist_core::{ListResponse, SubmitResponse};

#[tokio::test]
async fn test_first_submission_registers_end_to_end() {
    let pipeline = spawn_pipeline().await;
    let client = pipeline.client();

    let outcome = client.submit("a@b.com").await.unwrap();
    assert!(outcome.is_success());
    assert_eq!(outcome.message, "Email successfully registered");

    // Header row was created and exactly one data row follows it.
    let table = pipeline.sheet_state.lock().await;
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows()[0], vec!["Email", "Timestamp", "User Agent"]);
    let row = &table.rows()[1];
    assert_eq!(row[0], "a@b.com");
    assert!(chrono::DateTime::parse_from_rfc3339(&row[1]).is_ok());
    assert!(row[2].starts_with("waitlist-client/"));
    drop(table);

    assert_eq!(client.backed_up_emails().await, ["a@b.com"]);
    assert_eq!(pipeline.proxy_hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_duplicate_submission_passes_store_message_through() {
    let pipeline = spawn_pipeline().await;
    let client = pipeline.client();

    client.submit("a@b.com").await.unwrap();
    let outcome = client.submit("a@b.com").await.unwrap();

    assert_eq!(outcome.kind, OutcomeKind::Rejected);
    assert_eq!(outcome.message, "Email already registered");

    // Still exactly one row for that email, and the backup list did
    // not grow.
    let table = pipeline.sheet_state.lock().await;
    assert_eq!(table.row_count(), 2);
    drop(table);
    assert_eq!(client.backed_up_emails().await, ["a@b.com"]);
}

#[tokio::test]
async fn test_invalid_email_never_reaches_the_proxy() {
    let pipeline = spawn_pipeline().await;
    let client = pipeline.client();

    let outcome = client.submit("not-an-email").await.unwrap();
    assert_eq!(outcome.kind, OutcomeKind::Invalid);

    assert_eq!(pipeline.proxy_hits.load(Ordering::SeqCst), 0);
    assert_eq!(pipeline.sheet_state.lock().await.row_count(), 0);
    assert!(client.backed_up_emails().await.is_empty());
}

#[tokio::test]
async fn test_unconfigured_proxy_answers_500_without_touching_the_store() {
    let pipeline = spawn_unconfigured_pipeline().await;

    // Raw request: the status code is part of the contract.
    let response = reqwest::Client::new()
        .post(&pipeline.submit_url)
        .json(&serde_json::json!({"email": "a@b.com"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 500);

    let body = response.text().await.unwrap();
    assert!(body.contains("not configured"));
    assert!(!body.contains(&pipeline.sheet_url));

    // Through the client the message surfaces as a rejection.
    let outcome = pipeline.client().submit("b@c.com").await.unwrap();
    assert_eq!(outcome.kind, OutcomeKind::Rejected);
    assert!(outcome.message.contains("not configured"));

    assert_eq!(pipeline.sheet_state.lock().await.row_count(), 0);
}

#[tokio::test]
async fn test_list_read_path_is_idempotent() {
    let pipeline = spawn_pipeline().await;
    let client = pipeline.client();
    client.submit("a@b.com").await.unwrap();
    client.submit("c@d.org").await.unwrap();

    let first: ListResponse = reqwest::get(&pipeline.sheet_url)
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: ListResponse = reqwest::get(&pipeline.sheet_url)
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first.count, 2);
    assert_eq!(first.data.len(), 3);
    assert_eq!(first.sheet_name, "signups");
}

#[tokio::test]
async fn test_submissions_keep_arrival_order() {
    let pipeline = spawn_pipeline().await;
    let client = pipeline.client();

    for email in ["one@x.io", "two@x.io", "three@x.io"] {
        let outcome = client.submit(email).await.unwrap();
        assert!(outcome.is_success());
    }

    let table = pipeline.sheet_state.lock().await;
    let emails: Vec<&str> = table.rows()[1..].iter().map(|r| r[0].as_str()).collect();
    assert_eq!(emails, ["one@x.io", "two@x.io", "three@x.io"]);
}

#[tokio::test]
async fn test_method_mismatch_is_405_with_envelope() {
    let pipeline = spawn_pipeline().await;

    let response = reqwest::get(&pipeline.submit_url).await.unwrap();
    assert_eq!(response.status().as_u16(), 405);

    let envelope: SubmitResponse = response.json().await.unwrap();
    assert!(!envelope.is_success());
    assert_eq!(envelope.message, "Method not allowed");
    assert_eq!(pipeline.sheet_state.lock().await.row_count(), 0);
}

#[tokio::test]
async fn test_both_servers_report_healthy() {
    let pipeline = spawn_pipeline().await;

    let sheet_health = reqwest::get(format!("{}healthz", pipeline.sheet_url))
        .await
        .unwrap();
    assert_eq!(sheet_health.status().as_u16(), 200);

    let proxy_base = pipeline.submit_url.trim_end_matches("/api/submit");
    let proxy_health = reqwest::get(format!("{proxy_base}/healthz")).await.unwrap();
    assert_eq!(proxy_health.status().as_u16(), 200);
}
