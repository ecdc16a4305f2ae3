mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn matching_club_token_passes_the_gate() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let token = common::mint_token(Some(5), common::JWT_SECRET, 3600);
    let res = client
        .post(format!("{}/api/clubs/5/projects", server.base_url))
        .bearer_auth(token)
        .json(&json!({"title": "robot arm", "contents": "seasonal build log"}))
        .send()
        .await?;

    // Past the gate; the outcome now depends on whether a database is
    // attached (201 with one, 5xx without)
    assert_ne!(
        res.status(),
        StatusCode::UNAUTHORIZED,
        "gate should allow the owning club, got {}",
        res.status()
    );
    Ok(())
}

#[tokio::test]
async fn mismatched_club_token_is_unauthorized() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let token = common::mint_token(Some(5), common::JWT_SECRET, 3600);
    let res = client
        .post(format!("{}/api/clubs/7/projects", server.base_url))
        .bearer_auth(token)
        .json(&json!({"title": "robot arm", "contents": "seasonal build log"}))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error_message"], "You don't have permission to create");
    Ok(())
}

#[tokio::test]
async fn wrong_secret_token_is_unauthorized() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let token = common::mint_token(Some(5), "some-other-secret", 3600);
    let res = client
        .post(format!("{}/api/clubs/5/projects", server.base_url))
        .bearer_auth(token)
        .json(&json!({"title": "robot arm", "contents": "seasonal build log"}))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error_message"], "Invalid authentication token");
    Ok(())
}

#[tokio::test]
async fn expired_token_is_unauthorized() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let token = common::mint_token(Some(5), common::JWT_SECRET, -3600);
    let res = client
        .post(format!("{}/api/clubs/5/projects", server.base_url))
        .bearer_auth(token)
        .json(&json!({"title": "robot arm", "contents": "seasonal build log"}))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn token_without_club_claim_is_unauthorized() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let token = common::mint_token(None, common::JWT_SECRET, 3600);
    let res = client
        .post(format!("{}/api/clubs/5/projects", server.base_url))
        .bearer_auth(token)
        .json(&json!({"title": "robot arm", "contents": "seasonal build log"}))
        .send()
        .await?;

    // A claim set without a club can never own one
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error_message"], "You don't have permission to create");
    Ok(())
}

#[tokio::test]
async fn missing_credential_is_unauthorized_for_writes() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/clubs/5/projects", server.base_url))
        .json(&json!({"title": "robot arm", "contents": "seasonal build log"}))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn reads_bypass_the_gate() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // No credential on any of the read endpoints; none may answer 401
    for path in [
        "/api/clubs/5",
        "/api/clubs/5/projects",
        "/api/clubs/5/projects/1",
    ] {
        let res = client
            .get(format!("{}{}", server.base_url, path))
            .send()
            .await?;
        assert_ne!(
            res.status(),
            StatusCode::UNAUTHORIZED,
            "GET {} should not consult the gate",
            path
        );
    }
    Ok(())
}
