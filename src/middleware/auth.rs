use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};

/// Raw bearer credential from the Authorization header, if one was sent.
///
/// Extraction never rejects a request: reads are public in this API, so
/// a missing or malformed header only matters once a handler asks the
/// authorization gate to verify the credential.
#[derive(Clone, Debug)]
pub struct BearerCredential(pub Option<String>);

/// Middleware that pulls the bearer credential out of the Authorization
/// header and injects it into request extensions for gated handlers
pub async fn bearer_credential_middleware(mut request: Request, next: Next) -> Response {
    let credential = extract_bearer(request.headers());
    request.extensions_mut().insert(BearerCredential(credential));
    next.run(request).await
}

fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let auth_str = headers.get("authorization")?.to_str().ok()?;
    let token = auth_str.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
