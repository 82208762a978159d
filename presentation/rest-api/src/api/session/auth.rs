use poem::Request;
use poem_openapi::{SecurityScheme, auth::ApiKey};

use business::domain::shared::value_objects::SessionId;

pub const SESSION_HEADER: &str = "X-Session-Id";

/// Browsing session sent by the client in the `X-Session-Id` header.
/// Requests without a valid UUID are answered with 401.
#[derive(SecurityScheme)]
#[oai(
    ty = "api_key",
    key_name = "X-Session-Id",
    key_in = "header",
    checker = "session_checker"
)]
pub struct SessionAuth(pub SessionId);

async fn session_checker(_req: &Request, api_key: ApiKey) -> Option<SessionId> {
    let session_id = SessionId::parse(&api_key.key);
    if session_id.is_none() {
        tracing::warn!("Rejected malformed {SESSION_HEADER} header");
    }
    session_id
}
