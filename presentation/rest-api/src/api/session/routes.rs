use poem_openapi::{Object, OpenApi, payload::Json};

use business::domain::shared::value_objects::SessionId;

use crate::api::tags::ApiTags;

#[derive(Debug, Clone, Object)]
pub struct SessionResponse {
    /// Value to send back in the `X-Session-Id` header
    pub session_id: String,
}

pub struct SessionApi;

impl SessionApi {
    pub fn new() -> Self {
        Self
    }
}

/// Browsing sessions
///
/// A session scopes the carts of one visitor, one cart per restaurant.
#[OpenApi]
impl SessionApi {
    /// Start a session
    ///
    /// Returns a fresh session id. Carts of other sessions are never visible.
    #[oai(path = "/sessions", method = "post", tag = "ApiTags::Sessions")]
    async fn create(&self) -> CreateSessionResponse {
        let session_id = SessionId::generate();
        tracing::debug!("Started session {session_id}");
        CreateSessionResponse::Created(Json(SessionResponse {
            session_id: session_id.to_string(),
        }))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateSessionResponse {
    #[oai(status = 201)]
    Created(Json<SessionResponse>),
}
