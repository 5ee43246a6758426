use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::Method,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, info};

use crate::{
    adapters::dto::token_dto::TokenResponse,
    application::{dto::token_dto::TokenRequestDTO, error::ApplicationError, services::TokenService},
};

const PREFLIGHT_BODY: &str = "ok";

pub struct TokenController;

impl TokenController {
    /// Issues an RTC token
    /// ANY /*
    /// Body: {"channelName": "room1", "uid": 42, "role": "publisher"}
    ///
    /// `OPTIONS` is answered as a CORS preflight without reading the body.
    pub async fn issue_token(
        State(token_service): State<Arc<TokenService>>,
        method: Method,
        body: Result<Bytes, BytesRejection>,
    ) -> Result<Response, ApplicationError> {
        if method == Method::OPTIONS {
            debug!("Answering CORS preflight");
            return Ok(PREFLIGHT_BODY.into_response());
        }

        // Oversized or unreadable bodies still get a JSON error.
        let body = body.map_err(|rejection| ApplicationError::Validation(rejection.body_text()))?;
        let request = TokenRequestDTO::from_json(&body)?;
        info!(
            "Token requested for channel {:?}, uid {:?}, role {:?}",
            request.channel_name, request.uid, request.role
        );

        let issued = token_service.issue(request)?;

        Ok(Json(TokenResponse::from(issued)).into_response())
    }
}
