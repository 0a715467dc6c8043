//! Protected route returning the caller's own account id.

use axum::Json;
use serde::Serialize;
use vitae_core::AccountId;

use crate::extractor::CurrentSubject;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: AccountId,
}

/// GET /user/me
///
/// Only reachable through `require_auth`.
#[tracing::instrument(name = "Me", skip_all, fields(account_id = %subject.account_id))]
pub async fn me(CurrentSubject(subject): CurrentSubject) -> Json<MeResponse> {
    Json(MeResponse {
        id: subject.account_id,
    })
}
