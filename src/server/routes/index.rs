//! Index build status endpoints
//!
//! The per-chatbot RAG index is rebuilt by an external background job; the
//! console polls this endpoint until the build reaches succeeded or failed.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::Result;
use crate::server::state::AppState;
use crate::status::rag_index_view;
use crate::store::IndexState;
use crate::types::{RagIndexConfig, RagIndexStatus, RagIndexStatusResponse};

/// Request from the build job to record its state
#[derive(Debug, Deserialize)]
pub struct UpdateIndexStatusRequest {
    /// New build status
    pub status: RagIndexStatus,
    /// Generation timestamp, set when a build completes
    #[serde(default)]
    pub last_generated_at: Option<DateTime<Utc>>,
}

/// GET /api/chatbots/:id/index-status - Poll a chatbot's index build status
///
/// A chatbot with no persisted build state reads as idle rather than 404:
/// "never built" is a normal state the console renders, not an error.
pub async fn get_index_status(
    State(state): State<AppState>,
    Path(chatbot_id): Path<Uuid>,
) -> Json<RagIndexStatusResponse> {
    let index_state = state.store().index_state(&chatbot_id).unwrap_or_default();

    Json(rag_index_view(
        index_state.raw_status.as_deref(),
        index_state.config.as_ref(),
    ))
}

/// PUT /api/chatbots/:id/index-status - Build job callback recording its state
pub async fn update_index_status(
    State(state): State<AppState>,
    Path(chatbot_id): Path<Uuid>,
    Json(request): Json<UpdateIndexStatusRequest>,
) -> Result<Json<RagIndexStatusResponse>> {
    let previous = state.store().index_state(&chatbot_id).unwrap_or_default();

    // A completed build carries its generation time; otherwise keep whatever
    // the last successful build recorded.
    let last_generated_at = request
        .last_generated_at
        .or(previous.config.and_then(|c| c.last_generated_at));

    let index_state = IndexState {
        raw_status: Some(request.status.as_str().to_string()),
        config: Some(RagIndexConfig { last_generated_at }),
    };

    let view = rag_index_view(
        index_state.raw_status.as_deref(),
        index_state.config.as_ref(),
    );
    state.store().set_index_state(chatbot_id, index_state);

    Ok(Json(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::StatusConfig;
    use chrono::TimeZone;
    use std::sync::Arc;

    fn fixed_state() -> AppState {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        AppState::with_clock(StatusConfig::default(), Arc::new(FixedClock(now)))
    }

    #[tokio::test]
    async fn test_unknown_chatbot_reads_as_idle() {
        let state = fixed_state();
        let Json(view) = get_index_status(State(state), Path(Uuid::new_v4())).await;
        assert_eq!(view.status, RagIndexStatus::Idle);
        assert_eq!(view.last_generated_at, None);
    }

    #[tokio::test]
    async fn test_build_lifecycle_is_observable() {
        let state = fixed_state();
        let chatbot_id = Uuid::new_v4();
        let generated = Utc.with_ymd_and_hms(2025, 6, 1, 11, 58, 0).unwrap();

        let Json(view) = update_index_status(
            State(state.clone()),
            Path(chatbot_id),
            Json(UpdateIndexStatusRequest {
                status: RagIndexStatus::Running,
                last_generated_at: None,
            }),
        )
        .await
        .unwrap();
        assert_eq!(view.status, RagIndexStatus::Running);

        update_index_status(
            State(state.clone()),
            Path(chatbot_id),
            Json(UpdateIndexStatusRequest {
                status: RagIndexStatus::Succeeded,
                last_generated_at: Some(generated),
            }),
        )
        .await
        .unwrap();

        let Json(view) = get_index_status(State(state), Path(chatbot_id)).await;
        assert_eq!(view.status, RagIndexStatus::Succeeded);
        assert_eq!(view.last_generated_at, Some(generated));
    }

    #[tokio::test]
    async fn test_new_build_keeps_previous_generation_time() {
        let state = fixed_state();
        let chatbot_id = Uuid::new_v4();
        let generated = Utc.with_ymd_and_hms(2025, 5, 20, 9, 0, 0).unwrap();

        update_index_status(
            State(state.clone()),
            Path(chatbot_id),
            Json(UpdateIndexStatusRequest {
                status: RagIndexStatus::Succeeded,
                last_generated_at: Some(generated),
            }),
        )
        .await
        .unwrap();

        let Json(view) = update_index_status(
            State(state),
            Path(chatbot_id),
            Json(UpdateIndexStatusRequest {
                status: RagIndexStatus::Running,
                last_generated_at: None,
            }),
        )
        .await
        .unwrap();

        assert_eq!(view.status, RagIndexStatus::Running);
        assert_eq!(view.last_generated_at, Some(generated));
    }
}
