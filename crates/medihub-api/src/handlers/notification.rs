//! Notification inbox handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::dto::response::{MessageResponse, NotificationFeedResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/patient/{patient_id}/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    Path(patient_id): Path<Uuid>,
) -> Result<Json<NotificationFeedResponse>, ApiError> {
    let feed = state.notification_service.list(patient_id).await?;
    Ok(Json(NotificationFeedResponse {
        success: true,
        notifications: feed.notifications,
        unread_count: feed.unread_count,
    }))
}

/// PUT /api/patient/{patient_id}/notifications/{notification_id}/read
pub async fn mark_notification_read(
    State(state): State<AppState>,
    Path((patient_id, notification_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .notification_service
        .mark_read(patient_id, notification_id)
        .await?;
    Ok(Json(MessageResponse {
        success: true,
        message: "Notification marked as read".to_string(),
    }))
}

/// DELETE /api/patient/{patient_id}/notifications/{notification_id}
pub async fn delete_notification(
    State(state): State<AppState>,
    Path((patient_id, notification_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .notification_service
        .delete(patient_id, notification_id)
        .await?;
    Ok(Json(MessageResponse {
        success: true,
        message: "Notification deleted".to_string(),
    }))
}
