use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;

use crate::{
    model::voice::{MoveRequestDto, MoveResultsDto, SelectionDto},
    server::{
        error::{AppError, MOVE_FIELDS_REQUIRED},
        service::voice::BatchMoveService,
        state::AppState,
    },
};

/// GET /api/voice
/// Both configured channels with their current occupants, general first
pub async fn get_voice_channels(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = BatchMoveService::new(&state.voice);

    let channels = service.list_two_channels().await?;

    Ok((StatusCode::OK, Json(channels.into_dto())))
}

/// POST /api/move
/// Move the selected members into one of the two configured channels
pub async fn move_members(
    State(state): State<AppState>,
    payload: Result<Json<MoveRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let Some(target_channel_id) = payload.target_channel_id else {
        return Err(AppError::BadRequest(MOVE_FIELDS_REQUIRED.to_string()));
    };

    tracing::info!(
        "Moving {} selected members to {}",
        payload.user_ids.len(),
        target_channel_id
    );

    let service = BatchMoveService::new(&state.voice);

    let report = service
        .move_selected(&payload.user_ids, &target_channel_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MoveResultsDto {
            results: report.into_dto(),
        }),
    ))
}

/// POST /api/move-selected-other
/// Move the selected members into the other-team channel
pub async fn move_selected_other(
    State(state): State<AppState>,
    payload: Result<Json<SelectionDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let service = BatchMoveService::new(&state.voice);

    let report = service
        .move_selected(&payload.user_ids, &state.voice.channels.other)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MoveResultsDto {
            results: report.into_dto(),
        }),
    ))
}

/// POST /api/all-to-general
/// Move everyone in the other-team channel back to general
pub async fn all_to_general(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = BatchMoveService::new(&state.voice);

    let report = service.sweep_all_to_general().await?;

    Ok((
        StatusCode::OK,
        Json(MoveResultsDto {
            results: report.into_dto(),
        }),
    ))
}

/// Any unknown path under /api
pub async fn api_not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}
