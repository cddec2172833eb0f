use axum::extract::State;
use axum::Json;

use crate::api::AppState;
use crate::domain::ShareReceipt;
use crate::error::AppError;
use crate::orchestration::SurgeView;

pub async fn get_surge(State(state): State<AppState>) -> Json<SurgeView> {
    Json(state.surge.view())
}

/// Only offered in demo mode, where the overlay has a "simulate low-ball order" trigger.
pub async fn start(State(state): State<AppState>) -> Result<Json<SurgeView>, AppError> {
    if !state.config.demo_mode {
        return Err(AppError::BadRequest(
            "surge simulation is only available in demo mode".into(),
        ));
    }
    Ok(Json(state.surge.start_simulation()?))
}

pub async fn hold(State(state): State<AppState>) -> Result<Json<SurgeView>, AppError> {
    Ok(Json(state.surge.hold_the_line()?))
}

pub async fn accept_anyway(State(state): State<AppState>) -> Result<Json<SurgeView>, AppError> {
    Ok(Json(state.surge.accept_anyway()?))
}

pub async fn dismiss(State(state): State<AppState>) -> Result<Json<SurgeView>, AppError> {
    Ok(Json(state.surge.dismiss()?))
}

pub async fn give_up(State(state): State<AppState>) -> Result<Json<SurgeView>, AppError> {
    Ok(Json(state.surge.give_up()?))
}

pub async fn accept_order(State(state): State<AppState>) -> Result<Json<SurgeView>, AppError> {
    Ok(Json(state.surge.accept_order()?))
}

pub async fn share(State(state): State<AppState>) -> Result<Json<ShareReceipt>, AppError> {
    Ok(Json(state.surge.share_victory()?))
}

pub async fn reset(State(state): State<AppState>) -> Json<SurgeView> {
    Json(state.surge.leave())
}
