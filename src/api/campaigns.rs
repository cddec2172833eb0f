use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::api::AppState;
use crate::domain::{format_remaining, Campaign, CampaignId, CampaignStatus};
use crate::engine::CampaignBoard;
use crate::error::AppError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignsResponse {
    pub campaigns: Vec<CampaignDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDto {
    #[serde(flatten)]
    pub campaign: Campaign,
    /// `HH:MM:SS` left for active campaigns, `Ended` once past the end time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timer: Option<String>,
    pub progress_percent: f64,
    pub joined: bool,
}

fn to_dto(board: &CampaignBoard, campaign: &Campaign) -> CampaignDto {
    let timer = match campaign.status {
        CampaignStatus::Active => Some(format_remaining(campaign.end_time, Utc::now())),
        CampaignStatus::Upcoming | CampaignStatus::Completed => None,
    };
    CampaignDto {
        campaign: campaign.clone(),
        timer,
        progress_percent: campaign.progress_percent(),
        joined: board.is_joined(&campaign.id),
    }
}

pub async fn list_campaigns(State(state): State<AppState>) -> Json<CampaignsResponse> {
    let board = state.campaigns.read().await;
    let campaigns = board
        .campaigns()
        .iter()
        .map(|c| to_dto(&board, c))
        .collect();
    Json(CampaignsResponse { campaigns })
}

pub async fn join_campaign(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<CampaignDto>, AppError> {
    let id = CampaignId::new(id);
    let mut board = state.campaigns.write().await;
    board.join(&id, Utc::now())?;
    campaign_dto(&board, &id)
}

pub async fn leave_campaign(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<CampaignDto>, AppError> {
    let id = CampaignId::new(id);
    let mut board = state.campaigns.write().await;
    board.leave(&id)?;
    campaign_dto(&board, &id)
}

fn campaign_dto(board: &CampaignBoard, id: &CampaignId) -> Result<Json<CampaignDto>, AppError> {
    let campaign = board
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("campaign not found: {}", id)))?;
    Ok(Json(to_dto(board, campaign)))
}
