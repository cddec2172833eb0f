pub mod campaigns;
pub mod health;
pub mod surge;

use crate::config::Config;
use crate::demo;
use crate::engine::CampaignBoard;
use crate::orchestration::SurgeSession;
use axum::{
    routing::{get, post},
    Router,
};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub surge: Arc<SurgeSession>,
    pub campaigns: Arc<RwLock<CampaignBoard>>,
}

impl AppState {
    /// Demo mode starts with the demo campaign list; otherwise the board is empty.
    pub fn new(config: Config, surge: Arc<SurgeSession>) -> Self {
        let mut board = CampaignBoard::new();
        if config.demo_mode {
            board.set_campaigns(demo::campaigns(Utc::now()));
        }
        Self::with_board(config, surge, board)
    }

    pub fn with_board(config: Config, surge: Arc<SurgeSession>, board: CampaignBoard) -> Self {
        Self {
            config,
            surge,
            campaigns: Arc::new(RwLock::new(board)),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/v1/surge", get(surge::get_surge))
        .route("/v1/surge/start", post(surge::start))
        .route("/v1/surge/hold", post(surge::hold))
        .route("/v1/surge/accept-anyway", post(surge::accept_anyway))
        .route("/v1/surge/dismiss", post(surge::dismiss))
        .route("/v1/surge/give-up", post(surge::give_up))
        .route("/v1/surge/accept-order", post(surge::accept_order))
        .route("/v1/surge/share", post(surge::share))
        .route("/v1/surge/reset", post(surge::reset))
        .route("/v1/campaigns", get(campaigns::list_campaigns))
        .route("/v1/campaigns/:id/join", post(campaigns::join_campaign))
        .route("/v1/campaigns/:id/leave", post(campaigns::leave_campaign))
        .layer(cors)
        .with_state(state)
}
