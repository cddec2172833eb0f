//! Collective-action campaigns listed on the Unite screen.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Campaign identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CampaignId(pub String);

impl CampaignId {
    pub fn new(id: impl Into<String>) -> Self {
        CampaignId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CampaignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Delivery platform a campaign targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Swiggy,
    Zomato,
    Uber,
    Ola,
    Other,
    /// Every platform.
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Upcoming,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: CampaignId,
    pub title: String,
    pub description: String,
    pub platform: Platform,
    pub status: CampaignStatus,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub participants: u32,
    pub target_participants: u32,
    pub region: String,
    pub created_by: String,
}

impl Campaign {
    /// Share of the participation target reached, as a percentage in [0, 100].
    pub fn progress_percent(&self) -> f64 {
        if self.target_participants == 0 {
            return 0.0;
        }
        let pct = self.participants as f64 / self.target_participants as f64 * 100.0;
        pct.min(100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipationStatus {
    Joined,
    Left,
}

/// This worker's membership in a campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participation {
    pub campaign_id: CampaignId,
    pub joined_at: DateTime<Utc>,
    pub status: ParticipationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn campaign(participants: u32, target: u32) -> Campaign {
        let t = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        Campaign {
            id: CampaignId::new("c1"),
            title: "t".to_string(),
            description: "d".to_string(),
            platform: Platform::All,
            status: CampaignStatus::Active,
            start_time: t,
            end_time: t,
            participants,
            target_participants: target,
            region: "Bangalore".to_string(),
            created_by: "union".to_string(),
        }
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(campaign(2500, 5000).progress_percent(), 50.0);
        assert_eq!(campaign(6000, 5000).progress_percent(), 100.0);
        assert_eq!(campaign(10, 0).progress_percent(), 0.0);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&CampaignStatus::Upcoming).unwrap();
        assert_eq!(json, "\"upcoming\"");
        let json = serde_json::to_string(&Platform::All).unwrap();
        assert_eq!(json, "\"all\"");
    }
}
