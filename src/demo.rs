//! Static demo data shown when the app runs without a backend.

use crate::domain::{Campaign, CampaignId, CampaignStatus, Platform};
use chrono::{DateTime, Duration, Utc};

/// Campaigns listed in demo mode, timed relative to `now`.
pub fn campaigns(now: DateTime<Utc>) -> Vec<Campaign> {
    vec![Campaign {
        id: CampaignId::new("demo-strike-001"),
        title: "Fair Pay Campaign".to_string(),
        description: "Demanding minimum ₹15/km for all deliveries under Section 13(3)(a) of the Social Security Code.".to_string(),
        platform: Platform::All,
        status: CampaignStatus::Active,
        start_time: now - Duration::hours(2),
        end_time: now + Duration::hours(22),
        participants: 2847,
        target_participants: 5000,
        region: "Bangalore".to_string(),
        created_by: "Karnataka Gig Workers Union".to_string(),
    }]
}
