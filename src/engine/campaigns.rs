use crate::domain::{Campaign, CampaignId, Participation, ParticipationStatus};
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CampaignError {
    #[error("campaign not found: {0}")]
    NotFound(CampaignId),
    #[error("already joined campaign {0}")]
    AlreadyJoined(CampaignId),
    #[error("not a participant of campaign {0}")]
    NotJoined(CampaignId),
}

/// Campaign list and this worker's participations.
#[derive(Debug, Clone, Default)]
pub struct CampaignBoard {
    campaigns: Vec<Campaign>,
    participations: Vec<Participation>,
    active: Option<CampaignId>,
}

impl CampaignBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn campaigns(&self) -> &[Campaign] {
        &self.campaigns
    }

    pub fn participations(&self) -> &[Participation] {
        &self.participations
    }

    pub fn active(&self) -> Option<&CampaignId> {
        self.active.as_ref()
    }

    pub fn get(&self, id: &CampaignId) -> Option<&Campaign> {
        self.campaigns.iter().find(|c| &c.id == id)
    }

    /// Replace the whole list. Participations are kept.
    pub fn set_campaigns(&mut self, campaigns: Vec<Campaign>) {
        self.campaigns = campaigns;
    }

    /// Newest first.
    pub fn add_campaign(&mut self, campaign: Campaign) {
        self.campaigns.insert(0, campaign);
    }

    pub fn update_campaign(&mut self, campaign: Campaign) -> Result<(), CampaignError> {
        let slot = self
            .campaigns
            .iter_mut()
            .find(|c| c.id == campaign.id)
            .ok_or_else(|| CampaignError::NotFound(campaign.id.clone()))?;
        *slot = campaign;
        Ok(())
    }

    pub fn update_participant_count(
        &mut self,
        id: &CampaignId,
        count: u32,
    ) -> Result<(), CampaignError> {
        self.campaign_mut(id)?.participants = count;
        Ok(())
    }

    pub fn is_joined(&self, id: &CampaignId) -> bool {
        self.participations
            .iter()
            .any(|p| &p.campaign_id == id && p.status == ParticipationStatus::Joined)
    }

    /// Join a campaign and count this worker as a participant.
    pub fn join(&mut self, id: &CampaignId, joined_at: DateTime<Utc>) -> Result<(), CampaignError> {
        if self.is_joined(id) {
            return Err(CampaignError::AlreadyJoined(id.clone()));
        }
        let campaign = self.campaign_mut(id)?;
        campaign.participants = campaign.participants.saturating_add(1);

        // Rejoining reuses the old record.
        match self
            .participations
            .iter_mut()
            .find(|p| &p.campaign_id == id)
        {
            Some(p) => {
                p.joined_at = joined_at;
                p.status = ParticipationStatus::Joined;
            }
            None => self.participations.push(Participation {
                campaign_id: id.clone(),
                joined_at,
                status: ParticipationStatus::Joined,
            }),
        }

        tracing::info!(campaign = %id, "Joined campaign");
        Ok(())
    }

    pub fn leave(&mut self, id: &CampaignId) -> Result<(), CampaignError> {
        if !self.is_joined(id) {
            return Err(CampaignError::NotJoined(id.clone()));
        }
        let campaign = self.campaign_mut(id)?;
        campaign.participants = campaign.participants.saturating_sub(1);

        if let Some(p) = self
            .participations
            .iter_mut()
            .find(|p| &p.campaign_id == id)
        {
            p.status = ParticipationStatus::Left;
        }

        tracing::info!(campaign = %id, "Left campaign");
        Ok(())
    }

    pub fn set_active(&mut self, id: Option<CampaignId>) {
        self.active = id;
    }

    pub fn clear(&mut self) {
        self.campaigns.clear();
        self.participations.clear();
        self.active = None;
    }

    fn campaign_mut(&mut self, id: &CampaignId) -> Result<&mut Campaign, CampaignError> {
        self.campaigns
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| CampaignError::NotFound(id.clone()))
    }
}
