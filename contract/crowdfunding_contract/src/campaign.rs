use soroban_sdk::{log, Address, Env, String};

use crate::events::{self, CampaignResolved};
use crate::storage_types::{
    Campaign, CampaignIndex, CampaignStatus, CrowdfundingError, DataKey, PersistentKey,
    MIN_CAMPAIGN_DURATION_DAYS, TTL_INSTANCE, TTL_PERSISTENT,
};
use crate::utils;

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn campaign_count(env: &Env) -> Result<u32, CrowdfundingError> {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .ok_or(CrowdfundingError::NotInitialized)
}

pub fn load(env: &Env, index: CampaignIndex) -> Result<Campaign, CrowdfundingError> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Campaign(index))
        .ok_or(CrowdfundingError::CampaignNotFound)
}

pub fn store(env: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.index);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

/// Creation-time checks. The deadline must leave at least the minimum
/// campaign duration from the current ledger time; the boundary is inclusive.
pub fn validate_new(
    env: &Env,
    name: &String,
    target: i128,
    deadline: u64,
) -> Result<(), CrowdfundingError> {
    if name.is_empty() {
        return Err(CrowdfundingError::InvalidName);
    }
    if target <= 0 {
        return Err(CrowdfundingError::InvalidTarget);
    }
    if deadline < utils::min_deadline(env, MIN_CAMPAIGN_DURATION_DAYS) {
        return Err(CrowdfundingError::InvalidDeadline);
    }
    Ok(())
}

/// Status the campaign is in at `now`.
///
/// Terminal statuses are kept as stored. An in-progress campaign succeeds as
/// soon as its target is met, and fails once the deadline has passed short of
/// the target.
pub fn effective_status(campaign: &Campaign, now: u64) -> CampaignStatus {
    match campaign.status {
        CampaignStatus::InProgress => {
            if campaign.total_raised >= campaign.target {
                CampaignStatus::Successful
            } else if now > campaign.deadline {
                CampaignStatus::Unsuccessful
            } else {
                CampaignStatus::InProgress
            }
        }
        settled => settled,
    }
}

/// Applies the resolution rule to `campaign` in place and publishes the
/// transition. Returns whether the status changed; the caller persists.
pub fn settle(env: &Env, campaign: &mut Campaign) -> bool {
    let status = effective_status(campaign, utils::get_current_timestamp(env));
    if status == campaign.status {
        return false;
    }

    campaign.status = status;
    log!(env, "campaign resolved", campaign.index, campaign.total_raised);
    events::emit_campaign_resolved(
        env,
        CampaignResolved {
            index: campaign.index,
            status,
            total_raised: campaign.total_raised,
        },
    );
    true
}

pub fn backer_total(env: &Env, index: CampaignIndex, backer: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&PersistentKey::BackerTotal(index, backer.clone()))
        .unwrap_or(0)
}

pub fn is_refunded(env: &Env, index: CampaignIndex, backer: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&PersistentKey::Refunded(index, backer.clone()))
        .unwrap_or(false)
}
