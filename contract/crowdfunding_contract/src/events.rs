use soroban_sdk::{contracttype, Address, Env, String, Symbol};

use crate::storage_types::{CampaignIndex, CampaignStatus};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub index: CampaignIndex,
    pub owner: Address,
    pub name: String,
    pub target: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignFunded {
    pub index: CampaignIndex,
    pub backer: Address,
    pub amount: i128,
    pub total_raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignResolved {
    pub index: CampaignIndex,
    pub status: CampaignStatus,
    pub total_raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignFundsClaimed {
    pub index: CampaignIndex,
    pub owner: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnsuccessfulCampaignFundsWithdrawn {
    pub index: CampaignIndex,
    pub backer: Address,
    pub amount: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreated) {
    env.events()
        .publish((Symbol::new(env, "campaign_created"),), event);
}

pub fn emit_campaign_funded(env: &Env, event: CampaignFunded) {
    env.events()
        .publish((Symbol::new(env, "campaign_funded"),), event);
}

pub fn emit_campaign_resolved(env: &Env, event: CampaignResolved) {
    env.events()
        .publish((Symbol::new(env, "campaign_resolved"),), event);
}

pub fn emit_campaign_funds_claimed(env: &Env, event: CampaignFundsClaimed) {
    env.events()
        .publish((Symbol::new(env, "campaign_funds_claimed"),), event);
}

pub fn emit_unsuccessful_campaign_funds_withdrawn(
    env: &Env,
    event: UnsuccessfulCampaignFundsWithdrawn,
) {
    env.events().publish(
        (Symbol::new(env, "unsuccessful_funds_withdrawn"),),
        event,
    );
}
