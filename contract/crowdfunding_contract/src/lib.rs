#![no_std]


mod campaign;
mod custody;
mod events;
mod storage_types;
mod utils;

pub use events::{
    CampaignCreated, CampaignFunded, CampaignFundsClaimed, CampaignResolved,
    UnsuccessfulCampaignFundsWithdrawn,
};
pub use storage_types::{
    Campaign, CampaignIndex, CampaignStatus, CrowdfundingError, Donation, DonationOrdinal,
    MIN_CAMPAIGN_DURATION_DAYS, SECONDS_PER_DAY,
};

use storage_types::{DataKey, PersistentKey};

use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

#[contract]
pub struct CrowdfundingContract;

#[contractimpl]
impl CrowdfundingContract {
    /// Bind the token held in custody. `admin` is the deployer authorizing
    /// the binding; it has no power over campaigns afterwards.
    pub fn initialize(e: Env, admin: Address, token: Address) -> Result<(), CrowdfundingError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(CrowdfundingError::AlreadyInitialized);
        }

        admin.require_auth();

        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::Token, &token);
        e.storage().instance().set(&DataKey::CampaignCount, &0u32);

        campaign::extend_instance(&e);
        Ok(())
    }

    /// Create a new campaign owned by `owner`
    pub fn create_campaign(
        e: Env,
        owner: Address,
        name: String,
        target: i128,
        deadline: u64,
    ) -> Result<CampaignIndex, CrowdfundingError> {
        owner.require_auth();
        let index = campaign::campaign_count(&e)?;
        campaign::validate_new(&e, &name, target, deadline)?;

        let record = Campaign {
            index,
            owner: owner.clone(),
            name: name.clone(),
            target,
            deadline,
            created_at: utils::get_current_timestamp(&e),
            total_raised: 0,
            total_donations: 0,
            status: CampaignStatus::InProgress,
            claimed: false,
        };
        campaign::store(&e, &record);

        let next = index
            .checked_add(1)
            .ok_or(CrowdfundingError::ArithmeticError)?;
        e.storage().instance().set(&DataKey::CampaignCount, &next);
        campaign::extend_instance(&e);

        log!(&e, "campaign created", index, target, deadline);
        events::emit_campaign_created(
            &e,
            CampaignCreated {
                index,
                owner,
                name,
                target,
                deadline,
            },
        );

        Ok(index)
    }

    /// Pledge `amount` to a campaign. The tokens move into the contract's
    /// custody as part of this call.
    pub fn fund_campaign(
        e: Env,
        backer: Address,
        index: CampaignIndex,
        amount: i128,
    ) -> Result<(), CrowdfundingError> {
        backer.require_auth();

        let mut record = campaign::load(&e, index)?;
        let now = utils::get_current_timestamp(&e);
        if campaign::effective_status(&record, now) != CampaignStatus::InProgress {
            return Err(CrowdfundingError::CampaignNotInProgress);
        }
        if backer == record.owner {
            return Err(CrowdfundingError::SelfFundingNotAllowed);
        }
        if amount <= 0 {
            return Err(CrowdfundingError::InvalidAmount);
        }

        let ordinal: DonationOrdinal = record.total_donations;
        let backer_total = campaign::backer_total(&e, index, &backer)
            .checked_add(amount)
            .ok_or(CrowdfundingError::ArithmeticError)?;
        record.total_raised = record
            .total_raised
            .checked_add(amount)
            .ok_or(CrowdfundingError::ArithmeticError)?;
        record.total_donations = ordinal
            .checked_add(1)
            .ok_or(CrowdfundingError::ArithmeticError)?;

        custody::deposit(&e, &backer, amount)?;

        let donation_key = PersistentKey::Donation(index, ordinal);
        e.storage().persistent().set(
            &donation_key,
            &Donation {
                backer: backer.clone(),
                amount,
            },
        );
        campaign::extend_persistent(&e, &donation_key);

        let total_key = PersistentKey::BackerTotal(index, backer.clone());
        e.storage().persistent().set(&total_key, &backer_total);
        campaign::extend_persistent(&e, &total_key);

        log!(&e, "campaign funded", index, amount);
        events::emit_campaign_funded(
            &e,
            CampaignFunded {
                index,
                backer,
                amount,
                total_raised: record.total_raised,
            },
        );

        campaign::settle(&e, &mut record);
        campaign::store(&e, &record);
        Ok(())
    }

    /// Persist the campaign's resolved status. Anyone may call this.
    pub fn finalize_campaign(
        e: Env,
        index: CampaignIndex,
    ) -> Result<CampaignStatus, CrowdfundingError> {
        let mut record = campaign::load(&e, index)?;
        if campaign::settle(&e, &mut record) {
            campaign::store(&e, &record);
        }
        Ok(record.status)
    }

    /// Owner takes everything raised by a successful campaign
    pub fn claim_successful_campaign_funds(
        e: Env,
        owner: Address,
        index: CampaignIndex,
    ) -> Result<CampaignFundsClaimed, CrowdfundingError> {
        owner.require_auth();

        let mut record = campaign::load(&e, index)?;
        if owner != record.owner {
            return Err(CrowdfundingError::NotCampaignOwner);
        }
        campaign::settle(&e, &mut record);
        if record.status != CampaignStatus::Successful {
            return Err(CrowdfundingError::FundsNotReady);
        }
        if record.claimed {
            return Err(CrowdfundingError::AlreadyClaimed);
        }

        // Recorded before the transfer leaves custody
        record.claimed = true;
        campaign::store(&e, &record);

        let amount = record.total_raised;
        custody::release(&e, &owner, amount)?;

        log!(&e, "campaign funds claimed", index, amount);
        let event = CampaignFundsClaimed {
            index,
            owner,
            amount,
        };
        events::emit_campaign_funds_claimed(&e, event.clone());
        Ok(event)
    }

    /// Backer takes back their whole contribution to an unsuccessful campaign
    pub fn withdraw_unsuccessful_funds(
        e: Env,
        backer: Address,
        index: CampaignIndex,
    ) -> Result<UnsuccessfulCampaignFundsWithdrawn, CrowdfundingError> {
        backer.require_auth();

        let mut record = campaign::load(&e, index)?;
        if campaign::settle(&e, &mut record) {
            campaign::store(&e, &record);
        }
        if record.status != CampaignStatus::Unsuccessful {
            return Err(CrowdfundingError::WithdrawalNotAllowed);
        }
        if campaign::is_refunded(&e, index, &backer) {
            return Err(CrowdfundingError::AlreadyWithdrawn);
        }
        let amount = campaign::backer_total(&e, index, &backer);
        if amount <= 0 {
            return Err(CrowdfundingError::NothingToWithdraw);
        }

        // Recorded before the transfer leaves custody
        let refunded_key = PersistentKey::Refunded(index, backer.clone());
        e.storage().persistent().set(&refunded_key, &true);
        campaign::extend_persistent(&e, &refunded_key);

        custody::release(&e, &backer, amount)?;

        log!(&e, "unsuccessful campaign funds withdrawn", index, amount);
        let event = UnsuccessfulCampaignFundsWithdrawn {
            index,
            backer,
            amount,
        };
        events::emit_unsuccessful_campaign_funds_withdrawn(&e, event.clone());
        Ok(event)
    }

    /// View functions
    pub fn get_number_of_campaigns(e: Env) -> u32 {
        campaign::campaign_count(&e).unwrap_or(0)
    }

    pub fn get_campaign(e: Env, index: CampaignIndex) -> Result<Campaign, CrowdfundingError> {
        let mut record = campaign::load(&e, index)?;
        record.status = campaign::effective_status(&record, utils::get_current_timestamp(&e));
        Ok(record)
    }

    pub fn get_campaign_donation(
        e: Env,
        index: CampaignIndex,
        ordinal: DonationOrdinal,
    ) -> Result<Donation, CrowdfundingError> {
        let record = campaign::load(&e, index)?;
        if ordinal >= record.total_donations {
            return Err(CrowdfundingError::IndexOutOfRange);
        }
        e.storage()
            .persistent()
            .get(&PersistentKey::Donation(index, ordinal))
            .ok_or(CrowdfundingError::IndexOutOfRange)
    }

    pub fn get_backer_contribution(
        e: Env,
        index: CampaignIndex,
        backer: Address,
    ) -> Result<i128, CrowdfundingError> {
        campaign::load(&e, index)?;
        Ok(campaign::backer_total(&e, index, &backer))
    }

    pub fn has_withdrawn(
        e: Env,
        index: CampaignIndex,
        backer: Address,
    ) -> Result<bool, CrowdfundingError> {
        campaign::load(&e, index)?;
        Ok(campaign::is_refunded(&e, index, &backer))
    }

    pub fn get_token(e: Env) -> Result<Address, CrowdfundingError> {
        e.storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(CrowdfundingError::NotInitialized)
    }

    pub fn get_admin(e: Env) -> Result<Address, CrowdfundingError> {
        e.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(CrowdfundingError::NotInitialized)
    }
}
