use soroban_sdk::{token, Address, Env};

use crate::storage_types::{CrowdfundingError, DataKey};

fn custody_token(env: &Env) -> Result<Address, CrowdfundingError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(CrowdfundingError::NotInitialized)
}

/// Move a pledge from the backer into the contract's custody
pub fn deposit(env: &Env, backer: &Address, amount: i128) -> Result<(), CrowdfundingError> {
    let token_client = token::TokenClient::new(env, &custody_token(env)?);
    token_client.transfer(backer, &env.current_contract_address(), &amount);
    Ok(())
}

/// Release held funds to a recipient.
///
/// Callers must have recorded the payout (claimed / refunded marker) before
/// calling this.
pub fn release(env: &Env, recipient: &Address, amount: i128) -> Result<(), CrowdfundingError> {
    if amount <= 0 {
        return Err(CrowdfundingError::InvalidAmount);
    }

    let token_client = token::TokenClient::new(env, &custody_token(env)?);
    token_client.transfer(&env.current_contract_address(), recipient, &amount);
    Ok(())
}
