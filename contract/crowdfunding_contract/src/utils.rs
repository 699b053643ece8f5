use soroban_sdk::Env;

use crate::storage_types::SECONDS_PER_DAY;

/// Convert days to seconds
pub fn days_to_seconds(days: u32) -> u64 {
    days as u64 * SECONDS_PER_DAY
}

/// Get current timestamp
pub fn get_current_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}

/// Earliest deadline a campaign created now may carry
pub fn min_deadline(env: &Env, min_days: u32) -> u64 {
    get_current_timestamp(env).saturating_add(days_to_seconds(min_days))
}
