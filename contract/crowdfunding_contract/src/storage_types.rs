use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Token,
    CampaignCount,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignIndex),
    Donation(CampaignIndex, DonationOrdinal),
    BackerTotal(CampaignIndex, Address),
    Refunded(CampaignIndex, Address),
}

pub type CampaignIndex = u32;
pub type DonationOrdinal = u32;

// Campaign funding status
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum CampaignStatus {
    InProgress = 0,
    Successful = 1,
    Unsuccessful = 2,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub index: CampaignIndex,
    pub owner: Address,
    pub name: String,
    pub target: i128,
    pub deadline: u64,           // Funding closes once the ledger passes this timestamp
    pub created_at: u64,
    pub total_raised: i128,
    pub total_donations: u32,    // Entries, not unique backers
    pub status: CampaignStatus,
    pub claimed: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Donation {
    pub backer: Address,
    pub amount: i128,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundingError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidDeadline = 3,
    InvalidTarget = 4,
    InvalidName = 5,
    InvalidAmount = 6,
    CampaignNotFound = 7,
    CampaignNotInProgress = 8,
    SelfFundingNotAllowed = 9,
    NotCampaignOwner = 10,
    FundsNotReady = 11,
    AlreadyClaimed = 12,
    WithdrawalNotAllowed = 13,
    NothingToWithdraw = 14,
    AlreadyWithdrawn = 15,
    IndexOutOfRange = 16,
    ArithmeticError = 17,
}

// Constants
pub const SECONDS_PER_DAY: u64 = 86_400;
pub const MIN_CAMPAIGN_DURATION_DAYS: u32 = 7;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
