use soroban_sdk::{contracttype, Address, String};

/// Tunables supplied once at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveParams {
    /// Unit price in payment-token units until the first vote settles
    pub initial_price: i128,
    pub max_total_supply: i128,
    /// Fee charged on both buy and sell, in whole percent
    pub fee_percent: u32,
    /// Share of total supply a holder needs to originate a candidate, in basis points
    pub proposal_threshold_bps: u32,
    /// Ledgers between `start_voting` and the earliest `end_voting`
    pub voting_duration: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveConfig {
    pub admin: Address,
    pub payment_token: Address,
    pub max_total_supply: i128,
    pub fee_percent: u32,
    pub proposal_threshold_bps: u32,
    pub voting_duration: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub decimals: u32,
    pub name: String,
    pub symbol: String,
}

/// One entry of the ranked candidate list. `prev` and `next` are price keys;
/// 0 is the sentinel on both ends.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CandidateNode {
    pub prev: i128,
    pub next: i128,
    pub power: i128,
}

/// Head and tail of one session's list.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ListBounds {
    pub head: i128,
    pub tail: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VotingRound {
    pub vote_id: u64,
    pub proposer: Address,
    pub initial_price: i128,
    pub start_ledger: u32,
    pub end_ledger: u32,
    pub open: bool,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Metadata,
    TokenPrice,
    TotalSupply,
    VoteId,
    Balance(Address),
    Allowance(Address, Address),
    Round(u64),
    Bounds(u64),
    Node(u64, i128),
    Ballot(u64, Address),
}
