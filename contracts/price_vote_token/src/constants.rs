//! Defaults and storage lifetimes.

// ===== Curve defaults =====

pub const DEFAULT_INITIAL_PRICE: i128 = 1;

pub const DEFAULT_MAX_TOTAL_SUPPLY: i128 = 100_000;

pub const DEFAULT_FEE_PERCENT: u32 = 1;

/// 0.05% of total supply
pub const DEFAULT_PROPOSAL_THRESHOLD_BPS: u32 = 5;

pub const DEFAULT_VOTING_DURATION_LEDGERS: u32 = 100;

pub const DEFAULT_DECIMALS: u32 = 7;

pub const DEFAULT_NAME: &str = "SimpleToken";

pub const DEFAULT_SYMBOL: &str = "ST";

// ===== Limits =====

pub const PERCENT_DENOMINATOR: i128 = 100;

pub const MAX_BASIS_POINTS: u32 = 10_000;

/// Strkey of the ed25519 account with an all-zero public key. Transfers to it
/// are rejected the way transfers to a null address are on other chains.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

// ===== Ledger TTL =====
// ~5s per ledger.

const DAY_IN_LEDGERS: u32 = 17_280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Rounds, ballots and list nodes only have to outlive a session plus a
/// margin for history queries.
pub const SESSION_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const SESSION_LIFETIME_THRESHOLD: u32 = SESSION_BUMP_AMOUNT - DAY_IN_LEDGERS;
