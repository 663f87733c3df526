//! Error codes for the price-vote token.
//!
//! Codes are grouped by category so a failed invocation can be classified
//! from the number alone:
//! - 1-9: lifecycle (initialization, configuration)
//! - 10-19: input validation
//! - 20-29: voting session state
//! - 30-39: insufficient resources (balances, allowances, supply, reserves)
//! - 40-49: ranked candidate list

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ===== Lifecycle (1-9) =====
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Rejected `CurveParams` at initialization
    InvalidConfig = 3,

    // ===== Validation (10-19) =====
    /// Recipient is the zero account
    ZeroAddress = 10,
    InvalidAmount = 11,
    /// Candidate prices must be strictly positive; 0 is the list sentinel
    InvalidPrice = 12,
    Overflow = 13,

    // ===== Session state (20-29) =====
    SessionAlreadyOpen = 20,
    SessionNotOpen = 21,
    AlreadyVoted = 22,
    VotingNotOverYet = 23,
    /// The caller's ballot names a different candidate than the one given
    VoteMismatch = 24,

    // ===== Resources (30-39) =====
    InsufficientBalance = 30,
    InsufficientAllowance = 31,
    /// Balance is below the proposal threshold
    NotEnoughTokens = 32,
    SupplyCapExceeded = 33,
    /// The contract's payment-token reserve cannot cover a sell payout
    InsufficientReserves = 34,

    // ===== Ranked list (40-49) =====
    NodeExists = 40,
    NodeNotFound = 41,
    InvalidHint = 42,
}
