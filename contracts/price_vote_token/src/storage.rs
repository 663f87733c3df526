use soroban_sdk::{Address, Env};

use crate::constants::{
    BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT,
    INSTANCE_LIFETIME_THRESHOLD, SESSION_BUMP_AMOUNT, SESSION_LIFETIME_THRESHOLD,
};
use crate::errors::Error;
use crate::types::*;

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ── Configuration ────────────────────────────────────────────────────────────

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<CurveConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &CurveConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_metadata(env: &Env) -> Result<TokenMetadata, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Metadata)
        .ok_or(Error::NotInitialized)
}

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&DataKey::Metadata, metadata);
}

pub fn get_token_price(env: &Env) -> Result<i128, Error> {
    env.storage()
        .instance()
        .get(&DataKey::TokenPrice)
        .ok_or(Error::NotInitialized)
}

pub fn set_token_price(env: &Env, price: i128) {
    env.storage().instance().set(&DataKey::TokenPrice, &price);
}

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn get_vote_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::VoteId)
        .unwrap_or(0)
}

pub fn set_vote_id(env: &Env, vote_id: u64) {
    env.storage().instance().set(&DataKey::VoteId, &vote_id);
}

// ── Accounts ─────────────────────────────────────────────────────────────────

pub fn get_balance(env: &Env, owner: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(owner.clone()))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, owner: &Address, amount: i128) {
    let key = DataKey::Balance(owner.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn get_allowance(env: &Env, owner: &Address, spender: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Allowance(owner.clone(), spender.clone()))
        .unwrap_or(0)
}

pub fn set_allowance(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    let key = DataKey::Allowance(owner.clone(), spender.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

// ── Sessions ─────────────────────────────────────────────────────────────────

pub fn get_round(env: &Env, vote_id: u64) -> Option<VotingRound> {
    env.storage().persistent().get(&DataKey::Round(vote_id))
}

pub fn set_round(env: &Env, round: &VotingRound) {
    let key = DataKey::Round(round.vote_id);
    env.storage().persistent().set(&key, round);
    env.storage()
        .persistent()
        .extend_ttl(&key, SESSION_LIFETIME_THRESHOLD, SESSION_BUMP_AMOUNT);
}

pub fn get_ballot(env: &Env, vote_id: u64, voter: &Address) -> Option<i128> {
    env.storage()
        .persistent()
        .get(&DataKey::Ballot(vote_id, voter.clone()))
}

pub fn set_ballot(env: &Env, vote_id: u64, voter: &Address, price: i128) {
    let key = DataKey::Ballot(vote_id, voter.clone());
    env.storage().persistent().set(&key, &price);
    env.storage()
        .persistent()
        .extend_ttl(&key, SESSION_LIFETIME_THRESHOLD, SESSION_BUMP_AMOUNT);
}

// ── Ranked list arena ────────────────────────────────────────────────────────

pub fn get_bounds(env: &Env, vote_id: u64) -> ListBounds {
    env.storage()
        .persistent()
        .get(&DataKey::Bounds(vote_id))
        .unwrap_or_default()
}

pub fn set_bounds(env: &Env, vote_id: u64, bounds: &ListBounds) {
    let key = DataKey::Bounds(vote_id);
    env.storage().persistent().set(&key, bounds);
    env.storage()
        .persistent()
        .extend_ttl(&key, SESSION_LIFETIME_THRESHOLD, SESSION_BUMP_AMOUNT);
}

pub fn has_node(env: &Env, vote_id: u64, price: i128) -> bool {
    env.storage().persistent().has(&DataKey::Node(vote_id, price))
}

pub fn get_node(env: &Env, vote_id: u64, price: i128) -> Option<CandidateNode> {
    env.storage().persistent().get(&DataKey::Node(vote_id, price))
}

pub fn set_node(env: &Env, vote_id: u64, price: i128, node: &CandidateNode) {
    let key = DataKey::Node(vote_id, price);
    env.storage().persistent().set(&key, node);
    env.storage()
        .persistent()
        .extend_ttl(&key, SESSION_LIFETIME_THRESHOLD, SESSION_BUMP_AMOUNT);
}
