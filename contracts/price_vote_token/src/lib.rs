#![no_std]

//! Bonding-curve token whose unit price is chosen by its holders.
//!
//! Holders buy and sell against a payment token at the current unit price.
//! Any holder above the proposal threshold can open a voting round on a new
//! price. Holders back candidate prices with their balance, and when the round
//! ends the candidate with the most backing becomes the new unit price.
//! Candidates are kept in a ranked list that callers navigate with hints, so
//! no call scans the whole list.

pub mod constants;
mod curve;
mod errors;
mod events;
mod ledger;
mod ranked_list;
mod resync;
mod session;
mod storage;
mod types;


pub use errors::Error;
pub use types::*;

use soroban_sdk::{contract, contractimpl, Address, Env, String};

use constants::MAX_BASIS_POINTS;

#[contract]
pub struct PriceVoteToken;

#[contractimpl]
impl PriceVoteToken {
    pub fn initialize(
        env: Env,
        admin: Address,
        payment_token: Address,
        metadata: TokenMetadata,
        params: CurveParams,
    ) -> Result<(), Error> {
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        Self::validate_params(&params)?;

        storage::set_config(
            &env,
            &CurveConfig {
                admin,
                payment_token,
                max_total_supply: params.max_total_supply,
                fee_percent: params.fee_percent,
                proposal_threshold_bps: params.proposal_threshold_bps,
                voting_duration: params.voting_duration,
            },
        );
        storage::set_metadata(&env, &metadata);
        storage::set_token_price(&env, params.initial_price);
        storage::bump_instance(&env);

        Ok(())
    }

    // ── Token metadata & accounts ─────────────────────────────────────────────

    pub fn name(env: Env) -> Result<String, Error> {
        Ok(storage::get_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, Error> {
        Ok(storage::get_metadata(&env)?.symbol)
    }

    pub fn decimals(env: Env) -> Result<u32, Error> {
        Ok(storage::get_metadata(&env)?.decimals)
    }

    pub fn balance_of(env: Env, owner: Address) -> Result<i128, Error> {
        Self::require_initialized(&env)?;
        Ok(storage::get_balance(&env, &owner))
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> Result<i128, Error> {
        Self::require_initialized(&env)?;
        Ok(storage::get_allowance(&env, &owner, &spender))
    }

    pub fn total_supply(env: Env) -> Result<i128, Error> {
        Self::require_initialized(&env)?;
        Ok(storage::get_total_supply(&env))
    }

    pub fn transfer(env: Env, from: Address, to: Address, value: i128) -> Result<(), Error> {
        from.require_auth();
        Self::require_initialized(&env)?;
        storage::bump_instance(&env);
        ledger::transfer(&env, &from, &to, value)
    }

    pub fn approve(env: Env, owner: Address, spender: Address, value: i128) -> Result<(), Error> {
        owner.require_auth();
        Self::require_initialized(&env)?;
        storage::bump_instance(&env);
        ledger::approve(&env, &owner, &spender, value)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        value: i128,
    ) -> Result<(), Error> {
        spender.require_auth();
        Self::require_initialized(&env)?;
        storage::bump_instance(&env);
        ledger::transfer_from(&env, &spender, &from, &to, value)
    }

    // ── Bonding curve ─────────────────────────────────────────────────────────

    pub fn max_total_supply(env: Env) -> Result<i128, Error> {
        Ok(storage::get_config(&env)?.max_total_supply)
    }

    pub fn token_price(env: Env) -> Result<i128, Error> {
        storage::get_token_price(&env)
    }

    pub fn fee_percent(env: Env) -> Result<u32, Error> {
        Ok(storage::get_config(&env)?.fee_percent)
    }

    pub fn get_config(env: Env) -> Result<CurveConfig, Error> {
        storage::get_config(&env)
    }

    /// Pay `amount_in` of the payment token for newly minted tokens. Returns
    /// the amount minted.
    pub fn buy(env: Env, buyer: Address, amount_in: i128) -> Result<i128, Error> {
        buyer.require_auth();
        storage::bump_instance(&env);
        curve::buy(&env, &buyer, amount_in)
    }

    /// Burn `amount` tokens for payment tokens. Returns the payout.
    pub fn sell(env: Env, seller: Address, amount: i128) -> Result<i128, Error> {
        seller.require_auth();
        Self::require_initialized(&env)?;
        storage::bump_instance(&env);
        curve::sell(&env, &seller, amount)
    }

    // ── Voter-aware trades ────────────────────────────────────────────────────

    pub fn voter_transfer(
        env: Env,
        from: Address,
        to: Address,
        value: i128,
        from_hint: i128,
        to_hint: i128,
    ) -> Result<(), Error> {
        from.require_auth();
        Self::require_initialized(&env)?;
        storage::bump_instance(&env);
        resync::voter_transfer(&env, &from, &to, value, from_hint, to_hint)
    }

    pub fn voter_sell(env: Env, seller: Address, amount: i128, hint: i128) -> Result<i128, Error> {
        seller.require_auth();
        Self::require_initialized(&env)?;
        storage::bump_instance(&env);
        resync::voter_sell(&env, &seller, amount, hint)
    }

    pub fn voter_buy(
        env: Env,
        buyer: Address,
        price: i128,
        amount_in: i128,
        hint: i128,
    ) -> Result<i128, Error> {
        buyer.require_auth();
        Self::require_initialized(&env)?;
        storage::bump_instance(&env);
        resync::voter_buy(&env, &buyer, price, amount_in, hint)
    }

    // ── Voting ────────────────────────────────────────────────────────────────

    pub fn proposal_threshold(env: Env) -> Result<i128, Error> {
        let config = storage::get_config(&env)?;
        session::proposal_threshold(&env, &config)
    }

    pub fn start_voting(env: Env, proposer: Address, initial_price: i128) -> Result<u64, Error> {
        proposer.require_auth();
        storage::bump_instance(&env);
        session::start_voting(&env, &proposer, initial_price)
    }

    pub fn vote(env: Env, voter: Address, price: i128, hint: i128) -> Result<(), Error> {
        voter.require_auth();
        storage::bump_instance(&env);
        session::vote(&env, &voter, price, hint)
    }

    /// Callable by anyone once the round's deadline has passed.
    pub fn end_voting(env: Env) -> Result<i128, Error> {
        storage::bump_instance(&env);
        session::end_voting(&env)
    }

    pub fn is_voting(env: Env) -> Result<bool, Error> {
        Self::require_initialized(&env)?;
        Ok(session::is_voting(&env))
    }

    pub fn vote_id(env: Env) -> Result<u64, Error> {
        Self::require_initialized(&env)?;
        Ok(storage::get_vote_id(&env))
    }

    /// Leading price of round `vote_id`, 0 if it has no candidates.
    pub fn votes(env: Env, vote_id: u64) -> Result<i128, Error> {
        Self::require_initialized(&env)?;
        Ok(ranked_list::head(&env, vote_id))
    }

    pub fn get_round(env: Env, vote_id: u64) -> Result<Option<VotingRound>, Error> {
        Self::require_initialized(&env)?;
        Ok(storage::get_round(&env, vote_id))
    }

    /// Price `voter` backs in the latest round, 0 if none.
    pub fn get_voter_vote(env: Env, voter: Address) -> Result<i128, Error> {
        Self::require_initialized(&env)?;
        Ok(storage::get_ballot(&env, storage::get_vote_id(&env), &voter).unwrap_or(0))
    }

    pub fn get_power(env: Env, price: i128) -> Result<i128, Error> {
        Self::require_initialized(&env)?;
        Ok(ranked_list::power_of(&env, storage::get_vote_id(&env), price))
    }

    pub fn get_node(env: Env, price: i128) -> Result<CandidateNode, Error> {
        Self::require_initialized(&env)?;
        ranked_list::get_node(&env, storage::get_vote_id(&env), price)
    }

    // ── Ranked list (admin) ───────────────────────────────────────────────────

    /// Link a candidate directly into the latest round's list.
    pub fn insert(env: Env, price: i128, power: i128, hint: i128) -> Result<(), Error> {
        Self::require_admin(&env)?;
        storage::bump_instance(&env);
        ranked_list::insert(&env, storage::get_vote_id(&env), price, power, hint)
    }

    pub fn relocate(env: Env, price: i128, new_power: i128, hint: i128) -> Result<(), Error> {
        Self::require_admin(&env)?;
        storage::bump_instance(&env);
        ranked_list::relocate(&env, storage::get_vote_id(&env), price, new_power, hint)
    }

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), Error> {
        if !storage::has_config(env) {
            return Err(Error::NotInitialized);
        }
        Ok(())
    }

    fn require_admin(env: &Env) -> Result<(), Error> {
        let config = storage::get_config(env)?;
        config.admin.require_auth();
        Ok(())
    }

    fn validate_params(params: &CurveParams) -> Result<(), Error> {
        if params.initial_price <= 0
            || params.max_total_supply <= 0
            || params.fee_percent >= 100
            || params.proposal_threshold_bps > MAX_BASIS_POINTS
            || params.voting_duration == 0
        {
            return Err(Error::InvalidConfig);
        }
        Ok(())
    }
}
