//! Voting rounds over the unit price.
//!
//! A round moves `Closed -> Open -> Closed` and at most one is open at a time.
//! Every round gets a fresh `vote_id`, which keys its ballots and its own
//! ranked list, so nothing from an earlier round leaks into a later one.

use soroban_sdk::{log, Address, Env};

use crate::constants::MAX_BASIS_POINTS;
use crate::errors::Error;
use crate::events;
use crate::ranked_list;
use crate::storage;
use crate::types::{CurveConfig, VotingRound};

/// Balance a holder needs to originate a candidate. Never below one token.
pub fn proposal_threshold(env: &Env, config: &CurveConfig) -> Result<i128, Error> {
    let scaled = storage::get_total_supply(env)
        .checked_mul(config.proposal_threshold_bps as i128)
        .ok_or(Error::Overflow)?
        / MAX_BASIS_POINTS as i128;
    Ok(scaled.max(1))
}

/// The round for the current `vote_id`, if it is still open.
pub fn open_round(env: &Env) -> Option<VotingRound> {
    storage::get_round(env, storage::get_vote_id(env)).filter(|round| round.open)
}

pub fn is_voting(env: &Env) -> bool {
    open_round(env).is_some()
}

/// Price `voter` backs in the open round.
pub fn ballot_in_open_round(env: &Env, voter: &Address) -> Option<(u64, i128)> {
    let round = open_round(env)?;
    storage::get_ballot(env, round.vote_id, voter).map(|price| (round.vote_id, price))
}

pub fn start_voting(env: &Env, proposer: &Address, initial_price: i128) -> Result<u64, Error> {
    let config = storage::get_config(env)?;

    if initial_price <= 0 {
        return Err(Error::InvalidPrice);
    }

    let balance = storage::get_balance(env, proposer);
    if balance < proposal_threshold(env, &config)? {
        return Err(Error::NotEnoughTokens);
    }
    if is_voting(env) {
        return Err(Error::SessionAlreadyOpen);
    }

    let vote_id = storage::get_vote_id(env)
        .checked_add(1)
        .ok_or(Error::Overflow)?;
    let start_ledger = env.ledger().sequence();
    let round = VotingRound {
        vote_id,
        proposer: proposer.clone(),
        initial_price,
        start_ledger,
        end_ledger: start_ledger.saturating_add(config.voting_duration),
        open: true,
    };

    storage::set_vote_id(env, vote_id);
    storage::set_round(env, &round);

    ranked_list::insert(env, vote_id, initial_price, balance, 0)?;
    storage::set_ballot(env, vote_id, proposer, initial_price);

    events::voting_started(env, vote_id, initial_price);
    log!(env, "voting round opened", vote_id, initial_price, round.end_ledger);

    Ok(vote_id)
}

pub fn vote(env: &Env, voter: &Address, price: i128, hint: i128) -> Result<(), Error> {
    let config = storage::get_config(env)?;
    let round = open_round(env).ok_or(Error::SessionNotOpen)?;

    if storage::get_ballot(env, round.vote_id, voter).is_some() {
        return Err(Error::AlreadyVoted);
    }
    if price <= 0 {
        return Err(Error::InvalidPrice);
    }

    let balance = storage::get_balance(env, voter);

    match storage::get_node(env, round.vote_id, price) {
        Some(node) => {
            let power = node.power.checked_add(balance).ok_or(Error::Overflow)?;
            ranked_list::relocate(env, round.vote_id, price, power, hint)?;
        }
        None => {
            if balance < proposal_threshold(env, &config)? {
                return Err(Error::NotEnoughTokens);
            }
            ranked_list::insert(env, round.vote_id, price, balance, hint)?;
        }
    }

    storage::set_ballot(env, round.vote_id, voter, price);

    Ok(())
}

/// Close the open round and adopt its leading price. Returns the new price.
pub fn end_voting(env: &Env) -> Result<i128, Error> {
    storage::get_config(env)?;
    let mut round = open_round(env).ok_or(Error::SessionNotOpen)?;

    if env.ledger().sequence() < round.end_ledger {
        return Err(Error::VotingNotOverYet);
    }

    // the proposer's node is never removed, so an open round always has a head
    let winner = ranked_list::head(env, round.vote_id);

    round.open = false;
    storage::set_round(env, &round);
    storage::set_token_price(env, winner);

    events::price_changed(env, winner);
    log!(env, "voting round closed", round.vote_id, winner);

    Ok(winner)
}
