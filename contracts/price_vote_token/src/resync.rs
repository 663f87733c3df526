//! Voter-aware trades.
//!
//! Each operation runs the plain ledger or curve call first and then moves the
//! affected voter's candidate by the balance delta, so the candidate's power
//! keeps matching the balances behind it. Addresses without a ballot in the
//! open round get the plain behaviour.

use soroban_sdk::{log, Address, Env};

use crate::curve;
use crate::errors::Error;
use crate::ledger;
use crate::ranked_list;
use crate::session;

/// Move `voter`'s candidate by `delta`. No-op without a ballot in the open round.
fn shift_power(env: &Env, voter: &Address, delta: i128, hint: i128) -> Result<(), Error> {
    let Some((vote_id, price)) = session::ballot_in_open_round(env, voter) else {
        return Ok(());
    };

    let current = ranked_list::power_of(env, vote_id, price);
    let mut power = current.checked_add(delta).ok_or(Error::Overflow)?;
    if power < 0 {
        // balance moved through a plain transfer/buy/sell since the vote
        log!(env, "candidate power clamped at zero", price, current, delta);
        power = 0;
    }

    ranked_list::relocate(env, vote_id, price, power, hint)
}

pub fn voter_transfer(
    env: &Env,
    from: &Address,
    to: &Address,
    value: i128,
    from_hint: i128,
    to_hint: i128,
) -> Result<(), Error> {
    ledger::transfer(env, from, to, value)?;

    shift_power(env, from, -value, from_hint)?;
    shift_power(env, to, value, to_hint)
}

pub fn voter_sell(env: &Env, seller: &Address, amount: i128, hint: i128) -> Result<i128, Error> {
    let payout = curve::sell(env, seller, amount)?;
    shift_power(env, seller, -amount, hint)?;
    Ok(payout)
}

/// Buy while backing `price`. A ballot for any other price in the open round
/// is rejected.
pub fn voter_buy(
    env: &Env,
    buyer: &Address,
    price: i128,
    amount_in: i128,
    hint: i128,
) -> Result<i128, Error> {
    if let Some((_, backed)) = session::ballot_in_open_round(env, buyer) {
        if backed != price {
            return Err(Error::VoteMismatch);
        }
    }

    let minted = curve::buy(env, buyer, amount_in)?;
    shift_power(env, buyer, minted, hint)?;
    Ok(minted)
}
