//! Fixed-price bonding curve: tokens are minted against the payment token at
//! the current unit price and burned back against the contract's reserve.
//! Both directions charge `fee_percent` and the fee stays in the reserve.

use soroban_sdk::{token, Address, Env};

use crate::constants::PERCENT_DENOMINATOR;
use crate::errors::Error;
use crate::ledger;
use crate::storage;

/// Tokens minted for `amount_in`, and the fee withheld from it.
pub fn quote_buy(amount_in: i128, token_price: i128, fee_percent: u32) -> Result<(i128, i128), Error> {
    if amount_in <= 0 {
        return Err(Error::InvalidAmount);
    }
    if token_price <= 0 {
        return Err(Error::InvalidPrice);
    }

    let fee = percent_of(amount_in, fee_percent)?;
    Ok(((amount_in - fee) / token_price, fee))
}

/// Payout for burning `amount`, and the fee withheld from it.
pub fn quote_sell(amount: i128, token_price: i128, fee_percent: u32) -> Result<(i128, i128), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }

    let proceeds = amount.checked_mul(token_price).ok_or(Error::Overflow)?;
    let fee = percent_of(proceeds, fee_percent)?;
    Ok((proceeds - fee, fee))
}

pub fn buy(env: &Env, buyer: &Address, amount_in: i128) -> Result<i128, Error> {
    let config = storage::get_config(env)?;
    let token_price = storage::get_token_price(env)?;

    let (tokens_out, _fee) = quote_buy(amount_in, token_price, config.fee_percent)?;

    let supply = storage::get_total_supply(env)
        .checked_add(tokens_out)
        .ok_or(Error::Overflow)?;
    if supply > config.max_total_supply {
        return Err(Error::SupplyCapExceeded);
    }

    let payment = token::Client::new(env, &config.payment_token);
    payment.transfer(buyer, &env.current_contract_address(), &amount_in);

    ledger::mint(env, buyer, tokens_out)?;

    Ok(tokens_out)
}

pub fn sell(env: &Env, seller: &Address, amount: i128) -> Result<i128, Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    if amount > storage::get_balance(env, seller) {
        return Err(Error::InsufficientBalance);
    }

    let config = storage::get_config(env)?;
    let token_price = storage::get_token_price(env)?;

    let (payout, _fee) = quote_sell(amount, token_price, config.fee_percent)?;

    let payment = token::Client::new(env, &config.payment_token);
    if payment.balance(&env.current_contract_address()) < payout {
        return Err(Error::InsufficientReserves);
    }

    ledger::burn(env, seller, amount)?;

    if payout > 0 {
        payment.transfer(&env.current_contract_address(), seller, &payout);
    }

    Ok(payout)
}

fn percent_of(value: i128, percent: u32) -> Result<i128, Error> {
    Ok(value
        .checked_mul(percent as i128)
        .ok_or(Error::Overflow)?
        / PERCENT_DENOMINATOR)
}
