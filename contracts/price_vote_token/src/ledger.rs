//! Token accounts: balances, supply and allowances.
//!
//! Nothing here touches the candidate list. Callers that need voting power
//! to follow a balance change go through `resync`.

use soroban_sdk::{Address, Env, String};

use crate::constants::ZERO_ACCOUNT;
use crate::errors::Error;
use crate::events;
use crate::storage;

fn zero_account(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, ZERO_ACCOUNT))
}

fn require_not_zero_account(env: &Env, to: &Address) -> Result<(), Error> {
    if *to == zero_account(env) {
        return Err(Error::ZeroAddress);
    }
    Ok(())
}

pub fn mint(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }

    let balance = storage::get_balance(env, to)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    let supply = storage::get_total_supply(env)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;

    storage::set_balance(env, to, balance);
    storage::set_total_supply(env, supply);

    events::mint(env, to, amount);

    Ok(())
}

pub fn burn(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }

    let balance = storage::get_balance(env, from);
    if balance < amount {
        return Err(Error::InsufficientBalance);
    }

    storage::set_balance(env, from, balance - amount);

    let supply = storage::get_total_supply(env);
    storage::set_total_supply(env, supply - amount);

    events::burn(env, from, amount);

    Ok(())
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    require_not_zero_account(env, to)?;
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }

    let from_balance = storage::get_balance(env, from);
    if from_balance < amount {
        return Err(Error::InsufficientBalance);
    }

    storage::set_balance(env, from, from_balance - amount);

    // read after the debit so a self-transfer nets to zero
    let to_balance = storage::get_balance(env, to)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    storage::set_balance(env, to, to_balance);

    events::transfer(env, from, to, amount);

    Ok(())
}

pub fn approve(env: &Env, owner: &Address, spender: &Address, amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }

    storage::set_allowance(env, owner, spender, amount);

    events::approve(env, owner, spender, amount);

    Ok(())
}

pub fn transfer_from(
    env: &Env,
    spender: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    require_not_zero_account(env, to)?;
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }

    let allowance = storage::get_allowance(env, from, spender);
    if allowance < amount {
        return Err(Error::InsufficientAllowance);
    }

    storage::set_allowance(env, from, spender, allowance - amount);
    transfer(env, from, to, amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PriceVoteToken;
    use soroban_sdk::testutils::Address as _;

    #[test]
    fn test_zero_account_cannot_receive() {
        let env = Env::default();
        let cid = env.register(PriceVoteToken, ());
        env.as_contract(&cid, || {
            let holder = Address::generate(&env);
            let spender = Address::generate(&env);
            mint(&env, &holder, 10).unwrap();
            approve(&env, &holder, &spender, 10).unwrap();

            let zero = zero_account(&env);
            assert_eq!(transfer(&env, &holder, &zero, 1), Err(Error::ZeroAddress));
            assert_eq!(
                transfer_from(&env, &spender, &holder, &zero, 1),
                Err(Error::ZeroAddress)
            );
            assert_eq!(storage::get_balance(&env, &holder), 10);
            assert_eq!(storage::get_allowance(&env, &holder, &spender), 10);
        });
    }
}
