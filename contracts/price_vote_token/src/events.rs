use soroban_sdk::{symbol_short, Address, Env};

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("transfer"), from.clone(), to.clone()),
        amount,
    );
}

pub fn approve(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("approve"), owner.clone(), spender.clone()),
        amount,
    );
}

pub fn mint(env: &Env, to: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("mint"), to.clone()), amount);
}

pub fn burn(env: &Env, from: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("burn"), from.clone()), amount);
}

pub fn voting_started(env: &Env, vote_id: u64, initial_price: i128) {
    env.events().publish(
        (symbol_short!("voting"), symbol_short!("started")),
        (vote_id, initial_price),
    );
}

pub fn price_changed(env: &Env, new_price: i128) {
    env.events().publish(
        (symbol_short!("price"), symbol_short!("changed")),
        new_price,
    );
}
