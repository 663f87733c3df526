//! Ranked candidate list.
//!
//! A doubly linked list of [`CandidateNode`]s kept in persistent storage under
//! `(vote_id, price)`, ordered from the heaviest `power` at the head to the
//! lightest at the tail. Each voting round owns its own arena, so a price key
//! reused in a later round starts from an empty list.
//!
//! The contract never scans the list. Callers pass a *hint*: the price of the
//! node the entry should sit directly in front of, or 0 for the tail end.
//! [`insert`] trusts the hint once it names a live node. [`relocate`] treats it
//! as a starting point and walks locally until the order holds again, so the
//! work done is proportional to how far the hint is from the true slot.

use soroban_sdk::{log, Env};

use crate::errors::Error;
use crate::storage;
use crate::types::{CandidateNode, ListBounds};

/// Price at the head of the list, 0 when the list is empty.
pub fn head(env: &Env, vote_id: u64) -> i128 {
    storage::get_bounds(env, vote_id).head
}

pub fn get_node(env: &Env, vote_id: u64, price: i128) -> Result<CandidateNode, Error> {
    storage::get_node(env, vote_id, price).ok_or(Error::NodeNotFound)
}

/// Power recorded for `price`, 0 when the price is not a candidate.
pub fn power_of(env: &Env, vote_id: u64, price: i128) -> i128 {
    storage::get_node(env, vote_id, price)
        .map(|node| node.power)
        .unwrap_or(0)
}

/// Link a new node directly in front of `hint` (0 appends at the tail).
///
/// Only the existence of `hint` is checked. Whether `power` fits between its
/// new neighbours is up to the caller.
pub fn insert(env: &Env, vote_id: u64, price: i128, power: i128, hint: i128) -> Result<(), Error> {
    if price <= 0 {
        return Err(Error::InvalidPrice);
    }
    if power < 0 {
        return Err(Error::InvalidAmount);
    }
    if storage::has_node(env, vote_id, price) {
        return Err(Error::NodeExists);
    }
    if hint != 0 && !storage::has_node(env, vote_id, hint) {
        return Err(Error::InvalidHint);
    }

    let mut bounds = storage::get_bounds(env, vote_id);
    let prev = predecessor(env, vote_id, &bounds, hint)?;

    let node = CandidateNode {
        prev: 0,
        next: 0,
        power,
    };
    link(env, vote_id, &mut bounds, price, node, prev, hint)?;
    storage::set_bounds(env, vote_id, &bounds);

    Ok(())
}

/// Give `price` a new power and move it to where the descending order holds.
///
/// The search starts in front of `hint` (0 for the tail end). A hint that no
/// longer names another live node falls back to the node's previous slot.
pub fn relocate(
    env: &Env,
    vote_id: u64,
    price: i128,
    new_power: i128,
    hint: i128,
) -> Result<(), Error> {
    if new_power < 0 {
        return Err(Error::InvalidAmount);
    }

    let mut node = get_node(env, vote_id, price)?;
    let mut bounds = storage::get_bounds(env, vote_id);

    excise(env, vote_id, &mut bounds, &node)?;
    node.power = new_power;

    let start = if hint == 0 || (hint != price && storage::has_node(env, vote_id, hint)) {
        hint
    } else {
        log!(env, "stale relocation hint, walking from previous slot", price, hint);
        node.next
    };

    let mut next = start;
    let mut prev = predecessor(env, vote_id, &bounds, next)?;

    // toward the head while the node in front is lighter
    while prev != 0 {
        let ahead = get_node(env, vote_id, prev)?;
        if ahead.power >= new_power {
            break;
        }
        next = prev;
        prev = ahead.prev;
    }

    // toward the tail while the node behind is heavier
    while next != 0 {
        let behind = get_node(env, vote_id, next)?;
        if behind.power <= new_power {
            break;
        }
        prev = next;
        next = behind.next;
    }

    link(env, vote_id, &mut bounds, price, node, prev, next)?;
    storage::set_bounds(env, vote_id, &bounds);

    Ok(())
}

/// Key currently sitting directly in front of `next`.
fn predecessor(env: &Env, vote_id: u64, bounds: &ListBounds, next: i128) -> Result<i128, Error> {
    if next == 0 {
        Ok(bounds.tail)
    } else {
        Ok(get_node(env, vote_id, next)?.prev)
    }
}

/// Write `node` between `prev` and `next` and point both neighbours at it.
fn link(
    env: &Env,
    vote_id: u64,
    bounds: &mut ListBounds,
    price: i128,
    mut node: CandidateNode,
    prev: i128,
    next: i128,
) -> Result<(), Error> {
    node.prev = prev;
    node.next = next;

    if prev == 0 {
        bounds.head = price;
    } else {
        let mut ahead = get_node(env, vote_id, prev)?;
        ahead.next = price;
        storage::set_node(env, vote_id, prev, &ahead);
    }

    if next == 0 {
        bounds.tail = price;
    } else {
        let mut behind = get_node(env, vote_id, next)?;
        behind.prev = price;
        storage::set_node(env, vote_id, next, &behind);
    }

    storage::set_node(env, vote_id, price, &node);

    Ok(())
}

/// Point the neighbours of `node` at each other. The node's own record is left
/// stale until it is linked again.
fn excise(
    env: &Env,
    vote_id: u64,
    bounds: &mut ListBounds,
    node: &CandidateNode,
) -> Result<(), Error> {
    if node.prev == 0 {
        bounds.head = node.next;
    } else {
        let mut ahead = get_node(env, vote_id, node.prev)?;
        ahead.next = node.next;
        storage::set_node(env, vote_id, node.prev, &ahead);
    }

    if node.next == 0 {
        bounds.tail = node.prev;
    } else {
        let mut behind = get_node(env, vote_id, node.next)?;
        behind.prev = node.prev;
        storage::set_node(env, vote_id, node.next, &behind);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::PriceVoteToken;
    use std::vec::Vec;

    const ROUND: u64 = 1;

    fn with_contract_env<T>(env: &Env, f: impl FnOnce() -> T) -> T {
        let cid = env.register(PriceVoteToken, ());
        env.as_contract(&cid, f)
    }

    /// (price, prev, next, power) from head to tail, checking back links and
    /// guarding against cycles.
    fn walk(env: &Env) -> Vec<(i128, i128, i128, i128)> {
        let mut out = Vec::new();
        let mut cursor = head(env, ROUND);
        let mut expected_prev = 0;
        while cursor != 0 {
            let node = get_node(env, ROUND, cursor).unwrap();
            assert_eq!(node.prev, expected_prev, "broken back link at {}", cursor);
            out.push((cursor, node.prev, node.next, node.power));
            assert!(out.len() <= 64, "cycle in list");
            expected_prev = cursor;
            cursor = node.next;
        }
        assert_eq!(storage::get_bounds(env, ROUND).tail, expected_prev);
        out
    }

    fn prices(env: &Env) -> Vec<i128> {
        walk(env).iter().map(|(price, ..)| *price).collect()
    }

    fn build_reference_list(env: &Env) {
        insert(env, ROUND, 100, 101, 0).unwrap();
        insert(env, ROUND, 200, 201, 100).unwrap();
        insert(env, ROUND, 300, 301, 200).unwrap();
        insert(env, ROUND, 250, 251, 200).unwrap();
        insert(env, ROUND, 400, 401, 300).unwrap();
        insert(env, ROUND, 50, 51, 0).unwrap();
    }

    #[test]
    fn test_insert_places_node_in_front_of_hint() {
        let env = Env::default();
        with_contract_env(&env, || {
            build_reference_list(&env);

            assert_eq!(
                walk(&env),
                [
                    (400, 0, 300, 401),
                    (300, 400, 250, 301),
                    (250, 300, 200, 251),
                    (200, 250, 100, 201),
                    (100, 200, 50, 101),
                    (50, 100, 0, 51),
                ]
            );
            assert_eq!(
                storage::get_bounds(&env, ROUND),
                ListBounds { head: 400, tail: 50 }
            );
        });
    }

    #[test]
    fn test_insert_into_empty_list() {
        let env = Env::default();
        with_contract_env(&env, || {
            insert(&env, ROUND, 10, 5, 0).unwrap();

            let node = get_node(&env, ROUND, 10).unwrap();
            assert_eq!(node, CandidateNode { prev: 0, next: 0, power: 5 });
            assert_eq!(storage::get_bounds(&env, ROUND), ListBounds { head: 10, tail: 10 });
        });
    }

    #[test]
    fn test_insert_round_trip_matches_hint() {
        let env = Env::default();
        with_contract_env(&env, || {
            build_reference_list(&env);
            let hint_prev = get_node(&env, ROUND, 200).unwrap().prev;

            insert(&env, ROUND, 222, 230, 200).unwrap();

            let node = get_node(&env, ROUND, 222).unwrap();
            assert_eq!(node.power, 230);
            assert_eq!(node.next, 200);
            assert_eq!(node.prev, hint_prev);
            assert_eq!(get_node(&env, ROUND, 200).unwrap().prev, 222);
            assert_eq!(get_node(&env, ROUND, hint_prev).unwrap().next, 222);
        });
    }

    #[test]
    fn test_insert_existing_price_fails() {
        let env = Env::default();
        with_contract_env(&env, || {
            build_reference_list(&env);

            assert_eq!(insert(&env, ROUND, 100, 102, 0), Err(Error::NodeExists));
            assert_eq!(insert(&env, ROUND, 100, 999, 400), Err(Error::NodeExists));
            assert_eq!(prices(&env), [400, 300, 250, 200, 100, 50]);
        });
    }

    #[test]
    fn test_insert_unknown_hint_fails() {
        let env = Env::default();
        with_contract_env(&env, || {
            build_reference_list(&env);

            assert_eq!(insert(&env, ROUND, 101, 999, 123), Err(Error::InvalidHint));
            assert!(!storage::has_node(&env, ROUND, 101));
        });
    }

    #[test]
    fn test_insert_rejects_sentinel_price() {
        let env = Env::default();
        with_contract_env(&env, || {
            assert_eq!(insert(&env, ROUND, 0, 1, 0), Err(Error::InvalidPrice));
            assert_eq!(insert(&env, ROUND, -3, 1, 0), Err(Error::InvalidPrice));
            assert_eq!(insert(&env, ROUND, 3, -1, 0), Err(Error::InvalidAmount));
        });
    }

    #[test]
    fn test_insert_does_not_enforce_order() {
        let env = Env::default();
        with_contract_env(&env, || {
            insert(&env, ROUND, 10, 1, 0).unwrap();
            // heavier node appended behind a lighter one is accepted as is
            insert(&env, ROUND, 20, 50, 0).unwrap();

            assert_eq!(prices(&env), [10, 20]);
        });
    }

    #[test]
    fn test_rounds_do_not_share_nodes() {
        let env = Env::default();
        with_contract_env(&env, || {
            insert(&env, ROUND, 10, 1, 0).unwrap();
            insert(&env, ROUND + 1, 10, 7, 0).unwrap();

            assert_eq!(power_of(&env, ROUND, 10), 1);
            assert_eq!(power_of(&env, ROUND + 1, 10), 7);
            assert_eq!(power_of(&env, ROUND + 2, 10), 0);
            assert_eq!(get_node(&env, ROUND + 2, 10), Err(Error::NodeNotFound));
        });
    }

    #[test]
    fn test_relocate_tail_to_head() {
        let env = Env::default();
        with_contract_env(&env, || {
            build_reference_list(&env);

            relocate(&env, ROUND, 50, 5100, 400).unwrap();

            assert_eq!(
                walk(&env),
                [
                    (50, 0, 400, 5100),
                    (400, 50, 300, 401),
                    (300, 400, 250, 301),
                    (250, 300, 200, 251),
                    (200, 250, 100, 201),
                    (100, 200, 0, 101),
                ]
            );
        });
    }

    #[test]
    fn test_relocate_walks_up_from_stale_tail_hint() {
        let env = Env::default();
        with_contract_env(&env, || {
            build_reference_list(&env);

            // hint 0 starts at the tail; the walk climbs to the head
            relocate(&env, ROUND, 100, 1_000, 0).unwrap();

            assert_eq!(prices(&env), [100, 400, 300, 250, 200, 50]);
        });
    }

    #[test]
    fn test_relocate_walks_down_from_head_hint() {
        let env = Env::default();
        with_contract_env(&env, || {
            build_reference_list(&env);

            relocate(&env, ROUND, 300, 60, 400).unwrap();

            assert_eq!(prices(&env), [400, 250, 200, 100, 300, 50]);
            assert_eq!(power_of(&env, ROUND, 300), 60);
        });
    }

    #[test]
    fn test_relocate_unknown_hint_starts_from_previous_slot() {
        let env = Env::default();
        with_contract_env(&env, || {
            build_reference_list(&env);

            relocate(&env, ROUND, 250, 260, 777).unwrap();
            assert_eq!(prices(&env), [400, 300, 250, 200, 100, 50]);

            relocate(&env, ROUND, 250, 350, 250).unwrap();
            assert_eq!(prices(&env), [400, 250, 300, 200, 100, 50]);
        });
    }

    #[test]
    fn test_relocate_keeps_consistent_hint_on_ties() {
        let env = Env::default();
        with_contract_env(&env, || {
            insert(&env, ROUND, 1, 10, 0).unwrap();
            insert(&env, ROUND, 2, 10, 0).unwrap();
            insert(&env, ROUND, 3, 10, 0).unwrap();

            relocate(&env, ROUND, 3, 10, 1).unwrap();
            assert_eq!(prices(&env), [3, 1, 2]);

            relocate(&env, ROUND, 3, 10, 0).unwrap();
            assert_eq!(prices(&env), [1, 2, 3]);
        });
    }

    #[test]
    fn test_relocate_single_node() {
        let env = Env::default();
        with_contract_env(&env, || {
            insert(&env, ROUND, 12, 100, 0).unwrap();

            relocate(&env, ROUND, 12, 50, 12).unwrap();

            assert_eq!(walk(&env), [(12, 0, 0, 50)]);
        });
    }

    #[test]
    fn test_relocate_missing_node_fails() {
        let env = Env::default();
        with_contract_env(&env, || {
            build_reference_list(&env);

            assert_eq!(relocate(&env, ROUND, 999, 1, 0), Err(Error::NodeNotFound));
            assert_eq!(relocate(&env, ROUND, 100, -1, 0), Err(Error::InvalidAmount));
        });
    }
}
