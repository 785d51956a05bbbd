//! Append-only rate log.
//!
//! Every rate the pool has ever offered is kept under its own index. A
//! deposit remembers the index that was current when it was opened, so later
//! changes never reach back into existing deposits.

use soroban_sdk::{contracttype, symbol_short, Env, Symbol};

use crate::PoolError;

const RATE_INDEX: Symbol = symbol_short!("RATE_IDX");
const RATE_ENTRY: Symbol = symbol_short!("RATE");

/// TTL constants for persistent storage (in ledgers)
const TTL_THRESHOLD: u32 = 17_280; // ~1 day
const TTL_EXTEND_TO: u32 = 518_400; // ~30 days

/// One immutable entry of the log.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RateEntry {
    /// Basis points, scale 10_000.
    pub rate: u32,
    pub index: u32,
}

fn entry_key(index: u32) -> (Symbol, u32) {
    (RATE_ENTRY, index)
}

fn write_entry(env: &Env, entry: &RateEntry) {
    let key = entry_key(entry.index);
    env.storage().persistent().set(&key, entry);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Writes the initial entry at index 0.
pub fn init(env: &Env, initial_rate: u32) -> Result<RateEntry, PoolError> {
    if initial_rate == 0 {
        return Err(PoolError::InvalidRate);
    }
    let entry = RateEntry {
        rate: initial_rate,
        index: 0,
    };
    write_entry(env, &entry);
    env.storage().instance().set(&RATE_INDEX, &0u32);
    Ok(entry)
}

/// Index of the newest entry.
pub fn current_index(env: &Env) -> u32 {
    env.storage().instance().get(&RATE_INDEX).unwrap_or(0)
}

/// Full entry at `index`, or `UnknownIndex` past the end of the log.
pub fn entry_at(env: &Env, index: u32) -> Result<RateEntry, PoolError> {
    if index > current_index(env) {
        return Err(PoolError::UnknownIndex);
    }
    let key = entry_key(index);
    let entry: RateEntry = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(PoolError::UnknownIndex)?;
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    Ok(entry)
}

/// Rate in effect at `index`.
pub fn rate_at(env: &Env, index: u32) -> Result<u32, PoolError> {
    entry_at(env, index).map(|entry| entry.rate)
}

/// Rate offered to new deposits.
pub fn current_rate(env: &Env) -> Result<u32, PoolError> {
    rate_at(env, current_index(env))
}

/// Appends `new_rate` as the next entry and makes it current.
///
/// Callers must verify authorization beforehand.
pub fn append(env: &Env, new_rate: u32) -> Result<RateEntry, PoolError> {
    if new_rate == 0 {
        return Err(PoolError::InvalidRate);
    }
    let next = current_index(env)
        .checked_add(1)
        .ok_or(PoolError::ArithmeticOverflow)?;
    let entry = RateEntry {
        rate: new_rate,
        index: next,
    };
    write_entry(env, &entry);
    env.storage().instance().set(&RATE_INDEX, &next);
    Ok(entry)
}
