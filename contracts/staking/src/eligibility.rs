//! Eligibility flags granted by this pool and the gate it may enforce.
//!
//! A pool grants a flag to anyone whose stake meets the configured amount.
//! A gated pool additionally requires a flag from at least one of its
//! providers before accepting a stake.

use soroban_sdk::{symbol_short, Address, Env, Symbol, Vec};
use staking_common::EligibilityProviderClient;

const ELIGIBILITY_AMOUNT: Symbol = symbol_short!("ELIG_AMT");
const PROVIDERS: Symbol = symbol_short!("ELIG_PRV");
const ELIGIBLE: Symbol = symbol_short!("ELIGIBLE");

/// TTL constants for persistent storage (in ledgers)
const TTL_THRESHOLD: u32 = 17_280; // ~1 day
const TTL_EXTEND_TO: u32 = 518_400; // ~30 days

fn eligible_key(participant: &Address) -> (Symbol, Address) {
    (ELIGIBLE, participant.clone())
}

// ── Threshold ────────────────────────────────────────────────────────────────

/// Stake amount that earns a flag. `None` until the owner configures one,
/// in which case no flags are granted.
pub fn threshold(env: &Env) -> Option<i128> {
    env.storage().instance().get(&ELIGIBILITY_AMOUNT)
}

pub fn set_threshold(env: &Env, amount: i128) {
    env.storage().instance().set(&ELIGIBILITY_AMOUNT, &amount);
}

/// Whether a stake of `amount` earns a flag under the current threshold.
pub fn qualifies(env: &Env, amount: i128) -> bool {
    match threshold(env) {
        Some(min) => amount >= min,
        None => false,
    }
}

// ── Flags ────────────────────────────────────────────────────────────────────

pub fn is_eligible(env: &Env, participant: &Address) -> bool {
    let key = eligible_key(participant);
    let flag: bool = env.storage().persistent().get(&key).unwrap_or(false);
    if flag {
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    flag
}

pub fn grant(env: &Env, participant: &Address) {
    let key = eligible_key(participant);
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Clears the flag. Returns `true` if one was set.
pub fn revoke(env: &Env, participant: &Address) -> bool {
    let key = eligible_key(participant);
    let was_set = env.storage().persistent().has(&key);
    if was_set {
        env.storage().persistent().remove(&key);
    }
    was_set
}

// ── Gate ─────────────────────────────────────────────────────────────────────

pub fn providers(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&PROVIDERS)
        .unwrap_or(Vec::new(env))
}

pub fn set_providers(env: &Env, providers: &Vec<Address>) {
    env.storage().instance().set(&PROVIDERS, providers);
}

/// An ungated pool (no providers) admits everyone. Otherwise the first
/// provider that reports `true` admits the participant. A provider whose
/// call fails counts as `false`, so one broken provider never blocks the rest.
pub fn gate_admits(env: &Env, participant: &Address) -> bool {
    let providers = providers(env);
    if providers.is_empty() {
        return true;
    }
    providers.iter().any(|provider| {
        matches!(
            EligibilityProviderClient::new(env, &provider).try_is_eligible(participant),
            Ok(Ok(true))
        )
    })
}
