use soroban_sdk::{symbol_short, Address, Env, Symbol};

// ── Storage Keys ─────────────────────────────────────────────────────────────

const OWNER: Symbol = symbol_short!("OWNER");
const PENDING_OWNER: Symbol = symbol_short!("PEND_OWN");

// ── Core Functions ───────────────────────────────────────────────────────────

/// Stores `owner` as the sole holder of the admin capability.
/// Only callable internally; callers must verify authorization beforehand.
pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER, owner);
}

/// Returns the current owner, if the contract has been bootstrapped.
pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&OWNER)
}

/// Guard: returns `true` only if `caller` is the stored owner.
///
/// The caller must have already been authenticated via `require_auth()`.
pub fn is_owner(env: &Env, caller: &Address) -> bool {
    match get_owner(env) {
        Some(owner) => owner == *caller,
        None => false,
    }
}

// ── Two-step transfer ────────────────────────────────────────────────────────

/// Records `candidate` as the pending owner. The current owner keeps the
/// capability until the candidate accepts.
pub fn propose_owner(env: &Env, candidate: &Address) {
    env.storage().instance().set(&PENDING_OWNER, candidate);
}

/// Returns the pending owner, if a transfer is in flight.
pub fn get_pending_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&PENDING_OWNER)
}

/// Completes a transfer if `candidate` is the pending owner.
///
/// Returns the previous owner on success, or `None` if `candidate` does not
/// match the pending entry.
pub fn accept_owner(env: &Env, candidate: &Address) -> Option<Address> {
    let pending = get_pending_owner(env)?;
    if pending != *candidate {
        return None;
    }
    let previous = get_owner(env)?;
    set_owner(env, candidate);
    env.storage().instance().remove(&PENDING_OWNER);
    Some(previous)
}

/// Drops the pending transfer and returns the candidate that was cancelled.
pub fn cancel_transfer(env: &Env) -> Option<Address> {
    let pending = get_pending_owner(env)?;
    env.storage().instance().remove(&PENDING_OWNER);
    Some(pending)
}
