use soroban_sdk::{symbol_short, Env, Symbol};

const LOCK_DURATION: Symbol = symbol_short!("LOCK_DUR");

/// Current lock duration in seconds. Not versioned: the value read at
/// withdrawal time applies to every open deposit.
pub fn duration(env: &Env) -> u64 {
    env.storage().instance().get(&LOCK_DURATION).unwrap_or(0)
}

/// Overwrites the lock duration in place.
pub fn set_duration(env: &Env, seconds: u64) {
    env.storage().instance().set(&LOCK_DURATION, &seconds);
}

/// Earliest timestamp at which a deposit made at `deposited_at` may leave.
pub fn unlock_at(deposited_at: u64, lock_duration: u64) -> u64 {
    deposited_at.saturating_add(lock_duration)
}

pub fn is_unlocked(deposited_at: u64, now: u64, lock_duration: u64) -> bool {
    now >= unlock_at(deposited_at, lock_duration)
}
