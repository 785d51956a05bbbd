use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// Per-participant persistent storage uses tuple keys: (prefix, participant)
const DEPOSIT: Symbol = symbol_short!("DEPOSIT");

/// TTL constants for persistent storage (in ledgers)
const TTL_THRESHOLD: u32 = 17_280; // ~1 day
const TTL_EXTEND_TO: u32 = 518_400; // ~30 days

/// A participant's single open position.
///
/// Only active deposits are stored; withdrawing removes the entry, which
/// returns the participant to the empty state.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposit {
    pub owner: Address,
    pub amount: i128,
    pub deposited_at: u64,
    /// Rate-log index current at stake time.
    pub rate_index: u32,
    pub active: bool,
}

fn deposit_key(participant: &Address) -> (Symbol, Address) {
    (DEPOSIT, participant.clone())
}

pub fn get(env: &Env, participant: &Address) -> Option<Deposit> {
    let key = deposit_key(participant);
    let deposit: Option<Deposit> = env.storage().persistent().get(&key);
    if deposit.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    deposit.filter(|d| d.active)
}

pub fn is_active(env: &Env, participant: &Address) -> bool {
    get(env, participant).is_some()
}

pub fn open(env: &Env, deposit: &Deposit) {
    let key = deposit_key(&deposit.owner);
    env.storage().persistent().set(&key, deposit);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn close(env: &Env, participant: &Address) {
    env.storage().persistent().remove(&deposit_key(participant));
}
