#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env, String};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the pool is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub name: String,
    pub stake_token: Address,
    pub reward_token: Address,
    pub rate: u32,
    pub lock_duration: u64,
    pub gated: bool,
    pub timestamp: u64,
}

/// Fired when a participant opens a deposit.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub participant: Address,
    pub amount: i128,
    pub rate_index: u32,
    pub staked_balance: i128,
    pub timestamp: u64,
}

/// Fired when a participant closes a deposit.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub participant: Address,
    pub amount: i128,
    pub reward: i128,
    pub rate_index: u32,
    pub staked_balance: i128,
    pub reward_balance: i128,
    pub timestamp: u64,
}

/// Fired when anyone tops up the reward pool.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardFundedEvent {
    pub funder: Address,
    pub amount: i128,
    pub total_reward: i128,
    pub reward_balance: i128,
    pub timestamp: u64,
}

/// Fired when the owner appends a rate to the log.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RateChangedEvent {
    pub new_rate: u32,
    pub index: u32,
    pub timestamp: u64,
}

/// Fired when the owner changes the lock duration.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockDurationSetEvent {
    pub new_duration: u64,
    pub timestamp: u64,
}

/// Fired when the owner changes the stake amount that earns eligibility.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EligibilityAmountSetEvent {
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when the owner changes the minimum stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinStakeSetEvent {
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when a participant's eligibility flag flips.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EligibilityChangedEvent {
    pub participant: Address,
    pub eligible: bool,
    pub timestamp: u64,
}

/// Fired when an ownership transfer is proposed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerTransferProposedEvent {
    pub current_owner: Address,
    pub proposed_owner: Address,
    pub timestamp: u64,
}

/// Fired when an ownership transfer is accepted.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerTransferAcceptedEvent {
    pub old_owner: Address,
    pub new_owner: Address,
    pub timestamp: u64,
}

/// Fired when a pending ownership transfer is cancelled.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerTransferCancelledEvent {
    pub owner: Address,
    pub cancelled_proposed: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
pub fn publish_initialized(
    env: &Env,
    owner: Address,
    name: String,
    stake_token: Address,
    reward_token: Address,
    rate: u32,
    lock_duration: u64,
    gated: bool,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            owner,
            name,
            stake_token,
            reward_token,
            rate,
            lock_duration,
            gated,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(
    env: &Env,
    participant: Address,
    amount: i128,
    rate_index: u32,
    staked_balance: i128,
) {
    env.events().publish(
        (symbol_short!("STAKED"), participant.clone()),
        StakedEvent {
            participant,
            amount,
            rate_index,
            staked_balance,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdrawn(
    env: &Env,
    participant: Address,
    amount: i128,
    reward: i128,
    rate_index: u32,
    staked_balance: i128,
    reward_balance: i128,
) {
    env.events().publish(
        (symbol_short!("WITHDRAWN"), participant.clone()),
        WithdrawnEvent {
            participant,
            amount,
            reward,
            rate_index,
            staked_balance,
            reward_balance,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_funded(
    env: &Env,
    funder: Address,
    amount: i128,
    total_reward: i128,
    reward_balance: i128,
) {
    env.events().publish(
        (symbol_short!("RWD_FUND"), funder.clone()),
        RewardFundedEvent {
            funder,
            amount,
            total_reward,
            reward_balance,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_rate_changed(env: &Env, new_rate: u32, index: u32) {
    env.events().publish(
        (symbol_short!("RATE_SET"),),
        RateChangedEvent {
            new_rate,
            index,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_lock_duration_set(env: &Env, new_duration: u64) {
    env.events().publish(
        (symbol_short!("LOCK_SET"),),
        LockDurationSetEvent {
            new_duration,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_eligibility_amount_set(env: &Env, amount: i128) {
    env.events().publish(
        (symbol_short!("ELIG_SET"),),
        EligibilityAmountSetEvent {
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_min_stake_set(env: &Env, amount: i128) {
    env.events().publish(
        (symbol_short!("MIN_SET"),),
        MinStakeSetEvent {
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_eligibility_changed(env: &Env, participant: Address, eligible: bool) {
    env.events().publish(
        (symbol_short!("ELIGIBLE"), participant.clone()),
        EligibilityChangedEvent {
            participant,
            eligible,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_owner_transfer_proposed(env: &Env, current_owner: Address, proposed_owner: Address) {
    env.events().publish(
        (symbol_short!("OWN_PROP"), current_owner.clone()),
        OwnerTransferProposedEvent {
            current_owner,
            proposed_owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_owner_transfer_accepted(env: &Env, old_owner: Address, new_owner: Address) {
    env.events().publish(
        (symbol_short!("OWN_ACPT"), new_owner.clone()),
        OwnerTransferAcceptedEvent {
            old_owner,
            new_owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_owner_transfer_cancelled(env: &Env, owner: Address, cancelled_proposed: Address) {
    env.events().publish(
        (symbol_short!("OWN_CNCL"), owner.clone()),
        OwnerTransferCancelledEvent {
            owner,
            cancelled_proposed,
            timestamp: env.ledger().timestamp(),
        },
    );
}
