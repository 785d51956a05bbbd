#![no_std]

pub mod balances;
pub mod deposits;
pub mod eligibility;
pub mod events;
pub mod lock;
pub mod rates;
pub mod rewards;

use soroban_sdk::{
    contract, contractimpl, contracttype, log, symbol_short, token, Address, Env, String, Symbol,
    Vec,
};
use staking_common::{ownership, PoolTier};

pub use balances::PoolBalances;
pub use deposits::Deposit;
pub use rates::RateEntry;

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const NAME: Symbol = symbol_short!("NAME");
const STAKE_TOKEN: Symbol = symbol_short!("STK_TOK");
const REWARD_TOKEN: Symbol = symbol_short!("RWD_TOK");
const MIN_STAKE: Symbol = symbol_short!("MIN_STK");

/// TTL constants for instance storage (in ledgers)
const INSTANCE_TTL_THRESHOLD: u32 = 17_280; // ~1 day
const INSTANCE_TTL_EXTEND_TO: u32 = 518_400; // ~30 days

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum PoolError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    ZeroAmount = 4,
    BelowMinimum = 5,
    AlreadyStaked = 6,
    NotEligible = 7,
    InsufficientAllowance = 8,
    InsufficientRewardPool = 9,
    LockNotElapsed = 10,
    NoStakeFound = 11,
    InvalidRate = 12,
    UnknownIndex = 13,
    ArithmeticOverflow = 14,
    InvalidThreshold = 15,
    NoPendingOwner = 16,
    InvalidConfig = 17,
}

// ── Public-facing types ──────────────────────────────────────────────────────

/// Everything a pool needs at construction.
///
/// Single-asset pools pass the same address for `stake_token` and
/// `reward_token`. A non-empty `eligibility_providers` list turns the pool
/// into a gated pool.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolParams {
    pub name: String,
    pub stake_token: Address,
    pub reward_token: Address,
    /// Initial rate in basis points, written at rate-log index 0.
    pub rate: u32,
    /// Lock duration in seconds.
    pub lock_duration: u64,
    pub eligibility_providers: Vec<Address>,
}

impl PoolParams {
    /// Builds params from a tier preset.
    ///
    /// `reward_token` is only used by dual-asset tiers and `providers` only
    /// by gated tiers; other tiers fall back to the stake token and no gate.
    pub fn from_tier(
        env: &Env,
        tier: PoolTier,
        name: String,
        stake_token: Address,
        reward_token: Address,
        providers: Vec<Address>,
    ) -> Self {
        let reward_token = if tier.is_dual_asset() {
            reward_token
        } else {
            stake_token.clone()
        };
        let eligibility_providers = if tier.is_gated() {
            providers
        } else {
            Vec::new(env)
        };
        Self {
            name,
            stake_token,
            reward_token,
            rate: tier.rate_bps(),
            lock_duration: tier.lock_duration(),
            eligibility_providers,
        }
    }
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakingPool;

#[contractimpl]
impl StakingPool {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the pool.
    ///
    /// `owner` becomes the only address allowed to call the admin functions.
    pub fn initialize(env: Env, owner: Address, params: PoolParams) -> Result<(), PoolError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(PoolError::AlreadyInitialized);
        }
        owner.require_auth();

        let this = env.current_contract_address();
        if params.eligibility_providers.iter().any(|p| p == this) {
            return Err(PoolError::InvalidConfig);
        }

        let initial = rates::init(&env, params.rate)?;
        lock::set_duration(&env, params.lock_duration);
        eligibility::set_providers(&env, &params.eligibility_providers);

        ownership::set_owner(&env, &owner);
        env.storage().instance().set(&NAME, &params.name);
        env.storage().instance().set(&STAKE_TOKEN, &params.stake_token);
        env.storage().instance().set(&REWARD_TOKEN, &params.reward_token);
        env.storage().instance().set(&INITIALIZED, &true);
        // BALANCES and MIN_STK start at zero; absent keys read as zero.
        Self::extend_instance_ttl(&env);

        events::publish_initialized(
            &env,
            owner,
            params.name,
            params.stake_token,
            params.reward_token,
            initial.rate,
            params.lock_duration,
            !params.eligibility_providers.is_empty(),
        );

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Open a deposit of `amount` stake tokens at the current rate.
    ///
    /// The participant must have approved the pool for at least `amount`
    /// beforehand. Gated pools also require eligibility from one of their
    /// providers.
    pub fn stake(env: Env, participant: Address, amount: i128) -> Result<(), PoolError> {
        Self::require_initialized(&env)?;
        participant.require_auth();

        // 1. Checks.
        if amount <= 0 {
            return Err(PoolError::ZeroAmount);
        }
        if deposits::is_active(&env, &participant) {
            return Err(PoolError::AlreadyStaked);
        }
        let min_stake = Self::get_min_stake(env.clone());
        if min_stake > 0 && amount < min_stake {
            return Err(PoolError::BelowMinimum);
        }

        let pool = env.current_contract_address();
        let stake_token = token::Client::new(&env, &Self::stake_token(&env)?);
        if stake_token.allowance(&participant, &pool) < amount {
            return Err(PoolError::InsufficientAllowance);
        }
        if !eligibility::gate_admits(&env, &participant) {
            log!(&env, "stake rejected by eligibility gate", participant);
            return Err(PoolError::NotEligible);
        }

        // 2. Effects.
        let mut balances = balances::load(&env);
        balances.credit_stake(amount)?;

        let rate_index = rates::current_index(&env);
        deposits::open(
            &env,
            &Deposit {
                owner: participant.clone(),
                amount,
                deposited_at: env.ledger().timestamp(),
                rate_index,
                active: true,
            },
        );
        balances::store(&env, &balances);

        let newly_eligible = eligibility::qualifies(&env, amount);
        if newly_eligible {
            eligibility::grant(&env, &participant);
        }
        Self::extend_instance_ttl(&env);

        // 3. Interactions.
        stake_token.transfer_from(&pool, &participant, &pool, &amount);

        events::publish_staked(
            &env,
            participant.clone(),
            amount,
            rate_index,
            balances.staked_balance,
        );
        if newly_eligible {
            events::publish_eligibility_changed(&env, participant, true);
        }

        Ok(())
    }

    /// Close the participant's deposit once the lock has elapsed.
    ///
    /// The reward uses the rate recorded at stake time. The lock uses the
    /// duration configured *now*. If the reward pool cannot cover the reward
    /// the whole withdrawal is refused. Returns the reward paid.
    pub fn withdraw(env: Env, participant: Address) -> Result<i128, PoolError> {
        Self::require_initialized(&env)?;
        participant.require_auth();

        // 1. Checks.
        let deposit = deposits::get(&env, &participant).ok_or(PoolError::NoStakeFound)?;

        let now = env.ledger().timestamp();
        if !lock::is_unlocked(deposit.deposited_at, now, lock::duration(&env)) {
            return Err(PoolError::LockNotElapsed);
        }

        let rate = rates::rate_at(&env, deposit.rate_index)?;
        let reward = rewards::reward_for(deposit.amount, rate)?;

        let mut balances = balances::load(&env);
        if balances.reward_balance < reward {
            log!(
                &env,
                "withdrawal refused, reward pool short",
                reward,
                balances.reward_balance
            );
            return Err(PoolError::InsufficientRewardPool);
        }

        // 2. Effects.
        balances.settle_withdrawal(deposit.amount, reward)?;
        balances::store(&env, &balances);
        deposits::close(&env, &participant);
        let was_eligible = eligibility::revoke(&env, &participant);
        Self::extend_instance_ttl(&env);

        // 3. Interactions.
        let pool = env.current_contract_address();
        let stake_token = Self::stake_token(&env)?;
        let reward_token = Self::reward_token(&env)?;
        if stake_token == reward_token {
            let payout = deposit
                .amount
                .checked_add(reward)
                .ok_or(PoolError::ArithmeticOverflow)?;
            token::Client::new(&env, &stake_token).transfer(&pool, &participant, &payout);
        } else {
            token::Client::new(&env, &stake_token).transfer(&pool, &participant, &deposit.amount);
            if reward > 0 {
                token::Client::new(&env, &reward_token).transfer(&pool, &participant, &reward);
            }
        }

        events::publish_withdrawn(
            &env,
            participant.clone(),
            deposit.amount,
            reward,
            deposit.rate_index,
            balances.staked_balance,
            balances.reward_balance,
        );
        if was_eligible {
            events::publish_eligibility_changed(&env, participant, false);
        }

        Ok(reward)
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Top up the reward pool with `amount` reward tokens.
    ///
    /// Anyone may fund. The funder must have approved the pool on the reward
    /// token for at least `amount`.
    pub fn add_reward(env: Env, funder: Address, amount: i128) -> Result<(), PoolError> {
        Self::require_initialized(&env)?;
        funder.require_auth();

        if amount <= 0 {
            return Err(PoolError::ZeroAmount);
        }

        let pool = env.current_contract_address();
        let reward_token = token::Client::new(&env, &Self::reward_token(&env)?);
        if reward_token.allowance(&funder, &pool) < amount {
            return Err(PoolError::InsufficientAllowance);
        }

        let mut balances = balances::load(&env);
        balances.fund_reward(amount)?;
        balances::store(&env, &balances);
        Self::extend_instance_ttl(&env);

        reward_token.transfer_from(&pool, &funder, &pool, &amount);

        events::publish_reward_funded(
            &env,
            funder,
            amount,
            balances.total_reward,
            balances.reward_balance,
        );

        Ok(())
    }

    // ── Admin functions ──────────────────────────────────────────────────────

    /// Append a new rate to the log. Only deposits opened afterwards use it.
    ///
    /// Returns the index of the new entry.
    pub fn set_rate(env: Env, caller: Address, new_rate: u32) -> Result<u32, PoolError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        let entry = rates::append(&env, new_rate)?;
        Self::extend_instance_ttl(&env);

        events::publish_rate_changed(&env, entry.rate, entry.index);

        Ok(entry.index)
    }

    /// Overwrite the lock duration. Applies to every open deposit at its
    /// next withdrawal attempt.
    pub fn change_lock_duration(
        env: Env,
        caller: Address,
        new_duration: u64,
    ) -> Result<(), PoolError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        lock::set_duration(&env, new_duration);
        Self::extend_instance_ttl(&env);

        events::publish_lock_duration_set(&env, new_duration);

        Ok(())
    }

    /// Set the stake amount that earns an eligibility flag in this pool.
    /// Existing flags are left as they are.
    pub fn set_eligibility_amount(
        env: Env,
        caller: Address,
        amount: i128,
    ) -> Result<(), PoolError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        if amount < 0 {
            return Err(PoolError::InvalidThreshold);
        }
        eligibility::set_threshold(&env, amount);
        Self::extend_instance_ttl(&env);

        events::publish_eligibility_amount_set(&env, amount);

        Ok(())
    }

    /// Set the smallest accepted stake. `0` disables the check.
    pub fn set_min_stake(env: Env, caller: Address, amount: i128) -> Result<(), PoolError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        if amount < 0 {
            return Err(PoolError::InvalidThreshold);
        }
        env.storage().instance().set(&MIN_STAKE, &amount);
        Self::extend_instance_ttl(&env);

        events::publish_min_stake_set(&env, amount);

        Ok(())
    }

    // ── Ownership transfer (two-step) ───────────────────────────────────────

    /// Propose a new owner. Only the current owner can call this.
    /// The candidate must call `accept_owner` to complete the transfer.
    pub fn propose_owner(
        env: Env,
        current_owner: Address,
        new_owner: Address,
    ) -> Result<(), PoolError> {
        Self::require_initialized(&env)?;
        current_owner.require_auth();
        Self::require_owner(&env, &current_owner)?;

        ownership::propose_owner(&env, &new_owner);
        Self::extend_instance_ttl(&env);

        events::publish_owner_transfer_proposed(&env, current_owner, new_owner);

        Ok(())
    }

    /// Accept the pending transfer. Only the proposed owner can call this.
    pub fn accept_owner(env: Env, new_owner: Address) -> Result<(), PoolError> {
        Self::require_initialized(&env)?;
        new_owner.require_auth();

        let pending = ownership::get_pending_owner(&env).ok_or(PoolError::NoPendingOwner)?;
        if pending != new_owner {
            return Err(PoolError::Unauthorized);
        }
        let old_owner =
            ownership::accept_owner(&env, &new_owner).ok_or(PoolError::NotInitialized)?;
        Self::extend_instance_ttl(&env);

        events::publish_owner_transfer_accepted(&env, old_owner, new_owner);

        Ok(())
    }

    /// Cancel a pending transfer. Only the current owner can call this.
    pub fn cancel_owner_transfer(env: Env, current_owner: Address) -> Result<(), PoolError> {
        Self::require_initialized(&env)?;
        current_owner.require_auth();
        Self::require_owner(&env, &current_owner)?;

        let cancelled = ownership::cancel_transfer(&env).ok_or(PoolError::NoPendingOwner)?;
        Self::extend_instance_ttl(&env);

        events::publish_owner_transfer_cancelled(&env, current_owner, cancelled);

        Ok(())
    }

    // ── Eligibility (cross-pool interface) ──────────────────────────────────

    /// Whether `participant` holds an eligibility flag in this pool.
    ///
    /// This is the `EligibilityProvider` entry point gated pools call.
    pub fn is_eligible(env: Env, participant: Address) -> bool {
        eligibility::is_eligible(&env, &participant)
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_owner(env: Env) -> Result<Address, PoolError> {
        ownership::get_owner(&env).ok_or(PoolError::NotInitialized)
    }

    pub fn get_pending_owner(env: Env) -> Option<Address> {
        ownership::get_pending_owner(&env)
    }

    pub fn get_name(env: Env) -> Result<String, PoolError> {
        env.storage()
            .instance()
            .get(&NAME)
            .ok_or(PoolError::NotInitialized)
    }

    pub fn get_stake_token(env: Env) -> Result<Address, PoolError> {
        Self::stake_token(&env)
    }

    pub fn get_reward_token(env: Env) -> Result<Address, PoolError> {
        Self::reward_token(&env)
    }

    /// Rate offered to new deposits.
    pub fn get_rate(env: Env) -> Result<u32, PoolError> {
        Self::require_initialized(&env)?;
        rates::current_rate(&env)
    }

    /// Index of the newest rate-log entry.
    pub fn get_rate_index(env: Env) -> u32 {
        rates::current_index(&env)
    }

    pub fn get_rate_at(env: Env, index: u32) -> Result<u32, PoolError> {
        Self::require_initialized(&env)?;
        rates::rate_at(&env, index)
    }

    pub fn get_rate_entry(env: Env, index: u32) -> Result<RateEntry, PoolError> {
        Self::require_initialized(&env)?;
        rates::entry_at(&env, index)
    }

    pub fn get_lock_duration(env: Env) -> u64 {
        lock::duration(&env)
    }

    pub fn get_min_stake(env: Env) -> i128 {
        env.storage().instance().get(&MIN_STAKE).unwrap_or(0)
    }

    /// `None` until the owner sets a threshold.
    pub fn get_eligibility_amount(env: Env) -> Option<i128> {
        eligibility::threshold(&env)
    }

    pub fn get_eligibility_providers(env: Env) -> Vec<Address> {
        eligibility::providers(&env)
    }

    pub fn get_deposit(env: Env, participant: Address) -> Option<Deposit> {
        deposits::get(&env, &participant)
    }

    /// Reward the participant's open deposit would pay if withdrawn now.
    pub fn pending_reward(env: Env, participant: Address) -> Result<i128, PoolError> {
        let deposit = deposits::get(&env, &participant).ok_or(PoolError::NoStakeFound)?;
        let rate = rates::rate_at(&env, deposit.rate_index)?;
        rewards::reward_for(deposit.amount, rate)
    }

    /// Earliest withdrawal time under the lock duration configured now.
    pub fn unlock_at(env: Env, participant: Address) -> Result<u64, PoolError> {
        let deposit = deposits::get(&env, &participant).ok_or(PoolError::NoStakeFound)?;
        Ok(lock::unlock_at(deposit.deposited_at, lock::duration(&env)))
    }

    pub fn get_balances(env: Env) -> PoolBalances {
        balances::load(&env)
    }

    pub fn get_staked_total(env: Env) -> i128 {
        balances::load(&env).staked_total
    }

    pub fn get_staked_balance(env: Env) -> i128 {
        balances::load(&env).staked_balance
    }

    pub fn get_total_reward(env: Env) -> i128 {
        balances::load(&env).total_reward
    }

    pub fn get_reward_balance(env: Env) -> i128 {
        balances::load(&env).reward_balance
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if the pool is not yet initialized.
    fn require_initialized(env: &Env) -> Result<(), PoolError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(PoolError::NotInitialized);
        }
        Ok(())
    }

    /// Guard: revert if `caller` is not the stored owner.
    fn require_owner(env: &Env, caller: &Address) -> Result<(), PoolError> {
        if !ownership::is_owner(env, caller) {
            return Err(PoolError::Unauthorized);
        }
        Ok(())
    }

    fn stake_token(env: &Env) -> Result<Address, PoolError> {
        env.storage()
            .instance()
            .get(&STAKE_TOKEN)
            .ok_or(PoolError::NotInitialized)
    }

    fn reward_token(env: &Env) -> Result<Address, PoolError> {
        env.storage()
            .instance()
            .get(&REWARD_TOKEN)
            .ok_or(PoolError::NotInitialized)
    }

    fn extend_instance_ttl(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_dual_asset;

#[cfg(test)]
mod test_gated;
