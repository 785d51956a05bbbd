//! Pool-wide balance bookkeeping.
//!
//! All four counters live in one instance-storage entry so a stake or a
//! withdrawal rewrites them together.

use soroban_sdk::{contracttype, symbol_short, Env, Symbol};

use crate::PoolError;

const BALANCES: Symbol = symbol_short!("BALANCES");

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolBalances {
    /// Cumulative amount ever staked. Never decreases.
    pub staked_total: i128,
    /// Sum of all active deposit amounts.
    pub staked_balance: i128,
    /// Cumulative amount ever added to the reward pool. Never decreases.
    pub total_reward: i128,
    /// Reward pool not yet paid out.
    pub reward_balance: i128,
}

impl PoolBalances {
    /// Records a new deposit of `amount`.
    pub fn credit_stake(&mut self, amount: i128) -> Result<(), PoolError> {
        if amount <= 0 {
            return Err(PoolError::ZeroAmount);
        }
        let staked_balance = self
            .staked_balance
            .checked_add(amount)
            .ok_or(PoolError::ArithmeticOverflow)?;
        let staked_total = self
            .staked_total
            .checked_add(amount)
            .ok_or(PoolError::ArithmeticOverflow)?;
        self.staked_balance = staked_balance;
        self.staked_total = staked_total;
        Ok(())
    }

    /// Releases a deposit of `amount` and pays `reward` out of the pool.
    ///
    /// Fails without touching any counter if the pool cannot cover `reward`.
    pub fn settle_withdrawal(&mut self, amount: i128, reward: i128) -> Result<(), PoolError> {
        if self.reward_balance < reward {
            return Err(PoolError::InsufficientRewardPool);
        }
        let staked_balance = self
            .staked_balance
            .checked_sub(amount)
            .filter(|b| *b >= 0)
            .ok_or(PoolError::ArithmeticOverflow)?;
        self.staked_balance = staked_balance;
        self.reward_balance -= reward;
        Ok(())
    }

    /// Adds `amount` to the reward pool.
    pub fn fund_reward(&mut self, amount: i128) -> Result<(), PoolError> {
        if amount <= 0 {
            return Err(PoolError::ZeroAmount);
        }
        let total_reward = self
            .total_reward
            .checked_add(amount)
            .ok_or(PoolError::ArithmeticOverflow)?;
        let reward_balance = self
            .reward_balance
            .checked_add(amount)
            .ok_or(PoolError::ArithmeticOverflow)?;
        self.total_reward = total_reward;
        self.reward_balance = reward_balance;
        Ok(())
    }
}

pub fn load(env: &Env) -> PoolBalances {
    env.storage()
        .instance()
        .get(&BALANCES)
        .unwrap_or_default()
}

pub fn store(env: &Env, balances: &PoolBalances) {
    env.storage().instance().set(&BALANCES, balances);
}
