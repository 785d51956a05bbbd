extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::Client as TokenClient,
    Address, Env, Vec,
};
use staking_common::PoolTier;

use crate::test::{advance, approve, create_token, deploy_pool, fund_rewards, mint, stake_new, START};
use crate::{PoolError, StakingPoolClient};

// ── Test helpers ─────────────────────────────────────────────────────────────

/// Liquidity pool: LP token staked, separate token paid as reward.
fn setup() -> (Env, StakingPoolClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START);

    let lp_token = create_token(&env);
    let reward_token = create_token(&env);
    let owner = Address::generate(&env);
    let client = deploy_pool(
        &env,
        &owner,
        PoolTier::Liquidity,
        &lp_token,
        &reward_token,
        Vec::new(&env),
    );

    (env, client, lp_token, reward_token)
}

// ── Liquidity pool ────────────────────────────────────────────────────────────

#[test]
fn test_liquidity_params() {
    let (_env, client, lp_token, reward_token) = setup();

    assert_eq!(client.get_stake_token(), lp_token);
    assert_eq!(client.get_reward_token(), reward_token);
    assert_eq!(client.get_rate(), 148);
    assert_eq!(client.get_lock_duration(), 30);
}

#[test]
fn test_withdraw_pays_each_asset_separately() {
    let (env, client, lp_token, reward_token) = setup();
    fund_rewards(&env, &client, &reward_token, 1_000);

    let staker = stake_new(&env, &client, &lp_token, 10_000);
    assert_eq!(TokenClient::new(&env, &lp_token).balance(&client.address), 10_000);

    advance(&env, 30);
    assert_eq!(client.withdraw(&staker), 148);

    assert_eq!(TokenClient::new(&env, &lp_token).balance(&staker), 10_000);
    assert_eq!(TokenClient::new(&env, &reward_token).balance(&staker), 148);
    assert_eq!(TokenClient::new(&env, &lp_token).balance(&client.address), 0);
    assert_eq!(
        TokenClient::new(&env, &reward_token).balance(&client.address),
        1_000 - 148
    );
    assert_eq!(client.get_reward_balance(), 1_000 - 148);
}

#[test]
fn test_reward_funding_uses_reward_token() {
    let (env, client, lp_token, _reward_token) = setup();

    // Allowance granted on the LP token does not count toward funding.
    let funder = Address::generate(&env);
    mint(&env, &lp_token, &funder, 1_000);
    approve(&env, &lp_token, &funder, &client.address, 1_000);

    assert_eq!(
        client.try_add_reward(&funder, &1_000),
        Err(Ok(PoolError::InsufficientAllowance))
    );
}

#[test]
fn test_lp_stake_does_not_feed_reward_pool() {
    let (env, client, lp_token, _reward_token) = setup();

    let staker = stake_new(&env, &client, &lp_token, 10_000);
    advance(&env, 30);

    assert_eq!(
        client.try_withdraw(&staker),
        Err(Ok(PoolError::InsufficientRewardPool))
    );
    assert_eq!(client.get_staked_balance(), 10_000);
}
