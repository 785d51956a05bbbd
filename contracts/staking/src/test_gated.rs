extern crate std;

use soroban_sdk::{
    contract, contractimpl,
    testutils::{Address as _, Ledger as _},
    vec, Address, Env, String, Vec,
};
use staking_common::PoolTier;

use crate::test::{advance, approve, create_token, deploy_pool, fund_rewards, mint, stake_new, START};
use crate::{PoolError, PoolParams, StakingPool, StakingPoolClient};

// ── Mock provider ────────────────────────────────────────────────────────────

/// Provider whose answers are set directly by the test.
#[contract]
pub struct MockProvider;

#[contractimpl]
impl MockProvider {
    pub fn set(env: Env, participant: Address, eligible: bool) {
        env.storage().persistent().set(&participant, &eligible);
    }

    pub fn is_eligible(env: Env, participant: Address) -> bool {
        env.storage()
            .persistent()
            .get(&participant)
            .unwrap_or(false)
    }
}

// ── Test helpers ─────────────────────────────────────────────────────────────

struct Family {
    env: Env,
    token: Address,
    rookie: StakingPoolClient<'static>,
    professional: StakingPoolClient<'static>,
    legendary: StakingPoolClient<'static>,
}

/// Deploys Rookie and Professional pools sharing one token and a Legendary
/// pool gated on either of them.
fn setup_family() -> Family {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START);

    let token = create_token(&env);
    let owner = Address::generate(&env);

    let rookie = deploy_pool(&env, &owner, PoolTier::Rookie, &token, &token, Vec::new(&env));
    let professional = deploy_pool(
        &env,
        &owner,
        PoolTier::Professional,
        &token,
        &token,
        Vec::new(&env),
    );
    let legendary = deploy_pool(
        &env,
        &owner,
        PoolTier::Legendary,
        &token,
        &token,
        vec![&env, rookie.address.clone(), professional.address.clone()],
    );

    rookie.set_eligibility_amount(&owner, &1_000);
    professional.set_eligibility_amount(&owner, &5_000);

    Family {
        env,
        token,
        rookie,
        professional,
        legendary,
    }
}

fn try_stake_fresh(f: &Family, who: &Address, amount: i128) -> bool {
    mint(&f.env, &f.token, who, amount);
    approve(&f.env, &f.token, who, &f.legendary.address, amount);
    f.legendary.try_stake(who, &amount).is_ok()
}

// ── Gate ──────────────────────────────────────────────────────────────────────

#[test]
fn test_legendary_params() {
    let f = setup_family();

    assert_eq!(f.legendary.get_rate(), 271);
    assert_eq!(f.legendary.get_lock_duration(), 180);
    assert_eq!(f.legendary.get_eligibility_providers().len(), 2);
    assert!(f.rookie.get_eligibility_providers().is_empty());
}

#[test]
fn test_gated_stake_without_eligibility_fails() {
    let f = setup_family();

    let user = Address::generate(&f.env);
    mint(&f.env, &f.token, &user, 10_000);
    approve(&f.env, &f.token, &user, &f.legendary.address, 10_000);

    match f.legendary.try_stake(&user, &10_000) {
        Err(Ok(e)) => assert_eq!(e, PoolError::NotEligible),
        _ => unreachable!("Expected NotEligible error"),
    }
    assert_eq!(f.legendary.get_staked_total(), 0);
}

#[test]
fn test_rookie_flag_admits() {
    let f = setup_family();

    let user = stake_new(&f.env, &f.rookie, &f.token, 1_000);
    assert!(f.rookie.is_eligible(&user));

    assert!(try_stake_fresh(&f, &user, 10_000));
    assert_eq!(f.legendary.get_deposit(&user).unwrap().amount, 10_000);
}

#[test]
fn test_professional_flag_admits() {
    let f = setup_family();

    let user = stake_new(&f.env, &f.professional, &f.token, 5_000);
    assert!(!f.rookie.is_eligible(&user));

    assert!(try_stake_fresh(&f, &user, 10_000));
}

#[test]
fn test_stake_below_provider_threshold_does_not_admit() {
    let f = setup_family();

    let user = stake_new(&f.env, &f.rookie, &f.token, 999);
    assert!(!try_stake_fresh(&f, &user, 10_000));
}

#[test]
fn test_losing_flag_keeps_gated_deposit() {
    let f = setup_family();
    fund_rewards(&f.env, &f.rookie, &f.token, 10_000);
    fund_rewards(&f.env, &f.legendary, &f.token, 10_000);

    let user = stake_new(&f.env, &f.rookie, &f.token, 1_000);
    assert!(try_stake_fresh(&f, &user, 10_000));

    advance(&f.env, 30);
    f.rookie.withdraw(&user);
    assert!(!f.rookie.is_eligible(&user));

    // The open Legendary deposit is unaffected and pays out normally.
    advance(&f.env, 150);
    assert_eq!(f.legendary.withdraw(&user), 271);

    // A new Legendary stake is refused without a fresh flag.
    approve(&f.env, &f.token, &user, &f.legendary.address, 1_000);
    assert_eq!(f.legendary.try_stake(&user, &1_000), Err(Ok(PoolError::NotEligible)));
}

#[test]
fn test_gate_checks_allowance_first() {
    let f = setup_family();

    let user = Address::generate(&f.env);
    mint(&f.env, &f.token, &user, 10_000);

    assert_eq!(
        f.legendary.try_stake(&user, &10_000),
        Err(Ok(PoolError::InsufficientAllowance))
    );
}

#[test]
fn test_any_provider_suffices() {
    let env = Env::default();
    env.mock_all_auths();

    let token = create_token(&env);
    let owner = Address::generate(&env);
    let first = MockProviderClient::new(&env, &env.register(MockProvider, ()));
    let second = MockProviderClient::new(&env, &env.register(MockProvider, ()));
    let gated = deploy_pool(
        &env,
        &owner,
        PoolTier::Legendary,
        &token,
        &token,
        vec![&env, first.address.clone(), second.address.clone()],
    );

    let user = Address::generate(&env);
    mint(&env, &token, &user, 100);
    approve(&env, &token, &user, &gated.address, 100);

    assert_eq!(gated.try_stake(&user, &100), Err(Ok(PoolError::NotEligible)));

    second.set(&user, &true);
    gated.stake(&user, &100);
    assert_eq!(gated.get_staked_balance(), 100);
}

#[test]
fn test_failing_provider_does_not_block_later_ones() {
    let env = Env::default();
    env.mock_all_auths();

    let token = create_token(&env);
    let owner = Address::generate(&env);
    // Not a contract: every call to it fails.
    let broken = Address::generate(&env);
    let working = MockProviderClient::new(&env, &env.register(MockProvider, ()));
    let gated = deploy_pool(
        &env,
        &owner,
        PoolTier::Legendary,
        &token,
        &token,
        vec![&env, broken, working.address.clone()],
    );

    let user = Address::generate(&env);
    mint(&env, &token, &user, 200);
    approve(&env, &token, &user, &gated.address, 200);

    // Nobody vouches yet: a clean NotEligible, not an aborted call.
    assert_eq!(gated.try_stake(&user, &100), Err(Ok(PoolError::NotEligible)));

    working.set(&user, &true);
    gated.stake(&user, &100);
    assert_eq!(gated.get_deposit(&user).unwrap().amount, 100);
}

#[test]
fn test_self_as_provider_rejected() {
    let env = Env::default();
    env.mock_all_auths();

    let token = create_token(&env);
    let contract_id = env.register(StakingPool, ());
    let client = StakingPoolClient::new(&env, &contract_id);
    let params = PoolParams::from_tier(
        &env,
        PoolTier::Legendary,
        String::from_str(&env, "legendary"),
        token.clone(),
        token,
        vec![&env, contract_id.clone()],
    );

    assert_eq!(
        client.try_initialize(&Address::generate(&env), &params),
        Err(Ok(PoolError::InvalidConfig))
    );
}

#[test]
fn test_ungated_tier_drops_providers() {
    let env = Env::default();

    let token = create_token(&env);
    let provider = Address::generate(&env);
    let params = PoolParams::from_tier(
        &env,
        PoolTier::Professional,
        String::from_str(&env, "professional"),
        token.clone(),
        Address::generate(&env),
        vec![&env, provider],
    );

    assert!(params.eligibility_providers.is_empty());
    assert_eq!(params.reward_token, token);
}
