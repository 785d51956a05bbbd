use soroban_sdk::contracttype;

/// Rates are expressed in basis points: `10_000` is 100%.
pub const BASIS_POINTS: u32 = 10_000;

/// Preset pool configurations.
///
/// | Tier           | Rate (bps) | Lock (s) | Reward asset | Gated |
/// |----------------|-----------:|---------:|--------------|-------|
/// | `Rookie`       |         58 |       30 | stake token  | no    |
/// | `Professional` |        150 |       90 | stake token  | no    |
/// | `Legendary`    |        271 |      180 | stake token  | yes   |
/// | `Liquidity`    |        148 |       30 | separate     | no    |
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum PoolTier {
    Rookie = 1,
    Professional = 2,
    Legendary = 3,
    Liquidity = 4,
}

impl PoolTier {
    /// Initial rate written at rate-log index 0.
    pub fn rate_bps(&self) -> u32 {
        match self {
            PoolTier::Rookie => 58,
            PoolTier::Professional => 150,
            PoolTier::Legendary => 271,
            PoolTier::Liquidity => 148,
        }
    }

    /// Initial lock duration in seconds.
    pub fn lock_duration(&self) -> u64 {
        match self {
            PoolTier::Rookie | PoolTier::Liquidity => 30,
            PoolTier::Professional => 90,
            PoolTier::Legendary => 180,
        }
    }

    /// Whether staking requires eligibility earned in another pool.
    pub fn is_gated(&self) -> bool {
        matches!(self, PoolTier::Legendary)
    }

    /// Whether rewards are paid in a token other than the staked one.
    pub fn is_dual_asset(&self) -> bool {
        matches!(self, PoolTier::Liquidity)
    }
}
