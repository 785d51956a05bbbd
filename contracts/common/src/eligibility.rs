use soroban_sdk::{contractclient, Address, Env};

/// Read-only capability exposed by every pool that tracks eligibility.
///
/// A gated pool stores the addresses of its providers and calls
/// [`EligibilityProviderClient::is_eligible`] on each of them during `stake`.
/// Implementations must not mutate state from this call.
#[contractclient(name = "EligibilityProviderClient")]
pub trait EligibilityProvider {
    /// Returns `true` if `participant` currently holds an eligibility flag.
    fn is_eligible(env: Env, participant: Address) -> bool;
}
