//! Shared building blocks for the staking pool contracts.
//!
//! This crate provides:
//! - [`EligibilityProvider`]: the read-only interface a gated pool uses to
//!   ask another pool whether a participant has earned access.
//! - Single-owner capability helpers ([`ownership`]).
//! - Pool tier presets and basis-point constants ([`tier`]).

#![cfg_attr(not(feature = "std"), no_std)]

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod eligibility;
pub mod ownership;
pub mod tier;

pub use eligibility::*;
pub use tier::*;
