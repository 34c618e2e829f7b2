//! Program-wide constants.

/// Largest lockup period an owner may choose.
pub const MAX_PERIOD: u64 = 5;

/// Lamports the owner must send alongside `participate`, so repeated key
/// registrations cannot drain the escrow through fees.
pub const PARTICIPATION_FEE: u64 = 1_000;

/// Seed of the lamport vault PDA, followed by the escrow state key.
pub const VAULT_SEED: &[u8] = b"vault";

/// Average month (30.42 days), the usual schedule unit on mainnet deployments.
pub const SECONDS_PER_MONTH: u64 = 2_628_000;
