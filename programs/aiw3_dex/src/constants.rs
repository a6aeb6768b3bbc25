/// AIW3 DEX Protocol Constants
///
/// Seed prefixes and validation ceilings shared by every instruction.
/// All limits live here so that no handler carries a hidden magic number.

/// Seed prefix for the global `Config` singleton PDA.
pub const CONFIG_SEED: &[u8] = b"config";

/// Seed prefix for a `TokenInfo` record, keyed by its mint address.
pub const TOKEN_INFO_SEED: &[u8] = b"token_info";

/// Seed prefix for an issued token mint, keyed by creator and symbol.
pub const TOKEN_MINT_SEED: &[u8] = b"token_mint";

/// Seed prefix for a `SwapPool`, keyed by the canonically ordered mint pair.
pub const SWAP_POOL_SEED: &[u8] = b"swap_pool";

/// Seed prefix for a pool-owned token vault, keyed by pool and mint.
pub const TOKEN_VAULT_SEED: &[u8] = b"token_vault";

/// Denominator for basis-point fee arithmetic (10_000 bps = 100%).
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Upper bound for any basis-point fee field.
pub const MAX_FEE_BASIS_POINTS: u16 = 10_000;

/// Maximum byte length of a token name.
pub const MAX_NAME_LEN: usize = 32;

/// Maximum byte length of a token symbol.
pub const MAX_SYMBOL_LEN: usize = 10;

/// Maximum byte length of a token metadata URI.
pub const MAX_URI_LEN: usize = 200;

/// Maximum decimals for an issued token mint.
pub const MAX_DECIMALS: u8 = 9;
