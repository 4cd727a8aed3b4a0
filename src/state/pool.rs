use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;

/// State of one concentrated liquidity pool, created exactly once per
/// canonical mint pair. Every field is written at creation and immutable
/// afterwards; trading state lives elsewhere.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct PoolState {
    /// Account that paid for and created the pool
    pub creator: Pubkey,
    /// Canonical mint 0, always byte-lexicographically smaller than mint 1
    pub token_mint_0: Pubkey,
    /// Canonical mint 1
    pub token_mint_1: Pubkey,
    /// Vault holding token 0 reserves, authority is the pool account
    pub token_vault_0: Pubkey,
    /// Vault holding token 1 reserves, authority is the pool account
    pub token_vault_1: Pubkey,
    /// Initial sqrt price, Q64.64
    pub sqrt_price_x64: u128,
    /// Unix timestamp at pool creation
    pub open_time: u64,
    /// Pool PDA bump
    pub bump: u8,
    /// Vault 0 PDA bump
    pub bump_vault_0: u8,
    /// Vault 1 PDA bump
    pub bump_vault_1: u8,
}

impl PoolState {
    /// Exact borsh-serialized size: five pubkeys, the price, the timestamp,
    /// three bumps.
    pub const LEN: usize = 5 * 32 + 16 + 8 + 3;

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        creator: Pubkey,
        token_mint_0: Pubkey,
        token_mint_1: Pubkey,
        token_vault_0: Pubkey,
        token_vault_1: Pubkey,
        sqrt_price_x64: u128,
        open_time: u64,
        bump: u8,
        bump_vault_0: u8,
        bump_vault_1: u8,
    ) -> Self {
        PoolState {
            creator,
            token_mint_0,
            token_mint_1,
            token_vault_0,
            token_vault_1,
            sqrt_price_x64,
            open_time,
            bump,
            bump_vault_0,
            bump_vault_1,
        }
    }
}
