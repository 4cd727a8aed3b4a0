use solana_program::{program_error::ProgramError, pubkey::Pubkey};

use crate::error::PoolError;

/// Pool state PDA seed namespace
pub const POOL_SEED: &[u8] = b"pool_seed";

/// Pool vault PDA seed namespace
pub const POOL_VAULT_SEED: &[u8] = b"pool_vault";

/// The pool account plus everything derived from it. All addresses are
/// recomputable off-chain from the program id and the two mints alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolAddresses {
    /// Canonical mint 0 (byte-lexicographically smaller)
    pub token_mint_0: Pubkey,
    /// Canonical mint 1 (byte-lexicographically larger)
    pub token_mint_1: Pubkey,
    pub pool: Pubkey,
    pub pool_bump: u8,
    pub token_vault_0: Pubkey,
    pub vault_0_bump: u8,
    pub token_vault_1: Pubkey,
    pub vault_1_bump: u8,
}

/// Find the program address for a seed set, surfacing bump exhaustion as an
/// error instead of panicking.
pub fn derive_address(
    seeds: &[&[u8]],
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), ProgramError> {
    Pubkey::try_find_program_address(seeds, program_id)
        .ok_or_else(|| PoolError::NoValidBumpFound.into())
}

/// Order two mints into the canonical (mint 0, mint 1) pair.
///
/// A pool over a single mint is meaningless; equal mints are rejected before
/// any derivation work happens.
pub fn sort_mints(
    mint_a: &Pubkey,
    mint_b: &Pubkey,
) -> Result<(Pubkey, Pubkey), ProgramError> {
    if mint_a == mint_b {
        return Err(PoolError::IdenticalMints.into());
    }
    if mint_a < mint_b {
        Ok((*mint_a, *mint_b))
    } else {
        Ok((*mint_b, *mint_a))
    }
}

/// Derive the pool state PDA. The mints must already be in canonical order;
/// this is what makes the pool address for (A, B) and (B, A) identical.
pub fn derive_pool_address(
    program_id: &Pubkey,
    token_mint_0: &Pubkey,
    token_mint_1: &Pubkey,
) -> Result<(Pubkey, u8), ProgramError> {
    derive_address(
        &[POOL_SEED, token_mint_0.as_ref(), token_mint_1.as_ref()],
        program_id,
    )
}

/// Derive a pool vault PDA. Vaults are derived from the pool address, not the
/// raw mint pair, so a vault is bound to one already-identified pool.
pub fn derive_pool_vault_address(
    program_id: &Pubkey,
    pool: &Pubkey,
    token_mint: &Pubkey,
) -> Result<(Pubkey, u8), ProgramError> {
    derive_address(
        &[POOL_VAULT_SEED, pool.as_ref(), token_mint.as_ref()],
        program_id,
    )
}

/// Resolve the full identity of the pool for an unordered mint pair:
/// canonical mint order, pool address, and both vault addresses.
pub fn resolve_pool_addresses(
    program_id: &Pubkey,
    mint_a: &Pubkey,
    mint_b: &Pubkey,
) -> Result<PoolAddresses, ProgramError> {
    let (token_mint_0, token_mint_1) = sort_mints(mint_a, mint_b)?;

    let (pool, pool_bump) = derive_pool_address(program_id, &token_mint_0, &token_mint_1)?;
    let (token_vault_0, vault_0_bump) =
        derive_pool_vault_address(program_id, &pool, &token_mint_0)?;
    let (token_vault_1, vault_1_bump) =
        derive_pool_vault_address(program_id, &pool, &token_mint_1)?;

    Ok(PoolAddresses {
        token_mint_0,
        token_mint_1,
        pool,
        pool_bump,
        token_vault_0,
        vault_0_bump,
        token_vault_1,
        vault_1_bump,
    })
}

/// Signer seeds for the pool state PDA
pub fn pool_seeds<'a>(
    token_mint_0: &'a Pubkey,
    token_mint_1: &'a Pubkey,
    bump: &'a [u8],
) -> [&'a [u8]; 4] {
    [
        POOL_SEED,
        token_mint_0.as_ref(),
        token_mint_1.as_ref(),
        bump,
    ]
}

/// Signer seeds for a pool vault PDA
pub fn pool_vault_seeds<'a>(
    pool: &'a Pubkey,
    token_mint: &'a Pubkey,
    bump: &'a [u8],
) -> [&'a [u8]; 4] {
    [
        POOL_VAULT_SEED,
        pool.as_ref(),
        token_mint.as_ref(),
        bump,
    ]
}
