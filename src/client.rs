//! Off-chain client for the pool program.
//!
//! Derives the pool and vault addresses and assembles the `CreatePool`
//! instruction. Signing and submission belong to the caller's wallet and RPC
//! stack. After an ambiguous submission outcome, re-fetch the pool account
//! before resubmitting: `PoolAlreadyExists` means someone (possibly a prior
//! attempt) already created it, and the existing state is the answer.

use solana_program::{
    instruction::{AccountMeta, Instruction},
    program_error::ProgramError,
    pubkey::Pubkey,
};

use crate::instruction::PoolInstruction;
use crate::math::sqrt_price::validate_sqrt_price_x64;
use crate::utils::{resolve_pool_addresses, spl_token, system_program, PoolAddresses};

/// Rent sysvar id
pub mod rent_sysvar {
    solana_program::declare_id!("SysvarRent111111111111111111111111111111111");
}

/// Client-side builder for pool program instructions
#[derive(Debug, Clone)]
pub struct PoolClient {
    pub program_id: Pubkey,
}

impl PoolClient {
    pub fn new(program_id: Pubkey) -> Self {
        PoolClient { program_id }
    }

    /// Derive every pool-related address for a mint pair.
    ///
    /// This runs the same resolver the program runs on-chain, so client and
    /// program agree on every address without an on-chain lookup.
    pub fn derive_pool_addresses(
        &self,
        mint_a: &Pubkey,
        mint_b: &Pubkey,
    ) -> Result<PoolAddresses, ProgramError> {
        resolve_pool_addresses(&self.program_id, mint_a, mint_b)
    }

    /// Build a `CreatePool` instruction for an unordered mint pair.
    ///
    /// The price is validated client-side with the same bounds the program
    /// enforces, so a hopeless transaction is rejected before submission.
    pub fn create_pool_instruction(
        &self,
        creator: &Pubkey,
        mint_a: &Pubkey,
        mint_b: &Pubkey,
        sqrt_price_x64: u128,
    ) -> Result<Instruction, ProgramError> {
        validate_sqrt_price_x64(sqrt_price_x64)?;
        let addresses = self.derive_pool_addresses(mint_a, mint_b)?;
        let data = PoolInstruction::CreatePool { sqrt_price_x64 }.pack()?;

        Ok(Instruction {
            program_id: self.program_id,
            accounts: vec![
                AccountMeta::new(*creator, true),
                AccountMeta::new(addresses.pool, false),
                AccountMeta::new_readonly(addresses.token_mint_0, false),
                AccountMeta::new_readonly(addresses.token_mint_1, false),
                AccountMeta::new(addresses.token_vault_0, false),
                AccountMeta::new(addresses.token_vault_1, false),
                AccountMeta::new_readonly(spl_token::id(), false),
                AccountMeta::new_readonly(system_program::id(), false),
                AccountMeta::new_readonly(rent_sysvar::id(), false),
            ],
            data,
        })
    }
}
