use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::program_error::ProgramError;

use crate::error::PoolError;

/// All supported instructions for the pool program.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub enum PoolInstruction {
    /// Create a new pool for a pair of token mints.
    ///
    /// Accounts:
    /// 0. `[signer]` Creator and fee payer
    /// 1. `[writable]` Pool state account (PDA)
    /// 2. `[]` Token mint 0 (canonical order)
    /// 3. `[]` Token mint 1
    /// 4. `[writable]` Pool vault for token 0 (PDA)
    /// 5. `[writable]` Pool vault for token 1 (PDA)
    /// 6. `[]` SPL Token program
    /// 7. `[]` System program
    /// 8. `[]` Rent sysvar
    CreatePool {
        /// Initial sqrt price of token 1 in units of token 0, Q64.64
        sqrt_price_x64: u128,
    },
}

impl PoolInstruction {
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        Self::try_from_slice(input).map_err(|_| PoolError::InvalidInstruction.into())
    }

    pub fn pack(&self) -> Result<Vec<u8>, ProgramError> {
        borsh::to_vec(self).map_err(|_| PoolError::InvalidInstruction.into())
    }
}
