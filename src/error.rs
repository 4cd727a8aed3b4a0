use solana_program::program_error::ProgramError;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error("Invalid instruction data")]
    InvalidInstruction,

    #[error("Both token mints are the same")]
    IdenticalMints,

    #[error("Sqrt price outside the supported range")]
    SqrtPriceOutOfRange,

    #[error("Supplied account does not match the derived address")]
    AddressMismatch,

    #[error("Pool already exists for this mint pair")]
    PoolAlreadyExists,

    #[error("No valid bump seed found")]
    NoValidBumpFound,

    #[error("Math overflow")]
    MathOverflow,
}

impl From<PoolError> for ProgramError {
    fn from(e: PoolError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
