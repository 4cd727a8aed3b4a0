use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    pubkey::Pubkey,
};

pub mod client;
pub mod error;
pub mod instruction;
pub mod math;
pub mod processor;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use error::*;
pub use instruction::*;
pub use math::*;
pub use state::*;

solana_program::declare_id!("Fw4mNHEDrHAGg41XEcp7DkHpEP12MiUcCrP2Lj5ngth9");

#[cfg(not(feature = "no-entrypoint"))]
solana_program::entrypoint!(process_instruction);

/// The entrypoint to the pool program
pub fn process_instruction<'a>(
    program_id: &Pubkey,
    accounts: &'a [AccountInfo<'a>],
    instruction_data: &[u8],
) -> ProgramResult {
    processor::process(program_id, accounts, instruction_data)
}
