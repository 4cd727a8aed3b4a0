use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    pubkey::Pubkey,
};

use crate::instruction::PoolInstruction;

pub mod create_pool;

/// Decode the instruction and dispatch to its handler
pub fn process(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    match PoolInstruction::unpack(instruction_data)? {
        PoolInstruction::CreatePool { sqrt_price_x64 } => {
            create_pool::process(program_id, accounts, sqrt_price_x64)
        }
    }
}
