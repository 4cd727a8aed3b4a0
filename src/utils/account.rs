use borsh::BorshSerialize;
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    instruction::{AccountMeta, Instruction},
    msg,
    program::invoke_signed,
    program_error::ProgramError,
    pubkey::Pubkey,
    rent::Rent,
    sysvar::Sysvar,
};

/// System program id
pub mod system_program {
    solana_program::declare_id!("11111111111111111111111111111111");
}

// System instruction discriminators
const SYSTEM_IX_CREATE_ACCOUNT: u32 = 0;
const SYSTEM_IX_ASSIGN: u32 = 1;
const SYSTEM_IX_TRANSFER: u32 = 2;
const SYSTEM_IX_ALLOCATE: u32 = 8;

fn create_account_ix(
    payer: &Pubkey,
    new_account: &Pubkey,
    lamports: u64,
    space: u64,
    owner: &Pubkey,
) -> Instruction {
    let mut data = Vec::with_capacity(4 + 8 + 8 + 32);
    data.extend_from_slice(&SYSTEM_IX_CREATE_ACCOUNT.to_le_bytes());
    data.extend_from_slice(&lamports.to_le_bytes());
    data.extend_from_slice(&space.to_le_bytes());
    data.extend_from_slice(owner.as_ref());

    Instruction {
        program_id: system_program::id(),
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(*new_account, true),
        ],
        data,
    }
}

fn transfer_ix(from: &Pubkey, to: &Pubkey, lamports: u64) -> Instruction {
    let mut data = Vec::with_capacity(4 + 8);
    data.extend_from_slice(&SYSTEM_IX_TRANSFER.to_le_bytes());
    data.extend_from_slice(&lamports.to_le_bytes());

    Instruction {
        program_id: system_program::id(),
        accounts: vec![
            AccountMeta::new(*from, true),
            AccountMeta::new(*to, false),
        ],
        data,
    }
}

fn allocate_ix(account: &Pubkey, space: u64) -> Instruction {
    let mut data = Vec::with_capacity(4 + 8);
    data.extend_from_slice(&SYSTEM_IX_ALLOCATE.to_le_bytes());
    data.extend_from_slice(&space.to_le_bytes());

    Instruction {
        program_id: system_program::id(),
        accounts: vec![AccountMeta::new(*account, true)],
        data,
    }
}

fn assign_ix(account: &Pubkey, owner: &Pubkey) -> Instruction {
    let mut data = Vec::with_capacity(4 + 32);
    data.extend_from_slice(&SYSTEM_IX_ASSIGN.to_le_bytes());
    data.extend_from_slice(owner.as_ref());

    Instruction {
        program_id: system_program::id(),
        accounts: vec![AccountMeta::new(*account, true)],
        data,
    }
}

/// Create a PDA account owned by `owner`, signing with the PDA's seeds.
///
/// Falls back to transfer + allocate + assign when the target address already
/// holds lamports, since create_account would fail there.
pub fn create_pda_account<'a>(
    payer: &AccountInfo<'a>,
    new_account: &AccountInfo<'a>,
    system_program_info: &AccountInfo<'a>,
    owner: &Pubkey,
    rent: &Rent,
    space: usize,
    signer_seeds: &[&[u8]],
) -> ProgramResult {
    let required_lamports = rent.minimum_balance(space);

    if new_account.lamports() > 0 {
        let lamports_shortfall = required_lamports.saturating_sub(new_account.lamports());

        if lamports_shortfall > 0 {
            invoke_signed(
                &transfer_ix(payer.key, new_account.key, lamports_shortfall),
                &[payer.clone(), new_account.clone(), system_program_info.clone()],
                &[signer_seeds],
            )?;
        }

        invoke_signed(
            &allocate_ix(new_account.key, space as u64),
            &[new_account.clone(), system_program_info.clone()],
            &[signer_seeds],
        )?;

        invoke_signed(
            &assign_ix(new_account.key, owner),
            &[new_account.clone(), system_program_info.clone()],
            &[signer_seeds],
        )?;
    } else {
        invoke_signed(
            &create_account_ix(
                payer.key,
                new_account.key,
                required_lamports,
                space as u64,
                owner,
            ),
            &[payer.clone(), new_account.clone(), system_program_info.clone()],
            &[signer_seeds],
        )?;
    }

    Ok(())
}

/// Assert that an account is a signer
pub fn assert_signer(account: &AccountInfo) -> ProgramResult {
    if !account.is_signer {
        msg!("Account is not a signer: {}", account.key);
        return Err(ProgramError::MissingRequiredSignature);
    }
    Ok(())
}

/// Assert that an account is writable
pub fn assert_writable(account: &AccountInfo) -> ProgramResult {
    if !account.is_writable {
        msg!("Account is not writable: {}", account.key);
        return Err(ProgramError::InvalidAccountData);
    }
    Ok(())
}

/// True when account data is absent or still zeroed. This single check is the
/// creation-time uniqueness gate: the account address is the lock.
pub fn is_uninitialized(data: &[u8]) -> bool {
    data.iter().all(|&byte| byte == 0)
}

/// Get the current unix timestamp from the Clock sysvar
pub fn get_current_timestamp() -> Result<i64, ProgramError> {
    let clock = solana_program::clock::Clock::get()?;
    Ok(clock.unix_timestamp)
}

/// Serialize and write data to an account
pub fn write_account_data<T: BorshSerialize>(
    account: &AccountInfo,
    data: &T,
) -> ProgramResult {
    let mut account_data = account.try_borrow_mut_data()?;
    data.serialize(&mut account_data.as_mut())?;
    Ok(())
}
