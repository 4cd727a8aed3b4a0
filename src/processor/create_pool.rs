use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
    rent::Rent,
    sysvar::Sysvar,
};

use crate::error::PoolError;
use crate::math::sqrt_price::validate_sqrt_price_x64;
use crate::state::PoolState;
use crate::utils::{
    assert_signer, assert_writable, create_pda_account, get_current_timestamp,
    is_uninitialized, pool_seeds, pool_vault_seeds, resolve_pool_addresses, spl_token,
    system_program, token_initialize_account, write_account_data, TOKEN_ACCOUNT_LEN,
};

/// Create a new concentrated liquidity pool
///
/// Accounts expected:
/// 0. `[signer]` Creator and fee payer
/// 1. `[writable]` Pool state account (PDA)
/// 2. `[]` Token mint 0
/// 3. `[]` Token mint 1
/// 4. `[writable]` Pool vault for token 0 (PDA)
/// 5. `[writable]` Pool vault for token 1 (PDA)
/// 6. `[]` SPL Token program
/// 7. `[]` System program
/// 8. `[]` Rent sysvar
pub fn process(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    sqrt_price_x64: u128,
) -> ProgramResult {
    msg!("Creating CLMM pool...");

    let account_info_iter = &mut accounts.iter();

    let creator = next_account_info(account_info_iter)?;
    let pool_account = next_account_info(account_info_iter)?;
    let mint_a = next_account_info(account_info_iter)?;
    let mint_b = next_account_info(account_info_iter)?;
    let vault_0 = next_account_info(account_info_iter)?;
    let vault_1 = next_account_info(account_info_iter)?;
    let token_program = next_account_info(account_info_iter)?;
    let system_program_info = next_account_info(account_info_iter)?;
    let rent_sysvar = next_account_info(account_info_iter)?;

    assert_signer(creator)?;
    assert_writable(pool_account)?;
    assert_writable(vault_0)?;
    assert_writable(vault_1)?;

    if token_program.key != &spl_token::id() {
        msg!("Invalid token program");
        return Err(ProgramError::IncorrectProgramId);
    }

    if system_program_info.key != &system_program::id() {
        msg!("Invalid system program");
        return Err(ProgramError::IncorrectProgramId);
    }

    // Identical mints fail inside the resolver, before any derivation work
    let addresses = resolve_pool_addresses(program_id, mint_a.key, mint_b.key)?;

    if validate_sqrt_price_x64(sqrt_price_x64).is_err() {
        msg!("Initial sqrt price out of range: {}", sqrt_price_x64);
        return Err(PoolError::SqrtPriceOutOfRange.into());
    }

    // The supplied accounts must be exactly the derived ones; a substituted
    // pool or vault slot is rejected, never corrected.
    if pool_account.key != &addresses.pool
        || vault_0.key != &addresses.token_vault_0
        || vault_1.key != &addresses.token_vault_1
    {
        msg!("Supplied pool or vault does not match the derived address");
        return Err(PoolError::AddressMismatch.into());
    }

    // The pool address is the uniqueness lock: of two racing creators for the
    // same mint pair, the second one fails here.
    {
        let data = pool_account.try_borrow_data()?;
        if !is_uninitialized(&data) {
            msg!("Pool already exists: {}", pool_account.key);
            return Err(PoolError::PoolAlreadyExists.into());
        }
    }

    // Mint infos in canonical order, whichever order the caller passed them
    let (mint_0_info, mint_1_info) = if mint_a.key == &addresses.token_mint_0 {
        (mint_a, mint_b)
    } else {
        (mint_b, mint_a)
    };

    let rent = Rent::get()?;

    let pool_bump = [addresses.pool_bump];
    create_pda_account(
        creator,
        pool_account,
        system_program_info,
        program_id,
        &rent,
        PoolState::LEN,
        &pool_seeds(&addresses.token_mint_0, &addresses.token_mint_1, &pool_bump),
    )?;

    let vault_0_bump = [addresses.vault_0_bump];
    create_pda_account(
        creator,
        vault_0,
        system_program_info,
        &spl_token::id(),
        &rent,
        TOKEN_ACCOUNT_LEN,
        &pool_vault_seeds(&addresses.pool, &addresses.token_mint_0, &vault_0_bump),
    )?;
    token_initialize_account(token_program, vault_0, mint_0_info, pool_account, rent_sysvar)?;

    let vault_1_bump = [addresses.vault_1_bump];
    create_pda_account(
        creator,
        vault_1,
        system_program_info,
        &spl_token::id(),
        &rent,
        TOKEN_ACCOUNT_LEN,
        &pool_vault_seeds(&addresses.pool, &addresses.token_mint_1, &vault_1_bump),
    )?;
    token_initialize_account(token_program, vault_1, mint_1_info, pool_account, rent_sysvar)?;

    let open_time = get_current_timestamp()? as u64;

    let pool_state = PoolState::new(
        *creator.key,
        addresses.token_mint_0,
        addresses.token_mint_1,
        addresses.token_vault_0,
        addresses.token_vault_1,
        sqrt_price_x64,
        open_time,
        addresses.pool_bump,
        addresses.vault_0_bump,
        addresses.vault_1_bump,
    );

    write_account_data(pool_account, &pool_state)?;

    msg!("Pool created: {}", pool_account.key);
    msg!("  Token mint 0: {}", addresses.token_mint_0);
    msg!("  Token mint 1: {}", addresses.token_mint_1);
    msg!("  Vault 0: {}", addresses.token_vault_0);
    msg!("  Vault 1: {}", addresses.token_vault_1);
    msg!("  Initial sqrt price: {}", sqrt_price_x64);

    Ok(())
}
