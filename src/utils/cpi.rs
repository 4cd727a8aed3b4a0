use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    instruction::{AccountMeta, Instruction},
    program::invoke,
};

/// SPL Token program id
pub mod spl_token {
    solana_program::declare_id!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
}

/// Size of an SPL token account
pub const TOKEN_ACCOUNT_LEN: usize = 165;

// SPL Token instruction discriminator
const TOKEN_IX_INITIALIZE_ACCOUNT: u8 = 1;

/// Initialize a token account holding `mint`, with `owner` as its authority.
///
/// Vaults are initialized with the pool state account as owner, so only the
/// pool program can move their funds.
pub fn token_initialize_account<'a>(
    token_program: &AccountInfo<'a>,
    account: &AccountInfo<'a>,
    mint: &AccountInfo<'a>,
    owner: &AccountInfo<'a>,
    rent: &AccountInfo<'a>,
) -> ProgramResult {
    let ix = Instruction {
        program_id: spl_token::id(),
        accounts: vec![
            AccountMeta::new(*account.key, false),
            AccountMeta::new_readonly(*mint.key, false),
            AccountMeta::new_readonly(*owner.key, false),
            AccountMeta::new_readonly(*rent.key, false),
        ],
        data: vec![TOKEN_IX_INITIALIZE_ACCOUNT],
    };

    invoke(
        &ix,
        &[
            account.clone(),
            mint.clone(),
            owner.clone(),
            rent.clone(),
            token_program.clone(),
        ],
    )
}
