use clmm_pool::client::rent_sysvar;
use clmm_pool::error::PoolError;
use clmm_pool::processor::create_pool;
use clmm_pool::state::PoolState;
use clmm_pool::utils::account::system_program;
use clmm_pool::utils::cpi::spl_token;
use clmm_pool::utils::pda::resolve_pool_addresses;
use solana_program::account_info::AccountInfo;
use solana_program::program_error::ProgramError;
use solana_program::pubkey::Pubkey;

// The handler's validation gates run before any CPI, so every rejection path
// is testable against plain in-memory accounts.

struct TestAccount {
    key: Pubkey,
    signer: bool,
    writable: bool,
    lamports: u64,
    data: Vec<u8>,
    owner: Pubkey,
}

impl TestAccount {
    fn new(key: Pubkey, signer: bool, writable: bool) -> Self {
        TestAccount {
            key,
            signer,
            writable,
            lamports: 0,
            data: Vec::new(),
            owner: system_program::id(),
        }
    }
}

fn account_infos(accounts: &mut [TestAccount]) -> Vec<AccountInfo<'_>> {
    accounts
        .iter_mut()
        .map(|account| {
            AccountInfo::new(
                &account.key,
                account.signer,
                account.writable,
                &mut account.lamports,
                &mut account.data,
                &account.owner,
                false,
            )
        })
        .collect()
}

/// Accounts for a create_pool call in handler order, with correctly derived
/// pool and vault addresses.
fn pool_accounts(program_id: &Pubkey, mint_a: Pubkey, mint_b: Pubkey) -> Vec<TestAccount> {
    let addresses = resolve_pool_addresses(program_id, &mint_a, &mint_b).unwrap();

    vec![
        TestAccount::new(Pubkey::new_unique(), true, true), // creator
        TestAccount::new(addresses.pool, false, true),
        TestAccount::new(mint_a, false, false),
        TestAccount::new(mint_b, false, false),
        TestAccount::new(addresses.token_vault_0, false, true),
        TestAccount::new(addresses.token_vault_1, false, true),
        TestAccount::new(spl_token::id(), false, false),
        TestAccount::new(system_program::id(), false, false),
        TestAccount::new(rent_sysvar::id(), false, false),
    ]
}

const VALID_PRICE: u128 = 1u128 << 64;

#[test]
fn test_identical_mints_rejected() {
    let program_id = Pubkey::new_unique();
    let mint = Pubkey::new_unique();

    let mut accounts = vec![
        TestAccount::new(Pubkey::new_unique(), true, true),
        TestAccount::new(Pubkey::new_unique(), false, true),
        TestAccount::new(mint, false, false),
        TestAccount::new(mint, false, false),
        TestAccount::new(Pubkey::new_unique(), false, true),
        TestAccount::new(Pubkey::new_unique(), false, true),
        TestAccount::new(spl_token::id(), false, false),
        TestAccount::new(system_program::id(), false, false),
        TestAccount::new(rent_sysvar::id(), false, false),
    ];
    let infos = account_infos(&mut accounts);

    let err = create_pool::process(&program_id, &infos, VALID_PRICE).unwrap_err();
    assert_eq!(err, ProgramError::from(PoolError::IdenticalMints));
}

#[test]
fn test_out_of_range_price_rejected() {
    let program_id = Pubkey::new_unique();
    let mut accounts = pool_accounts(&program_id, Pubkey::new_unique(), Pubkey::new_unique());
    let infos = account_infos(&mut accounts);

    let err = create_pool::process(&program_id, &infos, 0).unwrap_err();
    assert_eq!(err, ProgramError::from(PoolError::SqrtPriceOutOfRange));

    let err = create_pool::process(
        &program_id,
        &infos,
        clmm_pool::math::sqrt_price::MAX_SQRT_PRICE_X64 + 1,
    )
    .unwrap_err();
    assert_eq!(err, ProgramError::from(PoolError::SqrtPriceOutOfRange));
}

#[test]
fn test_tampered_pool_address_fails_before_existence_check() {
    let program_id = Pubkey::new_unique();
    let mut accounts = pool_accounts(&program_id, Pubkey::new_unique(), Pubkey::new_unique());

    // Substitute a foreign pool account and make it look already-initialized:
    // the address check must fire, not the existence check
    accounts[1].key = Pubkey::new_unique();
    accounts[1].data = vec![1u8; PoolState::LEN];

    let infos = account_infos(&mut accounts);
    let err = create_pool::process(&program_id, &infos, VALID_PRICE).unwrap_err();
    assert_eq!(err, ProgramError::from(PoolError::AddressMismatch));
}

#[test]
fn test_swapped_vault_accounts_rejected() {
    let program_id = Pubkey::new_unique();
    let mut accounts = pool_accounts(&program_id, Pubkey::new_unique(), Pubkey::new_unique());

    let vault_0_key = accounts[4].key;
    accounts[4].key = accounts[5].key;
    accounts[5].key = vault_0_key;

    let infos = account_infos(&mut accounts);
    let err = create_pool::process(&program_id, &infos, VALID_PRICE).unwrap_err();
    assert_eq!(err, ProgramError::from(PoolError::AddressMismatch));
}

#[test]
fn test_duplicate_creation_rejected() {
    let program_id = Pubkey::new_unique();
    let mut accounts = pool_accounts(&program_id, Pubkey::new_unique(), Pubkey::new_unique());

    // Correct addresses, but the pool account already holds state
    accounts[1].data = vec![1u8; PoolState::LEN];

    let infos = account_infos(&mut accounts);
    let err = create_pool::process(&program_id, &infos, VALID_PRICE).unwrap_err();
    assert_eq!(err, ProgramError::from(PoolError::PoolAlreadyExists));
}

#[test]
fn test_missing_creator_signature_rejected() {
    let program_id = Pubkey::new_unique();
    let mut accounts = pool_accounts(&program_id, Pubkey::new_unique(), Pubkey::new_unique());
    accounts[0].signer = false;

    let infos = account_infos(&mut accounts);
    let err = create_pool::process(&program_id, &infos, VALID_PRICE).unwrap_err();
    assert_eq!(err, ProgramError::MissingRequiredSignature);
}

#[test]
fn test_wrong_token_program_rejected() {
    let program_id = Pubkey::new_unique();
    let mut accounts = pool_accounts(&program_id, Pubkey::new_unique(), Pubkey::new_unique());
    accounts[6].key = Pubkey::new_unique();

    let infos = account_infos(&mut accounts);
    let err = create_pool::process(&program_id, &infos, VALID_PRICE).unwrap_err();
    assert_eq!(err, ProgramError::IncorrectProgramId);
}
