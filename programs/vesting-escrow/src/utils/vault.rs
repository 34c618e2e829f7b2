use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::constants::VAULT_SEED;
use crate::state::VaultSnapshot;
use crate::utils::time::unix_now;

pub fn snapshot(vault: &AccountInfo) -> Result<VaultSnapshot> {
    Ok(VaultSnapshot {
        now: unix_now()?,
        balance: vault.lamports(),
        minimum_balance: Rent::get()?.minimum_balance(vault.data_len()),
    })
}

/// Moves lamports from a signing wallet into the vault PDA.
pub fn pay_in<'info>(
    program: AccountInfo<'info>,
    from: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    system_program::transfer(CpiContext::new(program, Transfer { from, to: vault }), amount)
}

/// Moves lamports out of the vault PDA. Zero amounts are skipped.
pub fn pay_out<'info>(
    program: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    to: AccountInfo<'info>,
    escrow_state: &Pubkey,
    vault_bump: u8,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_SEED, escrow_state.as_ref(), &[vault_bump]]];
    system_program::transfer(
        CpiContext::new_with_signer(program, Transfer { from: vault, to }, signer_seeds),
        amount,
    )
}
