use anchor_lang::prelude::*;

use crate::constants::VAULT_SEED;
use crate::state::{EscrowState, Schedule};
use crate::utils::vault::pay_in;

#[derive(Accounts)]
pub struct Create<'info> {
    #[account(init, payer = creator, space = 8 + EscrowState::SIZE)]
    pub escrow_state: Account<'info, EscrowState>,

    #[account(mut, seeds = [VAULT_SEED, escrow_state.key().as_ref()], bump)]
    pub vault: SystemAccount<'info>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Create<'info> {
    /// Starts the escrow and parks the vault's rent minimum and fee reserve in it, so
    /// everything `fill` later sends is grant.
    pub fn create(&mut self, schedule: Schedule, bumps: &CreateBumps) -> Result<()> {
        let state = EscrowState::new(self.creator.key(), schedule, bumps.vault)?;
        let minimum_balance = Rent::get()?.minimum_balance(self.vault.data_len());
        let reservation = schedule.reservation(minimum_balance)?;
        self.escrow_state.set_inner(state);

        pay_in(
            self.system_program.to_account_info(),
            self.creator.to_account_info(),
            self.vault.to_account_info(),
            reservation,
        )?;

        emit!(EscrowCreated {
            escrow: self.escrow_state.key(),
            creator: self.creator.key(),
            vault: self.vault.key(),
            schedule,
            reservation,
        });

        Ok(())
    }
}

#[event]
pub struct EscrowCreated {
    pub escrow: Pubkey,
    pub creator: Pubkey,
    pub vault: Pubkey,
    pub schedule: Schedule,
    pub reservation: u64,
}
