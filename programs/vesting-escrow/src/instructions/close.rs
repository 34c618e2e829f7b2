use anchor_lang::prelude::*;

use crate::constants::VAULT_SEED;
use crate::error::EscrowError;
use crate::state::EscrowState;
use crate::utils::vault::{pay_out, snapshot};

#[derive(Accounts)]
pub struct Close<'info> {
    #[account(
        mut,
        close = creator,
        has_one = creator @ EscrowError::MustBeCreator,
        has_one = owner @ EscrowError::MustBeOwner
    )]
    pub escrow_state: Account<'info, EscrowState>,

    #[account(
        mut,
        seeds = [VAULT_SEED, escrow_state.key().as_ref()],
        bump = escrow_state.vault_bump
    )]
    pub vault: SystemAccount<'info>,

    /// CHECK: pinned to `escrow_state.owner`; only receives lamports.
    #[account(mut)]
    pub owner: UncheckedAccount<'info>,

    /// CHECK: pinned to `escrow_state.creator`; only receives lamports.
    #[account(mut)]
    pub creator: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Close<'info> {
    /// Winds up a fully vested escrow. Anyone may call it: the vault's lamports above the
    /// `create` reservation go to the owner, the reservation and the state account's rent
    /// go back to the creator.
    pub fn close(&self) -> Result<()> {
        let st = &self.escrow_state;
        let vault = snapshot(&self.vault)?;
        let plan = st.plan_close(&vault)?;

        let escrow = st.key();
        pay_out(
            self.system_program.to_account_info(),
            self.vault.to_account_info(),
            self.owner.to_account_info(),
            &escrow,
            st.vault_bump,
            plan.to_owner,
        )?;
        pay_out(
            self.system_program.to_account_info(),
            self.vault.to_account_info(),
            self.creator.to_account_info(),
            &escrow,
            st.vault_bump,
            plan.to_creator,
        )?;

        emit!(EscrowClosed {
            escrow,
            owner: st.owner,
            creator: st.creator,
            to_owner: plan.to_owner,
            to_creator: plan.to_creator,
        });

        Ok(())
    }
}

#[event]
pub struct EscrowClosed {
    pub escrow: Pubkey,
    pub owner: Pubkey,
    pub creator: Pubkey,
    pub to_owner: u64,
    pub to_creator: u64,
}
