use anchor_lang::prelude::*;

use crate::constants::VAULT_SEED;
use crate::state::EscrowState;
use crate::utils::vault::{pay_out, snapshot};

#[derive(Accounts)]
pub struct Withdraw<'info> {
    pub escrow_state: Account<'info, EscrowState>,

    #[account(
        mut,
        seeds = [VAULT_SEED, escrow_state.key().as_ref()],
        bump = escrow_state.vault_bump
    )]
    pub vault: SystemAccount<'info>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Withdraw<'info> {
    /// Sends `amount` to the owner if the vault stays at or above the MAB. Returns the MAB;
    /// `amount == 0` only reports it.
    pub fn withdraw(&self, amount: u64) -> Result<u64> {
        let st = &self.escrow_state;
        let vault = snapshot(&self.vault)?;
        let mab = st.authorize_withdrawal(&self.owner.key(), amount, &vault)?;

        pay_out(
            self.system_program.to_account_info(),
            self.vault.to_account_info(),
            self.owner.to_account_info(),
            &st.key(),
            st.vault_bump,
            amount,
        )?;

        msg!("mab {} withdrawn {}", mab, amount);
        emit!(Withdrawn {
            escrow: st.key(),
            owner: st.owner,
            amount,
            mab,
            now: vault.now,
        });

        Ok(mab)
    }
}

#[event]
pub struct Withdrawn {
    pub escrow: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub mab: u64,
    pub now: u64,
}
