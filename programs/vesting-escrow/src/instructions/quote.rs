use anchor_lang::prelude::*;

use crate::constants::VAULT_SEED;
use crate::state::EscrowState;
use crate::utils::vault::snapshot;

#[derive(Accounts)]
pub struct Quote<'info> {
    pub escrow_state: Account<'info, EscrowState>,

    #[account(seeds = [VAULT_SEED, escrow_state.key().as_ref()], bump = escrow_state.vault_bump)]
    pub vault: SystemAccount<'info>,
}

impl<'info> Quote<'info> {
    /// Read-only: publishes the current MAB and how much the owner could withdraw.
    pub fn quote(&self) -> Result<()> {
        let st = &self.escrow_state;
        let vault = snapshot(&self.vault)?;
        let withdrawable = st.withdrawable(&vault)?;

        emit!(MabQuote {
            escrow: st.key(),
            now: vault.now,
            mab: st.mab(vault.now)?,
            available: st.available(&vault),
            withdrawable,
        });

        Ok(())
    }
}

#[event]
pub struct MabQuote {
    pub escrow: Pubkey,
    pub now: u64,
    pub mab: u64,
    pub available: u64,
    pub withdrawable: u64,
}
