use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions as sysvar_instructions;

use crate::constants::VAULT_SEED;
use crate::state::EscrowState;
use crate::utils::payment::InstructionsSysvar;

#[derive(Accounts)]
pub struct Fill<'info> {
    #[account(mut)]
    pub escrow_state: Account<'info, EscrowState>,

    #[account(seeds = [VAULT_SEED, escrow_state.key().as_ref()], bump = escrow_state.vault_bump)]
    pub vault: SystemAccount<'info>,

    pub funder: Signer<'info>,

    /// CHECK: address-constrained to the instructions sysvar.
    #[account(address = sysvar_instructions::ID)]
    pub instructions: UncheckedAccount<'info>,
}

impl<'info> Fill<'info> {
    /// Must directly follow a System transfer of the whole grant from the funder to the vault.
    pub fn fill(&mut self, funding: u64) -> Result<()> {
        let ix_sysvar = self.instructions.to_account_info();
        let vault = self.vault.key();

        let st = &mut self.escrow_state;
        let total = st.fill(
            &self.funder.key(),
            &InstructionsSysvar::new(&ix_sysvar),
            &vault,
            funding,
        )?;

        emit!(EscrowFilled {
            escrow: st.key(),
            funder: st.funder,
            total,
            funding,
            lockup_end: st.schedule.lockup_end(funding, st.period)?,
            vesting_end: st.schedule.vesting_end(funding, st.period)?,
        });

        Ok(())
    }
}

#[event]
pub struct EscrowFilled {
    pub escrow: Pubkey,
    pub funder: Pubkey,
    pub total: u64,
    pub funding: u64,
    pub lockup_end: u64,
    pub vesting_end: u64,
}
