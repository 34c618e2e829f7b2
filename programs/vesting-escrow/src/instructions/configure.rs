use anchor_lang::prelude::*;

use crate::state::EscrowState;

#[derive(Accounts)]
pub struct Configure<'info> {
    #[account(mut)]
    pub escrow_state: Account<'info, EscrowState>,

    pub owner: Signer<'info>,
}

impl<'info> Configure<'info> {
    pub fn configure(&mut self, period: u64) -> Result<()> {
        let st = &mut self.escrow_state;
        st.configure(&self.owner.key(), period)?;

        emit!(PeriodConfigured {
            escrow: st.key(),
            owner: st.owner,
            period,
            lockup_units: st.schedule.lockup_units(period)?,
        });

        Ok(())
    }
}

#[event]
pub struct PeriodConfigured {
    pub escrow: Pubkey,
    pub owner: Pubkey,
    pub period: u64,
    pub lockup_units: u64,
}
