use anchor_lang::prelude::*;

use crate::state::EscrowState;

#[derive(Accounts)]
pub struct Setup<'info> {
    #[account(mut)]
    pub escrow_state: Account<'info, EscrowState>,

    pub creator: Signer<'info>,
}

impl<'info> Setup<'info> {
    pub fn setup(&mut self, owner: Pubkey) -> Result<()> {
        let st = &mut self.escrow_state;
        st.setup(&self.creator.key(), owner)?;

        emit!(OwnerSet {
            escrow: st.key(),
            owner: st.owner,
            funder: st.funder,
        });

        Ok(())
    }
}

#[event]
pub struct OwnerSet {
    pub escrow: Pubkey,
    pub owner: Pubkey,
    pub funder: Pubkey,
}
