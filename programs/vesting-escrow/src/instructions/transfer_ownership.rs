use anchor_lang::prelude::*;

use crate::state::EscrowState;

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(mut)]
    pub escrow_state: Account<'info, EscrowState>,

    pub owner: Signer<'info>,
}

impl<'info> TransferOwnership<'info> {
    pub fn transfer_ownership(&mut self, new_owner: Pubkey) -> Result<()> {
        let st = &mut self.escrow_state;
        let old_owner = st.owner;
        st.transfer_ownership(&self.owner.key(), new_owner)?;

        emit!(OwnershipTransferred {
            escrow: st.key(),
            old_owner,
            new_owner,
        });

        Ok(())
    }
}

#[event]
pub struct OwnershipTransferred {
    pub escrow: Pubkey,
    pub old_owner: Pubkey,
    pub new_owner: Pubkey,
}
