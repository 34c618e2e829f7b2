use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions as sysvar_instructions;

use crate::constants::{PARTICIPATION_FEE, VAULT_SEED};
use crate::state::EscrowState;
use crate::utils::payment::InstructionsSysvar;

#[derive(Accounts)]
pub struct Participate<'info> {
    pub escrow_state: Account<'info, EscrowState>,

    #[account(seeds = [VAULT_SEED, escrow_state.key().as_ref()], bump = escrow_state.vault_bump)]
    pub vault: SystemAccount<'info>,

    pub owner: Signer<'info>,

    /// CHECK: address-constrained to the instructions sysvar.
    #[account(address = sysvar_instructions::ID)]
    pub instructions: UncheckedAccount<'info>,
}

impl<'info> Participate<'info> {
    /// Registers consensus keys for the vault. Must directly follow a System transfer of
    /// `PARTICIPATION_FEE` from the owner to the vault. No lamports leave the vault, so the
    /// MAB does not apply.
    pub fn participate(
        &self,
        vote_key: [u8; 32],
        selection_key: [u8; 32],
        vote_first: u64,
        vote_last: u64,
        vote_key_dilution: u64,
        state_proof_key: [u8; 64],
    ) -> Result<()> {
        let ix_sysvar = self.instructions.to_account_info();
        let st = &self.escrow_state;
        st.authorize_participation(
            &self.owner.key(),
            &InstructionsSysvar::new(&ix_sysvar),
            &self.vault.key(),
        )?;

        msg!("keyreg rounds {}..{}", vote_first, vote_last);
        emit!(ParticipationKeysRegistered {
            escrow: st.key(),
            account: self.vault.key(),
            vote_key,
            selection_key,
            vote_first,
            vote_last,
            vote_key_dilution,
            state_proof_key,
            fee: PARTICIPATION_FEE,
        });

        Ok(())
    }
}

/// Key registration for `account`, picked up by the node operator running its validator.
#[event]
pub struct ParticipationKeysRegistered {
    pub escrow: Pubkey,
    pub account: Pubkey,
    pub vote_key: [u8; 32],
    pub selection_key: [u8; 32],
    pub vote_first: u64,
    pub vote_last: u64,
    pub vote_key_dilution: u64,
    pub state_proof_key: [u8; 64],
    pub fee: u64,
}
