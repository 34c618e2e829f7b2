use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::Schedule;

declare_id!("FZjtc8JQVGoQR6Sy6RoQyqDNJ3aP9248VRnSMqc3sUbE");

#[program]
pub mod vesting_escrow {
    use super::*;

    /// Deploys a new escrow with its immutable schedule.
    pub fn create(ctx: Context<Create>, schedule: Schedule) -> Result<()> {
        ctx.accounts.create(schedule, &ctx.bumps)
    }

    pub fn setup(ctx: Context<Setup>, owner: Pubkey) -> Result<()> {
        ctx.accounts.setup(owner)
    }

    pub fn configure(ctx: Context<Configure>, period: u64) -> Result<()> {
        ctx.accounts.configure(period)
    }

    pub fn fill(ctx: Context<Fill>, funding: u64) -> Result<()> {
        ctx.accounts.fill(funding)
    }

    pub fn participate(
        ctx: Context<Participate>,
        vote_key: [u8; 32],
        selection_key: [u8; 32],
        vote_first: u64,
        vote_last: u64,
        vote_key_dilution: u64,
        state_proof_key: [u8; 64],
    ) -> Result<()> {
        ctx.accounts.participate(
            vote_key,
            selection_key,
            vote_first,
            vote_last,
            vote_key_dilution,
            state_proof_key,
        )
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<u64> {
        ctx.accounts.withdraw(amount)
    }

    pub fn transfer(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        ctx.accounts.transfer_ownership(new_owner)
    }

    pub fn close(ctx: Context<Close>) -> Result<()> {
        ctx.accounts.close()
    }

    pub fn quote(ctx: Context<Quote>) -> Result<()> {
        ctx.accounts.quote()
    }
}
