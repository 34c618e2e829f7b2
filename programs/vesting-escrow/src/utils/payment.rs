//! Binds an instruction to the lamport transfer that must accompany it in the
//! same transaction.
//!
//! The companion transfer is always the instruction immediately before the
//! calling one, so the escrow call composes with anything placed ahead of the
//! pair (compute budget, other programs).

use anchor_lang::prelude::{AccountInfo, Pubkey};
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::sysvar::instructions::{
    load_current_index_checked, load_instruction_at_checked,
};
use anchor_lang::system_program;

use crate::error::{EscrowError, EscrowResult};

/// `SystemInstruction::Transfer` discriminant.
const SYSTEM_TRANSFER_TAG: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompanionTransfer {
    pub sender: Pubkey,
    pub receiver: Pubkey,
    pub amount: u64,
}

/// Sibling instructions of the executing call.
pub trait OperationGroup {
    /// Position of the executing instruction.
    fn current_position(&self) -> EscrowResult<usize>;

    /// The lamport transfer at `position`, or `None` if that instruction is something else.
    fn transfer_at(&self, position: usize) -> EscrowResult<Option<CompanionTransfer>>;
}

pub fn find_companion_transfer<G: OperationGroup + ?Sized>(
    group: &G,
) -> EscrowResult<CompanionTransfer> {
    let position = group.current_position()?;
    let previous = position
        .checked_sub(1)
        .ok_or(EscrowError::CompanionPaymentMissing)?;
    group
        .transfer_at(previous)?
        .ok_or(EscrowError::CompanionPaymentMissing)
}

/// Checks who paid, how much and to whom. Returns the verified amount.
pub fn verify_payment(
    transfer: &CompanionTransfer,
    payer: &Pubkey,
    escrow: &Pubkey,
    expected_amount: Option<u64>,
) -> EscrowResult<u64> {
    if transfer.sender != *payer {
        return Err(EscrowError::PaymentSender);
    }
    if let Some(expected) = expected_amount {
        if transfer.amount != expected {
            return Err(EscrowError::PaymentAmount);
        }
    }
    if transfer.receiver != *escrow {
        return Err(EscrowError::PaymentReceiver);
    }
    Ok(transfer.amount)
}

/// Decodes a System Program `Transfer`: `u32` tag, `u64` lamports, accounts `[from, to]`.
pub fn decode_system_transfer(ix: &Instruction) -> Option<CompanionTransfer> {
    if ix.program_id != system_program::ID || ix.data.len() != 12 {
        return None;
    }
    let tag = u32::from_le_bytes(ix.data[0..4].try_into().ok()?);
    if tag != SYSTEM_TRANSFER_TAG {
        return None;
    }
    let amount = u64::from_le_bytes(ix.data[4..12].try_into().ok()?);
    match ix.accounts.as_slice() {
        [from, to] => Some(CompanionTransfer {
            sender: from.pubkey,
            receiver: to.pubkey,
            amount,
        }),
        _ => None,
    }
}

/// The transaction as seen through the instructions sysvar.
pub struct InstructionsSysvar<'a, 'info> {
    account: &'a AccountInfo<'info>,
}

impl<'a, 'info> InstructionsSysvar<'a, 'info> {
    pub fn new(account: &'a AccountInfo<'info>) -> Self {
        Self { account }
    }
}

impl OperationGroup for InstructionsSysvar<'_, '_> {
    fn current_position(&self) -> EscrowResult<usize> {
        load_current_index_checked(self.account)
            .map(usize::from)
            .map_err(|_| EscrowError::CompanionPaymentMissing)
    }

    fn transfer_at(&self, position: usize) -> EscrowResult<Option<CompanionTransfer>> {
        let ix = load_instruction_at_checked(position, self.account)
            .map_err(|_| EscrowError::CompanionPaymentMissing)?;
        Ok(decode_system_transfer(&ix))
    }
}
