use anchor_lang::prelude::*;

/// Abort reasons for the vesting escrow. Messages are stable; clients match on them.
#[error_code]
pub enum EscrowError {
    #[msg("funder must not be initialized")]
    FunderAlreadySet,

    #[msg("owner must not be initialized")]
    OwnerAlreadySet,

    #[msg("period must not be initialized")]
    PeriodAlreadySet,

    #[msg("funding must not be initialized")]
    FundingAlreadySet,

    #[msg("total must not be initialized")]
    TotalAlreadySet,

    #[msg("funder must be initialized")]
    FunderNotSet,

    #[msg("owner must be initialized")]
    OwnerNotSet,

    #[msg("period within bounds")]
    PeriodOutOfBounds,

    #[msg("funding must be initialized")]
    FundingNotSet,

    #[msg("total must be initialized")]
    TotalNotSet,

    #[msg("must be creator")]
    MustBeCreator,

    #[msg("must be funder")]
    MustBeFunder,

    #[msg("must be owner")]
    MustBeOwner,

    #[msg("period must be greater than 0")]
    PeriodZero,

    #[msg("period must be less than or equal to 5")]
    PeriodTooLarge,

    #[msg("payment sender accurate")]
    PaymentSender,

    #[msg("payment amount accurate")]
    PaymentAmount,

    #[msg("payment receiver accurate")]
    PaymentReceiver,

    #[msg("payment is greater than zero")]
    PaymentZero,

    #[msg("funding must be greater than zero")]
    FundingZero,

    #[msg("companion payment missing")]
    CompanionPaymentMissing,

    #[msg("mab available")]
    MabAvailable,

    #[msg("new owner must not be owner")]
    NewOwnerIsOwner,

    #[msg("new owner must be set")]
    NewOwnerUnset,

    #[msg("mab is zero")]
    MabNotZero,

    #[msg("invalid schedule")]
    InvalidSchedule,

    #[msg("invalid timestamp")]
    InvalidTimestamp,

    #[msg("math overflow")]
    MathOverflow,
}

/// Result of the pure escrow logic, converted into `anchor_lang::Result` at the handler boundary.
pub type EscrowResult<T> = core::result::Result<T, EscrowError>;
