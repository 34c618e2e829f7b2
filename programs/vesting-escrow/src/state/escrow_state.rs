use anchor_lang::prelude::*;

use crate::constants::{MAX_PERIOD, PARTICIPATION_FEE};
use crate::error::{EscrowError, EscrowResult};
use crate::state::Schedule;
use crate::utils::mab::{available_balance, minimum_allowable_balance};
use crate::utils::payment::{find_companion_transfer, verify_payment, OperationGroup};

/// One escrowed grant. Lifecycle fields start at their defaults and are only ever
/// moved forward: `owner`/`funder` by `setup`, `period` by `configure`,
/// `funding`/`total` by `fill`.
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EscrowState {
    /// Account that created the escrow and receives its reclaimed rent.
    pub creator: Pubkey,
    /// Beneficiary.
    pub owner: Pubkey,
    /// Account allowed to `fill`. Always the creator.
    pub funder: Pubkey,
    /// Owner-chosen lockup period, `1..=MAX_PERIOD` once configured.
    pub period: u64,
    /// Unix timestamp the vesting schedule counts from.
    pub funding: u64,
    /// Lamports placed under vesting.
    pub total: u64,
    pub schedule: Schedule,
    pub vault_bump: u8,
}

impl EscrowState {
    pub const SIZE: usize =
        32 + // creator
        32 + // owner
        32 + // funder
        8 +  // period
        8 +  // funding
        8 +  // total
        Schedule::SIZE +
        1;   // vault_bump
}

/// Lifecycle steps, in order. Every operation names the step it runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Created, nothing set.
    Uninitialized,
    /// Owner and funder set.
    Fresh,
    /// Period configured.
    Ready,
    /// Grant funded.
    Full,
}

impl Step {
    fn check(self, st: &EscrowState) -> EscrowResult<()> {
        match self {
            Step::Uninitialized => st.check_uninitialized(),
            Step::Fresh => st.check_fresh(),
            Step::Ready => st.check_ready(),
            Step::Full => st.check_full(),
        }
    }
}

/// Ledger facts about the vault at the time of the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VaultSnapshot {
    pub now: u64,
    pub balance: u64,
    /// Rent-exempt minimum the vault must keep.
    pub minimum_balance: u64,
}

/// Where the vault's lamports go when the escrow closes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClosePlan {
    pub to_owner: u64,
    pub to_creator: u64,
}

impl EscrowState {
    pub fn new(creator: Pubkey, schedule: Schedule, vault_bump: u8) -> EscrowResult<Self> {
        schedule.validate()?;
        Ok(Self {
            creator,
            schedule,
            vault_bump,
            ..Self::default()
        })
    }

    pub fn enforce_step(&self, step: Step) -> EscrowResult<()> {
        step.check(self)
    }

    /// The step the escrow is currently in, if its fields are consistent.
    pub fn step(&self) -> Option<Step> {
        [Step::Full, Step::Ready, Step::Fresh, Step::Uninitialized]
            .into_iter()
            .find(|step| step.check(self).is_ok())
    }

    fn check_uninitialized(&self) -> EscrowResult<()> {
        if self.funder != Pubkey::default() {
            return Err(EscrowError::FunderAlreadySet);
        }
        if self.owner != Pubkey::default() {
            return Err(EscrowError::OwnerAlreadySet);
        }
        if self.period != 0 {
            return Err(EscrowError::PeriodAlreadySet);
        }
        self.check_unfunded()
    }

    fn check_fresh(&self) -> EscrowResult<()> {
        self.check_parties()?;
        if self.period != 0 {
            return Err(EscrowError::PeriodAlreadySet);
        }
        self.check_unfunded()
    }

    fn check_ready(&self) -> EscrowResult<()> {
        self.check_parties()?;
        self.check_period()?;
        self.check_unfunded()
    }

    fn check_full(&self) -> EscrowResult<()> {
        self.check_parties()?;
        self.check_period()?;
        if self.funding == 0 {
            return Err(EscrowError::FundingNotSet);
        }
        if self.total == 0 {
            return Err(EscrowError::TotalNotSet);
        }
        Ok(())
    }

    fn check_parties(&self) -> EscrowResult<()> {
        if self.funder == Pubkey::default() || self.funder != self.creator {
            return Err(EscrowError::FunderNotSet);
        }
        if self.owner == Pubkey::default() {
            return Err(EscrowError::OwnerNotSet);
        }
        Ok(())
    }

    fn check_period(&self) -> EscrowResult<()> {
        if !(1..=MAX_PERIOD).contains(&self.period) {
            return Err(EscrowError::PeriodOutOfBounds);
        }
        Ok(())
    }

    fn check_unfunded(&self) -> EscrowResult<()> {
        if self.funding != 0 {
            return Err(EscrowError::FundingAlreadySet);
        }
        if self.total != 0 {
            return Err(EscrowError::TotalAlreadySet);
        }
        Ok(())
    }

    pub fn require_creator(&self, caller: &Pubkey) -> EscrowResult<()> {
        if *caller != self.creator {
            return Err(EscrowError::MustBeCreator);
        }
        Ok(())
    }

    pub fn require_funder(&self, caller: &Pubkey) -> EscrowResult<()> {
        if *caller != self.funder {
            return Err(EscrowError::MustBeFunder);
        }
        Ok(())
    }

    pub fn require_owner(&self, caller: &Pubkey) -> EscrowResult<()> {
        if *caller != self.owner {
            return Err(EscrowError::MustBeOwner);
        }
        Ok(())
    }

    pub fn mab(&self, now: u64) -> EscrowResult<u64> {
        minimum_allowable_balance(now, self.funding, self.total, self.period, &self.schedule)
    }

    pub fn available(&self, vault: &VaultSnapshot) -> u64 {
        available_balance(vault.balance, vault.minimum_balance, self.schedule.fee_reserve)
    }

    pub fn setup(&mut self, caller: &Pubkey, owner: Pubkey) -> EscrowResult<()> {
        self.enforce_step(Step::Uninitialized)?;
        self.require_creator(caller)?;
        if owner == Pubkey::default() {
            return Err(EscrowError::OwnerNotSet);
        }
        self.funder = *caller;
        self.owner = owner;
        Ok(())
    }

    pub fn configure(&mut self, caller: &Pubkey, period: u64) -> EscrowResult<()> {
        self.enforce_step(Step::Fresh)?;
        self.require_owner(caller)?;
        if period == 0 {
            return Err(EscrowError::PeriodZero);
        }
        if period > MAX_PERIOD {
            return Err(EscrowError::PeriodTooLarge);
        }
        self.period = period;
        Ok(())
    }

    /// Records the grant carried by the companion transfer. Returns the grant size.
    pub fn fill<G: OperationGroup + ?Sized>(
        &mut self,
        caller: &Pubkey,
        group: &G,
        vault: &Pubkey,
        funding: u64,
    ) -> EscrowResult<u64> {
        self.enforce_step(Step::Ready)?;
        self.require_funder(caller)?;
        let payment = find_companion_transfer(group)?;
        let total = verify_payment(&payment, &self.funder, vault, None)?;
        if total == 0 {
            return Err(EscrowError::PaymentZero);
        }
        if funding == 0 {
            return Err(EscrowError::FundingZero);
        }
        self.total = total;
        self.funding = funding;
        Ok(total)
    }

    pub fn authorize_participation<G: OperationGroup + ?Sized>(
        &self,
        caller: &Pubkey,
        group: &G,
        vault: &Pubkey,
    ) -> EscrowResult<()> {
        self.enforce_step(Step::Full)?;
        self.require_owner(caller)?;
        let payment = find_companion_transfer(group)?;
        verify_payment(&payment, &self.owner, vault, Some(PARTICIPATION_FEE))?;
        Ok(())
    }

    /// Checks that `amount` can leave the vault without dipping below the MAB.
    /// Returns the MAB at `vault.now`.
    pub fn authorize_withdrawal(
        &self,
        caller: &Pubkey,
        amount: u64,
        vault: &VaultSnapshot,
    ) -> EscrowResult<u64> {
        self.enforce_step(Step::Full)?;
        self.require_owner(caller)?;
        let mab = self.mab(vault.now)?;
        let remaining = self
            .available(vault)
            .checked_sub(amount)
            .ok_or(EscrowError::MabAvailable)?;
        if remaining < mab {
            return Err(EscrowError::MabAvailable);
        }
        Ok(mab)
    }

    /// Largest amount `authorize_withdrawal` would accept right now.
    pub fn withdrawable(&self, vault: &VaultSnapshot) -> EscrowResult<u64> {
        self.enforce_step(Step::Full)?;
        let mab = self.mab(vault.now)?;
        Ok(self.available(vault).saturating_sub(mab))
    }

    pub fn transfer_ownership(&mut self, caller: &Pubkey, new_owner: Pubkey) -> EscrowResult<()> {
        self.enforce_step(Step::Full)?;
        self.require_owner(caller)?;
        if new_owner == Pubkey::default() {
            return Err(EscrowError::NewOwnerUnset);
        }
        if new_owner == self.owner {
            return Err(EscrowError::NewOwnerIsOwner);
        }
        self.owner = new_owner;
        Ok(())
    }

    /// Splits the vault between owner and creator once nothing is left vesting. The
    /// creator gets back the reservation made at `create`, the owner everything above it.
    pub fn plan_close(&self, vault: &VaultSnapshot) -> EscrowResult<ClosePlan> {
        self.enforce_step(Step::Full)?;
        if self.mab(vault.now)? != 0 {
            return Err(EscrowError::MabNotZero);
        }
        let reserved = self.schedule.reservation(vault.minimum_balance)?;
        let to_owner = vault.balance.saturating_sub(reserved);
        Ok(ClosePlan {
            to_owner,
            to_creator: vault.balance - to_owner,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::payment::tests::FakeGroup;
    use crate::utils::payment::CompanionTransfer;

    const UNIT: u64 = 100;
    const FUNDING: u64 = 1_000_000;
    const TOTAL: u64 = 1_200_000;
    const RENT: u64 = 890_880;

    struct Fixture {
        creator: Pubkey,
        owner: Pubkey,
        vault: Pubkey,
        stranger: Pubkey,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                creator: Pubkey::new_unique(),
                owner: Pubkey::new_unique(),
                vault: Pubkey::new_unique(),
                stranger: Pubkey::new_unique(),
            }
        }

        fn schedule() -> Schedule {
            Schedule {
                vesting_delay: 12,
                seconds_per_unit: UNIT,
                lockup_multiplier: 12,
                fee_reserve: 5_000,
            }
        }

        fn created(&self) -> EscrowState {
            EscrowState::new(self.creator, Self::schedule(), 254).unwrap()
        }

        fn payment(&self, sender: Pubkey, amount: u64) -> FakeGroup {
            FakeGroup::paying(CompanionTransfer {
                sender,
                receiver: self.vault,
                amount,
            })
        }

        fn fresh(&self) -> EscrowState {
            let mut st = self.created();
            st.setup(&self.creator, self.owner).unwrap();
            st
        }

        fn ready(&self) -> EscrowState {
            let mut st = self.fresh();
            st.configure(&self.owner, 1).unwrap();
            st
        }

        fn full(&self) -> EscrowState {
            let mut st = self.ready();
            st.fill(&self.creator, &self.payment(self.creator, TOTAL), &self.vault, FUNDING)
                .unwrap();
            st
        }

        /// Vault funded by `create`'s reservation and the `fill` transfer, less withdrawals.
        fn vault_at(&self, now: u64, withdrawn: u64) -> VaultSnapshot {
            VaultSnapshot {
                now,
                balance: Self::schedule().reservation(RENT).unwrap() + TOTAL - withdrawn,
                minimum_balance: RENT,
            }
        }
    }

    #[test]
    fn walks_every_step_in_order() {
        let f = Fixture::new();
        let mut st = f.created();
        assert_eq!(st.step(), Some(Step::Uninitialized));

        st.setup(&f.creator, f.owner).unwrap();
        assert_eq!(st.step(), Some(Step::Fresh));
        assert_eq!(st.funder, f.creator);
        assert_eq!(st.owner, f.owner);

        st.configure(&f.owner, 3).unwrap();
        assert_eq!(st.step(), Some(Step::Ready));

        let total = st
            .fill(&f.creator, &f.payment(f.creator, TOTAL), &f.vault, FUNDING)
            .unwrap();
        assert_eq!(total, TOTAL);
        assert_eq!(st.step(), Some(Step::Full));
        assert_eq!((st.period, st.funding, st.total), (3, FUNDING, TOTAL));
    }

    #[test]
    fn out_of_order_calls_abort() {
        let f = Fixture::new();

        let mut st = f.created();
        assert!(matches!(st.configure(&f.owner, 1), Err(EscrowError::FunderNotSet)));
        assert!(matches!(
            st.fill(&f.creator, &f.payment(f.creator, TOTAL), &f.vault, FUNDING),
            Err(EscrowError::FunderNotSet)
        ));

        let mut st = f.fresh();
        assert!(matches!(
            st.setup(&f.creator, f.stranger),
            Err(EscrowError::FunderAlreadySet)
        ));
        assert!(matches!(
            st.fill(&f.creator, &f.payment(f.creator, TOTAL), &f.vault, FUNDING),
            Err(EscrowError::PeriodOutOfBounds)
        ));

        let mut st = f.full();
        assert!(matches!(st.configure(&f.owner, 2), Err(EscrowError::PeriodAlreadySet)));
        assert!(matches!(
            st.fill(&f.creator, &f.payment(f.creator, TOTAL), &f.vault, FUNDING),
            Err(EscrowError::FundingAlreadySet)
        ));

        let st = f.ready();
        assert!(matches!(
            st.authorize_withdrawal(&f.owner, 0, &f.vault_at(FUNDING, 0)),
            Err(EscrowError::FundingNotSet)
        ));
        assert!(matches!(
            st.plan_close(&f.vault_at(FUNDING, 0)),
            Err(EscrowError::FundingNotSet)
        ));
    }

    #[test]
    fn guards_reject_wrong_caller() {
        let f = Fixture::new();

        let mut st = f.created();
        assert!(matches!(st.setup(&f.stranger, f.owner), Err(EscrowError::MustBeCreator)));

        let mut st = f.fresh();
        assert!(matches!(st.configure(&f.creator, 1), Err(EscrowError::MustBeOwner)));

        let mut st = f.ready();
        assert!(matches!(
            st.fill(&f.owner, &f.payment(f.owner, TOTAL), &f.vault, FUNDING),
            Err(EscrowError::MustBeFunder)
        ));

        let mut st = f.full();
        let vault = f.vault_at(FUNDING, 0);
        assert!(matches!(
            st.authorize_withdrawal(&f.creator, 0, &vault),
            Err(EscrowError::MustBeOwner)
        ));
        assert!(matches!(
            st.authorize_participation(&f.stranger, &f.payment(f.stranger, PARTICIPATION_FEE), &f.vault),
            Err(EscrowError::MustBeOwner)
        ));
        assert!(matches!(
            st.transfer_ownership(&f.creator, f.stranger),
            Err(EscrowError::MustBeOwner)
        ));
    }

    #[test]
    fn setup_requires_a_real_owner() {
        let f = Fixture::new();
        let mut st = f.created();
        assert!(matches!(
            st.setup(&f.creator, Pubkey::default()),
            Err(EscrowError::OwnerNotSet)
        ));
        assert_eq!(st.step(), Some(Step::Uninitialized));
    }

    #[test]
    fn period_is_bounded() {
        let f = Fixture::new();
        let mut st = f.fresh();
        assert!(matches!(st.configure(&f.owner, 0), Err(EscrowError::PeriodZero)));
        assert!(matches!(
            st.configure(&f.owner, MAX_PERIOD + 1),
            Err(EscrowError::PeriodTooLarge)
        ));
        assert_eq!(st.period, 0);
        st.configure(&f.owner, MAX_PERIOD).unwrap();
        assert_eq!(st.period, MAX_PERIOD);
    }

    #[test]
    fn fill_binds_to_companion_transfer() {
        let f = Fixture::new();

        let mut st = f.ready();
        assert!(matches!(
            st.fill(&f.creator, &f.payment(f.stranger, TOTAL), &f.vault, FUNDING),
            Err(EscrowError::PaymentSender)
        ));

        let elsewhere = FakeGroup::paying(CompanionTransfer {
            sender: f.creator,
            receiver: f.stranger,
            amount: TOTAL,
        });
        assert!(matches!(
            st.fill(&f.creator, &elsewhere, &f.vault, FUNDING),
            Err(EscrowError::PaymentReceiver)
        ));
        assert!(matches!(
            st.fill(&f.creator, &FakeGroup::empty(), &f.vault, FUNDING),
            Err(EscrowError::CompanionPaymentMissing)
        ));
        assert!(matches!(
            st.fill(&f.creator, &f.payment(f.creator, 0), &f.vault, FUNDING),
            Err(EscrowError::PaymentZero)
        ));
        assert!(matches!(
            st.fill(&f.creator, &f.payment(f.creator, TOTAL), &f.vault, 0),
            Err(EscrowError::FundingZero)
        ));
        assert_eq!(st, f.ready());
    }

    #[test]
    fn participation_needs_exact_fee_from_owner() {
        let f = Fixture::new();
        let st = f.full();

        st.authorize_participation(&f.owner, &f.payment(f.owner, PARTICIPATION_FEE), &f.vault)
            .unwrap();
        for amount in [PARTICIPATION_FEE - 1, PARTICIPATION_FEE + 1] {
            assert!(matches!(
                st.authorize_participation(&f.owner, &f.payment(f.owner, amount), &f.vault),
                Err(EscrowError::PaymentAmount)
            ));
        }
        assert!(matches!(
            st.authorize_participation(&f.owner, &f.payment(f.creator, PARTICIPATION_FEE), &f.vault),
            Err(EscrowError::PaymentSender)
        ));

        let ready = f.ready();
        assert!(matches!(
            ready.authorize_participation(&f.owner, &f.payment(f.owner, PARTICIPATION_FEE), &f.vault),
            Err(EscrowError::FundingNotSet)
        ));
    }

    #[test]
    fn nothing_withdrawable_during_lockup() {
        let f = Fixture::new();
        let st = f.full();
        let lockup_end = FUNDING + 12 * UNIT;

        assert_eq!(st.authorize_withdrawal(&f.owner, 0, &f.vault_at(FUNDING, 0)).unwrap(), TOTAL);
        assert!(matches!(
            st.authorize_withdrawal(&f.owner, 1, &f.vault_at(lockup_end - 1, 0)),
            Err(EscrowError::MabAvailable)
        ));
    }

    #[test]
    fn withdrawal_tracks_vesting() {
        let f = Fixture::new();
        let st = f.full();
        let half = FUNDING + 18 * UNIT;

        assert_eq!(st.authorize_withdrawal(&f.owner, 0, &f.vault_at(half, 0)).unwrap(), 600_000);
        st.authorize_withdrawal(&f.owner, 600_000, &f.vault_at(half, 0)).unwrap();
        assert!(matches!(
            st.authorize_withdrawal(&f.owner, 600_001, &f.vault_at(half, 0)),
            Err(EscrowError::MabAvailable)
        ));
        // after taking half, the rest stays locked until the next unit
        assert!(matches!(
            st.authorize_withdrawal(&f.owner, 1, &f.vault_at(half, 600_000)),
            Err(EscrowError::MabAvailable)
        ));
        st.authorize_withdrawal(&f.owner, 100_000, &f.vault_at(half + UNIT, 600_000))
            .unwrap();
    }

    #[test]
    fn withdrawable_matches_authorization() {
        let f = Fixture::new();
        let st = f.full();

        assert_eq!(st.withdrawable(&f.vault_at(FUNDING, 0)).unwrap(), 0);
        let half = f.vault_at(FUNDING + 18 * UNIT, 0);
        let headroom = st.withdrawable(&half).unwrap();
        assert_eq!(headroom, 600_000);
        st.authorize_withdrawal(&f.owner, headroom, &half).unwrap();
        assert!(st.authorize_withdrawal(&f.owner, headroom + 1, &half).is_err());

        assert!(matches!(
            f.ready().withdrawable(&half),
            Err(EscrowError::FundingNotSet)
        ));
    }

    #[test]
    fn withdrawal_never_breaches_mab() {
        let f = Fixture::new();
        let st = f.full();
        let mut withdrawn = 0;

        let mut now = FUNDING;
        while now <= FUNDING + 26 * UNIT {
            for amount in [0, 1, 50_000, 99_999, 100_000, 250_000, TOTAL] {
                let vault = f.vault_at(now, withdrawn);
                if st.authorize_withdrawal(&f.owner, amount, &vault).is_ok() {
                    withdrawn += amount;
                    let after = f.vault_at(now, withdrawn);
                    assert!(st.available(&after) >= st.mab(now).unwrap());
                }
            }
            now += UNIT / 2;
        }

        let rest = TOTAL - withdrawn;
        assert!(matches!(
            st.authorize_withdrawal(&f.owner, rest + 1, &f.vault_at(now, withdrawn)),
            Err(EscrowError::MabAvailable)
        ));
        st.authorize_withdrawal(&f.owner, rest, &f.vault_at(now, withdrawn))
            .unwrap();
    }

    #[test]
    fn ownership_moves_forward_only() {
        let f = Fixture::new();
        let mut st = f.full();

        assert!(matches!(
            st.transfer_ownership(&f.owner, f.owner),
            Err(EscrowError::NewOwnerIsOwner)
        ));
        assert!(matches!(
            st.transfer_ownership(&f.owner, Pubkey::default()),
            Err(EscrowError::NewOwnerUnset)
        ));

        st.transfer_ownership(&f.owner, f.stranger).unwrap();
        assert_eq!(st.owner, f.stranger);
        assert_eq!(st.step(), Some(Step::Full));
        assert!(matches!(
            st.authorize_withdrawal(&f.owner, 0, &f.vault_at(FUNDING, 0)),
            Err(EscrowError::MustBeOwner)
        ));
        st.authorize_withdrawal(&f.stranger, 0, &f.vault_at(FUNDING, 0)).unwrap();
    }

    #[test]
    fn close_waits_for_full_vesting() {
        let f = Fixture::new();
        let st = f.full();
        let vested = FUNDING + 24 * UNIT;

        assert!(matches!(
            st.plan_close(&f.vault_at(vested - 1, 0)),
            Err(EscrowError::MabNotZero)
        ));

        let plan = st.plan_close(&f.vault_at(vested, 0)).unwrap();
        assert_eq!(plan.to_owner, TOTAL);
        assert_eq!(plan.to_creator, RENT + 5_000);
    }

    #[test]
    fn deposits_alone_carry_the_whole_grant() {
        let f = Fixture::new();
        let schedule = Fixture::schedule();

        // ledger moves made by `create` and `fill`, nothing else
        let mut balance = schedule.reservation(RENT).unwrap();
        let mut st = f.ready();
        balance += st
            .fill(&f.creator, &f.payment(f.creator, TOTAL), &f.vault, FUNDING)
            .unwrap();
        let vault = |now, balance| VaultSnapshot { now, balance, minimum_balance: RENT };

        assert_eq!(st.authorize_withdrawal(&f.owner, 0, &vault(FUNDING, balance)).unwrap(), TOTAL);
        assert_eq!(st.available(&vault(FUNDING, balance)), TOTAL);

        let vested = FUNDING + 24 * UNIT;
        assert_eq!(st.withdrawable(&vault(vested, balance)).unwrap(), TOTAL);
        assert_eq!(
            st.plan_close(&vault(vested, balance)).unwrap(),
            ClosePlan { to_owner: TOTAL, to_creator: RENT + 5_000 }
        );

        // without the reservation the grant itself would be held back as rent
        assert!(matches!(
            st.authorize_withdrawal(&f.owner, 0, &vault(FUNDING, TOTAL)),
            Err(EscrowError::MabAvailable)
        ));
    }

    #[test]
    fn fully_drawn_vault_closes_to_creator() {
        let f = Fixture::new();
        let st = f.full();
        let vested = FUNDING + 24 * UNIT;

        let vault = f.vault_at(vested, TOTAL);
        assert_eq!(st.withdrawable(&vault).unwrap(), 0);
        assert_eq!(
            st.plan_close(&vault).unwrap(),
            ClosePlan { to_owner: 0, to_creator: RENT + 5_000 }
        );
    }

    #[test]
    fn close_of_underfunded_vault_returns_what_is_left() {
        let f = Fixture::new();
        let st = f.full();
        let vault = VaultSnapshot {
            now: FUNDING + 24 * UNIT,
            balance: 1_000,
            minimum_balance: RENT,
        };
        assert_eq!(
            st.plan_close(&vault).unwrap(),
            ClosePlan { to_owner: 0, to_creator: 1_000 }
        );
    }

    #[test]
    fn failed_calls_leave_state_untouched() {
        let f = Fixture::new();
        let mut st = f.full();
        let before = st.clone();

        let _ = st.setup(&f.creator, f.stranger);
        let _ = st.configure(&f.owner, 2);
        let _ = st.fill(&f.creator, &f.payment(f.creator, 1), &f.vault, 1);
        let _ = st.transfer_ownership(&f.stranger, f.stranger);
        assert_eq!(st, before);
    }

    #[test]
    fn messages_are_stable() {
        assert_eq!(EscrowError::MustBeOwner.to_string(), "must be owner");
        assert_eq!(EscrowError::MabAvailable.to_string(), "mab available");
        assert_eq!(EscrowError::PeriodZero.to_string(), "period must be greater than 0");
    }

    #[test]
    fn step_guard_messages_share_one_spelling() {
        let cases = [
            (EscrowError::FunderAlreadySet, "funder must not be initialized"),
            (EscrowError::OwnerAlreadySet, "owner must not be initialized"),
            (EscrowError::PeriodAlreadySet, "period must not be initialized"),
            (EscrowError::FundingAlreadySet, "funding must not be initialized"),
            (EscrowError::TotalAlreadySet, "total must not be initialized"),
            (EscrowError::FunderNotSet, "funder must be initialized"),
            (EscrowError::OwnerNotSet, "owner must be initialized"),
            (EscrowError::PeriodOutOfBounds, "period within bounds"),
            (EscrowError::FundingNotSet, "funding must be initialized"),
            (EscrowError::TotalNotSet, "total must be initialized"),
        ];
        for (err, msg) in cases {
            assert_eq!(err.to_string(), msg);
        }

        // the same violation reads the same whichever step reports it
        let f = Fixture::new();
        let mut fresh = f.fresh();
        fresh.period = 1;
        let mut uninitialized = f.created();
        uninitialized.period = 1;
        assert_eq!(
            fresh.enforce_step(Step::Fresh).unwrap_err().to_string(),
            uninitialized.enforce_step(Step::Uninitialized).unwrap_err().to_string()
        );
    }
}
