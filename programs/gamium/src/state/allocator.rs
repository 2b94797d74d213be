use anchor_lang::prelude::*;

use crate::constants::CATEGORY_COUNT;
use crate::error::{GamiumError, GamiumResult};
use crate::state::category::Category;
use crate::state::token_config::TokenConfig;
use crate::utils::vesting;

/// Category allocator PDA. Acts as the token minter through its own key.
#[account]
pub struct Allocator {
    /// May start TGE, unlock liquidity and transfer ownership.
    pub owner: Pubkey,
    /// Token config this allocator mints against.
    pub token_config: Pubkey,
    /// Vesting clock origin (Unix seconds). Set once.
    pub tge_start: Option<i64>,
    /// Cumulative minted per category, indexed by `Category::index`.
    pub released: [u128; CATEGORY_COUNT],
    /// Receiving wallet per category, indexed by `Category::index`.
    pub beneficiaries: [Pubkey; CATEGORY_COUNT],
    /// Sum of `released`.
    pub total_minted: u128,
    pub liquidity_unlocked: bool,
    pub bump: u8,
}

impl Allocator {
    pub const SIZE: usize =
        32 +                   // owner
        32 +                   // token_config
        1 + 8 +                // tge_start
        16 * CATEGORY_COUNT +  // released
        32 * CATEGORY_COUNT +  // beneficiaries
        16 +                   // total_minted
        1 +                    // liquidity_unlocked
        1;                     // bump

    pub fn ensure_owner(&self, caller: &Pubkey) -> GamiumResult<()> {
        if *caller != self.owner {
            return Err(GamiumError::CallerIsNotOwner);
        }
        Ok(())
    }

    pub fn transfer_ownership(
        &mut self,
        caller: &Pubkey,
        new_owner: Pubkey,
    ) -> GamiumResult<Pubkey> {
        self.ensure_owner(caller)?;
        if new_owner == Pubkey::default() {
            return Err(GamiumError::InvalidPubkey);
        }
        Ok(std::mem::replace(&mut self.owner, new_owner))
    }

    pub fn released_of(&self, category: Category) -> u128 {
        self.released[category.index()]
    }

    pub fn beneficiary_of(&self, category: Category) -> Pubkey {
        self.beneficiaries[category.index()]
    }

    pub fn accrued(&self, category: Category, now: i64) -> GamiumResult<u128> {
        vesting::accrued_amount(&category.schedule(), self.tge_start, now)
    }

    pub fn releasable(&self, category: Category, now: i64) -> GamiumResult<u128> {
        vesting::releasable_amount(
            &category.schedule(),
            self.released_of(category),
            self.tge_start,
            now,
        )
    }

    pub fn start_tge(&mut self, caller: &Pubkey, timestamp: i64) -> GamiumResult<()> {
        self.ensure_owner(caller)?;
        if self.tge_start.is_some() {
            return Err(GamiumError::TgeAlreadyStarted);
        }
        if timestamp <= 0 {
            return Err(GamiumError::InvalidTimestamp);
        }
        self.tge_start = Some(timestamp);
        Ok(())
    }

    /// Non-zero deltas every category may mint at `now`. Requires TGE to
    /// have started.
    pub fn release_plan(&self, now: i64) -> GamiumResult<Vec<(Category, u128)>> {
        match self.tge_start {
            Some(start) if now >= start => {}
            _ => return Err(GamiumError::TgeNotStarted),
        }
        let mut plan = Vec::with_capacity(CATEGORY_COUNT);
        for category in Category::ALL {
            let amount = self.releasable(category, now)?;
            if amount > 0 {
                plan.push((category, amount));
            }
        }
        Ok(plan)
    }

    /// Remaining Liquidity and Exchanges balances, regardless of TGE.
    pub fn liquidity_plan(&self, caller: &Pubkey) -> GamiumResult<Vec<(Category, u128)>> {
        self.ensure_owner(caller)?;
        let mut plan = Vec::with_capacity(Category::UNLOCKABLE.len());
        for category in Category::UNLOCKABLE {
            let remaining = category
                .schedule()
                .total_allocation
                .checked_sub(self.released_of(category))
                .ok_or(GamiumError::MathOverflow)?;
            if remaining > 0 {
                plan.push((category, remaining));
            }
        }
        Ok(plan)
    }

    /// Mints every planned delta through `token` and advances the category
    /// counters. The whole plan is checked against the minter and cap
    /// before anything is applied.
    pub fn apply_plan(
        &mut self,
        token: &mut TokenConfig,
        minter: &Pubkey,
        plan: &[(Category, u128)],
    ) -> GamiumResult<()> {
        let total = plan.iter().try_fold(0u128, |acc, (_, amount)| {
            acc.checked_add(*amount).ok_or(GamiumError::MathOverflow)
        })?;
        token.check_mint(minter, total)?;
        for (category, amount) in plan {
            let released = self
                .released_of(*category)
                .checked_add(*amount)
                .ok_or(GamiumError::MathOverflow)?;
            if released > category.schedule().total_allocation {
                return Err(GamiumError::CategoryAllocationExceeded);
            }
        }

        for &(category, amount) in plan {
            token.mint(minter, amount)?;
            self.released[category.index()] += amount;
            self.total_minted = self
                .total_minted
                .checked_add(amount)
                .ok_or(GamiumError::MathOverflow)?;
        }
        Ok(())
    }

    /// Mints the remaining Liquidity and Exchanges allocations. Repeat calls
    /// succeed with an empty plan.
    pub fn unlock_liquidity(
        &mut self,
        token: &mut TokenConfig,
        minter: &Pubkey,
        caller: &Pubkey,
    ) -> GamiumResult<Vec<(Category, u128)>> {
        let plan = self.liquidity_plan(caller)?;
        self.apply_plan(token, minter, &plan)?;
        self.liquidity_unlocked = true;
        Ok(plan)
    }

    /// Mints everything releasable at `now`.
    pub fn release(
        &mut self,
        token: &mut TokenConfig,
        minter: &Pubkey,
        now: i64,
    ) -> GamiumResult<Vec<(Category, u128)>> {
        let plan = self.release_plan(now)?;
        self.apply_plan(token, minter, &plan)?;
        Ok(plan)
    }
}
