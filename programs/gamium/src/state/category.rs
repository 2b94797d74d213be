use crate::constants::{CATEGORY_COUNT, ONE_GMM, SECONDS_PER_MONTH};
use crate::error::{GamiumError, GamiumResult};

/// Fixed allocation categories. Declaration order is the slot index used by
/// the allocator's per-category arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Airdrop,
    Seed,
    Private,
    Public,
    Advisors,
    Staking,
    Liquidity,
    Treasury,
    Marketing,
    Team,
    Exchanges,
}

/// How the non-TGE part of an allocation accrues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VestingPolicy {
    /// Whole allocation is available from the start.
    Immediate,
    /// Nothing beyond the TGE release until `cliff_seconds` after TGE, then
    /// linear over `linear_seconds`.
    CliffLinear {
        cliff_seconds: i64,
        linear_seconds: i64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategorySchedule {
    pub total_allocation: u128,
    pub tge_release: u128,
    pub policy: VestingPolicy,
}

const fn gmm(whole: u128) -> u128 {
    whole * ONE_GMM
}

const fn cliff_linear(
    total: u128,
    tge: u128,
    cliff_months: i64,
    linear_months: i64,
) -> CategorySchedule {
    CategorySchedule {
        total_allocation: gmm(total),
        tge_release: gmm(tge),
        policy: VestingPolicy::CliffLinear {
            cliff_seconds: cliff_months * SECONDS_PER_MONTH,
            linear_seconds: linear_months * SECONDS_PER_MONTH,
        },
    }
}

const fn immediate(total: u128) -> CategorySchedule {
    CategorySchedule {
        total_allocation: gmm(total),
        tge_release: gmm(total),
        policy: VestingPolicy::Immediate,
    }
}

impl Category {
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Airdrop,
        Category::Seed,
        Category::Private,
        Category::Public,
        Category::Advisors,
        Category::Staking,
        Category::Liquidity,
        Category::Treasury,
        Category::Marketing,
        Category::Team,
        Category::Exchanges,
    ];

    /// Categories drained by `unlock_liquidity`.
    pub const UNLOCKABLE: [Category; 2] = [Category::Liquidity, Category::Exchanges];

    /// Exact, case-sensitive lookup.
    pub fn from_name(name: &str) -> GamiumResult<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == name)
            .ok_or(GamiumError::CategoryDoesNotExist)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::Airdrop => "Airdrop",
            Category::Seed => "Seed",
            Category::Private => "Private",
            Category::Public => "Public",
            Category::Advisors => "Advisors",
            Category::Staking => "Staking",
            Category::Liquidity => "Liquidity",
            Category::Treasury => "Treasury",
            Category::Marketing => "Marketing",
            Category::Team => "Team",
            Category::Exchanges => "Exchanges",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn schedule(self) -> CategorySchedule {
        match self {
            Category::Airdrop => cliff_linear(500_000_000, 25_000_000, 0, 6),
            Category::Seed => cliff_linear(1_000_000_000, 50_000_000, 3, 18),
            Category::Private => cliff_linear(2_000_000_000, 100_000_000, 3, 12),
            Category::Public => cliff_linear(500_000_000, 50_000_000, 0, 6),
            Category::Advisors => cliff_linear(2_500_000_000, 0, 6, 24),
            Category::Staking => cliff_linear(10_000_000_000, 0, 0, 48),
            Category::Liquidity => immediate(1_000_000_000),
            Category::Treasury => cliff_linear(13_200_000_000, 660_000_000, 3, 36),
            Category::Marketing => cliff_linear(7_600_000_000, 380_000_000, 1, 24),
            Category::Team => cliff_linear(10_700_000_000, 0, 12, 36),
            Category::Exchanges => immediate(1_000_000_000),
        }
    }
}

/// Sum of every category's total allocation.
pub fn total_allocated() -> GamiumResult<u128> {
    Category::ALL.iter().try_fold(0u128, |acc, c| {
        acc.checked_add(c.schedule().total_allocation)
            .ok_or(GamiumError::MathOverflow)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TOKEN_CAP;

    #[test]
    fn allocations_sum_to_cap() {
        assert_eq!(total_allocated().unwrap(), TOKEN_CAP);
    }

    #[test]
    fn index_matches_table_order() {
        for (i, c) in Category::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(Category::from_name("Treasury").unwrap(), Category::Treasury);
        assert!(matches!(
            Category::from_name("BadCategory"),
            Err(GamiumError::CategoryDoesNotExist)
        ));
        assert!(matches!(
            Category::from_name("treasury"),
            Err(GamiumError::CategoryDoesNotExist)
        ));
        assert!(matches!(
            Category::from_name("Treasury "),
            Err(GamiumError::CategoryDoesNotExist)
        ));
    }

    #[test]
    fn schedules_are_well_formed() {
        for c in Category::ALL {
            let s = c.schedule();
            assert!(s.tge_release <= s.total_allocation, "{}", c.name());
            match s.policy {
                VestingPolicy::Immediate => {
                    assert_eq!(s.tge_release, s.total_allocation);
                    assert!(Category::UNLOCKABLE.contains(&c));
                }
                VestingPolicy::CliffLinear {
                    cliff_seconds,
                    linear_seconds,
                } => {
                    assert!(cliff_seconds >= 0);
                    assert!(linear_seconds > 0);
                }
            }
        }
    }

    #[test]
    fn tge_amounts() {
        assert_eq!(Category::Airdrop.schedule().tge_release, 25_000_000 * ONE_GMM);
        assert_eq!(Category::Treasury.schedule().tge_release, 660_000_000 * ONE_GMM);
        assert_eq!(Category::Advisors.schedule().tge_release, 0);
        assert_eq!(Category::Exchanges.schedule().tge_release, 1_000_000_000 * ONE_GMM);
    }
}
