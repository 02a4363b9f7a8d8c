//! Dice test resolution
//!
//! Generic roll-against-target evaluation for the two dice this system
//! uses: the d100 skill test (with critical bands) and the d6 check.
//! Rolling goes through an injectable `RandomSource`, so the functions
//! are pure given their source.

use serde::{Deserialize, Serialize};

use harnmaster_domain::{ImpactDice, SuccessLevel};

use crate::random::RandomSource;

/// The die types the rules roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Die {
    D6,
    D100,
}

impl Die {
    pub fn sides(self) -> u32 {
        match self {
            Die::D6 => 6,
            Die::D100 => 100,
        }
    }
}

/// A roll-under test specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRollSpec {
    pub die: Die,
    /// Coerced to at least one die - a test always rolls
    pub dice_count: i32,
    pub modifier: i32,
    pub target: i32,
}

impl TestRollSpec {
    pub fn d100(target: i32, modifier: i32) -> Self {
        Self {
            die: Die::D100,
            dice_count: 1,
            modifier,
            target,
        }
    }

    pub fn d6(dice_count: i32, target: i32) -> Self {
        Self {
            die: Die::D6,
            dice_count,
            modifier: 0,
            target,
        }
    }
}

/// Outcome record of a dice test, handed to the host for display and to
/// any custom item macro.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRollResult {
    pub rolls: Vec<u32>,
    pub total: i32,
    pub target_number: i32,
    pub is_success: bool,
    pub is_critical: bool,
    pub success_level: SuccessLevel,
    pub description: String,
}

/// Roll a test against a target number.
///
/// d100: criticals on any multiple of 5; failure on totals of 96+ or on
/// any total above both 5 and the target number. d6: plain roll-under,
/// never critical.
pub fn roll_test(spec: &TestRollSpec, source: &mut dyn RandomSource) -> TestRollResult {
    let dice_count = spec.dice_count.max(1) as usize;
    let sides = spec.die.sides();
    let rolls: Vec<u32> = (0..dice_count).map(|_| source.roll(sides)).collect();
    let total: i32 = rolls.iter().map(|r| *r as i32).sum();
    let target_number = spec.target + spec.modifier;

    let (is_success, is_critical, description) = match spec.die {
        Die::D100 => {
            let is_critical = total % 5 == 0;
            let is_failure = total >= 96 || (total > 5 && total > target_number);
            let is_success = !is_failure;
            let level = SuccessLevel::from_flags(is_success, is_critical);
            (is_success, is_critical, level.to_string())
        }
        Die::D6 => {
            let is_success = total <= target_number;
            let description = if is_success { "Success" } else { "Failure" };
            (is_success, false, description.to_string())
        }
    };

    TestRollResult {
        rolls,
        total,
        target_number,
        is_success,
        is_critical,
        success_level: SuccessLevel::from_flags(is_success, is_critical),
        description,
    }
}

/// Roll an impact pool. A pool with no dice rolls nothing and returns
/// `None` - distinct from the test path, which always rolls at least
/// one die.
pub fn roll_impact(dice: ImpactDice, source: &mut dyn RandomSource) -> Option<i32> {
    if dice.is_none() {
        return None;
    }
    let rolled: i32 = (0..dice.count).map(|_| source.roll(6) as i32).sum();
    Some(rolled + dice.modifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedSource;

    #[test]
    fn d100_multiple_of_five_is_critical_success() {
        let mut source = FixedSource::new([50]);
        let result = roll_test(&TestRollSpec::d100(50, 0), &mut source);
        assert!(result.is_success);
        assert!(result.is_critical);
        assert_eq!(result.success_level, SuccessLevel::CriticalSuccess);
        assert_eq!(result.description, "Critical Success");
    }

    #[test]
    fn d100_ninety_six_always_fails() {
        let mut source = FixedSource::new([96]);
        let result = roll_test(&TestRollSpec::d100(99, 0), &mut source);
        assert!(!result.is_success);
        // 96 is not a multiple of 5, so a marginal failure
        assert_eq!(result.success_level, SuccessLevel::MarginalFailure);
    }

    #[test]
    fn d100_hundred_is_critical_failure() {
        let mut source = FixedSource::new([100]);
        let result = roll_test(&TestRollSpec::d100(99, 0), &mut source);
        assert!(!result.is_success);
        assert!(result.is_critical);
        assert_eq!(result.description, "Critical Failure");
    }

    #[test]
    fn d100_low_totals_succeed_over_target() {
        // A total of 5 or less succeeds even against target 0
        let mut source = FixedSource::new([4]);
        let result = roll_test(&TestRollSpec::d100(0, 0), &mut source);
        assert!(result.is_success);
    }

    #[test]
    fn d100_modifier_shifts_target_number() {
        let mut source = FixedSource::new([60]);
        let result = roll_test(&TestRollSpec::d100(50, 15), &mut source);
        assert_eq!(result.target_number, 65);
        assert!(result.is_success);
    }

    #[test]
    fn d6_is_never_critical() {
        let mut source = FixedSource::new([6, 6, 6]);
        let result = roll_test(&TestRollSpec::d6(3, 18), &mut source);
        assert_eq!(result.total, 18);
        assert!(result.is_success);
        assert!(!result.is_critical);
        assert_eq!(result.description, "Success");
    }

    #[test]
    fn d6_fails_over_target() {
        let mut source = FixedSource::new([5, 5]);
        let result = roll_test(&TestRollSpec::d6(2, 9), &mut source);
        assert!(!result.is_success);
        assert_eq!(result.description, "Failure");
    }

    #[test]
    fn zero_dice_test_coerces_to_one_die() {
        let mut source = FixedSource::new([3]);
        let result = roll_test(&TestRollSpec::d6(0, 4), &mut source);
        assert_eq!(result.rolls.len(), 1);
        assert_eq!(result.total, 3);
    }

    #[test]
    fn empty_impact_pool_rolls_nothing() {
        let mut source = FixedSource::new([6]);
        assert_eq!(roll_impact(ImpactDice::none(), &mut source), None);
        assert_eq!(roll_impact(ImpactDice::new(-2, 3), &mut source), None);
    }

    #[test]
    fn impact_pool_sums_dice_and_modifier() {
        let mut source = FixedSource::new([4, 2]);
        assert_eq!(roll_impact(ImpactDice::new(2, 3), &mut source), Some(9));
    }
}
