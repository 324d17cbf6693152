//! Fare policy constants.

use std::ops::Range;

/// A rider age bracket that pays a share of the fare above the deduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeDiscount {
    /// Ages the bracket applies to, lower bound inclusive.
    pub ages: Range<u32>,
    /// Percentage of the fare (after deduction) that is still paid.
    pub percent_paid: u32,
}

impl AgeDiscount {
    pub fn new(ages: Range<u32>, percent_paid: u32) -> Self {
        Self { ages, percent_paid }
    }

    pub fn applies_to(&self, age: u32) -> bool {
        self.ages.contains(&age)
    }
}

/// Immutable fare configuration.
///
/// Distances are in kilometres, amounts in won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FarePolicy {
    /// Fare for any route up to `base_distance`.
    pub base_fare: u32,
    pub base_distance: u32,
    /// Upper bound of the middle tier.
    pub middle_limit: u32,
    /// Kilometres per step inside the middle tier.
    pub middle_step: u32,
    /// Kilometres per step beyond `middle_limit`.
    pub far_step: u32,
    /// Amount added per step.
    pub step_fare: u32,
    /// Amount deducted before an age discount is applied.
    pub age_deduction: u32,
    /// Checked in order; the first matching bracket wins.
    pub age_discounts: Vec<AgeDiscount>,
}

impl Default for FarePolicy {
    fn default() -> Self {
        Self {
            base_fare: 1250,
            base_distance: 10,
            middle_limit: 50,
            middle_step: 5,
            far_step: 8,
            step_fare: 100,
            age_deduction: 350,
            age_discounts: vec![AgeDiscount::new(6..13, 50), AgeDiscount::new(13..19, 80)],
        }
    }
}

impl FarePolicy {
    /// The discount bracket for an age, if any.
    pub fn discount_for(&self, age: u32) -> Option<&AgeDiscount> {
        self.age_discounts.iter().find(|d| d.applies_to(age))
    }
}
