//! Fare calculation.
//!
//! A fare is built by three steps applied in order: the distance tier, the
//! highest surcharge among the lines ridden, then the rider's age discount.
//! Each step is a plain function over [`Fare`]; [`FareEngine`] only fixes the
//! order and supplies the policy.

use std::fmt;

use serde::Serialize;
use tracing::trace;

use super::policy::FarePolicy;

/// A fare in won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Fare(pub u32);

impl Fare {
    pub fn amount(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}원", self.0)
    }
}

/// Error from fare calculation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FareError {
    #[error("cannot price a route of distance {distance}")]
    InvalidDistance { distance: u32 },
}

fn steps(over: u32, per_step: u32) -> u32 {
    if per_step == 0 {
        0
    } else {
        over.div_ceil(per_step)
    }
}

/// Base fare for a route of the given length.
///
/// # Errors
///
/// Returns [`FareError::InvalidDistance`] for a zero distance.
pub fn distance_fare(policy: &FarePolicy, distance: u32) -> Result<Fare, FareError> {
    if distance == 0 {
        return Err(FareError::InvalidDistance { distance });
    }

    let middle_steps = steps(
        distance.min(policy.middle_limit).saturating_sub(policy.base_distance),
        policy.middle_step,
    );
    let far_steps = steps(
        distance.saturating_sub(policy.middle_limit.max(policy.base_distance)),
        policy.far_step,
    );

    let extra = (middle_steps + far_steps).saturating_mul(policy.step_fare);
    Ok(Fare(policy.base_fare.saturating_add(extra)))
}

/// Add the highest of the given line surcharges.
pub fn with_line_surcharge(fare: Fare, surcharges: impl IntoIterator<Item = u32>) -> Fare {
    let highest = surcharges.into_iter().max().unwrap_or(0);
    Fare(fare.0.saturating_add(highest))
}

/// Apply the discount for the rider's age, if one applies.
///
/// The deduction is taken first and the remainder scaled down; the result
/// never goes below zero.
pub fn with_age_discount(policy: &FarePolicy, fare: Fare, age: u32) -> Fare {
    match policy.discount_for(age) {
        Some(discount) => {
            let payable = u64::from(fare.0.saturating_sub(policy.age_deduction));
            let discounted = payable * u64::from(discount.percent_paid) / 100;
            Fare(u32::try_from(discounted).unwrap_or(u32::MAX))
        }
        None => fare,
    }
}

/// Prices routes under a fixed [`FarePolicy`].
#[derive(Debug, Clone, Default)]
pub struct FareEngine {
    policy: FarePolicy,
}

impl FareEngine {
    pub fn new(policy: FarePolicy) -> Self {
        Self { policy }
    }

    /// Fare for a route of `distance` riding lines with the given surcharges.
    ///
    /// Without an age the undiscounted fare is returned.
    pub fn calculate(
        &self,
        distance: u32,
        surcharges: impl IntoIterator<Item = u32>,
        age: Option<u32>,
    ) -> Result<Fare, FareError> {
        let base = distance_fare(&self.policy, distance)?;
        let fare = with_line_surcharge(base, surcharges);
        let fare = match age {
            Some(age) => with_age_discount(&self.policy, fare, age),
            None => fare,
        };

        trace!(distance, %base, %fare, ?age, "calculated fare");
        Ok(fare)
    }
}
