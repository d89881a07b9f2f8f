//! Subscription plans attached to a payment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::money::PaymentAmount;

/// A scheduled or repeating charge. Either `scheduled` or `repeat` should be set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentPlan {
    pub amount: PaymentAmount,
    /// Future date of a one-off charge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<PlanRepeat>,
}

impl PaymentPlan {
    /// One-off charge at `scheduled`.
    pub fn scheduled(amount: PaymentAmount, scheduled: DateTime<Utc>) -> Self {
        Self {
            amount,
            scheduled: Some(scheduled),
            repeat: None,
        }
    }

    /// Repeating charge.
    pub fn repeating(amount: PaymentAmount, repeat: PlanRepeat) -> Self {
        Self {
            amount,
            scheduled: None,
            repeat: Some(repeat),
        }
    }
}

/// Repeating pattern of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRepeat {
    /// First execution, defaults to now on the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<DateTime<Utc>>,
    /// Number of executions, unbounded when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    pub interval: RepeatInterval,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatInterval {
    pub unit: RepeatIntervalUnit,
    /// Defaults to 1 on the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatIntervalUnit {
    Day,
    Week,
    Month,
    Year,
}
