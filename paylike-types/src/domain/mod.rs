//! Domain models for the payment flow.

pub mod card;
pub mod hints;
pub mod money;
pub mod plan;
pub mod test_scenario;
pub mod unplanned;

pub use card::{ApplePayToken, CardExpiry, CardToken, PaymentCard};
pub use hints::Hints;
pub use money::{MAX_SAFE_INTEGER, PaymentAmount};
pub use plan::{PaymentPlan, PlanRepeat, RepeatInterval, RepeatIntervalUnit};
pub use test_scenario::{
    CardCodeOption, CardSchemeOption, CardStatusOption, FingerprintOption, PaymentTest,
    TdsFingerprintOption, TdsStatusOption, TestCard, TestTds,
};
pub use unplanned::PaymentUnplanned;
