pub mod account_position;
pub mod accrual_policy;
pub mod error;
pub mod position_view;
