pub mod borrow;
pub mod collateralization_ratio;
pub mod deposit_collateral;
pub mod get_position;
pub mod initialize;
pub mod max_additional_borrow;
pub mod repay;
pub mod reserve_balance;
pub mod set_pause;
pub mod utils;
pub mod withdraw_collateral;
