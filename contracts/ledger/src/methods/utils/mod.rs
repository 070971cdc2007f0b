pub mod accrual;
pub mod custody;
pub mod get_elapsed_periods;
pub mod validation;
