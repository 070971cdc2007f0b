/// Returns the number of whole periods between `last_accrual` and `current_time`.
/// A clock behind `last_accrual` yields zero.
pub fn get_elapsed_periods(last_accrual: u64, current_time: u64, period_length: u64) -> u64 {
    current_time
        .checked_sub(last_accrual)
        .and_then(|elapsed| elapsed.checked_div(period_length))
        .unwrap_or(0)
}
