
mod repay;
