use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,
    Paused = 2,

    InvalidAmount = 100,
    InvalidAssets = 101,

    ExceedsBorrowLimit = 200,
    DebtOutstanding = 201,
    NoCollateral = 202,
    NoActiveLoan = 203,

    InsufficientBalance = 300,
    InsufficientAllowance = 301,
    InsufficientLiquidity = 302,
    TransferFailed = 303,

    MathOverflowError = 400,
    MustBeNonNegative = 401,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorCategory {
    Configuration,
    Validation,
    Invariant,
    Collaborator,
    Math,
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match *self as u32 {
            0..=99 => ErrorCategory::Configuration,
            100..=199 => ErrorCategory::Validation,
            200..=299 => ErrorCategory::Invariant,
            300..=399 => ErrorCategory::Collaborator,
            _ => ErrorCategory::Math,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            Error::AlreadyInitialized => "already initialized",
            Error::Uninitialized => "not initialized",
            Error::Paused => "ledger paused",
            Error::InvalidAmount => "amount must be positive",
            Error::InvalidAssets => "collateral and loan assets must differ",
            Error::ExceedsBorrowLimit => "exceeds borrowing limit",
            Error::DebtOutstanding => "debt outstanding",
            Error::NoCollateral => "no collateral",
            Error::NoActiveLoan => "no active loan",
            Error::InsufficientBalance => "insufficient balance",
            Error::InsufficientAllowance => "insufficient allowance",
            Error::InsufficientLiquidity => "insufficient liquidity",
            Error::TransferFailed => "transfer failed",
            Error::MathOverflowError => "math overflow",
            Error::MustBeNonNegative => "must be non-negative",
        }
    }
}
