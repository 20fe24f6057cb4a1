use soroban_sdk::contracterror;

/// Every failure a pool entry point can report.
///
/// Returning any of these aborts the invocation and the host discards all
/// storage writes and transfers made so far in the call.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    /// `initialize` called twice
    AlreadyInitialized = 1,
    /// Entry point used before `initialize`
    NotInitialized = 2,
    /// Currency and token must be different asset contracts
    InvalidConfig = 3,

    /// Amount must be positive
    InvalidAmount = 10,
    /// Caller lacks the funds or shares the operation must take
    InsufficientBalance = 11,
    /// Reserves cannot price the operation
    InsufficientLiquidity = 12,

    /// Post-state would break reserve proportionality
    InvariantViolation = 20,
    /// Output worse than the caller's bound
    SlippageExceeded = 21,

    /// Entry attempted while another mutating call holds the pool
    ReentrancyBlocked = 30,

    /// An asset contract call did not succeed
    TransferFailed = 40,
}
