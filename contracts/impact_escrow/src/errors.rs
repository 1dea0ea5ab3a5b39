use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ImpactError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    NotFound = 4,
    InvalidInput = 5,
    AlreadySubmitted = 6,
    AlreadyVerified = 7,
    OutOfOrder = 8,
    ProofMissing = 9,
    InsufficientEscrow = 10,
    AlreadyCompleted = 11,
    TargetExceeded = 12,
    Overflow = 13,
}
