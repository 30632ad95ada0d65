// ============================================================
// Error messages — surfaced verbatim to the caller
// ============================================================

pub const ERR_UNAUTHORIZED: &str = "Unauthorized";
pub const ERR_ISSUE_NOT_FOUND: &str = "Issue not found";
pub const ERR_DUPLICATE_ISSUE: &str = "Issue already exists";
pub const ERR_INVALID_AMOUNT: &str = "Invalid amount";
pub const ERR_ALREADY_EXECUTED: &str = "Issue already executed";
pub const ERR_ALREADY_CONFIRMED: &str = "Already confirmed";
pub const ERR_INSUFFICIENT_FUNDS: &str = "Insufficient funds";

pub const ERR_EMPTY_ISSUE_ID: &str = "Empty issue id";
pub const ERR_INVALID_EXECUTOR: &str = "Invalid executor address";
pub const ERR_QUORUM_NOT_REACHED: &str = "Quorum not reached";
pub const ERR_EXECUTOR_NOT_SET: &str = "Executor not set";

// ── Construction ──

pub const ERR_NO_OWNERS: &str = "No owners";
pub const ERR_INVALID_OWNER: &str = "Invalid owner address";
pub const ERR_DUPLICATE_OWNER: &str = "Duplicate owner";
pub const ERR_INVALID_THRESHOLD: &str = "Invalid threshold";
