multiversx_sc::imports!();

use crate::errors::{ERR_INSUFFICIENT_FUNDS, ERR_INVALID_AMOUNT};

/// Pooled EGLD held by the contract.
///
/// `fundBalance` is the spendable amount: only `deposit` credits it and only
/// `pay_out` debits it.
#[multiversx_sc::module]
pub trait EscrowModule {
    // ========================================================
    // ENDPOINT: deposit
    // Anyone can fund the pool. Not tied to any issue.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(deposit)]
    fn deposit(&self) {
        let payment_amount = self.call_value().egld_value().clone_value();
        require!(payment_amount > 0u64, ERR_INVALID_AMOUNT);

        self.fund_balance().update(|balance| *balance += &payment_amount);
    }

    fn can_cover(&self, amount: &BigUint) -> bool {
        self.fund_balance().get() >= *amount
    }

    /// Debits the pool and sends `amount` to `receiver`.
    fn pay_out(&self, receiver: &ManagedAddress, amount: &BigUint) {
        let balance = self.fund_balance().get();
        require!(balance >= *amount, ERR_INSUFFICIENT_FUNDS);

        self.fund_balance().set(&(balance - amount));
        self.total_paid_out().update(|paid| *paid += amount);

        self.send().direct_egld(receiver, amount);
    }

    #[view(getFundBalance)]
    #[storage_mapper("fundBalance")]
    fn fund_balance(&self) -> SingleValueMapper<BigUint>;

    #[view(getTotalPaidOut)]
    #[storage_mapper("totalPaidOut")]
    fn total_paid_out(&self) -> SingleValueMapper<BigUint>;
}
