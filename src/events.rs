multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("issueCreated")]
    fn issue_created_event(
        &self,
        #[indexed] external_id: &ManagedBuffer,
        #[indexed] creator: &ManagedAddress,
        requested_amount: &BigUint,
    );

    #[event("executorSet")]
    fn executor_set_event(
        &self,
        #[indexed] external_id: &ManagedBuffer,
        #[indexed] executor: &ManagedAddress,
    );

    #[event("issueConfirmed")]
    fn issue_confirmed_event(
        &self,
        #[indexed] external_id: &ManagedBuffer,
        #[indexed] owner: &ManagedAddress,
        confirmations: usize,
    );

    #[event("issueExecuted")]
    fn issue_executed_event(
        &self,
        #[indexed] external_id: &ManagedBuffer,
        #[indexed] executor: &ManagedAddress,
        amount: &BigUint,
    );

    /// Quorum reached but the pool cannot cover the request yet.
    #[event("payoutPending")]
    fn payout_pending_event(
        &self,
        #[indexed] external_id: &ManagedBuffer,
        requested_amount: &BigUint,
    );
}
