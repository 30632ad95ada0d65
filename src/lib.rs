#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod escrow;
pub mod events;
pub mod owners;
pub mod tree_planting_dao_proxy;
pub mod types;

use errors::{
    ERR_ALREADY_CONFIRMED, ERR_ALREADY_EXECUTED, ERR_DUPLICATE_ISSUE, ERR_EMPTY_ISSUE_ID,
    ERR_EXECUTOR_NOT_SET, ERR_INSUFFICIENT_FUNDS, ERR_INVALID_AMOUNT, ERR_INVALID_EXECUTOR,
    ERR_ISSUE_NOT_FOUND, ERR_QUORUM_NOT_REACHED,
};
use types::Issue;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait TreePlantingDao:
    owners::OwnersModule + escrow::EscrowModule + events::EventsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// Owners come last since variadic arguments must close the argument list.
    #[init]
    fn init(&self, threshold: usize, owners: MultiValueEncoded<ManagedAddress>) {
        self.init_owners(threshold, owners);
    }

    /// Owners and threshold are fixed for the lifetime of the contract.
    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createIssue
    // ========================================================

    #[endpoint(createIssue)]
    fn create_issue(
        &self,
        external_id: ManagedBuffer,
        requested_amount: BigUint,
        description: ManagedBuffer,
    ) {
        let caller = self.require_caller_owner();
        require!(!external_id.is_empty(), ERR_EMPTY_ISSUE_ID);
        require!(self.issues(&external_id).is_empty(), ERR_DUPLICATE_ISSUE);
        require!(requested_amount > 0u64, ERR_INVALID_AMOUNT);

        let timestamp = self.blockchain().get_block_timestamp();
        let issue = Issue::new(
            external_id.clone(),
            description,
            requested_amount.clone(),
            caller.clone(),
            timestamp,
        );

        self.issues(&external_id).set(&issue);
        self.issue_ids().insert(external_id.clone());

        self.issue_created_event(&external_id, &caller, &requested_amount);
    }

    // ========================================================
    // ENDPOINT: setIssueExecutor
    // Overwritable until the issue is executed.
    // ========================================================

    #[endpoint(setIssueExecutor)]
    fn set_issue_executor(&self, external_id: ManagedBuffer, executor: ManagedAddress) {
        self.require_caller_owner();
        let mut issue = self.require_issue(&external_id);
        require!(!issue.is_executed(), ERR_ALREADY_EXECUTED);
        require!(!executor.is_zero(), ERR_INVALID_EXECUTOR);

        issue.assign_executor(executor.clone());
        self.issues(&external_id).set(&issue);

        self.executor_set_event(&external_id, &executor);
    }

    // ========================================================
    // ENDPOINT: confirmIssue
    // Records the caller's confirmation. The confirmation that
    // brings the issue to quorum also releases the funds, if
    // an executor is set and the pool can cover the request.
    // ========================================================

    #[endpoint(confirmIssue)]
    fn confirm_issue(&self, external_id: ManagedBuffer) {
        let caller = self.require_caller_owner();
        let mut issue = self.require_issue(&external_id);
        require!(!issue.is_executed(), ERR_ALREADY_EXECUTED);
        require!(
            self.confirmed_by(&external_id).insert(caller.clone()),
            ERR_ALREADY_CONFIRMED
        );

        issue.record_confirmation(self.confirmed_by(&external_id).len());
        self.issue_confirmed_event(&external_id, &caller, issue.confirmations);

        if !issue.is_releasable(self.threshold().get()) {
            self.issues(&external_id).set(&issue);
            return;
        }

        if !self.can_cover(&issue.requested_amount) {
            self.issues(&external_id).set(&issue);
            self.payout_pending_event(&external_id, &issue.requested_amount);
            return;
        }

        self.release(&mut issue);
    }

    // ========================================================
    // ENDPOINT: executeIssue
    // Retries a payout left pending: quorum reached before the
    // pool was funded, or before an executor was assigned.
    // ========================================================

    #[endpoint(executeIssue)]
    fn execute_issue(&self, external_id: ManagedBuffer) {
        self.require_caller_owner();
        let mut issue = self.require_issue(&external_id);
        require!(!issue.is_executed(), ERR_ALREADY_EXECUTED);
        require!(
            issue.has_quorum(self.threshold().get()),
            ERR_QUORUM_NOT_REACHED
        );
        require!(issue.executor.is_some(), ERR_EXECUTOR_NOT_SET);
        require!(
            self.can_cover(&issue.requested_amount),
            ERR_INSUFFICIENT_FUNDS
        );

        self.release(&mut issue);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_issue(&self, external_id: &ManagedBuffer) -> Issue<Self::Api> {
        let mapper = self.issues(external_id);
        require!(!mapper.is_empty(), ERR_ISSUE_NOT_FOUND);
        mapper.get()
    }

    /// Marks the issue executed, then pays the executor. Runs at most once per issue.
    fn release(&self, issue: &mut Issue<Self::Api>) {
        let executor = match &issue.executor {
            Some(executor) => executor.clone(),
            None => sc_panic!(ERR_EXECUTOR_NOT_SET),
        };

        issue.mark_executed();
        self.issues(&issue.external_id).set(&*issue);

        self.pay_out(&executor, &issue.requested_amount);
        self.issue_executed_event(&issue.external_id, &executor, &issue.requested_amount);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getIssue)]
    fn get_issue(&self, external_id: ManagedBuffer) -> Issue<Self::Api> {
        self.require_issue(&external_id)
    }

    #[view(isIssueExecuted)]
    fn is_issue_executed(&self, external_id: ManagedBuffer) -> bool {
        self.require_issue(&external_id).is_executed()
    }

    #[view(getIssueCount)]
    fn get_issue_count(&self) -> usize {
        self.issue_ids().len()
    }

    /// Issues in creation order, `from` is 1-based.
    #[view(getIssues)]
    fn get_issues(&self, from: usize, count: usize) -> MultiValueEncoded<Issue<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        if count == 0 {
            return result;
        }
        let total = self.issue_ids().len();
        let start = if from == 0 { 1 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for index in start..=end {
            let external_id = self.issue_ids().get_by_index(index);
            result.push(self.issues(&external_id).get());
        }
        result
    }

    #[view(getPendingIssues)]
    fn get_pending_issues(&self) -> MultiValueEncoded<Issue<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for external_id in self.issue_ids().iter() {
            let issue = self.issues(&external_id).get();
            if !issue.is_executed() {
                result.push(issue);
            }
        }
        result
    }

    #[view(getConfirmations)]
    fn get_confirmations(&self, external_id: ManagedBuffer) -> MultiValueEncoded<ManagedAddress> {
        self.require_issue(&external_id);

        let mut result = MultiValueEncoded::new();
        for owner in self.confirmed_by(&external_id).iter() {
            result.push(owner);
        }
        result
    }

    #[view(hasConfirmed)]
    fn has_confirmed(&self, external_id: ManagedBuffer, owner: ManagedAddress) -> bool {
        self.require_issue(&external_id);
        self.confirmed_by(&external_id).contains(&owner)
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("issues")]
    fn issues(&self, external_id: &ManagedBuffer) -> SingleValueMapper<Issue<Self::Api>>;

    #[storage_mapper("issueIds")]
    fn issue_ids(&self) -> UnorderedSetMapper<ManagedBuffer>;

    #[storage_mapper("confirmedBy")]
    fn confirmed_by(&self, external_id: &ManagedBuffer) -> UnorderedSetMapper<ManagedAddress>;
}
