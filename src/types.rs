multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Issue Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum IssueStatus {
    /// Created by an owner. No executor, no confirmations yet.
    Created,
    /// Executor assigned, nobody has confirmed yet.
    ExecutorAssigned,
    /// At least one owner confirmed. Payout still pending.
    Confirming,
    /// Funds sent to the executor. Terminal state.
    Executed,
}

// ============================================================
// Issue — a funding request keyed by its external id
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Issue<M: ManagedTypeApi> {
    pub external_id: ManagedBuffer<M>,
    pub description: ManagedBuffer<M>,
    pub requested_amount: BigUint<M>,
    /// Receiver of the payout. `None` until an owner assigns one.
    pub executor: Option<ManagedAddress<M>>,
    pub creator: ManagedAddress<M>,
    pub created_at: u64,
    /// Always equal to the size of the issue's confirmation set.
    pub confirmations: usize,
    pub status: IssueStatus,
}

impl<M: ManagedTypeApi> Issue<M> {
    pub fn new(
        external_id: ManagedBuffer<M>,
        description: ManagedBuffer<M>,
        requested_amount: BigUint<M>,
        creator: ManagedAddress<M>,
        created_at: u64,
    ) -> Self {
        Issue {
            external_id,
            description,
            requested_amount,
            executor: None,
            creator,
            created_at,
            confirmations: 0,
            status: IssueStatus::Created,
        }
    }

    pub fn is_executed(&self) -> bool {
        self.status == IssueStatus::Executed
    }

    pub fn has_quorum(&self, threshold: usize) -> bool {
        self.confirmations >= threshold
    }

    /// Quorum reached, executor known and not paid yet.
    pub fn is_releasable(&self, threshold: usize) -> bool {
        !self.is_executed() && self.executor.is_some() && self.has_quorum(threshold)
    }

    pub fn assign_executor(&mut self, executor: ManagedAddress<M>) {
        self.executor = Some(executor);
        if self.status == IssueStatus::Created {
            self.status = IssueStatus::ExecutorAssigned;
        }
    }

    pub fn record_confirmation(&mut self, confirmations: usize) {
        self.confirmations = confirmations;
        self.status = IssueStatus::Confirming;
    }

    pub fn mark_executed(&mut self) {
        self.status = IssueStatus::Executed;
    }
}
