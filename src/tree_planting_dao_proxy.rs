use multiversx_sc::proxy_imports::*;

use crate::types::Issue;

pub struct TreePlantingDaoProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for TreePlantingDaoProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = TreePlantingDaoProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        TreePlantingDaoProxyMethods { wrapped_tx: tx }
    }
}

pub struct TreePlantingDaoProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> TreePlantingDaoProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<usize>,
        Arg1: ProxyArg<MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>,
    >(
        self,
        threshold: Arg0,
        owners: Arg1,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&threshold)
            .argument(&owners)
            .original_result()
    }
}

impl<Env, From, To, Gas> TreePlantingDaoProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(
        self,
    ) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

impl<Env, From, To, Gas> TreePlantingDaoProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn create_issue<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        external_id: Arg0,
        requested_amount: Arg1,
        description: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createIssue")
            .argument(&external_id)
            .argument(&requested_amount)
            .argument(&description)
            .original_result()
    }

    pub fn set_issue_executor<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        external_id: Arg0,
        executor: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setIssueExecutor")
            .argument(&external_id)
            .argument(&executor)
            .original_result()
    }

    pub fn confirm_issue<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        external_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("confirmIssue")
            .argument(&external_id)
            .original_result()
    }

    pub fn execute_issue<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        external_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("executeIssue")
            .argument(&external_id)
            .original_result()
    }

    pub fn get_issue<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        external_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Issue<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getIssue")
            .argument(&external_id)
            .original_result()
    }

    pub fn is_issue_executed<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        external_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isIssueExecuted")
            .argument(&external_id)
            .original_result()
    }

    pub fn get_issue_count(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, usize> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getIssueCount")
            .original_result()
    }

    pub fn get_issues<
        Arg0: ProxyArg<usize>,
        Arg1: ProxyArg<usize>,
    >(
        self,
        from: Arg0,
        count: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, Issue<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getIssues")
            .argument(&from)
            .argument(&count)
            .original_result()
    }

    pub fn get_pending_issues(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, Issue<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPendingIssues")
            .original_result()
    }

    pub fn get_confirmations<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        external_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getConfirmations")
            .argument(&external_id)
            .original_result()
    }

    pub fn has_confirmed<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        external_id: Arg0,
        owner: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("hasConfirmed")
            .argument(&external_id)
            .argument(&owner)
            .original_result()
    }

    pub fn get_owners(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getOwners")
            .original_result()
    }

    pub fn is_owner<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isOwner")
            .argument(&address)
            .original_result()
    }

    pub fn threshold(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, usize> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getThreshold")
            .original_result()
    }

    pub fn deposit(
        self,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("deposit")
            .original_result()
    }

    pub fn fund_balance(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getFundBalance")
            .original_result()
    }

    pub fn total_paid_out(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalPaidOut")
            .original_result()
    }
}
