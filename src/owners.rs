multiversx_sc::imports!();

use crate::errors::{
    ERR_DUPLICATE_OWNER, ERR_INVALID_OWNER, ERR_INVALID_THRESHOLD, ERR_NO_OWNERS,
    ERR_UNAUTHORIZED,
};

/// Fixed set of owners and the confirmation threshold.
/// Written once in `init`, read-only afterwards.
#[multiversx_sc::module]
pub trait OwnersModule {
    fn init_owners(&self, threshold: usize, owners: MultiValueEncoded<ManagedAddress>) {
        for owner in owners.into_iter() {
            require!(!owner.is_zero(), ERR_INVALID_OWNER);
            require!(self.owners().insert(owner), ERR_DUPLICATE_OWNER);
        }

        let owner_count = self.owners().len();
        require!(owner_count > 0, ERR_NO_OWNERS);
        require!(
            threshold >= 1 && threshold <= owner_count,
            ERR_INVALID_THRESHOLD
        );

        self.threshold().set(threshold);
    }

    fn require_caller_owner(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(self.is_owner(&caller), ERR_UNAUTHORIZED);
        caller
    }

    #[view(getOwners)]
    fn get_owners(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for owner in self.owners().iter() {
            result.push(owner);
        }
        result
    }

    #[view(isOwner)]
    fn is_owner(&self, address: &ManagedAddress) -> bool {
        self.owners().contains(address)
    }

    #[view(getThreshold)]
    #[storage_mapper("threshold")]
    fn threshold(&self) -> SingleValueMapper<usize>;

    /// Insertion order is preserved since owners are never removed.
    #[storage_mapper("owners")]
    fn owners(&self) -> UnorderedSetMapper<ManagedAddress>;
}
