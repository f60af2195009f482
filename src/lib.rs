#![deny(warnings)]
mod event;
mod governance;
mod reserve;
mod token;
mod vault;

use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::collections::UnorderedMap;
use near_sdk::json_types::U128;
use near_sdk::{
    env, ext_contract, is_promise_success, near_bindgen, AccountId, Balance, BorshStorageKey, Gas,
    IntoStorageKey, PanicOnDefault, Promise, PromiseOrValue, ONE_YOCTO,
};

use reserve::Reserve;

const NO_DEPOSIT: Balance = 0;
const GAS_FOR_FT_TRANSFER: Gas = Gas(25_000_000_000_000);
const GAS_FOR_FT_TRANSFER_CALL: Gas = Gas(50_000_000_000_000);
const GAS_FOR_REFUND_PROMISE: Gas = Gas(5_000_000_000_000);

#[derive(BorshStorageKey, BorshSerialize)]
enum StorageKey {
    Reserve,
}

#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct Contract {
    governance: AccountId,
    pending_governance: Option<AccountId>,
    manager: AccountId,
    vault_id: AccountId,
    want_id: AccountId,
    reserve: Reserve,
}

#[near_bindgen]
impl Contract {
    /// Initializes the treasury with the given `governance` and `manager`.
    /// `vault_id` is the yield vault `enter_all` deploys into, `want_id` is
    /// the token that vault accepts.
    #[init]
    pub fn new(
        governance: AccountId,
        manager: AccountId,
        vault_id: AccountId,
        want_id: AccountId,
    ) -> Self {
        Self {
            governance,
            pending_governance: None,
            manager,
            vault_id,
            want_id,
            reserve: Reserve::new(StorageKey::Reserve),
        }
    }

    /// Accepts a native deposit from any account. Deposits are unrestricted;
    /// this method only exists so depositors get an event receipt.
    #[payable]
    pub fn deposit(&mut self) {
        let amount = env::attached_deposit();
        if amount == 0 {
            env::panic_str("Requires attached deposit");
        }
        event::emit::near_deposit(&env::predecessor_account_id(), amount);
    }

    /// Transfers the whole spendable native balance to governance.
    pub fn retrieve_near(&mut self) -> Promise {
        self.assert_governance();
        let amount = self.spendable_balance();
        if amount == 0 {
            env::panic_str("Nothing to retrieve");
        }
        event::emit::near_retrieve(&self.governance, amount);
        Promise::new(self.governance.clone()).transfer(amount)
    }

    /// Transfers exactly `amount` of native balance to governance.
    pub fn retrieve_near_exact(&mut self, amount: U128) -> Promise {
        self.assert_governance();
        if amount.0 == 0 {
            env::panic_str("Amount should be positive");
        }
        if amount.0 > self.spendable_balance() {
            env::panic_str("The treasury doesn't have enough balance");
        }
        event::emit::near_retrieve(&self.governance, amount.0);
        Promise::new(self.governance.clone()).transfer(amount.0)
    }

    pub fn version(&self) -> String {
        format!("{}:{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    // The account balance minus the storage stake. Retrieval must not drop
    // the account below what its state requires.
    fn spendable_balance(&self) -> Balance {
        let storage_floor = Balance::from(env::storage_usage()) * env::storage_byte_cost();
        env::account_balance().saturating_sub(storage_floor)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use near_sdk::test_utils::{accounts, VMContextBuilder};
    use near_sdk::{testing_env, ONE_NEAR};

    use super::*;

    pub fn get_context(predecessor_account_id: AccountId) -> VMContextBuilder {
        let mut builder = VMContextBuilder::new();
        builder
            .current_account_id(accounts(0))
            .signer_account_id(predecessor_account_id.clone())
            .predecessor_account_id(predecessor_account_id);
        builder
    }

    // gov = accounts(1), manager = accounts(2), vault = accounts(5),
    // want token = accounts(4)
    pub fn new_treasury() -> Contract {
        Contract::new(accounts(1), accounts(2), accounts(5), accounts(4))
    }

    #[test]
    fn test_new() {
        let context = get_context(accounts(1));
        testing_env!(context.build());
        let contract = new_treasury();
        assert_eq!(contract.governance(), accounts(1));
        assert_eq!(contract.pending_governance(), None);
        assert_eq!(contract.manager(), accounts(2));
        assert_eq!(contract.vault(), accounts(5));
        assert_eq!(contract.want(), accounts(4));
        assert_eq!(contract.reserves().len(), 0);
    }

    #[test]
    #[should_panic(expected = "The contract is not initialized")]
    fn test_default() {
        let context = get_context(accounts(1));
        testing_env!(context.build());
        let _contract = Contract::default();
    }

    #[test]
    fn test_deposit() {
        let mut context = get_context(accounts(3));
        testing_env!(context.build());
        let mut contract = new_treasury();
        testing_env!(context.attached_deposit(2 * ONE_NEAR).build());
        contract.deposit();
    }

    #[test]
    #[should_panic(expected = "Requires attached deposit")]
    fn test_deposit_nothing_attached() {
        let context = get_context(accounts(3));
        testing_env!(context.build());
        let mut contract = new_treasury();
        contract.deposit();
    }

    #[test]
    fn test_retrieve_near() {
        let mut context = get_context(accounts(1));
        testing_env!(context.build());
        let mut contract = new_treasury();
        testing_env!(context
            .storage_usage(1000)
            .account_balance(2 * ONE_NEAR)
            .build());
        contract.retrieve_near();
    }

    #[test]
    #[should_panic(expected = "This method can be called only by governance")]
    fn test_retrieve_near_not_governance() {
        let mut context = get_context(accounts(1));
        testing_env!(context.build());
        let mut contract = new_treasury();
        testing_env!(context.predecessor_account_id(accounts(3)).build());
        contract.retrieve_near();
    }

    #[test]
    fn test_retrieve_near_exact() {
        let mut context = get_context(accounts(1));
        testing_env!(context.build());
        let mut contract = new_treasury();
        testing_env!(context
            .storage_usage(1000)
            .account_balance(2 * ONE_NEAR)
            .build());
        contract.retrieve_near_exact(U128(ONE_NEAR));
    }

    #[test]
    #[should_panic(expected = "The treasury doesn't have enough balance")]
    fn test_retrieve_near_exact_too_much() {
        let mut context = get_context(accounts(1));
        testing_env!(context.build());
        let mut contract = new_treasury();
        testing_env!(context
            .storage_usage(1000)
            .account_balance(ONE_NEAR)
            .build());
        contract.retrieve_near_exact(U128(2 * ONE_NEAR));
    }

    #[test]
    #[should_panic(expected = "This method can be called only by governance")]
    fn test_retrieve_near_exact_not_governance() {
        let mut context = get_context(accounts(1));
        testing_env!(context.build());
        let mut contract = new_treasury();
        testing_env!(context.predecessor_account_id(accounts(3)).build());
        contract.retrieve_near_exact(U128(ONE_NEAR));
    }

    #[test]
    #[should_panic(expected = "Amount should be positive")]
    fn test_retrieve_near_exact_zero() {
        let mut context = get_context(accounts(1));
        testing_env!(context.build());
        let mut contract = new_treasury();
        testing_env!(context.account_balance(ONE_NEAR).build());
        contract.retrieve_near_exact(U128(0));
    }

    #[test]
    fn test_spendable_balance() {
        let mut context = get_context(accounts(1));
        testing_env!(context.build());
        let contract = new_treasury();
        let storage_floor = Balance::from(env::storage_usage()) * env::storage_byte_cost();
        testing_env!(context
            .storage_usage(env::storage_usage())
            .account_balance(storage_floor + ONE_NEAR)
            .build());
        assert_eq!(contract.spendable_balance(), ONE_NEAR);
    }

    #[test]
    fn test_version() {
        let context = get_context(accounts(1));
        testing_env!(context.build());
        let contract = new_treasury();
        assert!(contract.version().starts_with("treasury:"));
    }
}
