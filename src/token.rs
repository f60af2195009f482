use near_contract_standards::fungible_token::receiver::FungibleTokenReceiver;
use near_sdk::require;

use crate::*;

#[ext_contract(ext_ft)]
pub trait Ft {
    fn ft_transfer(&mut self, receiver_id: AccountId, amount: U128, memo: Option<String>);

    fn ft_transfer_call(
        &mut self,
        receiver_id: AccountId,
        amount: U128,
        memo: Option<String>,
        msg: String,
    ) -> Promise;
}

#[ext_contract(ext_self)]
trait SelfHandler {
    #[private]
    fn handle_retrieve_refund(&mut self, token_id: AccountId, amount: U128);
}

#[allow(dead_code)]
trait SelfHandler {
    fn handle_retrieve_refund(&mut self, token_id: AccountId, amount: U128);
}

#[near_bindgen]
impl FungibleTokenReceiver for Contract {
    /// Accepts a token deposit from any account. The token contract is the
    /// predecessor. All deposited tokens stay in the treasury reserve.
    fn ft_on_transfer(
        &mut self,
        sender_id: AccountId,
        amount: U128,
        msg: String,
    ) -> PromiseOrValue<U128> {
        require!(msg.is_empty(), "Unsupported message");
        let token_id = env::predecessor_account_id();
        self.reserve.credit(&token_id, amount.0);
        event::emit::token_deposit(&sender_id, &token_id, amount.0);

        // Unused tokens: 0.
        PromiseOrValue::Value(U128(0))
    }
}

#[near_bindgen]
impl Contract {
    /// Transfers the whole tracked reserve of `token_id` to governance.
    pub fn retrieve_tokens(&mut self, token_id: AccountId) -> Promise {
        self.assert_governance();
        let amount = self.reserve.balance_of(&token_id);
        if amount == 0 {
            env::panic_str("The treasury doesn't hold this token");
        }
        self.transfer_to_governance(token_id, amount)
    }

    /// Transfers exactly `amount` of `token_id` to governance.
    pub fn retrieve_tokens_exact(&mut self, token_id: AccountId, amount: U128) -> Promise {
        self.assert_governance();
        if amount.0 == 0 {
            env::panic_str("Amount should be positive");
        }
        self.transfer_to_governance(token_id, amount.0)
    }

    // Debits the reserve up front. The refund handler re-credits it if the
    // token contract fails the transfer, so the ledger never runs ahead of
    // the actual token balance.
    fn transfer_to_governance(&mut self, token_id: AccountId, amount: Balance) -> Promise {
        self.reserve.debit(&token_id, amount);
        event::emit::token_retrieve(&self.governance, &token_id, amount);

        ext_ft::ft_transfer(
            self.governance.clone(),
            amount.into(),
            None,
            token_id.clone(),
            ONE_YOCTO,
            GAS_FOR_FT_TRANSFER,
        )
        .then(ext_self::handle_retrieve_refund(
            token_id,
            amount.into(),
            env::current_account_id(),
            NO_DEPOSIT,
            GAS_FOR_REFUND_PROMISE,
        ))
    }

    /// Tracked reserve of one token.
    pub fn reserve_of(&self, token_id: AccountId) -> U128 {
        U128(self.reserve.balance_of(&token_id))
    }

    /// All tracked reserves.
    pub fn reserves(&self) -> Vec<(AccountId, U128)> {
        self.reserve.to_vec()
    }
}

#[near_bindgen]
impl SelfHandler for Contract {
    #[private]
    fn handle_retrieve_refund(&mut self, token_id: AccountId, amount: U128) {
        if !is_promise_success() {
            self.reserve.credit(&token_id, amount.0);
            env::log_str(&format!(
                "Returned {} of {} to the reserve after a failed transfer",
                amount.0, token_id
            ));
        }
    }
}
