use near_sdk::PromiseResult;

use crate::*;

use crate::token::ext_ft;

// The vault mints its shares to the sender of `ft_transfer_call`, so a bare
// transfer with an empty message is the whole deposit protocol.
const VAULT_DEPOSIT_ACTION: &str = "";

#[ext_contract(ext_self)]
trait SelfHandler {
    #[private]
    fn handle_enter_refund(&mut self, amount: U128);
}

#[allow(dead_code)]
trait SelfHandler {
    fn handle_enter_refund(&mut self, amount: U128);
}

#[near_bindgen]
impl Contract {
    /// Deploys the whole tracked reserve of the want token into the vault.
    /// Only can be called by governance or manager.
    pub fn enter_all(&mut self) -> Promise {
        self.assert_manager_or_governance();
        let amount = self.reserve.balance_of(&self.want_id);
        if amount == 0 {
            env::panic_str("Nothing to deploy into the vault");
        }
        self.reserve.debit(&self.want_id, amount);
        event::emit::enter_all(&self.vault_id, &self.want_id, amount);

        ext_ft::ft_transfer_call(
            self.vault_id.clone(),
            amount.into(),
            None,
            VAULT_DEPOSIT_ACTION.into(),
            self.want_id.clone(),
            ONE_YOCTO,
            GAS_FOR_FT_TRANSFER_CALL,
        )
        .then(ext_self::handle_enter_refund(
            amount.into(),
            env::current_account_id(),
            NO_DEPOSIT,
            GAS_FOR_REFUND_PROMISE,
        ))
    }

    pub fn vault(&self) -> AccountId {
        self.vault_id.clone()
    }

    pub fn want(&self) -> AccountId {
        self.want_id.clone()
    }
}

#[near_bindgen]
impl SelfHandler for Contract {
    // `ft_transfer_call` resolves to the amount the vault kept. Anything it
    // refused comes back to the treasury's token balance, so it goes back
    // into the reserve as well.
    #[private]
    fn handle_enter_refund(&mut self, amount: U128) {
        let used = match env::promise_result(0) {
            PromiseResult::Successful(value) => near_sdk::serde_json::from_slice::<U128>(&value)
                .map(|used| used.0)
                .unwrap_or(amount.0),
            _ => 0,
        };
        let unused = amount.0.saturating_sub(used);
        if unused > 0 {
            self.reserve.credit(&self.want_id, unused);
            env::log_str(&format!(
                "Returned {} of {} to the reserve after vault entry",
                unused, self.want_id
            ));
        }
    }
}
