pub mod emit {
    use near_sdk::serde_json::json;

    use crate::*;

    const EVENT_STANDARD: &str = "treasury";
    const EVENT_STANDARD_VERSION: &str = "1.0.0";

    fn log_event(event: &str, data: near_sdk::serde_json::Value) {
        let event = json!({
            "standard": EVENT_STANDARD,
            "version": EVENT_STANDARD_VERSION,
            "event": event,
            "data": [data],
        });
        env::log_str(&format!("EVENT_JSON:{}", event));
    }

    pub fn near_deposit(sender_id: &AccountId, amount: Balance) {
        log_event(
            "near_deposit",
            json!({ "sender_id": sender_id, "amount": U128(amount) }),
        );
    }

    pub fn near_retrieve(receiver_id: &AccountId, amount: Balance) {
        log_event(
            "near_retrieve",
            json!({ "receiver_id": receiver_id, "amount": U128(amount) }),
        );
    }

    pub fn token_deposit(sender_id: &AccountId, token_id: &AccountId, amount: Balance) {
        log_event(
            "token_deposit",
            json!({ "sender_id": sender_id, "token_id": token_id, "amount": U128(amount) }),
        );
    }

    pub fn token_retrieve(receiver_id: &AccountId, token_id: &AccountId, amount: Balance) {
        log_event(
            "token_retrieve",
            json!({ "receiver_id": receiver_id, "token_id": token_id, "amount": U128(amount) }),
        );
    }

    pub fn governance_proposed(governance: &AccountId, pending_governance: &AccountId) {
        log_event(
            "governance_proposed",
            json!({ "governance": governance, "pending_governance": pending_governance }),
        );
    }

    pub fn governance_accepted(old_governance: &AccountId, new_governance: &AccountId) {
        log_event(
            "governance_accepted",
            json!({ "old_governance": old_governance, "new_governance": new_governance }),
        );
    }

    pub fn enter_all(vault_id: &AccountId, token_id: &AccountId, amount: Balance) {
        log_event(
            "enter_all",
            json!({ "vault_id": vault_id, "token_id": token_id, "amount": U128(amount) }),
        );
    }
}
