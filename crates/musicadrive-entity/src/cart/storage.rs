//! Serialization boundary for client-local cart persistence.
//!
//! The owning session stores the cart under a fixed namespace key after
//! every change and restores it on startup. A missing or corrupt payload
//! silently falls back to an empty cart with the default capacity.

use super::state::CartState;

/// Namespace key under which the cart is stored.
pub const STORAGE_KEY: &str = "musicadrive-cart";

/// Serialize the cart for client-local storage.
pub fn save(state: &CartState) -> Result<String, musicadrive_core::AppError> {
    serde_json::to_string(state).map_err(Into::into)
}

/// Restore a cart from a previously stored payload.
///
/// `None` or unparseable input yields the default cart.
pub fn restore(payload: Option<&str>) -> CartState {
    payload
        .and_then(|raw| serde_json::from_str(raw).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::action::CartAction;
    use crate::pendrive::PendriveSize;

    #[test]
    fn test_save_restore_round_trip() {
        let cart = CartState::new().apply(CartAction::SetPendriveSize {
            size: PendriveSize::Gb32,
        });
        let payload = save(&cart).unwrap();
        assert_eq!(restore(Some(&payload)), cart);
    }

    #[test]
    fn test_missing_payload_falls_back_to_default() {
        let cart = restore(None);
        assert!(cart.is_empty());
        assert_eq!(cart.pendrive_size, PendriveSize::Gb16);
    }

    #[test]
    fn test_corrupt_payload_falls_back_silently() {
        let cart = restore(Some("{not json"));
        assert_eq!(cart, CartState::new());
    }
}
