//! Per-call context threaded into every slot run
//!
//! The context is opaque to the registry. It carries the seedable random
//! source randomized implementations draw from, and the optional parameters
//! attached to the slot selection that resolved the implementation.

use serde_json::Value;

use crate::rng::SimpleRng;

#[derive(Debug, Clone, Default)]
pub struct SlotContext {
    rng: SimpleRng,
    params: Option<Value>,
}

impl SlotContext {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            params: None,
        }
    }

    /// Attach selection parameters
    pub fn with_params(mut self, params: Option<Value>) -> Self {
        self.params = params;
        self
    }

    pub fn rng(&mut self) -> &mut SimpleRng {
        &mut self.rng
    }

    pub fn params(&self) -> Option<&Value> {
        self.params.as_ref()
    }

    /// Numeric parameter by key, if present
    pub fn param_f64(&self, key: &str) -> Option<f64> {
        self.params.as_ref()?.get(key)?.as_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_draws() {
        let mut a = SlotContext::new(9);
        let mut b = SlotContext::new(9);
        assert_eq!(a.rng().next_u32(), b.rng().next_u32());
    }

    #[test]
    fn params_are_readable() {
        let ctx = SlotContext::new(1).with_params(Some(serde_json::json!({ "multiplier": 2 })));
        assert_eq!(ctx.param_f64("multiplier"), Some(2.0));
        assert_eq!(ctx.param_f64("missing"), None);
        assert!(SlotContext::default().params().is_none());
    }
}
