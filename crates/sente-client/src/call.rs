//! Contract-call requests handed to an external wallet.
//!
//! The client never holds keys. A state-changing pool operation ends as a
//! [`ContractCallRequest`] that the wallet signs, broadcasts, and answers
//! with a txid to track via [`crate::tx::wait_for_transaction`].

use crate::clarity::ClarityValue;
use crate::error::ClarityError;
use crate::network::Network;
use crate::principal::{ContractPrincipal, StandardPrincipal};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostConditionMode {
    /// Transfers not covered by an explicit post-condition are permitted
    #[default]
    Allow,
    Deny,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractCallRequest {
    pub contract_address: String,
    pub contract_name: String,
    pub function_name: String,
    /// Hex-encoded Clarity arguments, in call order
    pub function_args: Vec<String>,
    pub network: Network,
    pub post_condition_mode: PostConditionMode,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stx_address: Option<String>,
}

impl ContractCallRequest {
    pub fn new(
        contract: &ContractPrincipal,
        function_name: &str,
        args: &[ClarityValue],
        network: Network,
    ) -> Result<Self, ClarityError> {
        Ok(Self {
            contract_address: contract.issuer.to_string(),
            contract_name: contract.name.clone(),
            function_name: function_name.to_string(),
            function_args: args
                .iter()
                .map(ClarityValue::to_hex)
                .collect::<Result<_, _>>()?,
            network,
            post_condition_mode: PostConditionMode::default(),
            stx_address: None,
        })
    }

    pub fn with_sender(mut self, sender: &StandardPrincipal) -> Self {
        self.stx_address = Some(sender.to_string());
        self
    }

    pub fn with_post_condition_mode(mut self, mode: PostConditionMode) -> Self {
        self.post_condition_mode = mode;
        self
    }

    /// Decode the hex arguments back into values, for display.
    pub fn decoded_args(&self) -> Result<Vec<ClarityValue>, ClarityError> {
        self.function_args
            .iter()
            .map(|a| ClarityValue::from_hex(a))
            .collect()
    }
}
