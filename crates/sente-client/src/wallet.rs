//! Wallet connection state.
//!
//! One writer (connect/disconnect), any number of readers. Readers hold a
//! `watch::Receiver` and are woken on every change instead of re-checking
//! the wallet on a timer.

use crate::error::{ClarityError, ClientError};
use crate::principal::StandardPrincipal;
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WalletState {
    #[default]
    Disconnected,
    Connected { address: StandardPrincipal },
}

impl WalletState {
    pub fn address(&self) -> Option<&StandardPrincipal> {
        match self {
            WalletState::Connected { address } => Some(address),
            WalletState::Disconnected => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.address().is_some()
    }
}

#[derive(Debug)]
pub struct WalletSession {
    tx: watch::Sender<WalletState>,
}

impl Default for WalletSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletSession {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(WalletState::Disconnected);
        Self { tx }
    }

    /// Session already connected to `address`.
    pub fn connected(address: StandardPrincipal) -> Self {
        let (tx, _rx) = watch::channel(WalletState::Connected { address });
        Self { tx }
    }

    /// Validate `address` and publish the connected state.
    pub fn connect(&self, address: &str) -> Result<StandardPrincipal, ClarityError> {
        let principal: StandardPrincipal = address.trim().parse()?;
        self.tx.send_replace(WalletState::Connected {
            address: principal.clone(),
        });
        log::debug!("wallet connected: {}", principal);
        Ok(principal)
    }

    pub fn disconnect(&self) {
        let changed = self.tx.send_if_modified(|state| {
            if state.is_connected() {
                *state = WalletState::Disconnected;
                true
            } else {
                false
            }
        });
        if changed {
            log::debug!("wallet disconnected");
        }
    }

    pub fn state(&self) -> WalletState {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<WalletState> {
        self.tx.subscribe()
    }

    /// Connected address, or `WalletNotConnected`.
    pub fn require_address(&self) -> Result<StandardPrincipal, ClientError> {
        self.tx
            .borrow()
            .address()
            .cloned()
            .ok_or(ClientError::WalletNotConnected)
    }
}
