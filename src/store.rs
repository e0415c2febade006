// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The transaction store: the only writer of the transaction collection.
//!
//! Every mutation rewrites the whole collection under [`TRANSACTIONS_KEY`].
//! Nothing is written until [`TransactionStore::load`] has run, so an empty
//! in-memory collection can never clobber what is already saved.

use crate::models::{NewTransaction, Transaction, TransactionId};
use crate::notify::{Notification, Notifier};
use crate::storage::{Storage, TRANSACTIONS_KEY};
use crate::utils::fmt_currency;
use log::{debug, error, info, warn};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read saved transactions: {0:#}")]
    Read(anyhow::Error),
    #[error("saved transactions are malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub fn encode(transactions: &[Transaction]) -> serde_json::Result<String> {
    serde_json::to_string(transactions)
}

pub fn decode(raw: &str) -> serde_json::Result<Vec<Transaction>> {
    serde_json::from_str(raw)
}

type Listener = Box<dyn FnMut(&[Transaction])>;

pub struct TransactionStore<S: Storage, N: Notifier> {
    storage: S,
    notifier: N,
    transactions: Vec<Transaction>,
    loaded: bool,
    listeners: Vec<Listener>,
}

impl<S: Storage, N: Notifier> TransactionStore<S, N> {
    /// An empty store that has not read from `storage` yet.
    pub fn new(storage: S, notifier: N) -> Self {
        Self {
            storage,
            notifier,
            transactions: Vec::new(),
            loaded: false,
            listeners: Vec::new(),
        }
    }

    /// Creates the store and loads the saved collection.
    pub fn open(storage: S, notifier: N) -> Self {
        let mut store = Self::new(storage, notifier);
        store.load();
        store
    }

    /// Reads the saved collection. On failure the store starts empty, the user
    /// is told, and the saved record is left as it is.
    pub fn load(&mut self) {
        if self.loaded {
            warn!("transaction store already loaded; ignoring second load");
            return;
        }
        match self.read_saved() {
            Ok(transactions) => {
                info!("loaded {} transactions", transactions.len());
                self.transactions = transactions;
            }
            Err(e) => {
                error!("{}", e);
                self.transactions.clear();
                self.notifier
                    .notify(Notification::error("Erro ao carregar transações salvas"));
            }
        }
        self.loaded = true;
    }

    fn read_saved(&self) -> Result<Vec<Transaction>, LoadError> {
        match self.storage.read(TRANSACTIONS_KEY).map_err(LoadError::Read)? {
            Some(raw) => Ok(decode(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn add(&mut self, new: NewTransaction) -> TransactionId {
        let id = Uuid::new_v4().to_string();
        let transaction = new.with_id(id.clone());
        debug!("add {} {} {}", transaction.id, transaction.r#type, transaction.amount);

        let title = format!("{} adicionada", transaction.r#type.label());
        let description = fmt_currency(&transaction.amount);
        self.transactions.push(transaction);

        self.commit(Notification::info(title).with_description(description));
        id
    }

    /// Replaces the transaction with the same id, keeping its position.
    /// Returns `false` and changes nothing when the id is unknown.
    pub fn update(&mut self, transaction: Transaction) -> bool {
        let Some(slot) = self.transactions.iter_mut().find(|t| t.id == transaction.id) else {
            warn!("update ignored: no transaction with id {}", transaction.id);
            return false;
        };
        debug!("update {}", transaction.id);
        *slot = transaction;
        self.commit(Notification::info("Transação atualizada"));
        true
    }

    /// Removes the transaction with `id`. Unknown ids are a no-op.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        if self.transactions.len() == before {
            warn!("delete ignored: no transaction with id {}", id);
            return false;
        }
        debug!("delete {}", id);
        self.commit(Notification::info("Transação excluída"));
        true
    }

    pub fn snapshot(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Registers a callback run with the new snapshot after every mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&[Transaction]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn commit(&mut self, notification: Notification) {
        self.persist();
        self.notifier.notify(notification);
        for listener in self.listeners.iter_mut() {
            listener(&self.transactions);
        }
    }

    fn persist(&mut self) {
        if !self.loaded {
            debug!("skipping save before load");
            return;
        }
        let result = encode(&self.transactions)
            .map_err(anyhow::Error::from)
            .and_then(|json| self.storage.write(TRANSACTIONS_KEY, &json));
        match result {
            Ok(()) => info!("saved {} transactions", self.transactions.len()),
            Err(e) => {
                error!("failed to save transactions: {:#}", e);
                self.notifier
                    .notify(Notification::warning("Falha ao salvar transações"));
            }
        }
    }
}
