//! Console state: login form, auth flag, catalog, and selection.
//!
//! DESIGN
//! ======
//! `ConsoleState` is a plain struct with synchronous reducers. The
//! [`ConsoleStore`] seam lets the controller mutate it wherever it lives:
//! an `RwSignal` in the running app, an `Rc<RefCell<_>>` in tests.

#[cfg(test)]
#[path = "console_test.rs"]
mod console_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::net::types::{CredentialField, Credentials, Product};

/// Everything the console renders from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConsoleState {
    /// Login form contents, edited field by field.
    pub credentials: Credentials,
    /// Selects the catalog view over the login view.
    pub authenticated: bool,
    /// Last successfully fetched catalog.
    pub products: Vec<Product>,
    /// Set once a catalog fetch has been issued.
    pub catalog_requested: bool,
    /// Product shown in the detail pane.
    pub selected: Option<Product>,
}

impl ConsoleState {
    /// Merge one field into the credentials, leaving the other untouched.
    pub fn update_credential_field(&mut self, field: CredentialField, value: impl Into<String>) {
        let value = value.into();
        match field {
            CredentialField::Username => self.credentials.username = value,
            CredentialField::Password => self.credentials.password = value,
        }
    }

    /// Enter the authenticated state and wipe the login form.
    pub fn complete_login(&mut self) {
        self.authenticated = true;
        self.credentials = Credentials::default();
    }

    pub fn mark_catalog_requested(&mut self) {
        self.catalog_requested = true;
    }

    /// Replace the catalog wholesale.
    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Select a product from the current catalog by id, or clear with `None`.
    ///
    /// Returns `false` (and leaves the selection alone) when `id` is not in
    /// the catalog; a selection can only come from the list.
    pub fn select_product(&mut self, id: Option<&str>) -> bool {
        let Some(id) = id else {
            self.selected = None;
            return true;
        };
        match self.products.iter().find(|p| p.id == id) {
            Some(product) => {
                self.selected = Some(product.clone());
                true
            }
            None => false,
        }
    }

    /// Leave the authenticated state. Catalog contents are kept; they are
    /// replaced on the next login.
    pub fn logout(&mut self) {
        self.authenticated = false;
        self.selected = None;
    }
}

// =============================================================================
// STORE SEAM
// =============================================================================

/// Read/write access to a [`ConsoleState`] held somewhere else.
pub trait ConsoleStore {
    fn with_state<R>(&self, f: impl FnOnce(&ConsoleState) -> R) -> R;
    fn update_state(&self, f: impl FnOnce(&mut ConsoleState));

    fn snapshot(&self) -> ConsoleState {
        self.with_state(Clone::clone)
    }
}

impl ConsoleStore for RwSignal<ConsoleState> {
    fn with_state<R>(&self, f: impl FnOnce(&ConsoleState) -> R) -> R {
        self.with_untracked(f)
    }

    fn update_state(&self, f: impl FnOnce(&mut ConsoleState)) {
        self.update(f);
    }
}

impl ConsoleStore for Rc<RefCell<ConsoleState>> {
    fn with_state<R>(&self, f: impl FnOnce(&ConsoleState) -> R) -> R {
        f(&self.borrow())
    }

    fn update_state(&self, f: impl FnOnce(&mut ConsoleState)) {
        f(&mut self.borrow_mut());
    }
}
