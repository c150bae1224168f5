//! Registration profile and saved route for the taxi-ordering flow.
//!
//! # Responsibility
//! - Persist and restore the user profile and route over an injected
//!   key/value store, using the original preference key names.
//! - Decide registration state and whether a taxi can be called.
//!
//! # Invariants
//! - A profile counts as registered only when all three fields are non-empty.
//! - A route is complete when both street fields are non-empty.

use crate::prefs::KeyValueStore;
use serde::{Deserialize, Serialize};

const KEY_PHONE: &str = "phone";
const KEY_FIRST_NAME: &str = "first_name";
const KEY_LAST_NAME: &str = "last_name";

const KEY_ROUTE_START_STREET: &str = "route_start_street";
const KEY_ROUTE_START_HOUSE: &str = "route_start_house";
const KEY_ROUTE_START_APARTMENT: &str = "route_start_apartment";
const KEY_ROUTE_END_STREET: &str = "route_end_street";
const KEY_ROUTE_END_HOUSE: &str = "route_end_house";
const KEY_ROUTE_END_APARTMENT: &str = "route_end_apartment";

/// Registered rider identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
}

impl UserProfile {
    /// All three fields filled in; gates the login-vs-register screen.
    pub fn is_registered(&self) -> bool {
        !self.phone.is_empty() && !self.first_name.is_empty() && !self.last_name.is_empty()
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) {
        store.set(KEY_PHONE, &self.phone);
        store.set(KEY_FIRST_NAME, &self.first_name);
        store.set(KEY_LAST_NAME, &self.last_name);
    }

    /// Restores the profile; missing keys read as empty fields.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self {
            phone: store.get(KEY_PHONE).unwrap_or_default(),
            first_name: store.get(KEY_FIRST_NAME).unwrap_or_default(),
            last_name: store.get(KEY_LAST_NAME).unwrap_or_default(),
        }
    }
}

/// One end of a route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteAddress {
    pub street: String,
    pub house: String,
    pub apartment: String,
}

/// Saved pickup/dropoff pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub start: RouteAddress,
    pub end: RouteAddress,
}

impl Route {
    /// Both street fields present; enables the call-taxi action.
    pub fn is_complete(&self) -> bool {
        !self.start.street.is_empty() && !self.end.street.is_empty()
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) {
        store.set(KEY_ROUTE_START_STREET, &self.start.street);
        store.set(KEY_ROUTE_START_HOUSE, &self.start.house);
        store.set(KEY_ROUTE_START_APARTMENT, &self.start.apartment);
        store.set(KEY_ROUTE_END_STREET, &self.end.street);
        store.set(KEY_ROUTE_END_HOUSE, &self.end.house);
        store.set(KEY_ROUTE_END_APARTMENT, &self.end.apartment);
    }

    /// Restores the saved route; missing keys read as empty fields.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self {
            start: RouteAddress {
                street: store.get(KEY_ROUTE_START_STREET).unwrap_or_default(),
                house: store.get(KEY_ROUTE_START_HOUSE).unwrap_or_default(),
                apartment: store.get(KEY_ROUTE_START_APARTMENT).unwrap_or_default(),
            },
            end: RouteAddress {
                street: store.get(KEY_ROUTE_END_STREET).unwrap_or_default(),
                house: store.get(KEY_ROUTE_END_HOUSE).unwrap_or_default(),
                apartment: store.get(KEY_ROUTE_END_APARTMENT).unwrap_or_default(),
            },
        }
    }

    /// Order-screen summary in the original wording.
    pub fn summary(&self) -> String {
        format!(
            "От: {}, д. {}, кв. {}\nДо: {}, д. {}, кв. {}",
            self.start.street,
            self.start.house,
            self.start.apartment,
            self.end.street,
            self.end.house,
            self.end.apartment
        )
    }
}
