//! Domain model types for the persistence abstraction layer
//!
//! These types are used as return values from the persistence traits,
//! decoupled from the SeaORM entities.

use serde::{Deserialize, Serialize};

use crate::entity::namespace;

/// A named partition of vulnerability data
///
/// `id` is the store-assigned surrogate; `name` is the globally unique
/// natural key. A namespace is persisted once per distinct name and is
/// never updated or deleted by this layer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Namespace {
    pub id: i64,
    pub name: String,
}

impl From<namespace::Model> for Namespace {
    fn from(model: namespace::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}
