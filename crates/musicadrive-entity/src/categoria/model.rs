//! Categoria entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A staff-managed genre label used to tag pastas. Purely descriptive.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Categoria {
    /// Unique categoria identifier.
    pub id: Uuid,
    /// Label name.
    pub nome: String,
    /// Optional description.
    pub descricao: Option<String>,
    /// Color swatch for the admin UI (e.g. `#8884d8`).
    pub cor: Option<String>,
    /// Whether the label is in use.
    pub is_active: bool,
    /// When the categoria was created.
    pub created_at: DateTime<Utc>,
    /// When the categoria was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new categoria.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoria {
    /// Label name.
    pub nome: String,
    /// Optional description.
    pub descricao: Option<String>,
    /// Color swatch.
    pub cor: Option<String>,
}

/// Fields that may be updated on an existing categoria.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCategoria {
    /// New label name.
    pub nome: Option<String>,
    /// New description.
    pub descricao: Option<String>,
    /// New color swatch.
    pub cor: Option<String>,
    /// New active flag.
    pub is_active: Option<bool>,
}
