//! Pasta entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A curated folder of music offered in the catalog.
///
/// Pastas referenced by existing orders are never hard-deleted; they are
/// disabled via [`Pasta::is_active`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Pasta {
    /// Unique pasta identifier.
    pub id: Uuid,
    /// Display name.
    pub nome: String,
    /// Optional human-readable code (e.g. `SERT-001`).
    pub codigo: Option<String>,
    /// Number of tracks in the folder.
    pub qtd_musicas: i32,
    /// Folder size in gigabytes.
    pub tamanho_gb: f64,
    /// Unit price.
    pub preco: f64,
    /// Optional cover image URL.
    pub capa_url: Option<String>,
    /// Optional description shown on the storefront.
    pub descricao: Option<String>,
    /// Optional genre label.
    pub genero: Option<String>,
    /// Whether the pasta is visible on the storefront.
    pub is_active: bool,
    /// When the pasta was created.
    pub created_at: DateTime<Utc>,
    /// When the pasta was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new pasta.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePasta {
    /// Display name.
    pub nome: String,
    /// Optional human-readable code.
    pub codigo: Option<String>,
    /// Number of tracks.
    pub qtd_musicas: i32,
    /// Size in gigabytes.
    pub tamanho_gb: f64,
    /// Unit price.
    pub preco: f64,
    /// Optional cover image URL.
    pub capa_url: Option<String>,
    /// Optional description.
    pub descricao: Option<String>,
    /// Optional genre label.
    pub genero: Option<String>,
    /// Whether the pasta starts active. Defaults to `true`.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Fields that may be updated on an existing pasta.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePasta {
    /// New display name.
    pub nome: Option<String>,
    /// New code.
    pub codigo: Option<String>,
    /// New track count.
    pub qtd_musicas: Option<i32>,
    /// New size in gigabytes.
    pub tamanho_gb: Option<f64>,
    /// New unit price.
    pub preco: Option<f64>,
    /// New cover image URL.
    pub capa_url: Option<String>,
    /// New description.
    pub descricao: Option<String>,
    /// New genre label.
    pub genero: Option<String>,
    /// New active flag.
    pub is_active: Option<bool>,
}

fn default_active() -> bool {
    true
}
