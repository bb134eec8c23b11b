//! Tipos de erro do binstore.

use thiserror::Error;

/// Tipo de resultado padrão do binstore.
pub type StoreResult<T> = Result<T, StoreError>;

/// Erros possíveis no binstore.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Chave '{0}' não encontrada")]
    KeyNotFound(String),

    #[error("Configuração inválida: {0}")]
    InvalidConfiguration(String),

    #[error("Bin '{0}' está vazio")]
    EmptyBin(String),

    #[error("Store não guarda nenhum valor")]
    EmptyStore,

    #[error("Resultado não cabe em i64: {0}")]
    Overflow(String),

    #[error("Erro ao parsear TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Erro ao serializar TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    /// Cria um erro de chave inexistente.
    pub fn key_not_found<S: Into<String>>(key: S) -> Self {
        Self::KeyNotFound(key.into())
    }

    /// Cria um erro de configuração.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Indica se o erro vem da ausência de dados (bin ou store vazio).
    pub fn is_empty_data(&self) -> bool {
        matches!(self, Self::EmptyBin(_) | Self::EmptyStore)
    }
}
