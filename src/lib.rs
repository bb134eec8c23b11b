//! # binstore
//!
//! Registrador de valores inteiros por categoria, com capacidade limitada.
//!
//! Cada categoria guarda apenas os N valores mais recentes (o mais antigo
//! é descartado primeiro) e o store expõe estatísticas dentro de uma
//! categoria e entre todas as categorias.
//!
//! ## Módulos
//!
//! - [`store`] - Store de categorias, agregados e snapshots
//! - [`stats`] - Estatísticas embutidas usadas com `reduce`
//! - [`types`] - Erros e configuração

pub mod stats;
pub mod store;
pub mod types;

pub use stats::Statistic;
pub use store::{CategoryStore, StoreSnapshot};
pub use types::config::StoreConfig;
pub use types::errors::{StoreError, StoreResult};
