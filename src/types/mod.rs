//! Tipos compartilhados do binstore.

pub mod config;
pub mod errors;
