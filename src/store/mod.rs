//! Store de valores por categoria.
//!
//! Cada categoria mantém os `capacity` valores mais recentes (FIFO) e o
//! store calcula estatísticas dentro de uma categoria e entre todas elas.
//!
//! ## Componentes
//!
//! - **CategoryStore**: bins limitados, inserção com descarte e leituras
//! - **Agregados**: somas, médias e extremos entre categorias
//! - **StoreSnapshot**: exportação/importação do estado em JSON
//!
//! ## Exemplo
//!
//! ```rust
//! use binstore::CategoryStore;
//!
//! let mut store = CategoryStore::with_capacity(3).unwrap();
//! for v in 1..=4 {
//!     store.push("a", v);
//! }
//! assert_eq!(store.values("a"), vec![2, 3, 4]);
//! assert_eq!(store.total_sum().unwrap(), 9);
//! ```

mod aggregate;
mod bin;
mod category;
mod snapshot;

pub use category::CategoryStore;
pub use snapshot::{StoreSnapshot, SNAPSHOT_VERSION};
