//! Estatísticas embutidas sobre sequências de valores.
//!
//! Cada [`Statistic`] é uma função pura de `&[i64]`, retornando `None`
//! quando não há dados para agregar e `StoreError::Overflow` quando o
//! resultado não cabe em `i64`.
//!
//! ## Exemplo
//!
//! ```rust
//! use binstore::stats::Statistic;
//!
//! assert_eq!(Statistic::Median.apply(&[5, 1, 3]).unwrap(), Some(3));
//! assert_eq!(Statistic::Mean.apply(&[]).unwrap(), None);
//! assert!(Statistic::Range.apply(&[i64::MIN, i64::MAX]).is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{StoreError, StoreResult};

/// Estatísticas disponíveis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statistic {
    /// Número de valores.
    Count,
    /// Soma dos valores.
    Sum,
    /// Média truncada em direção a zero.
    Mean,
    /// Menor valor.
    Min,
    /// Maior valor.
    Max,
    /// `max - min`.
    Range,
    /// Valor central; média truncada dos dois centrais em sequências pares.
    Median,
}

impl Statistic {
    /// Todas as estatísticas, na ordem de declaração.
    pub const ALL: [Statistic; 7] = [
        Statistic::Count,
        Statistic::Sum,
        Statistic::Mean,
        Statistic::Min,
        Statistic::Max,
        Statistic::Range,
        Statistic::Median,
    ];

    /// Nome da estatística.
    pub fn name(&self) -> &'static str {
        match self {
            Statistic::Count => "count",
            Statistic::Sum => "sum",
            Statistic::Mean => "mean",
            Statistic::Min => "min",
            Statistic::Max => "max",
            Statistic::Range => "range",
            Statistic::Median => "median",
        }
    }

    /// Calcula a estatística.
    ///
    /// `Count` e `Sum` são definidos como 0 para sequências vazias; as
    /// demais retornam `Ok(None)`. Somas e amplitudes são calculadas em
    /// `i128`; um resultado fora de `i64` vira `StoreError::Overflow`.
    pub fn apply(&self, values: &[i64]) -> StoreResult<Option<i64>> {
        match self {
            Statistic::Count => Ok(Some(values.len() as i64)),
            Statistic::Sum => narrow(wide_sum(values.iter().copied()), self.name()).map(Some),
            Statistic::Mean => Ok(mean(values)),
            Statistic::Min => Ok(values.iter().copied().min()),
            Statistic::Max => Ok(values.iter().copied().max()),
            Statistic::Range => {
                let (Some(min), Some(max)) =
                    (values.iter().copied().min(), values.iter().copied().max())
                else {
                    return Ok(None);
                };
                narrow(max as i128 - min as i128, self.name()).map(Some)
            }
            Statistic::Median => Ok(median(values)),
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Statistic {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Statistic::ALL
            .into_iter()
            .find(|stat| stat.name() == normalized)
            .ok_or_else(|| StoreError::invalid_config(format!("unknown statistic '{}'", s)))
    }
}

/// Soma em `i128`; não transborda para nenhuma quantidade realista de `i64`.
pub(crate) fn wide_sum(values: impl Iterator<Item = i64>) -> i128 {
    values.map(|v| v as i128).sum()
}

/// Converte um resultado `i128` para `i64`, falhando se não couber.
pub(crate) fn narrow(value: i128, what: &str) -> StoreResult<i64> {
    i64::try_from(value).map_err(|_| StoreError::Overflow(format!("{} = {}", what, value)))
}

/// Média truncada; acumula em `i128` para não transbordar.
pub(crate) fn mean(values: &[i64]) -> Option<i64> {
    if values.is_empty() {
        return None;
    }
    let total = wide_sum(values.iter().copied());
    Some((total / values.len() as i128) as i64)
}

fn median(values: &[i64]) -> Option<i64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        mean(&sorted[mid - 1..=mid])
    }
}
