//! Agregados entre categorias.
//!
//! Todos os agregados são recalculados a partir dos bins a cada chamada;
//! não há estado em cache para invalidar.

use std::cmp::Ordering;

use crate::stats::narrow;
use crate::{StoreError, StoreResult};

use super::bin::Bin;
use super::category::CategoryStore;

impl CategoryStore {
    /// Tamanho de cada bin. A ordem entre categorias não é definida.
    pub fn bin_sizes(&self) -> Vec<usize> {
        self.bins.values().map(|bin| bin.len()).collect()
    }

    /// Soma dos valores de cada bin. A ordem entre categorias não é definida.
    ///
    /// # Erros
    /// - `Overflow` se a soma de algum bin não cabe em `i64`
    pub fn bin_weights(&self) -> StoreResult<Vec<i64>> {
        self.bins
            .iter()
            .map(|(key, bin)| narrow(bin.sum(), &format!("sum of '{}'", key)))
            .collect()
    }

    /// Soma de todos os valores guardados.
    ///
    /// Acumula em `i128`, então parciais fora de `i64` não falham; só o total
    /// precisa caber.
    ///
    /// # Erros
    /// - `Overflow` se o total não cabe em `i64`
    pub fn total_sum(&self) -> StoreResult<i64> {
        narrow(self.wide_total(), "total sum")
    }

    /// Número total de valores guardados.
    pub fn total_count(&self) -> usize {
        self.bin_sizes().into_iter().sum()
    }

    /// Média de todos os valores (não a média das médias), truncada.
    ///
    /// Retorna `0` quando o store não guarda nenhum valor.
    pub fn total_mean(&self) -> i64 {
        let count = self.total_count();
        if count == 0 {
            return 0;
        }
        (self.wide_total() / count as i128) as i64
    }

    fn wide_total(&self) -> i128 {
        self.bins.values().map(|bin| bin.sum()).sum()
    }

    /// Categoria e valor do maior valor guardado.
    ///
    /// Em caso de empate, vence a menor chave em ordem lexicográfica.
    pub fn global_max(&self) -> StoreResult<(String, i64)> {
        self.global_extreme(|bin| bin.max(), Ordering::Greater)
    }

    /// Categoria e valor do menor valor guardado.
    ///
    /// Em caso de empate, vence a menor chave em ordem lexicográfica.
    pub fn global_min(&self) -> StoreResult<(String, i64)> {
        self.global_extreme(|bin| bin.min(), Ordering::Less)
    }

    fn global_extreme<F>(&self, extreme: F, wanted: Ordering) -> StoreResult<(String, i64)>
    where
        F: Fn(&Bin) -> Option<i64>,
    {
        let mut best: Option<(&str, i64)> = None;

        for (key, bin) in &self.bins {
            let Some(value) = extreme(bin) else {
                continue;
            };
            best = match best {
                None => Some((key.as_str(), value)),
                Some((best_key, best_value)) => {
                    let replace = match value.cmp(&best_value) {
                        Ordering::Equal => key.as_str() < best_key,
                        ord => ord == wanted,
                    };
                    if replace {
                        Some((key.as_str(), value))
                    } else {
                        Some((best_key, best_value))
                    }
                }
            };
        }

        best.map(|(key, value)| (key.to_string(), value))
            .ok_or(StoreError::EmptyStore)
    }
}
