//! Store de categorias: bins limitados por categoria.

use std::collections::HashMap;

use crate::stats::Statistic;
use crate::types::config::StoreConfig;
use crate::{StoreError, StoreResult};

use super::bin::Bin;

/// Registrador de valores por categoria.
///
/// Cada categoria guarda no máximo `capacity` valores; ao passar do limite,
/// o valor mais antigo é descartado e retornado por [`CategoryStore::push`].
///
/// Não há sincronização interna. Para acesso compartilhado entre threads,
/// envolva o store em um lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryStore {
    pub(super) bins: HashMap<String, Bin>,
    pub(super) capacity: usize,
}

impl CategoryStore {
    /// Cria um store a partir de valores iniciais.
    ///
    /// Bins iniciais maiores que `capacity` são truncados, mantendo os
    /// valores mais recentes (o final de cada sequência).
    ///
    /// # Erros
    /// - `InvalidConfiguration` se `capacity` for zero
    pub fn new(capacity: usize, initial: HashMap<String, Vec<i64>>) -> StoreResult<Self> {
        if capacity == 0 {
            return Err(StoreError::invalid_config(
                "capacity must be greater than zero",
            ));
        }

        let mut bins = HashMap::with_capacity(initial.len());
        for (key, values) in initial {
            let (bin, dropped) = Bin::from_values(values, capacity);
            if dropped > 0 {
                tracing::debug!(
                    category = %key,
                    dropped,
                    capacity,
                    "Truncated initial values to capacity"
                );
            }
            bins.insert(key, bin);
        }

        tracing::debug!(capacity, categories = bins.len(), "Category store created");

        Ok(Self { bins, capacity })
    }

    /// Cria um store vazio.
    pub fn with_capacity(capacity: usize) -> StoreResult<Self> {
        Self::new(capacity, HashMap::new())
    }

    /// Cria um store vazio a partir da configuração.
    ///
    /// A capacidade é validada por [`CategoryStore::new`].
    pub fn from_config(config: &StoreConfig) -> StoreResult<Self> {
        Self::with_capacity(config.capacity)
    }

    /// Capacidade de cada bin.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Número de categorias existentes.
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Indica se nenhuma categoria existe.
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Indica se existe um bin (mesmo vazio) para `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.bins.contains_key(key)
    }

    /// Nomes das categorias, em ordem lexicográfica.
    pub fn categories(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.bins.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Número de valores guardados em `key`.
    pub fn cardinality(&self, key: &str) -> StoreResult<usize> {
        Ok(self.bin(key)?.len())
    }

    /// Insere `value` na categoria `key`.
    ///
    /// Retorna o valor mais antigo quando a inserção passa da capacidade.
    pub fn push(&mut self, key: &str, value: i64) -> Option<i64> {
        match self.bins.get_mut(key) {
            Some(bin) if !bin.is_empty() => {
                let evicted = bin.push(value, self.capacity);
                if let Some(old) = evicted {
                    tracing::trace!(category = key, evicted = old, value, "Evicted oldest value");
                }
                evicted
            }
            Some(bin) => {
                *bin = Bin::single(value);
                None
            }
            None => {
                tracing::trace!(category = key, value, "Created bin");
                self.bins.insert(key.to_string(), Bin::single(value));
                None
            }
        }
    }

    /// Maior valor de `key`, ou `0` se a categoria não existe ou está vazia.
    ///
    /// Não distingue "sem dados" de "máximo igual a zero"; use
    /// [`CategoryStore::try_max`] quando a diferença importa.
    pub fn max(&self, key: &str) -> i64 {
        self.try_max(key).unwrap_or(0)
    }

    /// Maior valor de `key`.
    pub fn try_max(&self, key: &str) -> StoreResult<i64> {
        self.bin(key)?
            .max()
            .ok_or_else(|| StoreError::EmptyBin(key.to_string()))
    }

    /// Menor valor de `key`.
    pub fn try_min(&self, key: &str) -> StoreResult<i64> {
        self.bin(key)?
            .min()
            .ok_or_else(|| StoreError::EmptyBin(key.to_string()))
    }

    /// Média (truncada) dos valores de `key`.
    pub fn mean(&self, key: &str) -> StoreResult<i64> {
        self.statistic(key, Statistic::Mean)
    }

    /// Amplitude (`max - min`) dos valores de `key`.
    pub fn range(&self, key: &str) -> StoreResult<i64> {
        self.statistic(key, Statistic::Range)
    }

    /// Calcula uma estatística embutida sobre `key`.
    ///
    /// # Erros
    /// - `KeyNotFound` se a categoria não existe
    /// - `EmptyBin` se a estatística não é definida para um bin vazio
    /// - `Overflow` se o resultado não cabe em `i64`
    pub fn statistic(&self, key: &str, statistic: Statistic) -> StoreResult<i64> {
        let values = self.bin(key)?.to_vec();
        statistic
            .apply(&values)?
            .ok_or_else(|| StoreError::EmptyBin(key.to_string()))
    }

    /// Cópia independente dos valores de `key`, do mais antigo ao mais
    /// recente. Vazia se a categoria não existe.
    pub fn values(&self, key: &str) -> Vec<i64> {
        self.bins.get(key).map(Bin::to_vec).unwrap_or_default()
    }

    /// Aplica uma função de agregação sobre uma cópia dos valores de `key`.
    ///
    /// A função nunca é chamada para categorias inexistentes.
    pub fn reduce<F>(&self, key: &str, aggregate: F) -> StoreResult<i64>
    where
        F: Fn(&[i64]) -> i64,
    {
        let values = self.bin(key)?.to_vec();
        Ok(aggregate(&values))
    }

    /// Aplica uma função de agregação a cada categoria.
    pub fn reduce_all<F>(&self, aggregate: F) -> HashMap<String, i64>
    where
        F: Fn(&[i64]) -> i64,
    {
        self.bins
            .iter()
            .map(|(key, bin)| (key.clone(), aggregate(&bin.to_vec())))
            .collect()
    }

    /// Esvazia o bin de `key` sem removê-lo. Retorna os valores removidos.
    pub fn clear_bin(&mut self, key: &str) -> StoreResult<Vec<i64>> {
        let bin = self
            .bins
            .get_mut(key)
            .ok_or_else(|| StoreError::key_not_found(key))?;
        Ok(bin.take())
    }

    fn bin(&self, key: &str) -> StoreResult<&Bin> {
        self.bins
            .get(key)
            .ok_or_else(|| StoreError::key_not_found(key))
    }
}
