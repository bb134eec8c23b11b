//! Bin de uma categoria: sequência limitada com descarte FIFO.

use std::collections::VecDeque;

use crate::stats::wide_sum;

/// Sequência de valores de uma categoria, do mais antigo ao mais recente.
///
/// Nunca guarda mais que a capacidade do store; o valor mais antigo é
/// descartado quando um novo valor excede o limite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Bin {
    values: VecDeque<i64>,
}

impl Bin {
    /// Cria um bin com um único valor.
    pub(crate) fn single(value: i64) -> Self {
        Self {
            values: VecDeque::from([value]),
        }
    }

    /// Cria um bin a partir de valores iniciais, mantendo os `capacity` mais
    /// recentes. Retorna o bin e quantos valores foram descartados.
    pub(crate) fn from_values(values: Vec<i64>, capacity: usize) -> (Self, usize) {
        let mut values = VecDeque::from(values);
        let dropped = values.len().saturating_sub(capacity);
        values.drain(..dropped);
        (Self { values }, dropped)
    }

    /// Insere um valor na ponta mais recente.
    ///
    /// Retorna o valor mais antigo se o bin passou da capacidade.
    #[must_use]
    pub(crate) fn push(&mut self, value: i64, capacity: usize) -> Option<i64> {
        self.values.push_back(value);
        if self.values.len() > capacity {
            self.values.pop_front()
        } else {
            None
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.values.iter().copied()
    }

    /// Cópia independente dos valores, do mais antigo ao mais recente.
    pub(crate) fn to_vec(&self) -> Vec<i64> {
        self.values.iter().copied().collect()
    }

    /// Esvazia o bin, retornando os valores removidos.
    pub(crate) fn take(&mut self) -> Vec<i64> {
        self.values.drain(..).collect()
    }

    /// Soma em `i128`, sem risco de transbordar.
    pub(crate) fn sum(&self) -> i128 {
        wide_sum(self.iter())
    }

    pub(crate) fn min(&self) -> Option<i64> {
        self.iter().min()
    }

    pub(crate) fn max(&self) -> Option<i64> {
        self.iter().max()
    }
}
