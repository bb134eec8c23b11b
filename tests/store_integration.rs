//! Testes de integração para o CategoryStore.

use std::collections::HashMap;

use binstore::{CategoryStore, StoreConfig, StoreError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn sample_bins() -> HashMap<String, Vec<i64>> {
    HashMap::from([
        ("data1".to_string(), vec![1, 2, 3, 4]),
        ("data2".to_string(), vec![5, 6, 7, 8]),
        ("data3".to_string(), vec![9, 10, 11, 12]),
    ])
}

// Testes de construção e cardinalidade
mod construction_tests {
    use super::*;

    #[test]
    fn test_cardinality_existing_and_missing() {
        init_tracing();
        let store = CategoryStore::new(10, sample_bins()).expect("valid capacity");

        assert_eq!(store.cardinality("data1").unwrap(), 4);

        let err = store.cardinality("data5").unwrap_err();
        assert!(matches!(err, StoreError::KeyNotFound(_)));
    }

    #[test]
    fn test_empty_store_cardinality() {
        let store = CategoryStore::with_capacity(3).unwrap();
        assert!(matches!(
            store.cardinality("x"),
            Err(StoreError::KeyNotFound(k)) if k == "x"
        ));
    }

    #[test]
    fn test_construction_truncates_to_capacity() {
        init_tracing();
        let store = CategoryStore::new(2, sample_bins()).unwrap();

        for key in store.categories() {
            assert_eq!(store.cardinality(&key).unwrap(), 2);
        }
        assert_eq!(store.values("data3"), vec![11, 12]);
    }

    #[test]
    fn test_from_toml_config() {
        let config = StoreConfig::from_toml("capacity = 5").unwrap();
        let store = CategoryStore::from_config(&config).unwrap();
        assert_eq!(store.capacity(), 5);
    }
}

// Testes de inserção FIFO
mod push_tests {
    use super::*;

    #[test]
    fn test_push_scenario_capacity_three() {
        init_tracing();
        let mut store = CategoryStore::with_capacity(3).unwrap();

        assert_eq!(store.push("a", 1), None);
        assert_eq!(store.push("a", 2), None);
        assert_eq!(store.push("a", 3), None);
        assert_eq!(store.push("a", 4), Some(1));

        assert_eq!(store.values("a"), vec![2, 3, 4]);
    }

    #[test]
    fn test_evictions_come_out_in_insertion_order() {
        let capacity = 4;
        let mut store = CategoryStore::with_capacity(capacity).unwrap();

        let evicted: Vec<i64> = (1..=20).filter_map(|v| store.push("k", v)).collect();

        assert_eq!(evicted, (1..=16).collect::<Vec<i64>>());
        assert_eq!(store.values("k"), vec![17, 18, 19, 20]);
    }

    #[test]
    fn test_capacity_invariant_holds_after_every_push() {
        let capacity = 3;
        let mut store = CategoryStore::with_capacity(capacity).unwrap();
        let keys = ["a", "b", "c", "d"];

        for i in 0..200i64 {
            let key = keys[(i * 7 % 4) as usize];
            store.push(key, i);

            for size in store.bin_sizes() {
                assert!(size <= capacity, "bin size {} exceeds {}", size, capacity);
            }
        }
    }

    #[test]
    fn test_categories_are_independent() {
        let mut store = CategoryStore::with_capacity(2).unwrap();
        store.push("a", 1);
        store.push("b", 99);
        store.push("a", 2);
        store.push("a", 3);

        assert_eq!(store.values("a"), vec![2, 3]);
        assert_eq!(store.values("b"), vec![99]);
    }

    #[test]
    fn test_push_into_initially_empty_bin() {
        let initial = HashMap::from([("data3".to_string(), Vec::new())]);
        let mut store = CategoryStore::new(4, initial).unwrap();

        assert_eq!(store.push("data3", 1), None);
        assert_eq!(store.cardinality("data3").unwrap(), 1);
    }
}

// Testes de isolamento de cópias
mod copy_tests {
    use super::*;

    #[test]
    fn test_values_copy_isolation() {
        let mut store = CategoryStore::new(10, sample_bins()).unwrap();

        let mut values = store.values("data1");
        values.clear();
        assert_eq!(store.values("data1"), vec![1, 2, 3, 4]);

        // Mudanças no store também não afetam cópias já retornadas
        let before = store.values("data2");
        store.push("data2", 100);
        assert_eq!(before, vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_clone_isolation() {
        let original = CategoryStore::new(4, sample_bins()).unwrap();
        let mut clone = original.clone();

        clone.push("data1", 50);
        clone.push("new", 1);
        clone.clear_bin("data2").unwrap();

        assert_eq!(original.values("data1"), vec![1, 2, 3, 4]);
        assert_eq!(original.values("data2"), vec![5, 6, 7, 8]);
        assert!(!original.contains("new"));
        assert_eq!(clone.values("data1"), vec![2, 3, 4, 50]);
    }
}

// Testes de estatísticas por categoria
mod per_category_tests {
    use super::*;
    use binstore::Statistic;

    #[test]
    fn test_mean_range_max() {
        let store = CategoryStore::new(10, sample_bins()).unwrap();

        assert_eq!(store.mean("data1").unwrap(), 2);
        assert_eq!(store.range("data2").unwrap(), 3);
        assert_eq!(store.max("data3"), 12);
        assert_eq!(store.max("missing"), 0);
    }

    #[test]
    fn test_empty_bin_is_distinguished_from_zero() {
        let initial = HashMap::from([
            ("zeros".to_string(), vec![0, 0]),
            ("empty".to_string(), Vec::new()),
        ]);
        let store = CategoryStore::new(5, initial).unwrap();

        assert_eq!(store.mean("zeros").unwrap(), 0);
        let err = store.mean("empty").unwrap_err();
        assert!(err.is_empty_data());
    }

    #[test]
    fn test_statistic_and_reduce_agree() {
        let store = CategoryStore::new(10, sample_bins()).unwrap();

        let sum = store.statistic("data3", Statistic::Sum).unwrap();
        let reduced = store.reduce("data3", |v| v.iter().sum()).unwrap();
        assert_eq!(sum, reduced);
        assert_eq!(store.statistic("data1", Statistic::Median).unwrap(), 2);
    }

    #[test]
    fn test_reduce_all_covers_every_category() {
        let store = CategoryStore::new(10, sample_bins()).unwrap();

        let maxima = store.reduce_all(|v| v.iter().copied().max().unwrap_or(0));
        assert_eq!(maxima.len(), 3);
        assert_eq!(maxima["data1"], 4);
        assert_eq!(maxima["data2"], 8);
        assert_eq!(maxima["data3"], 12);
    }
}
