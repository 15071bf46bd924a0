use std::collections::HashMap;

use collections::{HashTable, KeyHasher, TableError};
use proptest::prelude::*;

/// Small key space so inserts, overwrites and removals hit the same keys
fn key() -> impl Strategy<Value = String> {
    "[a-e]{1,3}"
}

#[derive(Debug, Clone)]
enum Op {
    Insert(String, u32),
    Remove(String),
    Resize,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (key(), any::<u32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        2 => key().prop_map(Op::Remove),
        1 => Just(Op::Resize),
    ]
}

proptest! {
    #[test]
    fn unique_keys_retrieve_last_value(pairs in prop::collection::vec((".{0,12}", any::<i64>()), 0..64), cap in 1usize..8) {
        let mut table = HashTable::new(cap).unwrap();
        let mut model = HashMap::new();

        for (k, v) in &pairs {
            table.insert(k, *v);
            model.insert(k.clone(), *v);
        }

        prop_assert_eq!(table.len(), model.len());
        for (k, v) in &model {
            prop_assert_eq!(table.retrieve(k), Some(v));
        }
    }

    #[test]
    fn resize_preserves_pairs(pairs in prop::collection::hash_map(".{0,12}", any::<u16>(), 0..64), cap in 1usize..6) {
        let mut table = HashTable::new(cap).unwrap();
        for (k, v) in &pairs {
            table.insert(k, *v);
        }

        table.resize();

        prop_assert_eq!(table.capacity(), cap * 2);
        prop_assert_eq!(table.len(), pairs.len());
        for (k, v) in &pairs {
            prop_assert_eq!(table.retrieve(k), Some(v));
            prop_assert_eq!(table.bucket_index(k), table.hasher().bucket_index(k, cap * 2));
        }
    }

    #[test]
    fn behaves_like_a_map(ops in prop::collection::vec(op(), 0..128)) {
        let mut table = HashTable::new(1).unwrap();
        let mut model: HashMap<String, u32> = HashMap::new();
        let mut cap = 1;

        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    table.insert(&k, v);
                    model.insert(k, v);
                }
                Op::Remove(k) => {
                    let before = table.len();
                    match model.remove(&k) {
                        Some(v) => {
                            prop_assert_eq!(table.remove(&k), Ok(v));
                            prop_assert_eq!(table.len(), before - 1);
                        }
                        None => {
                            prop_assert_eq!(table.remove(&k), Err(TableError::KeyNotFound { key: k.clone() }));
                            prop_assert_eq!(table.len(), before);
                        }
                    }
                    prop_assert_eq!(table.retrieve(&k), None);
                }
                Op::Resize => {
                    table.resize();
                    cap *= 2;
                }
            }
            prop_assert_eq!(table.capacity(), cap);
        }

        prop_assert_eq!(table.len(), model.len());
        for (k, v) in &model {
            prop_assert_eq!(table.retrieve(k), Some(v));
        }
    }
}
