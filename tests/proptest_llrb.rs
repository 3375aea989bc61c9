use llrb_map::llrb::{Color, LlrbMap};
use proptest::prelude::*;
use std::collections::BTreeMap;

const MAP_SIZE: usize = 500;
const PROPTEST_CASES: u32 = 256;

#[derive(Clone, Debug)]
enum Op {
    Insert(u16, u32),
    Remove(u16),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..1_000u16, any::<u32>()).prop_map(|(key, value)| Op::Insert(key, value)),
        1 => (0..1_000u16).prop_map(Op::Remove),
    ]
}

fn max_height(len: usize) -> usize {
    (2.0 * ((len + 1) as f64).log2()).floor() as usize
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn insert_get(inserts in proptest::collection::vec((any::<i32>(), any::<i32>()), 0..MAP_SIZE)) {
        let mut map = LlrbMap::new();
        let mut expected = BTreeMap::new();
        for &(key, value) in &inserts {
            prop_assert_eq!(map.insert(key, value).map(|pair| pair.1), expected.insert(key, value));
            prop_assert_eq!(map.get(&key), Some(&value));
        }

        prop_assert_eq!(map.len(), expected.len());
        prop_assert_eq!(map.is_empty(), expected.is_empty());
        for (key, value) in &expected {
            prop_assert!(map.contains_key(key));
            prop_assert_eq!(map.get(key), Some(value));
        }
        prop_assert!(map.iter().eq(expected.iter()));
    }

    #[test]
    fn invariants_hold_after_inserts(keys in proptest::collection::vec(any::<u32>(), 0..MAP_SIZE)) {
        let mut map = LlrbMap::new();
        for &key in &keys {
            map.insert(key, ());
            let root = map.level_order().next().map(|(_, _, color)| color);
            prop_assert_eq!(root, Some(Color::Black));
        }

        let stats = map.validate();
        prop_assert!(stats.is_ok(), "{:?}", stats);
        let stats = stats.unwrap();
        prop_assert!(stats.height <= max_height(stats.len));
    }

    #[test]
    fn invariants_hold_after_mixed_ops(ops in proptest::collection::vec(op_strategy(), 0..MAP_SIZE)) {
        let mut map = LlrbMap::new();
        let mut expected = BTreeMap::new();
        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    prop_assert_eq!(map.insert(key, value), expected.insert(key, value).map(|old| (key, old)));
                },
                Op::Remove(key) => {
                    prop_assert_eq!(map.remove(&key), expected.remove(&key).map(|old| (key, old)));
                },
            }
            let stats = map.validate();
            prop_assert!(stats.is_ok(), "{:?}", stats);
        }

        prop_assert_eq!(map.len(), expected.len());
        prop_assert!(map.into_iter().eq(expected.into_iter()));
    }

    #[test]
    fn level_order_is_breadth_first(keys in proptest::collection::btree_set(any::<u16>(), 0..MAP_SIZE)) {
        let mut map = LlrbMap::new();
        for &key in &keys {
            map.insert(key, ());
        }

        let visited = map.level_order().map(|(key, _, _)| *key).collect::<Vec<u16>>();
        prop_assert_eq!(visited.len(), keys.len());

        let mut sorted = visited.clone();
        sorted.sort();
        prop_assert!(sorted.into_iter().eq(keys.iter().cloned()));

        // Restarting the walk yields the same sequence.
        let again = map.level_order().map(|(key, _, _)| *key).collect::<Vec<u16>>();
        prop_assert_eq!(visited, again);
    }
}
