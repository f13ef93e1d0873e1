//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and check every
//! container against a standard library model after each step.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{BTreeSet, HashMap};

use classic_algos::dp::{
    fib_memoized, fib_recursive, fib_tabulated, knapsack_memoized, knapsack_recursive,
    knapsack_tabulated, lcs_memoized, lcs_recursive, lcs_tabulated, Item,
};
use classic_algos::sorting::{
    bubble_sort, insertion_sort, merge_sort, quick_sort_with, selection_sort,
};
use classic_algos::{AvlTree, BinaryHeap, CollisionMethod, HashTable, Heap, HeapKind, PriorityQueue};

/// Push and pop against a sorted model; the root must always be the extreme
fn test_heap_against_model<H: Heap<i32>>(
    mut heap: H,
    ops: Vec<(bool, i32)>,
) -> Result<(), TestCaseError> {
    let mut model: Vec<i32> = Vec::new();
    let kind = heap.kind();

    for (should_pop, value) in ops {
        if should_pop {
            model.sort_unstable();
            let expected = match kind {
                HeapKind::Min if !model.is_empty() => Some(model.remove(0)),
                HeapKind::Max => model.pop(),
                HeapKind::Min => None,
            };
            prop_assert_eq!(heap.extract().ok(), expected);
        } else {
            heap.insert(value);
            model.push(value);
        }

        prop_assert_eq!(heap.len(), model.len());
        let extreme = match kind {
            HeapKind::Min => model.iter().min(),
            HeapKind::Max => model.iter().max(),
        };
        prop_assert_eq!(heap.peek(), extreme);
    }

    Ok(())
}

#[derive(Debug, Clone)]
enum TableOp {
    Insert(u16, i32),
    Delete(u16),
    Get(u16),
}

fn table_op() -> impl Strategy<Value = TableOp> {
    // A narrow key range forces overwrites, deletes of live keys and clusters
    prop_oneof![
        3 => (0u16..200, any::<i32>()).prop_map(|(k, v)| TableOp::Insert(k, v)),
        2 => (0u16..200).prop_map(TableOp::Delete),
        1 => (0u16..200).prop_map(TableOp::Get),
    ]
}

fn test_table_against_model(
    method: CollisionMethod,
    ops: Vec<TableOp>,
) -> Result<(), TestCaseError> {
    let mut table = HashTable::with_method(method);
    let mut model: HashMap<u16, i32> = HashMap::new();

    for op in ops {
        match op {
            TableOp::Insert(k, v) => {
                prop_assert_eq!(table.insert(k, v).ok().flatten(), model.insert(k, v));
            }
            TableOp::Delete(k) => {
                prop_assert_eq!(table.delete(&k).ok().flatten(), model.remove(&k));
            }
            TableOp::Get(k) => {
                prop_assert_eq!(table.get(&k), model.get(&k));
            }
        }
        prop_assert_eq!(table.len(), model.len());
        prop_assert!(table.load_factor() < 0.7);
    }

    for (k, v) in &model {
        prop_assert_eq!(table.get(k), Some(v));
    }
    prop_assert_eq!(table.iter().count(), model.len());
    Ok(())
}

proptest! {
    #[test]
    fn prop_binary_min_heap(ops in prop::collection::vec((any::<bool>(), -1000i32..1000), 0..200)) {
        test_heap_against_model(BinaryHeap::min(), ops)?;
    }

    #[test]
    fn prop_binary_max_heap(ops in prop::collection::vec((any::<bool>(), -1000i32..1000), 0..200)) {
        test_heap_against_model(BinaryHeap::max(), ops)?;
    }

    #[test]
    fn prop_priority_queue(ops in prop::collection::vec((any::<bool>(), any::<i32>()), 0..200)) {
        test_heap_against_model(PriorityQueue::new(), ops)?;
    }

    #[test]
    fn prop_heapify_sorts(values in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut expected = values.clone();
        expected.sort_unstable();
        let heap = BinaryHeap::from_vec(HeapKind::Min, values);
        prop_assert_eq!(heap.into_sorted_vec(), expected);
    }

    #[test]
    fn prop_chaining_table(ops in prop::collection::vec(table_op(), 0..400)) {
        test_table_against_model(CollisionMethod::Chaining, ops)?;
    }

    #[test]
    fn prop_linear_probing_table(ops in prop::collection::vec(table_op(), 0..400)) {
        test_table_against_model(CollisionMethod::LinearProbing, ops)?;
    }

    #[test]
    fn prop_avl_matches_btreeset(ops in prop::collection::vec((any::<bool>(), 0i32..100), 0..300)) {
        let mut tree = AvlTree::new();
        let mut model = BTreeSet::new();

        for (delete, key) in ops {
            if delete {
                prop_assert_eq!(tree.delete(&key), model.remove(&key));
            } else {
                prop_assert_eq!(tree.insert(key), model.insert(key));
            }
            prop_assert!(tree.is_balanced());
            prop_assert_eq!(tree.len(), model.len());
        }

        let in_order: Vec<i32> = tree.iter().copied().collect();
        let expected: Vec<i32> = model.iter().copied().collect();
        prop_assert_eq!(in_order, expected);
        prop_assert_eq!(tree.min(), model.first());
        prop_assert_eq!(tree.max(), model.last());
    }

    #[test]
    fn prop_sorts_agree(values in prop::collection::vec(any::<i16>(), 0..150), seed in any::<u64>()) {
        let mut expected = values.clone();
        expected.sort();

        prop_assert_eq!(&bubble_sort(&values), &expected);
        prop_assert_eq!(&selection_sort(&values), &expected);
        prop_assert_eq!(&insertion_sort(&values), &expected);
        prop_assert_eq!(&merge_sort(&values), &expected);
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert_eq!(&quick_sort_with(&values, 10, &mut rng), &expected);
    }

    #[test]
    fn prop_fibonacci_variants_agree(n in 0u32..25) {
        let tabulated = fib_tabulated(n);
        prop_assert_eq!(fib_recursive(n), tabulated);
        prop_assert_eq!(fib_memoized(n), tabulated);
    }

    #[test]
    fn prop_knapsack_variants_agree(
        raw in prop::collection::vec((1usize..8, 0u64..30), 0..10),
        capacity in 0usize..20,
    ) {
        let items: Vec<Item> = raw.into_iter().map(|(w, v)| Item::new(w, v)).collect();
        let table = knapsack_tabulated(&items, capacity);

        prop_assert_eq!(knapsack_recursive(&items, capacity), table.value);
        prop_assert_eq!(knapsack_memoized(&items, capacity), table.value);

        let chosen = table.selected_items();
        let weight: usize = chosen.iter().map(|&i| items[i].weight).sum();
        let value: u64 = chosen.iter().map(|&i| items[i].value).sum();
        prop_assert!(weight <= capacity);
        prop_assert_eq!(value, table.value);
    }

    #[test]
    fn prop_lcs_variants_agree(
        x in prop::collection::vec(0u8..4, 0..9),
        y in prop::collection::vec(0u8..4, 0..9),
    ) {
        let table = lcs_tabulated(&x, &y);
        prop_assert_eq!(lcs_recursive(&x, &y), table.length);
        prop_assert_eq!(lcs_memoized(&x, &y), table.length);
        prop_assert_eq!(table.sequence(&x, &y).len(), table.length);
    }
}
