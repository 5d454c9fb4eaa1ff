//! Property-based tests for the index structures.
//! Each structure is driven with random operations and checked against a
//! plain std collection doing the same thing.

use indexes::{ChainedMap, Level, PlaybackHistory, Sequence, normalize_category};
use proptest::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum SeqOp {
    PushBack(u32),
    PushFront(u32),
    Insert(u32, usize),
    Remove(usize),
    Move(usize, usize),
    Reverse,
}

fn seq_op() -> impl Strategy<Value = SeqOp> {
    prop_oneof![
        any::<u32>().prop_map(SeqOp::PushBack),
        any::<u32>().prop_map(SeqOp::PushFront),
        (any::<u32>(), 0usize..12).prop_map(|(v, i)| SeqOp::Insert(v, i)),
        (0usize..12).prop_map(SeqOp::Remove),
        (0usize..12, 0usize..12).prop_map(|(a, b)| SeqOp::Move(a, b)),
        Just(SeqOp::Reverse),
    ]
}

proptest::proptest! {
    /// Any sequence of edits leaves the list equal to a Vec model, with
    /// forward and backward traversal agreeing.
    #[test]
    fn sequence_matches_vec_model(ops in proptest::collection::vec(seq_op(), 0..60)) {
        let mut seq = Sequence::new();
        let mut model: Vec<u32> = Vec::new();

        for op in ops {
            match op {
                SeqOp::PushBack(v) => {
                    seq.push_back(v);
                    model.push(v);
                }
                SeqOp::PushFront(v) => {
                    seq.push_front(v);
                    model.insert(0, v);
                }
                SeqOp::Insert(v, i) => {
                    let ok = seq.insert_at(v, i).is_ok();
                    prop_assert_eq!(ok, i <= model.len());
                    if ok {
                        model.insert(i, v);
                    }
                }
                SeqOp::Remove(i) => {
                    let removed = seq.remove_at(i).ok();
                    let expected = (i < model.len()).then(|| model.remove(i));
                    prop_assert_eq!(removed, expected);
                }
                SeqOp::Move(from, to) => {
                    let ok = seq.move_to(from, to).is_ok();
                    prop_assert_eq!(ok, from < model.len() && to < model.len());
                    if ok && from != to {
                        let v = model.remove(from);
                        model.insert(if to > from { to - 1 } else { to }, v);
                    }
                }
                SeqOp::Reverse => {
                    seq.reverse();
                    model.reverse();
                }
            }

            prop_assert_eq!(seq.len(), model.len());
            prop_assert_eq!(seq.to_vec(), model.clone());
            let mut backwards: Vec<u32> = seq.iter_rev().collect();
            backwards.reverse();
            prop_assert_eq!(backwards, model.clone());
        }
    }

    /// Reversing twice restores the original order.
    #[test]
    fn sequence_double_reverse_is_identity(values in proptest::collection::vec(any::<u32>(), 0..40)) {
        let mut seq: Sequence<u32> = values.iter().copied().collect();
        seq.reverse();
        seq.reverse();
        prop_assert_eq!(seq.to_vec(), values);
    }

    /// Every get(i) agrees with the i-th element of to_vec.
    #[test]
    fn sequence_get_agrees_with_iteration(values in proptest::collection::vec(any::<u32>(), 1..40)) {
        let seq: Sequence<u32> = values.iter().copied().collect();
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(seq.get(i).unwrap(), *v);
        }
        prop_assert!(seq.get(values.len()).is_err());
    }

    /// The chained map behaves like a HashMap and never exceeds its load bound.
    #[test]
    fn chained_map_matches_hashmap(
        ops in proptest::collection::vec((any::<bool>(), "[a-e]{1,3}", any::<u16>()), 0..120),
        capacity in 1usize..8,
    ) {
        let mut map = ChainedMap::new("Key", capacity);
        let mut model = HashMap::new();

        for (insert, key, value) in ops {
            if insert {
                prop_assert_eq!(map.put(key.clone(), value), model.insert(key, value));
            } else {
                prop_assert_eq!(map.remove(&key).ok(), model.remove(&key));
            }
            prop_assert_eq!(map.len(), model.len());
            prop_assert!(map.len() <= map.capacity() * 2);
        }

        for (key, value) in &model {
            prop_assert_eq!(map.get(key).ok(), Some(value));
        }
    }

    /// History never grows past its bound and always keeps the newest plays.
    #[test]
    fn history_keeps_newest_within_bound(pushes in 0usize..200, max in 1usize..20) {
        let mut store = library::SongStore::new();
        let mut history = PlaybackHistory::new(max);
        let mut keys = Vec::new();

        for i in 0..pushes {
            let key = store.insert(library::Song::new(format!("id-{i}"), library::NewSong::default()));
            history.push(key);
            keys.push(key);
        }

        prop_assert_eq!(history.len(), pushes.min(max));
        let expected: Vec<_> = keys.iter().rev().take(max).copied().collect();
        prop_assert_eq!(history.to_vec(), expected);
    }

    /// Normalizing is idempotent.
    #[test]
    fn normalize_is_idempotent(raw in "[ a-zA-Z'-]{0,20}") {
        let once = normalize_category(&raw, Level::Genre);
        let twice = normalize_category(&once, Level::Genre);
        prop_assert_eq!(once, twice);
    }
}
