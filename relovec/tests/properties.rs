//! Property tests for `Vector`, checked against `std::vec::Vec` as a model.

use proptest::prelude::*;
use relovec::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Push(i32),
    Pop,
    Insert(usize, i32),
    Erase(usize),
    Resize(usize),
    Reserve(usize),
    Truncate(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Push),
        1 => Just(Op::Pop),
        2 => (any::<usize>(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => any::<usize>().prop_map(Op::Erase),
        1 => (0usize..40).prop_map(Op::Resize),
        1 => (0usize..40).prop_map(Op::Reserve),
        1 => (0usize..40).prop_map(Op::Truncate),
    ]
}

/// Applies `ops` to both a `Vector<_, R>` and a `Vec`, checking they agree after each.
fn check_against_model<R: Relocation<String>>(ops: &[Op]) {
    let mut v: Vector<String, R> = Vector::new();
    let mut model: Vec<String> = Vec::new();
    for op in ops {
        match *op {
            Op::Push(x) => {
                let before = v.capacity();
                v.push_back(x.to_string());
                model.push(x.to_string());
                if before < v.len() {
                    assert_eq!(v.capacity(), std::cmp::max(1, 2 * before));
                } else {
                    assert_eq!(v.capacity(), before);
                }
            }
            Op::Pop => {
                assert_eq!(v.pop(), model.pop());
            }
            Op::Insert(i, x) => {
                let i = i % (model.len() + 1);
                assert_eq!(*v.insert(i, x.to_string()), x.to_string());
                model.insert(i, x.to_string());
            }
            Op::Erase(i) => {
                if !model.is_empty() {
                    let i = i % model.len();
                    assert_eq!(v.erase(i), i);
                    model.remove(i);
                }
            }
            Op::Resize(n) => {
                v.resize(n);
                model.resize(n, String::new());
                assert!(v.capacity() >= n);
            }
            Op::Reserve(n) => {
                let before = v.capacity();
                v.reserve(n);
                assert_eq!(v.capacity(), std::cmp::max(before, n));
            }
            Op::Truncate(n) => {
                v.truncate(n);
                model.truncate(n);
            }
        }
        assert_eq!(v, model.as_slice());
        assert!(v.len() <= v.capacity());
    }
}

proptest! {
    #[test]
    fn with_len_is_default_filled(n in 0usize..200) {
        let v: Vector<u16> = Vector::with_len(n);
        prop_assert_eq!(v.len(), n);
        prop_assert!(v.capacity() >= n);
        prop_assert!(v.iter().all(|&x| x == 0));
    }

    #[test]
    fn capacity_sequence_from_empty(n in 0usize..300) {
        let mut v: Vector<u8> = Vector::new();
        let mut capacities = vec![0];
        for i in 0..n {
            let before = v.capacity();
            v.push_back(i as u8);
            if v.capacity() != before {
                // Grows only when the new length exceeds the old capacity.
                prop_assert_eq!(v.len(), before + 1);
                capacities.push(v.capacity());
            }
        }
        let expected: Vec<usize> = std::iter::once(0)
            .chain((0..).map(|k| 1usize << k))
            .take(capacities.len())
            .collect();
        prop_assert_eq!(capacities, expected);
    }

    #[test]
    fn erase_undoes_insert(
        values in proptest::collection::vec(any::<i64>(), 0..50),
        at in any::<usize>(),
        inserted in any::<i64>(),
    ) {
        let mut v: Vector<i64> = values.iter().copied().collect();
        let at = at % (values.len() + 1);
        v.insert(at, inserted);
        prop_assert_eq!(v[at], inserted);
        prop_assert_eq!(v.len(), values.len() + 1);
        v.erase(at);
        prop_assert_eq!(v, values.as_slice());
    }

    #[test]
    fn clones_are_independent(values in proptest::collection::vec(".{0,8}", 0..30)) {
        let original: Vector<String> = values.iter().cloned().collect();
        let mut copy = original.clone();
        prop_assert_eq!(copy.capacity(), values.len());
        for s in copy.iter_mut() {
            s.push('!');
        }
        copy.push_back(String::new());
        prop_assert_eq!(original, values.as_slice());
    }

    #[test]
    fn take_leaves_source_empty(values in proptest::collection::vec(any::<u32>(), 0..30)) {
        let mut source: Vector<u32> = values.iter().copied().collect();
        let taken = source.take();
        prop_assert_eq!(source.len(), 0);
        prop_assert_eq!(source.capacity(), 0);
        prop_assert_eq!(taken, values.as_slice());
    }

    #[test]
    fn by_move_matches_model(ops in proptest::collection::vec(op(), 0..120)) {
        check_against_model::<ByMove>(&ops);
    }

    #[test]
    fn by_clone_matches_model(ops in proptest::collection::vec(op(), 0..120)) {
        check_against_model::<ByClone>(&ops);
    }

    #[test]
    fn by_relocate_matches_model(ops in proptest::collection::vec(op(), 0..120)) {
        check_against_model::<ByRelocate>(&ops);
    }
}
