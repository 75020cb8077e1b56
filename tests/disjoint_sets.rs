//! Properties every disjoint-sets variant has to satisfy, checked with proptest.

use {
    proptest::prelude::*,
    unionsum::{
        disjoint_sets,
        QuickFind,
        QuickUnion,
        UnionFind,
        WeightedQuickUnion,
        WeightedQuickUnionPathCompression,
    },
};

const UNIONS: [(usize, usize); 11] = [
    (4, 3), (3, 8), (6, 5), (9, 4), (2, 1), (8, 9),
    (5, 0), (7, 2), (6, 1), (1, 0), (6, 7),
];

/// Labels every vertex of the graph with the smallest vertex of its component.
fn reference_components(len: usize, edges: &[(usize, usize)]) -> Vec<usize> {
    let mut neighbours = vec![Vec::new(); len];
    for &(p, q) in edges {
        neighbours[p].push(q);
        neighbours[q].push(p);
    }

    let mut label = vec![usize::MAX; len];
    for start in 0 .. len {
        if label[start] != usize::MAX {
            continue
        }

        let mut stack = vec![start];
        label[start] = start;
        while let Some(vertex) = stack.pop() {
            for &next in &neighbours[vertex] {
                if label[next] == usize::MAX {
                    label[next] = start;
                    stack.push(next);
                }
            }
        }
    }

    label
}

fn unions() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize ..= 40).prop_flat_map(|len| {
        (Just(len), proptest::collection::vec((0 .. len, 0 .. len), 0 ..= 3 * len))
    })
}

fn check_example<U: UnionFind>() {
    let mut sets = U::new(10);

    for &(p, q) in &UNIONS {
        sets.union(p, q);
    }

    assert_eq!(sets.count(), 2);
    assert_eq!(sets.components(), vec![vec![0, 1, 2, 5, 6, 7], vec![3, 4, 8, 9]]);
    assert_eq!(sets.len_of_set(6), 6);
    assert!(sets.connected(8, 9));
    assert!(!sets.connected(0, 9));
}

#[test]
fn example_leaves_two_components() {
    check_example::<QuickFind>();
    check_example::<QuickUnion>();
    check_example::<WeightedQuickUnion>();
    check_example::<WeightedQuickUnionPathCompression>();
}

#[test]
fn macro_joins_the_listed_pairs() {
    let sets = disjoint_sets![WeightedQuickUnionPathCompression; 10;
        (4, 3), (3, 8), (6, 5), (9, 4), (2, 1), (8, 9),
        (5, 0), (7, 2), (6, 1), (1, 0), (6, 7),
    ];

    assert_eq!(sets.count(), 2);
}

#[test]
fn empty_universe_has_no_sets() {
    let sets = QuickUnion::new(0);

    assert!(sets.is_empty());
    assert_eq!(sets.count(), 0);
    assert!(sets.components().is_empty());
}

fn check_closure<U: UnionFind>(len: usize, pairs: &[(usize, usize)]) -> Result<(), TestCaseError> {
    let mut sets = U::new(len);
    for &(p, q) in pairs {
        sets.union(p, q);
    }

    let label = reference_components(len, pairs);
    for p in 0 .. len {
        for q in 0 .. len {
            prop_assert_eq!(sets.connected(p, q), label[p] == label[q]);
        }
    }

    let mut distinct = label.clone();
    distinct.sort_unstable();
    distinct.dedup();
    prop_assert_eq!(sets.count(), distinct.len());

    Ok(())
}

fn check_count<U: UnionFind>(len: usize, pairs: &[(usize, usize)]) -> Result<(), TestCaseError> {
    let mut sets = U::new(len);
    prop_assert_eq!(sets.count(), len);

    for &(p, q) in pairs {
        let before = sets.count();
        let was_connected = sets.connected(p, q);

        sets.union(p, q);

        let expected = if was_connected { before } else { before - 1 };
        prop_assert_eq!(sets.count(), expected);
        prop_assert!(sets.connected(p, q));

        // Joining the same pair again has no effect.
        let components = sets.components();
        sets.union(p, q);
        sets.union(q, p);
        prop_assert_eq!(sets.count(), expected);
        prop_assert_eq!(sets.components(), components);
    }

    prop_assert!(sets.count() >= 1);

    Ok(())
}

proptest! {
    #[test]
    fn connected_matches_graph_components((len, pairs) in unions()) {
        check_closure::<QuickFind>(len, &pairs)?;
        check_closure::<QuickUnion>(len, &pairs)?;
        check_closure::<WeightedQuickUnion>(len, &pairs)?;
        check_closure::<WeightedQuickUnionPathCompression>(len, &pairs)?;
    }

    #[test]
    fn count_drops_by_one_per_merge((len, pairs) in unions()) {
        check_count::<QuickFind>(len, &pairs)?;
        check_count::<QuickUnion>(len, &pairs)?;
        check_count::<WeightedQuickUnion>(len, &pairs)?;
        check_count::<WeightedQuickUnionPathCompression>(len, &pairs)?;
    }

    #[test]
    fn variants_agree_at_every_step((len, pairs) in unions()) {
        let mut quick_find = QuickFind::new(len);
        let mut quick_union = QuickUnion::new(len);
        let mut weighted = WeightedQuickUnion::new(len);
        let mut compressed = WeightedQuickUnionPathCompression::new(len);

        for &(p, q) in &pairs {
            quick_find.union(p, q);
            quick_union.union(p, q);
            weighted.union(p, q);
            compressed.union(p, q);

            let count = quick_find.count();
            prop_assert_eq!(quick_union.count(), count);
            prop_assert_eq!(weighted.count(), count);
            prop_assert_eq!(compressed.count(), count);

            let components = quick_find.components();
            prop_assert_eq!(&quick_union.components(), &components);
            prop_assert_eq!(&weighted.components(), &components);
            prop_assert_eq!(&compressed.components(), &components);
        }
    }

    #[test]
    fn weighted_set_sizes_match_components((len, pairs) in unions()) {
        let mut weighted = WeightedQuickUnion::new(len);
        let mut compressed = WeightedQuickUnionPathCompression::new(len);

        for &(p, q) in &pairs {
            weighted.union(p, q);
            compressed.union(p, q);
        }

        for component in compressed.components() {
            for &index in &component {
                prop_assert_eq!(weighted.len_of_set(index), component.len());
                prop_assert_eq!(compressed.len_of_set(index), component.len());
            }
        }
    }

    #[test]
    fn arbitrary_sets_are_consistent(sets in any::<WeightedQuickUnionPathCompression>()) {
        let components = sets.components();

        prop_assert_eq!(components.len(), sets.count());
        prop_assert_eq!(components.iter().map(Vec::len).sum::<usize>(), sets.len());
        for component in &components {
            prop_assert!(component.iter().all(|&index| sets.connected(index, component[0])));
        }
    }

    #[test]
    fn arbitrary_quick_find_count_matches_components(sets in any::<QuickFind>()) {
        prop_assert_eq!(sets.components().len(), sets.count());
    }
}
