use nimtree::*;
use petgraph::graph::NodeIndex;

/// Every board with up to two stones per pile.
fn boards() -> Vec<Piles> {
    let mut boards = Vec::new();
    for a in 0..=2 {
        for b in 0..=2 {
            for c in 0..=2 {
                boards.push(Piles::from([a, b, c]));
            }
        }
    }
    boards
}

/// All vertices below and including `x`, expanding as we go.
fn walk(tree: &mut Tree, x: NodeIndex) -> Vec<NodeIndex> {
    let mut seen = vec![x];
    for child in tree.expand(x).to_vec() {
        seen.extend(walk(tree, child));
    }
    seen
}

#[test]
fn roots_are_terminal_only_when_empty() {
    for piles in boards() {
        let tree = Tree::from(piles);
        assert!(tree.is_terminal(tree.root()) == (piles.total() == 0));
    }
}

#[test]
fn negative_roots_are_rejected() {
    for bad in [[-1i64, 0, 0], [0, -1, 0], [0, 0, -1], [-3, -3, -3]] {
        assert!(matches!(Tree::try_from(bad), Err(Error::InvalidInput(_))));
    }
}

#[test]
fn children_differ_in_exactly_one_pile() {
    let mut tree = Tree::from(Piles::from([2, 1, 2]));
    let root = tree.root();
    for x in walk(&mut tree, root) {
        let parent = tree.state(x);
        for child in tree.expand(x).to_vec() {
            let child = tree.state(child);
            let changed = (0..N_PILES)
                .filter(|&i| child.piles().get(i) != parent.piles().get(i))
                .collect::<Vec<_>>();
            assert!(changed.len() == 1);
            let i = changed[0];
            assert!(child.piles().get(i) < parent.piles().get(i));
            assert!(child.is_maximizing() == !parent.is_maximizing());
        }
    }
}

#[test]
fn children_count_matches_stones() {
    for piles in boards() {
        let mut tree = Tree::from(piles);
        let root = tree.root();
        assert!(tree.expand(root).len() == piles.total() as usize);
    }
}

#[test]
fn children_are_sorted_with_enumeration_ties() {
    for piles in boards() {
        let mut tree = Tree::from(piles);
        let root = tree.root();
        for x in walk(&mut tree, root) {
            let children = tree.expand(x).to_vec();
            for pair in children.windows(2) {
                let (a, b) = (tree.score(pair[0]), tree.score(pair[1]));
                assert!(a <= b);
                if a == b {
                    let ta = tree.at(pair[0]).incoming().unwrap();
                    let tb = tree.at(pair[1]).incoming().unwrap();
                    assert!(ta < tb);
                }
            }
        }
    }
}

#[test]
fn expansion_is_idempotent_everywhere() {
    let mut tree = Tree::from(Piles::from([2, 2, 1]));
    let root = tree.root();
    let vertices = walk(&mut tree, root);
    let n = tree.n();
    for x in vertices {
        let first = tree.expand(x).to_vec();
        let again = tree.expand(x).to_vec();
        assert!(first == again);
    }
    assert!(tree.n() == n);
}

#[test]
fn terminal_scores_follow_perspective() {
    let mut tree = Tree::from(Piles::from([2, 2, 0]));
    let root = tree.root();
    for x in walk(&mut tree, root) {
        if tree.is_terminal(x) {
            let expected = if tree.state(x).is_maximizing() { 1 } else { -1 };
            assert!(tree.score(x) == expected);
        }
    }
}

#[test]
fn interior_scores_are_child_sums() {
    let mut tree = Tree::from(Piles::from([2, 1, 1]));
    let root = tree.root();
    for x in walk(&mut tree, root) {
        if !tree.is_terminal(x) {
            let children = tree.expand(x).to_vec();
            let sum = children.into_iter().map(|c| tree.score(c)).sum::<Score>();
            assert!(tree.score(x) == sum);
        }
    }
}

#[test]
fn memoization_changes_nothing_observable() {
    for piles in boards() {
        let mut plain = Tree::from(piles);
        let mut cached = Tree::from(piles).memoized(true);
        let root = plain.root();
        let a = walk(&mut plain, root);
        let b = walk(&mut cached, root);
        assert!(a == b);
        for x in a {
            assert!(plain.score(x) == cached.score(x));
            assert!(plain.state(x) == cached.state(x));
        }
    }
}

#[test]
fn paths_have_depth_plus_one_entries() {
    let mut tree = Tree::from(Piles::from([1, 2, 2]));
    let root = tree.root();
    let settings = Settings::default();
    for x in walk(&mut tree, root) {
        let depth = tree.at(x).depth();
        let path = tree.path(x, &settings);
        assert!(path.len() == depth + 1);
        assert!(*path[0].state() == tree.state(root));
        assert!(*path[depth].state() == tree.state(x));
    }
}

#[test]
fn stones_strictly_decrease_toward_terminals() {
    let mut tree = Tree::from(Piles::from([2, 2, 2]));
    let root = tree.root();
    let total = tree.state(root).piles().total() as usize;
    let settings = Settings {
        scores: false,
        ..Settings::default()
    };
    for x in walk(&mut tree, root) {
        if tree.is_terminal(x) {
            let path = tree.path(x, &settings);
            assert!(path.len() <= total + 1);
            for pair in path.windows(2) {
                assert!(pair[0].state().piles().total() > pair[1].state().piles().total());
            }
        }
    }
}
