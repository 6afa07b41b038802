use proptest::prelude::*;
use std::collections::BTreeMap;

use super::*;

use crate::coord::{Coord2D, Coord3D};
use crate::dim::{Dim2D, Dim3D};

#[test]
fn test_store_default_elision() {
    let mut store = CellStore::<i32, Dim2D>::new(0);
    let c = Coord2D::from([3, 4]);
    assert_eq!(&0, store.get(&c));

    // Writing the default to an absent cell does nothing.
    store.set(c, 0);
    assert_eq!(0, store.len());

    store.set(c, 5);
    assert_eq!(&5, store.get(&c));
    assert!(store.contains(&c));
    assert_eq!(1, store.len());

    // Overwrite.
    store.set(c, -2);
    assert_eq!(&-2, store.get(&c));
    assert_eq!(1, store.len());

    // Writing the default removes the entry.
    store.set(c, 0);
    assert_eq!(&0, store.get(&c));
    assert!(!store.contains(&c));
    assert!(store.is_empty());
}

#[test]
fn test_store_nonzero_default() {
    let mut store = CellStore::<char, Dim3D>::new('.');
    let c = Coord3D::from([1, 2, 3]);
    store.set(c, '#');
    store.set(Coord3D::origin(), '.');
    assert_eq!(1, store.len());
    assert_eq!(&'#', store.get(&c));
    assert_eq!(&'.', store.get(&Coord3D::repeat(9)));
    assert_eq!(&'.', store.default_value());
    assert_eq!(Some('#'), store.remove(&c));
    assert_eq!(None, store.remove(&c));
}

#[test]
fn test_store_equality_and_copy() {
    let mut a = CellStore::<u8, Dim2D>::new(0);
    a.set(Coord2D::from([0, 1]), 1);
    a.set(Coord2D::from([1, 0]), 2);

    let mut b = a.clone();
    assert_eq!(a, b);
    b.set(Coord2D::from([1, 0]), 3);
    assert_ne!(a, b);
    assert_eq!(&2, a.get(&Coord2D::from([1, 0])));

    b.clone_from(&a);
    assert_eq!(a, b);

    let moved = a.take();
    assert!(a.is_empty());
    assert_eq!(moved, b);
    assert_eq!(&0, a.default_value());
}

#[test]
fn test_store_sweep() {
    let mut store = CellStore::<i32, Dim2D>::new(0);
    for i in 1..5 {
        store.set(Coord2D::from([i, i]), i as i32);
    }
    for (coord, value) in store.iter_mut() {
        if coord[0] % 2 == 0 {
            *value = 0;
        }
    }
    assert_eq!(2, store.sweep());
    assert_eq!(
        vec![Coord2D::from([1, 1]), Coord2D::from([3, 3])],
        store.iter().map(|(c, _)| *c).collect::<Vec<_>>(),
    );
    assert_eq!(0, store.sweep());
}

proptest! {
    /// Tests that a store behaves like a dense map with elision applied.
    #[test]
    fn test_store_matches_model(
        writes in prop::collection::vec(
            (prop::array::uniform2(0..6_usize), 0..3_i32),
            0..64,
        ),
    ) {
        let mut store = CellStore::<i32, Dim2D>::new(0);
        let mut model = BTreeMap::new();
        for (pos, value) in writes {
            let before = store.len();
            let was_explicit = store.contains(&Coord2D::from(pos));
            store.set(Coord2D::from(pos), value);
            if value == 0 {
                model.remove(&pos);
                prop_assert_eq!(before - was_explicit as usize, store.len());
            } else {
                model.insert(pos, value);
                prop_assert_eq!(before + !was_explicit as usize, store.len());
            }
            prop_assert_eq!(&value, store.get(&Coord2D::from(pos)));
        }
        prop_assert_eq!(model.len(), store.len());
        let stored: Vec<_> = store.iter().map(|(c, &v)| (c.into_array(), v)).collect();
        let expected: Vec<_> = model.into_iter().collect();
        prop_assert_eq!(expected, stored);
    }
}
