use super::*;

const A: usize = 0;
const B: usize = 1;

#[test]
fn starts_all_closed() {
    let set = ExclusiveSet::new(3);
    assert_eq!(set.open(), None);
    assert!((0..3).all(|i| !set.is_open(i)));
}

#[test]
fn opening_b_while_a_open_closes_a() {
    let mut set = ExclusiveSet::new(3);
    set.toggle(A);
    assert_eq!(set.toggle(B), Some(B));
    assert!(!set.is_open(A));
    assert!(set.is_open(B));
}

#[test]
fn toggling_open_item_leaves_none_open() {
    let mut set = ExclusiveSet::new(3);
    set.toggle(A);
    assert_eq!(set.toggle(A), None);
    assert!((0..3).all(|i| !set.is_open(i)));
}

#[test]
fn out_of_range_toggle_is_ignored() {
    let mut set = ExclusiveSet::new(2);
    set.toggle(B);
    assert_eq!(set.toggle(7), Some(B));
}

#[test]
fn select_never_closes() {
    let mut set = ExclusiveSet::new(3);
    assert_eq!(set.select(2), Some(2));
    assert_eq!(set.select(2), Some(2));
    assert_eq!(set.select(0), Some(0));
    assert!(!set.is_open(2));
}

#[test]
fn empty_set_is_inert() {
    let mut set = ExclusiveSet::new(0);
    assert!(set.is_empty());
    assert_eq!(set.toggle(0), None);
    assert_eq!(set.select(0), None);
    assert_eq!(set.len(), 0);
}
