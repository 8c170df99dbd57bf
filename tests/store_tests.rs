//! Store behavior tests
//!
//! Exercises the cell store on its own: dense address assignment, the
//! checked read path, and in-place assignment.

use cellar::{Addr, BindingError, Store};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_empty_store() {
    let store: Store<i64> = Store::new();
    assert_eq!(store.len(), 0);
    assert!(store.is_empty());
    assert!(store.deref(Addr::new(0)).is_err());
}

#[test]
fn test_nth_extend_returns_address_n_minus_one() {
    let mut store = Store::new();
    for n in 0..10 {
        let addr = store.extend(n * 100);
        assert_eq!(addr, Addr::new(n));
    }
    assert_eq!(store.len(), 10);
}

#[test]
fn test_deref_reads_back_initial_value() {
    let mut store = Store::new();
    let a = store.extend("first".to_string());
    let b = store.extend("second".to_string());

    assert_eq!(store.deref(a).unwrap(), "first");
    assert_eq!(store.deref(b).unwrap(), "second");
}

#[test]
fn test_deref_out_of_range_reports_address_and_len() {
    let mut store = Store::new();
    store.extend(1);
    store.extend(2);

    let err = store.deref(Addr::new(2)).unwrap_err();
    assert_eq!(
        err,
        BindingError::InvalidAddress {
            addr: Addr::new(2),
            len: 2
        }
    );
}

#[test]
fn test_assign_is_observed_by_later_deref() {
    let mut store = Store::new();
    let addr = store.extend(1);

    store.assign(addr, 99).unwrap();
    assert_eq!(store.deref(addr).unwrap(), &99);

    // Assignment does not allocate
    assert_eq!(store.len(), 1);
}

#[test]
fn test_assign_leaves_other_cells_untouched() {
    let mut store = Store::new();
    let a = store.extend(1);
    let b = store.extend(2);
    let c = store.extend(3);

    store.assign(b, 20).unwrap();

    assert_eq!(store.deref(a).unwrap(), &1);
    assert_eq!(store.deref(b).unwrap(), &20);
    assert_eq!(store.deref(c).unwrap(), &3);
}

#[test]
fn test_assign_out_of_range_fails() {
    let mut store: Store<i64> = Store::new();
    assert!(store.assign(Addr::new(0), 1).is_err());
}

#[test]
fn test_extend_many_returns_addresses_in_order() {
    let mut store = Store::new();
    store.extend(0);

    let addrs = store.extend_many([10, 20, 30]);
    assert_eq!(addrs, vec![Addr::new(1), Addr::new(2), Addr::new(3)]);
    assert_eq!(store.deref(addrs[1]).unwrap(), &20);
}

// ==================== Property Tests ====================

proptest! {
    #[test]
    fn prop_addresses_are_dense_and_monotonic(values in proptest::collection::vec(any::<i64>(), 0..64)) {
        let mut store = Store::new();
        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(store.extend(*value), Addr::new(i));
        }
        prop_assert_eq!(store.len(), values.len());
    }

    #[test]
    fn prop_deref_succeeds_iff_in_range(
        values in proptest::collection::vec(any::<i64>(), 0..64),
        probe in 0usize..128,
    ) {
        let mut store = Store::new();
        store.extend_many(values.iter().copied());

        let result = store.deref(Addr::new(probe));
        if probe < values.len() {
            prop_assert_eq!(result.unwrap(), &values[probe]);
        } else {
            prop_assert!(result.is_err());
        }
    }

    #[test]
    fn prop_assign_round_trips(
        values in proptest::collection::vec(any::<i64>(), 1..64),
        replacement in any::<i64>(),
        target in any::<prop::sample::Index>(),
    ) {
        let mut store = Store::new();
        let addrs = store.extend_many(values.iter().copied());
        let target = target.index(values.len());

        store.assign(addrs[target], replacement).unwrap();

        for (i, addr) in addrs.iter().enumerate() {
            let expected = if i == target { replacement } else { values[i] };
            prop_assert_eq!(store.deref(*addr).unwrap(), &expected);
        }
    }
}
