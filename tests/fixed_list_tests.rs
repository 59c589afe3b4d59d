use atomic_array_list::{AtomicArrayList, AtomicSequence, FixedAtomicArrayList, ListError};

#[test]
fn test_new_fixed_list_has_empty_slots() {
    let list: FixedAtomicArrayList<String> = FixedAtomicArrayList::new(4);
    assert_eq!(list.len(), 4);
    assert!(!list.is_empty());
    assert!(list.iter().all(|slot| slot.is_none()));
    assert_eq!(format!("{list:?}"), "[<empty>, <empty>, <empty>, <empty>]");

    let none: FixedAtomicArrayList<String> = FixedAtomicArrayList::new(0);
    assert!(none.is_empty());
    assert_eq!(format!("{none:?}"), "[]");
}

#[test]
fn test_set_never_grows() {
    let list = FixedAtomicArrayList::from_vec(vec![1, 2, 3]);
    assert_eq!(
        list.set(3, 4),
        Err(ListError::IndexOutOfRange { index: 3, bound: 3 })
    );
    assert_eq!(list.len(), 3);
    assert_eq!(list.set(0, 10).unwrap().as_deref(), Some(&1));
}

#[test]
fn test_structural_changes_rejected() {
    let list = FixedAtomicArrayList::from_vec(vec![1, 2, 3]);
    assert!(matches!(
        list.insert(0, 0),
        Err(ListError::Unsupported { .. })
    ));
    assert!(matches!(list.push(4), Err(ListError::Unsupported { .. })));
    assert!(matches!(list.remove(0), Err(ListError::Unsupported { .. })));

    let view = list.sub_list(0, 2).unwrap();
    assert!(matches!(view.push(9), Err(ListError::Unsupported { .. })));
    assert_eq!(view.len(), 2);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_searches_and_views() {
    let list: FixedAtomicArrayList<&str> = ["x", "a", "b", "a"].into_iter().collect();
    assert_eq!(list.index_of(&"a"), Some(1));
    assert_eq!(list.last_index_of(&"a"), Some(3));
    assert_eq!(list.index_of_from(&"a", 2), Some(3));
    assert_eq!(list.last_index_of_from(&"a", 2), Ok(Some(1)));
    assert!(list.contains(&"b"));
    assert!(!list.contains(&"z"));

    let view = list.sub_list(1, 3).unwrap();
    assert_eq!(view.start(), 1);
    view.set(1, "c").unwrap();
    assert_eq!(list.get(2).unwrap().as_deref(), Some(&"c"));
}

#[test]
fn test_equal_to_growable_with_same_contents() {
    let fixed = FixedAtomicArrayList::from_vec(vec![1, 2, 3]);
    let growable = AtomicArrayList::from_vec(vec![1, 2, 3]);
    assert!(fixed.sequence_eq(&growable));
    assert!(growable.sequence_eq(&fixed));

    growable.push(4);
    assert!(!fixed.sequence_eq(&growable));
}

#[test]
fn test_export() {
    let list = FixedAtomicArrayList::new(3);
    list.set(0, 1u32).unwrap();
    list.set(2, 70_000).unwrap();
    assert_eq!(list.try_export::<u64>(), Ok(vec![Some(1), None, Some(70_000)]));
    assert_eq!(
        list.try_export::<u16>(),
        Err(ListError::ArrayTypeMismatch { index: 2 })
    );
}

#[test]
fn test_locate_empty_slots() {
    let list = FixedAtomicArrayList::new(4);
    assert_eq!(list.index_of_empty(), Some(0));
    list.set(0, 'a').unwrap();
    list.set(3, 'd').unwrap();
    assert_eq!(list.index_of_empty(), Some(1));
    assert_eq!(list.last_index_of_empty(), Some(2));
}
