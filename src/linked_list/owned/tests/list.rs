extern crate std;

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec;
use std::vec::Vec;

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::Tracked;
use crate::linked_list::owned::{
    error::{InsertError, NotFound},
    list::List,
    traits::{Container, Keyed},
};

fn values(list: &List<i32>) -> Vec<i32> {
    let mut out = vec![];
    list.for_each(|v| out.push(*v));
    out
}

fn eq(data: &i32, key: &i32) -> bool {
    data == key
}

#[test]
fn test_list_add_tail_visits_in_order() {
    let mut list = List::new();
    list.add_tail(1).unwrap();
    list.add_tail(2).unwrap();
    list.add_tail(3).unwrap();

    assert_eq!(values(&list), vec![1, 2, 3]);
    assert_eq!(list.head(), Some(&1));
    assert_eq!(list.tail(), Some(&3));
    list.chain().assert_invariants();
}

#[test]
fn test_list_add_head_and_tail_mixed() {
    let mut list = List::new();
    let mut model = VecDeque::new();

    for (i, front) in [true, false, false, true, false, true].into_iter().enumerate() {
        let v = i as i32;
        if front {
            list.add_head(v).unwrap();
            model.push_front(v);
        } else {
            list.add_tail(v).unwrap();
            model.push_back(v);
        }
        list.chain().assert_invariants();
        assert_eq!(values(&list), model.iter().copied().collect::<Vec<_>>());
    }
}

#[test]
fn test_list_add_head_on_empty_sets_tail() {
    let mut list = List::new();
    list.add_head(5).unwrap();
    assert_eq!(list.head(), Some(&5));
    assert_eq!(list.tail(), Some(&5));
    list.chain().assert_invariants();
}

#[test]
fn test_list_find() {
    let mut list = List::new();
    assert!(list.find(eq, &1).is_none());

    list.add_tail(1).unwrap();
    list.add_tail(2).unwrap();
    list.add_tail(2).unwrap();
    list.add_tail(3).unwrap();

    let found = list.find(eq, &2).unwrap();
    assert_eq!(*found, 2);
    assert!(list.find(eq, &4).is_none());

    // First match wins.
    let first = list.find(eq, &2).unwrap().handle();
    list.delete(first).unwrap();
    assert_eq!(values(&list), vec![1, 2, 3]);
}

#[test]
fn test_list_find_with_unsized_key() {
    let mut list = List::new();
    list.add_tail(std::string::String::from("alpha")).unwrap();
    list.add_tail(std::string::String::from("beta")).unwrap();

    let found = list.find(|data, key: &str| data == key, "beta").unwrap();
    assert_eq!(found.data(), "beta");
}

#[test]
fn test_list_delete_middle_keeps_tail() {
    let mut list = List::new();
    list.add_tail(1).unwrap();
    let middle = list.add_tail(2).unwrap();
    list.add_tail(3).unwrap();

    list.delete(middle).unwrap();
    list.chain().assert_invariants();
    assert_eq!(values(&list), vec![1, 3]);
    assert_eq!(list.tail(), Some(&3));
}

#[test]
fn test_list_delete_head() {
    let mut list = List::new();
    let head = list.add_tail(1).unwrap();
    list.add_tail(2).unwrap();
    list.add_tail(3).unwrap();

    list.delete(head).unwrap();
    list.chain().assert_invariants();
    assert_eq!(list.head(), Some(&2));
    assert_eq!(list.tail(), Some(&3));
}

#[test]
fn test_list_delete_tail() {
    let mut list = List::new();
    list.add_tail(1).unwrap();
    list.add_tail(2).unwrap();
    let tail = list.add_tail(3).unwrap();

    list.delete(tail).unwrap();
    list.chain().assert_invariants();
    assert_eq!(list.tail(), Some(&2));

    list.add_tail(4).unwrap();
    assert_eq!(values(&list), vec![1, 2, 4]);
}

#[test]
fn test_list_delete_sole_node() {
    let mut list = List::new();
    let only = list.add_head(1).unwrap();
    list.delete(only).unwrap();
    list.chain().assert_invariants();
    assert!(list.is_empty());
    assert_eq!(list.head(), None);
    assert_eq!(list.tail(), None);
}

#[test]
fn test_list_delete_rejects_foreign_and_stale_handles() {
    let mut list = List::new();
    let mut other = List::new();
    list.add_tail(1).unwrap();
    let foreign = other.add_tail(1).unwrap();

    assert_eq!(list.delete(foreign), Err(NotFound));
    assert_eq!(values(&list), vec![1]);

    let stale = list.add_tail(2).unwrap();
    list.delete(stale).unwrap();
    assert_eq!(list.delete(stale), Err(NotFound));
    assert_eq!(list.get(stale), None);
    list.chain().assert_invariants();
    assert_eq!(other.len(), 1);
}

#[test]
fn test_list_delete_head_until_empty_frees_everything() {
    let drops = Rc::new(Cell::new(0));
    let mut list = List::new();
    for i in 0..8 {
        list.add_tail(Tracked::new(i, &drops)).unwrap();
    }

    while let Some(head) = list.find(|_, _: &()| true, &()).map(|n| n.handle()) {
        list.delete(head).unwrap();
        list.chain().assert_invariants();
    }

    assert!(list.is_empty());
    assert_eq!(drops.get(), 8);
}

#[test]
fn test_list_remove_returns_payload() {
    let drops = Rc::new(Cell::new(0));
    let mut list = List::new();
    let handle = list.add_tail(Tracked::new(9, &drops)).unwrap();

    let payload = list.remove(handle).unwrap();
    assert_eq!(payload.id, 9);
    assert_eq!(drops.get(), 0);
    drop(payload);
    assert_eq!(drops.get(), 1);
}

#[test]
fn test_list_remove_by_and_delete_by() {
    let mut list = List::new();
    for v in [4, 5, 6, 5] {
        list.add_tail(v).unwrap();
    }

    assert_eq!(list.remove_by(eq, &5), Ok(5));
    assert_eq!(values(&list), vec![4, 6, 5]);

    list.delete_by(eq, &5).unwrap();
    list.chain().assert_invariants();
    assert_eq!(values(&list), vec![4, 6]);
    assert_eq!(list.tail(), Some(&6));

    assert_eq!(list.delete_by(eq, &5), Err(NotFound));
    assert_eq!(values(&list), vec![4, 6]);
}

#[test]
fn test_list_get_and_get_mut() {
    let mut list = List::new();
    let a = list.add_tail(1).unwrap();
    let b = list.add_tail(2).unwrap();

    assert_eq!(list.get(a), Some(&1));
    *list.get_mut(b).unwrap() = 20;
    assert_eq!(values(&list), vec![1, 20]);
}

#[test]
fn test_list_teardown_is_idempotent() {
    let drops = Rc::new(Cell::new(0));
    let mut list = List::new();
    for i in 0..5 {
        list.add_head(Tracked::new(i, &drops)).unwrap();
    }

    assert_eq!(list.teardown(), 5);
    assert_eq!(drops.get(), 5);
    list.chain().assert_invariants();

    assert_eq!(list.teardown(), 0);
    assert_eq!(drops.get(), 5);

    // Still usable afterwards.
    list.add_tail(Tracked::new(9, &drops)).unwrap();
    assert_eq!(list.len(), 1);
}

#[test]
fn test_list_drop_frees_payloads() {
    let drops = Rc::new(Cell::new(0));
    {
        let mut list = List::new();
        for i in 0..3 {
            list.add_tail(Tracked::new(i, &drops)).unwrap();
        }
    }
    assert_eq!(drops.get(), 3);
}

#[test]
fn test_list_for_each_on_empty() {
    let list = List::<i32>::new();
    let mut calls = 0;
    list.for_each(|_| calls += 1);
    assert_eq!(calls, 0);
}

#[test]
fn test_list_limit() {
    let mut list = List::with_limit(2);
    assert_eq!(list.limit(), Some(2));
    list.add_tail(1).unwrap();
    list.add_head(0).unwrap();
    assert_eq!(list.add_tail(2), Err(InsertError::Full(2)));
    list.chain().assert_invariants();
    assert_eq!(values(&list), vec![0, 1]);
    assert_eq!(List::<i32>::new().limit(), None);
}

#[test]
fn test_list_iterators() {
    let mut list = List::new();
    for v in 1..=4 {
        list.add_tail(v).unwrap();
    }

    assert_eq!(list.iter().len(), 4);
    for v in &mut list {
        *v *= 10;
    }
    assert_eq!((&list).into_iter().copied().collect::<Vec<_>>(), vec![10, 20, 30, 40]);
    assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![10, 20, 30, 40]);
}

#[test]
fn test_list_debug() {
    let mut list = List::new();
    list.add_tail(1).unwrap();
    list.add_tail(2).unwrap();
    assert_eq!(std::format!("{:?}", list), "[1, 2]");
}

#[test]
fn test_list_container_trait() {
    fn drain<C: Container>(c: &mut C) -> usize {
        assert_eq!(c.is_empty(), c.len() == 0);
        c.teardown()
    }

    let mut list = List::new();
    list.add_tail(1).unwrap();
    list.add_tail(2).unwrap();
    assert_eq!(drain(&mut list), 2);
    assert!(Container::is_empty(&list));
}

#[derive(Debug, crate::Keyed)]
#[keyed(crate_path = "crate")]
struct Record {
    #[key]
    a: u32,
    name: &'static str,
}

#[test]
fn test_list_find_key() {
    let mut list = List::new();
    list.add_tail(Record { a: 1, name: "one" }).unwrap();
    list.add_tail(Record { a: 2, name: "two" }).unwrap();

    let found = list.find_key(&2).unwrap();
    assert_eq!(found.name, "two");
    assert_eq!(*found.key(), 2);
    assert!(list.find_key(&3).is_none());

    let handle = found.handle();
    assert_eq!(list.remove(handle).unwrap().name, "two");
}

#[test]
fn test_list_random_ops_match_model() {
    let mut rng = StdRng::seed_from_u64(0x11_57);
    let mut list = List::new();
    let mut model: VecDeque<i32> = VecDeque::new();

    for step in 0..2_000 {
        let v = step as i32;
        match rng.random_range(0..5) {
            0 => {
                list.add_head(v).unwrap();
                model.push_front(v);
            }
            1 => {
                list.add_tail(v).unwrap();
                model.push_back(v);
            }
            2 | 3 if !model.is_empty() => {
                let idx = rng.random_range(0..model.len());
                let target = model[idx];
                assert_eq!(list.remove_by(eq, &target), Ok(target));
                model.remove(idx);
            }
            _ => {
                assert_eq!(list.delete_by(eq, &-1), Err(NotFound));
            }
        }
        list.chain().assert_invariants();
        assert_eq!(list.head(), model.front());
        assert_eq!(list.tail(), model.back());
    }
    assert_eq!(values(&list), model.into_iter().collect::<Vec<_>>());
}
