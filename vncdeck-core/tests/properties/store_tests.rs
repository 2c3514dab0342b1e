//! Property-based tests for the connection store
//!
//! A store driven by random add/update/delete sequences must agree with a
//! plain in-memory list, and a fresh store over the same directory must see
//! the same data.

use proptest::prelude::*;
use tempfile::TempDir;
use vncdeck_core::models::Connection;
use vncdeck_core::store::ConnectionStore;

#[derive(Debug, Clone)]
enum Op {
    Add(Connection),
    Update(String, Connection),
    Delete(String),
}

// Small name pool so updates and deletes hit existing entries
fn arb_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["alpha", "beta", "gamma", "delta"]).prop_map(str::to_string)
}

fn arb_connection() -> impl Strategy<Value = Connection> {
    (arb_name(), "[a-z]{1,8}\\.lan", 1i64..=65535, prop::option::of("[a-z]{1,6}")).prop_map(
        |(name, host, port, username)| {
            Connection::new(name, host, port)
                .expect("generated fields are valid")
                .with_username(username)
        },
    )
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => arb_connection().prop_map(Op::Add),
        2 => (arb_name(), arb_connection()).prop_map(|(old, conn)| Op::Update(old, conn)),
        1 => arb_name().prop_map(Op::Delete),
    ]
}

fn apply_to_model(model: &mut Vec<Connection>, op: &Op) -> bool {
    match op {
        Op::Add(conn) => {
            model.push(conn.clone());
            true
        }
        Op::Update(old, conn) => match model.iter_mut().find(|c| c.name() == old) {
            Some(slot) => {
                *slot = conn.clone();
                true
            }
            None => false,
        },
        Op::Delete(name) => {
            let before = model.len();
            model.retain(|c| c.name() != name);
            model.len() != before
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(40))]

    /// Property: the store behaves like an ordered list with first-match
    /// update and delete-all-matches
    #[test]
    fn prop_store_matches_model(ops in prop::collection::vec(arb_op(), 0..20)) {
        let dir = TempDir::new().expect("temp dir");
        let store = ConnectionStore::open(dir.path()).expect("open store");
        let mut model = Vec::new();

        for op in &ops {
            let expected = apply_to_model(&mut model, op);
            let actual = match op {
                Op::Add(conn) => store.add(conn).map(|()| true),
                Op::Update(old, conn) => store.update(old, conn.clone()),
                Op::Delete(name) => store.delete(name),
            }
            .expect("store write");
            prop_assert_eq!(actual, expected);
            prop_assert_eq!(store.list(), model.clone());
        }

        let reopened = ConnectionStore::open(dir.path()).expect("reopen store");
        prop_assert_eq!(reopened.list(), model);
    }

    /// Property: get_by_name returns the first connection with that name
    #[test]
    fn prop_get_by_name_first_match(conns in prop::collection::vec(arb_connection(), 0..8), name in arb_name()) {
        let dir = TempDir::new().expect("temp dir");
        let store = ConnectionStore::open(dir.path()).expect("open store");
        for conn in &conns {
            store.add(conn).expect("add");
        }

        let expected = conns.iter().find(|c| c.name() == name).cloned();
        prop_assert_eq!(store.get_by_name(&name), expected);
    }

    /// Property: the last-used marker holds exactly the last saved connection
    #[test]
    fn prop_last_used_is_last_saved(conns in prop::collection::vec(arb_connection(), 1..6)) {
        let dir = TempDir::new().expect("temp dir");
        let store = ConnectionStore::open(dir.path()).expect("open store");
        for conn in &conns {
            store.save_last_used(conn).expect("save last used");
        }

        prop_assert_eq!(store.load_last_used(), conns.last().cloned());
        prop_assert!(store.list().is_empty());
    }
}
