use crate::common::logger::init_test_logger;
use contact_table::common::exception::TableError;
use contact_table::container::chained_hash_table::ChainedHashTable;
use contact_table::container::contact::Contact;
use contact_table::container::hash_table::HashTable;

#[test]
fn test_fresh_table_renders_all_empty() {
    init_test_logger();
    for capacity in [1usize, 5, 10, 64] {
        let table = crate::assert_ok!(ChainedHashTable::new(capacity));
        let lines = table.render();
        assert_eq!(lines.len(), capacity);
        for (index, line) in lines.iter().enumerate() {
            assert_eq!(line, &format!("Index {}: Empty", index));
        }
    }
}

#[test]
fn test_zero_capacity_is_rejected() {
    init_test_logger();
    let err = crate::assert_err!(ChainedHashTable::new(0));
    assert!(matches!(err, TableError::InvalidCapacity(0)));
}

#[test]
fn test_insert_and_search() {
    init_test_logger();
    let mut table = crate::assert_ok!(ChainedHashTable::new(10));
    table.insert("John", "909-876-1234");
    table.insert("Rebecca", "111-555-0002");

    assert_eq!(
        table.search("John"),
        Some(&Contact::new("John", "909-876-1234"))
    );
    assert_eq!(
        table.search("Rebecca").map(|c| c.get_number()),
        Some("111-555-0002")
    );
    assert_eq!(table.search("Chris"), None);
    assert_eq!(table.len(), 2);
}

#[test]
fn test_colliding_keys_keep_independent_values() {
    init_test_logger();
    let mut table = crate::assert_ok!(ChainedHashTable::new(10));
    assert_eq!(table.hash("Amy"), table.hash("May"));

    table.insert("Amy", "111-222-3333");
    table.insert("May", "222-333-1111");

    assert_eq!(table.search("Amy").unwrap().get_number(), "111-222-3333");
    assert_eq!(table.search("May").unwrap().get_number(), "222-333-1111");
    crate::assert_chain!(table, "Amy", ["Amy", "May"]);

    let line = &table.render()[table.hash("Amy")];
    let amy = line.find("Amy").unwrap();
    let may = line.find("May").unwrap();
    assert!(amy < may, "Amy should render before May: {}", line);
}

#[test]
fn test_missing_key_in_occupied_bucket() {
    init_test_logger();
    let mut table = crate::assert_ok!(ChainedHashTable::new(10));
    table.insert("Amy", "111-222-3333");
    table.insert("May", "222-333-1111");

    // "Chris" shares bucket 5 with Amy and May
    assert_eq!(table.hash("Chris"), table.hash("Amy"));
    assert!(table.search("Chris").is_none());
    assert!(!table.contains_key("Chris"));
}

#[test]
fn test_reinsert_updates_number() {
    init_test_logger();
    let mut table = crate::assert_ok!(ChainedHashTable::new(10));
    table.insert("Rebecca", "111-555-0002");
    table.insert("Rebecca", "999-444-9999");

    let contact = table.search("Rebecca").unwrap();
    assert_eq!(contact.get_number(), "999-444-9999");
    assert_eq!(contact.get_name(), "Rebecca");
    assert_eq!(table.len(), 1);
    crate::assert_chain!(table, "Rebecca", ["Rebecca"]);
    assert_eq!(
        table.render()[table.hash("Rebecca")],
        "Index 7: - Rebecca: 999-444-9999"
    );
}

#[test]
fn test_update_does_not_reorder_chain() {
    init_test_logger();
    let mut table = crate::assert_ok!(ChainedHashTable::new(10));
    for key in ["abc", "bca", "cab"] {
        table.insert(key, "0");
    }
    table.insert("abc", "1");

    crate::assert_chain!(table, "abc", ["abc", "bca", "cab"]);
    assert_eq!(table.search("abc").unwrap().get_number(), "1");
    assert_eq!(table.len(), 3);
}

#[test]
fn test_entries_live_in_their_hash_bucket() {
    init_test_logger();
    let mut table = crate::assert_ok!(ChainedHashTable::new(7));
    let keys: Vec<String> = (0..100).map(|i| format!("contact-{}", i)).collect();
    for key in &keys {
        table.insert(key, "555-0100");
    }

    assert_eq!(table.len(), keys.len());
    for index in 0..table.capacity() {
        for entry in table.chain(index).unwrap() {
            assert_eq!(table.hash(entry.get_key()), index);
        }
    }
    for key in &keys {
        assert_eq!(table.search(key).unwrap().get_name(), key);
    }
    assert_eq!(table.iter().count(), keys.len());
}

#[test]
fn test_single_bucket_table() {
    init_test_logger();
    let mut table = crate::assert_ok!(ChainedHashTable::new(1));
    table.insert("John", "1");
    table.insert("Rebecca", "2");
    table.insert("John", "3");

    assert_eq!(table.render(), vec!["Index 0: - John: 3 - Rebecca: 2"]);
}
