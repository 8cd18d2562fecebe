use packmap::{Arrayable, Key, Package};

#[test]
fn test_empty_package() {
    let pkg = Package::<i32>::new();

    assert!(pkg.is_empty());
    assert_eq!(pkg.len(), 0);
    assert!(pkg.keys().is_empty());
    assert!(pkg.values().is_empty());
}

#[test]
fn test_positional_construction_assigns_sequential_keys() {
    let pkg = Package::from_values(["a", "b", "c"]);

    assert_eq!(pkg.keys(), vec![Key::Int(0), Key::Int(1), Key::Int(2)]);
    assert_eq!(pkg.values(), vec!["a", "b", "c"]);
}

#[test]
fn test_pack_overwrites_without_duplicating() {
    let mut pkg = Package::new();

    pkg.pack("x", 10);
    pkg.pack("x", 20);

    assert_eq!(pkg.item("x"), Some(&20));
    assert_eq!(pkg.len(), 1);
}

#[test]
fn test_overwrite_preserves_iteration_position() {
    let mut pkg = Package::new();
    pkg.pack("a", 1);
    pkg.pack("b", 2);
    pkg.pack("c", 3);

    pkg.pack("a", 100);

    assert_eq!(
        pkg.keys(),
        vec![Key::from("a"), Key::from("b"), Key::from("c")]
    );
    assert_eq!(pkg.values(), vec![100, 2, 3]);
}

#[test]
fn test_unpack_is_a_consuming_read() {
    let mut pkg = Package::new();
    pkg.pack("y", 5);

    assert_eq!(pkg.unpack("y"), Some(5));
    assert_eq!(pkg.item("y"), None);
    assert_eq!(pkg.unpack_or("y", 99), 99);
}

#[test]
fn test_unpack_default_leaves_package_untouched() {
    let mut pkg = Package::new();
    pkg.pack("kept", 1);

    assert_eq!(pkg.unpack_or("absent", 7), 7);
    assert_eq!(pkg.len(), 1);
    assert_eq!(pkg.item("kept"), Some(&1));
}

#[test]
fn test_integer_and_string_keys_are_distinct() {
    let mut pkg = Package::new();

    pkg.pack(1, "int-key");
    pkg.pack("1", "str-key");

    assert_eq!(pkg.len(), 2);
    assert_eq!(pkg.item(1), Some(&"int-key"));
    assert_eq!(pkg.item("1"), Some(&"str-key"));
}

#[test]
fn test_to_array_round_trip() {
    let mut pkg = Package::new();
    pkg.pack("name", "deploy".to_string());
    pkg.pack(0, "positional".to_string());
    pkg.pack("env", "prod".to_string());

    let rebuilt: Package<String> = pkg.to_array().into_iter().collect();

    assert_eq!(rebuilt.keys(), pkg.keys());
    assert_eq!(rebuilt.values(), pkg.values());
    assert_eq!(rebuilt.count(), pkg.count());
}

#[test]
fn test_from_iterator_duplicate_keys_keep_first_position_last_value() {
    let pkg: Package<i32> = [("a", 1), ("b", 2), ("a", 3)].into_iter().collect();

    assert_eq!(pkg.keys(), vec![Key::from("a"), Key::from("b")]);
    assert_eq!(pkg.values(), vec![3, 2]);
}

#[test]
fn test_extend_continues_auto_increment() {
    let mut pkg = Package::from_values(["a", "b"]);
    pkg.extend([(Key::Int(5), "explicit")]);

    assert_eq!(pkg.pack_value("appended"), Key::Int(6));
    assert_eq!(pkg.len(), 4);
}

#[test]
fn test_contains_key() {
    let mut pkg = Package::new();
    pkg.pack("present", ());

    assert!(pkg.contains_key("present"));
    assert!(!pkg.contains_key("absent"));
    assert!(!pkg.contains_key(0));
}

#[test]
fn test_iteration_matches_items() {
    let mut pkg = Package::new();
    pkg.pack("a", 1);
    pkg.pack(7, 2);
    pkg.pack("b", 3);

    let iterated: Vec<(Key, i32)> = pkg.iter().map(|(k, v)| (k.clone(), *v)).collect();
    assert_eq!(iterated, pkg.to_array());

    // Iteration is restartable
    assert_eq!(pkg.iter().count(), 3);
    assert_eq!(pkg.iter().count(), 3);
}

#[test]
fn test_borrowed_and_owned_iteration() {
    let mut pkg = Package::new();
    pkg.pack("a", 10);
    pkg.pack("b", 20);

    let mut borrowed_sum = 0;
    for (_key, value) in &pkg {
        borrowed_sum += value;
    }
    assert_eq!(borrowed_sum, 30);

    let owned: Vec<(Key, i32)> = pkg.into_iter().collect();
    assert_eq!(owned, vec![(Key::from("a"), 10), (Key::from("b"), 20)]);
}

#[test]
fn test_default_is_empty() {
    let pkg = Package::<String>::default();
    assert!(pkg.is_empty());
}
