#![cfg(feature = "serde")]

use nbt_tree::{Compound, List, Tag};

fn player() -> Compound {
    let mut pos = Compound::new();
    pos.insert("y", 64i32);
    pos.insert("x", -3i32);

    let mut player = Compound::new();
    player.insert("name", "Steve");
    player.insert("age", 30i32);
    player.insert("pos", pos);
    player.insert("hearts", List::from_values([1.5f64, 2.0]).unwrap());
    player.insert("seeds", vec![1i64, 2]);
    player
}

#[test]
fn test_compound_serializes_in_insertion_order() {
    let json = serde_json::to_string(&player()).unwrap();
    assert_eq!(
        json,
        r#"{"name":"Steve","age":30,"pos":{"y":64,"x":-3},"hearts":[1.5,2.0],"seeds":[1,2]}"#
    );
}

#[test]
fn test_tag_serializes_as_single_entry_map() {
    let json = serde_json::to_string(&Tag::new("root", 7i8)).unwrap();
    assert_eq!(json, r#"{"root":7}"#);
}

#[test]
fn test_plain_matches_tree_serialization() {
    let tree = serde_json::to_string(&player()).unwrap();
    let plain = serde_json::to_string(&player().to_plain()).unwrap();
    assert_eq!(tree, plain);
}

#[test]
fn test_empty_list_and_compound() {
    let mut compound = Compound::new();
    compound.insert("l", List::new());
    compound.insert("c", Compound::new());
    assert_eq!(serde_json::to_string(&compound).unwrap(), r#"{"l":[],"c":{}}"#);
}
