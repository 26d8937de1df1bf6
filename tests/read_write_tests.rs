use nbt_tree::{
    BigEndian, Compound, Error, LittleEndian, List, Tag, TagID, Value, from_slice, read_compound,
    read_tag, to_vec, write_compound, write_tag,
};

/// The `{"name": "Steve", "age": 30}` compound payload, big-endian.
const STEVE_PAYLOAD: &[u8] = &[
    0x08, 0x00, 0x04, b'n', b'a', b'm', b'e', // String "name"
    0x00, 0x05, b'S', b't', b'e', b'v', b'e', // "Steve"
    0x03, 0x00, 0x03, b'a', b'g', b'e', // Int "age"
    0x00, 0x00, 0x00, 0x1E, // 30
    0x00, // END
];

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn steve() -> Compound {
    let mut compound = Compound::new();
    compound.put(Tag::new("name", "Steve"));
    compound.put(Tag::new("age", 30i32));
    compound
}

fn everything() -> Compound {
    let mut nested = Compound::new();
    nested.insert("deeper", Compound::new());
    nested.insert("flag", true);

    let mut list_of_compounds = List::new();
    for i in 0..3i32 {
        let mut item = Compound::new();
        item.insert("i", i);
        list_of_compounds.push(item).unwrap();
    }

    let mut root = Compound::new();
    root.insert("byte", -5i8);
    root.insert("short", 1234i16);
    root.insert("int", -123456i32);
    root.insert("long", i64::MIN);
    root.insert("float", 1.25f32);
    root.insert("double", -2.5e300f64);
    root.insert("bytes", vec![0i8, -1, 127]);
    root.insert("string", "héllo \u{1F600} \0 end");
    root.insert("strings", List::from_values(["a", "b"]).unwrap());
    root.insert("compounds", list_of_compounds);
    root.insert("empty_list", List::new());
    root.insert("typed_empty", List::with_element(TagID::Long));
    root.insert(
        "lists",
        List::from_values([
            List::from_values([1i8]).unwrap(),
            List::from_values([2i8, 3]).unwrap(),
        ])
        .unwrap(),
    );
    root.insert("nested", nested);
    root.insert("ints", vec![i32::MIN, 0, i32::MAX]);
    root.insert("longs", vec![1i64, -1]);
    root
}

// ==================== Scenario ====================

#[test]
fn test_steve_payload_bytes() {
    let mut out = Vec::new();
    steve().write_to::<BigEndian>(&mut out).unwrap();
    assert_eq!(out, STEVE_PAYLOAD);
}

#[test]
fn test_steve_payload_decodes() {
    let mut compound = Compound::new();
    compound.read_from::<BigEndian>(STEVE_PAYLOAD).unwrap();
    assert_eq!(compound, steve());
}

#[test]
fn test_steve_document() {
    let bytes = to_vec::<BigEndian>(&Tag::new("", steve())).unwrap();
    assert_eq!(&bytes[..3], &[0x0A, 0x00, 0x00]);
    assert_eq!(&bytes[3..], STEVE_PAYLOAD);

    let (name, compound) = read_compound::<BigEndian>(&bytes[..]).unwrap();
    assert_eq!(name, "");
    assert_eq!(compound, steve());
}

// ==================== Sentinel ====================

#[test]
fn test_empty_compound_is_single_end_byte() {
    let mut out = Vec::new();
    Compound::new().write_to::<BigEndian>(&mut out).unwrap();
    assert_eq!(out, [0x00]);

    let mut compound = steve();
    compound.read_from::<BigEndian>(&[0x00][..]).unwrap();
    assert!(compound.is_empty());
}

#[test]
fn test_read_stops_at_sentinel() {
    let mut data = STEVE_PAYLOAD.to_vec();
    data.extend_from_slice(&[0xDE, 0xAD]);
    let mut source = &data[..];
    let mut compound = Compound::new();
    compound.read_from::<BigEndian>(&mut source).unwrap();
    assert_eq!(compound, steve());
    assert_eq!(source, &[0xDE, 0xAD]);
}

// ==================== Round-trip ====================

#[test]
fn test_round_trip_big_endian() {
    init_logger();
    let tag = Tag::new("root", everything());
    let bytes = to_vec::<BigEndian>(&tag).unwrap();
    let back = from_slice::<BigEndian>(&bytes).unwrap();
    assert_eq!(back, tag);
    assert_eq!(
        back.value().as_compound().unwrap().keys().collect::<Vec<_>>(),
        everything().keys().collect::<Vec<_>>()
    );
}

#[test]
fn test_round_trip_little_endian() {
    let tag = Tag::new("root", everything());
    let le = to_vec::<LittleEndian>(&tag).unwrap();
    let be = to_vec::<BigEndian>(&tag).unwrap();
    assert_eq!(le.len(), be.len());
    assert_ne!(le, be);
    assert_eq!(from_slice::<LittleEndian>(&le).unwrap(), tag);
}

#[test]
fn test_little_endian_header() {
    let bytes = to_vec::<LittleEndian>(&Tag::new("ab", 1i16)).unwrap();
    assert_eq!(bytes, [0x02, 0x02, 0x00, b'a', b'b', 0x01, 0x00]);
}

#[test]
fn test_typed_empty_list_keeps_element() {
    let bytes = to_vec::<BigEndian>(&Tag::new("", List::with_element(TagID::Long))).unwrap();
    assert_eq!(bytes, [0x09, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00]);
    let back = from_slice::<BigEndian>(&bytes).unwrap();
    assert_eq!(back.value().as_list().unwrap().element(), TagID::Long);
}

#[test]
fn test_writer_and_reader_streams() {
    init_logger();
    let mut out = Vec::new();
    write_tag::<BigEndian>(&mut out, &Tag::new("a", 1i8)).unwrap();
    write_compound::<BigEndian>(&mut out, "b", &steve()).unwrap();

    let mut source = &out[..];
    assert_eq!(read_tag::<BigEndian>(&mut source).unwrap(), Tag::new("a", 1i8));
    let (name, compound) = read_compound::<BigEndian>(&mut source).unwrap();
    assert_eq!(name, "b");
    assert_eq!(compound, steve());
    assert!(source.is_empty());
}

#[test]
fn test_tag_read_write_methods() {
    let tag = Tag::new("n", vec![1i64, 2, 3]);
    let mut out = Vec::new();
    tag.write_to::<LittleEndian>(&mut out).unwrap();
    assert_eq!(Tag::read_from::<LittleEndian>(&out[..]).unwrap(), tag);
}

// ==================== Duplicate names ====================

#[test]
fn test_duplicate_siblings_last_write_wins() {
    let data = [
        0x01, 0x00, 0x01, b'k', 0x01, // Byte "k" = 1
        0x01, 0x00, 0x01, b'j', 0x02, // Byte "j" = 2
        0x01, 0x00, 0x01, b'k', 0x03, // Byte "k" = 3
        0x00,
    ];
    let mut compound = Compound::new();
    compound.read_from::<BigEndian>(&data[..]).unwrap();
    assert_eq!(compound.len(), 2);
    assert_eq!(compound.get("k"), Some(&Value::Byte(3)));
    assert_eq!(compound.keys().collect::<Vec<_>>(), ["k", "j"]);
}

#[test]
fn test_many_siblings() {
    const COUNT: i32 = 100_000;
    let mut data = Vec::new();
    for i in 0..COUNT {
        let name = format!("k{i}");
        data.push(0x03);
        data.extend_from_slice(&(name.len() as u16).to_be_bytes());
        data.extend_from_slice(name.as_bytes());
        data.extend_from_slice(&i.to_be_bytes());
    }
    data.push(0x00);

    let mut compound = Compound::new();
    compound.read_from::<BigEndian>(&data[..]).unwrap();
    assert_eq!(compound.len(), COUNT as usize);
    assert_eq!(compound.keys().next_back(), Some("k99999"));
    assert_eq!(compound.get_as::<i32>("k50000").unwrap(), &50_000);

    let mut out = Vec::new();
    compound.write_to::<BigEndian>(&mut out).unwrap();
    assert_eq!(out, data);
}

// ==================== Root kind ====================

#[test]
fn test_read_compound_rejects_other_root() {
    let bytes = to_vec::<BigEndian>(&Tag::new("", 1i32)).unwrap();
    match read_compound::<BigEndian>(&bytes[..]) {
        Err(Error::TagMismatch(10, 3)) => {}
        other => panic!("expected TagMismatch, got {other:?}"),
    }
}

#[test]
fn test_root_end_rejected() {
    match from_slice::<BigEndian>(&[0x00]) {
        Err(Error::InvalidTagType(0)) => {}
        other => panic!("expected InvalidTagType(0), got {other:?}"),
    }
}
