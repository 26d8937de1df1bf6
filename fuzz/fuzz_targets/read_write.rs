#![no_main]

use libfuzzer_sys::fuzz_target;
use nbt_tree::{BigEndian, LittleEndian, from_slice, to_vec};

fuzz_target!(|data: &[u8]| {
    if let Ok(tag) = from_slice::<BigEndian>(data) {
        let bytes = to_vec::<BigEndian>(&tag).expect("decoded tree encodes");
        let again = from_slice::<BigEndian>(&bytes).expect("re-encoded tree decodes");
        assert_eq!(to_vec::<BigEndian>(&again).ok(), Some(bytes));
        let _ = to_vec::<LittleEndian>(&tag);
    }
    if let Ok(tag) = from_slice::<LittleEndian>(data) {
        let _ = to_vec::<LittleEndian>(&tag);
    }
});
