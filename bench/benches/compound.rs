use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use nbt_tree::{BigEndian, Compound, List, Tag, from_slice, to_vec};

fn build_level(chunks: usize) -> Tag {
    let mut root = Compound::new();
    root.insert("LevelName", "bench");
    let mut sections = List::new();
    for y in 0..chunks {
        let mut section = Compound::new();
        section.insert("Y", y as i8);
        section.insert("BlockStates", vec![0i64; 256]);
        section.insert("SkyLight", vec![15i8; 2048]);
        let mut palette = List::new();
        for name in ["minecraft:air", "minecraft:stone", "minecraft:dirt"] {
            let mut entry = Compound::new();
            entry.insert("Name", name);
            palette.push(entry).expect("palette entries are compounds");
        }
        section.insert("Palette", palette);
        sections.push(section).expect("sections are compounds");
    }
    root.insert("Sections", sections);
    Tag::new("", root)
}

fn bench_compound(c: &mut Criterion) {
    let tag = build_level(24);
    let bytes = to_vec::<BigEndian>(&tag).expect("encodes");

    c.bench_function("write_level", |b| {
        b.iter(|| to_vec::<BigEndian>(black_box(&tag)))
    });
    c.bench_function("read_level", |b| {
        b.iter(|| from_slice::<BigEndian>(black_box(&bytes)))
    });
    c.bench_function("clone_level", |b| b.iter(|| black_box(&tag).clone()));
}

criterion_group!(benches, bench_compound);
criterion_main!(benches);
