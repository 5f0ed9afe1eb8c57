//! Integration tests for entity buffer traversal and dispatch.

mod common;

use common::{mixed_records, write_record};
use osm_buffer::memory::{next_entity, DiffMarker, ItemType};
use osm_buffer::{EntityBuffer, EntityView, Error};

#[test]
fn test_empty_buffer_is_exhausted_immediately() {
    let buffer = EntityBuffer::new(&[]);
    let mut it = buffer.begin();
    assert!(it == buffer.end());
    assert!(next_entity(&mut it).is_none());
    assert!(buffer.entities().next().is_none());
}

#[test]
fn test_n_records_then_exhausted() {
    let layout = [
        (ItemType::Node, 24),
        (ItemType::Node, 24),
        (ItemType::Way, 40),
        (ItemType::Relation, 3),
        (ItemType::Area, 0),
        (ItemType::Changeset, 64),
        (ItemType::Way, 8),
    ];
    let data = mixed_records(&layout);
    let buffer = EntityBuffer::new(&data);

    let mut it = buffer.begin();
    let mut seen = Vec::new();
    while let Some(entity) = next_entity(&mut it) {
        seen.push(entity.unwrap());
    }

    assert_eq!(seen.len(), layout.len());
    for (index, (view, &(kind, len))) in seen.iter().zip(layout.iter()).enumerate() {
        assert_eq!(view.kind(), kind);
        assert_eq!(view.payload().len(), len);
        assert!(view.payload().iter().all(|&b| b == index as u8));
    }
    assert!(it == buffer.end());
    assert!(next_entity(&mut it).is_none());
}

#[test]
fn test_typed_variants() {
    let data = mixed_records(&[
        (ItemType::Node, 1),
        (ItemType::Way, 1),
        (ItemType::Relation, 1),
        (ItemType::Area, 1),
        (ItemType::Changeset, 1),
    ]);
    let views: Vec<EntityView> = EntityBuffer::new(&data)
        .entities()
        .collect::<Result<_, _>>()
        .unwrap();

    assert!(matches!(views[0], EntityView::Node(_)));
    assert!(matches!(views[1], EntityView::Way(_)));
    assert!(matches!(views[2], EntityView::Relation(_)));
    assert!(matches!(views[3], EntityView::Area(_)));
    assert!(matches!(views[4], EntityView::Changeset(_)));
}

#[test]
fn test_restart_needs_fresh_begin() {
    let data = mixed_records(&[(ItemType::Node, 0), (ItemType::Way, 0)]);
    let buffer = EntityBuffer::new(&data);

    let mut first = buffer.entities();
    assert_eq!(first.by_ref().count(), 2);
    assert!(first.next().is_none());

    assert_eq!(buffer.entities().count(), 2);
}

#[test]
fn test_views_borrow_buffer_not_iterator() {
    let data = mixed_records(&[(ItemType::Node, 4), (ItemType::Way, 4)]);
    let buffer = EntityBuffer::new(&data);

    let views: Vec<EntityView<'_>> = {
        let entities = buffer.entities();
        entities.map(Result::unwrap).collect()
    };
    assert_eq!(views.len(), 2);
    assert_eq!(views[1].record().offset(), 12);
}

#[test]
fn test_unknown_tag_does_not_stop_traversal() {
    let mut data = Vec::new();
    write_record(&mut data, ItemType::Node.as_u16(), 0, &[]);
    write_record(&mut data, 0x00, 0, &[1, 2]);
    write_record(&mut data, 0x42, 0, &[]);
    write_record(&mut data, ItemType::Changeset.as_u16(), 0, &[]);

    let results: Vec<_> = EntityBuffer::new(&data).entities().collect();
    assert_eq!(results.len(), 4);
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(Error::UnknownItemType { item_type: 0x00, offset: 8 })));
    assert!(matches!(results[2], Err(Error::UnknownItemType { item_type: 0x42, offset: 18 })));
    assert_eq!(results[3].as_ref().unwrap().kind(), ItemType::Changeset);
}

#[test]
fn test_removed_and_diff_flags() {
    let mut data = Vec::new();
    write_record(&mut data, ItemType::Node.as_u16(), 0b011, &[]);
    write_record(&mut data, ItemType::Way.as_u16(), 0b110, &[]);

    let views: Vec<EntityView> = EntityBuffer::new(&data).entities().map(Result::unwrap).collect();
    let node = views[0].as_node().unwrap();
    assert!(node.is_removed());
    assert_eq!(node.diff(), DiffMarker::Left);

    let way = views[1].as_way().unwrap();
    assert!(!way.is_removed());
    assert_eq!(way.diff(), DiffMarker::Both);
}

#[test]
fn test_records_and_entities_agree() {
    let data = mixed_records(&[(ItemType::Relation, 5), (ItemType::Area, 7)]);
    let buffer = EntityBuffer::new(&data);

    let offsets: Vec<usize> = buffer.records().map(|r| r.unwrap().offset()).collect();
    let entity_offsets: Vec<usize> = buffer
        .entities()
        .map(|e| e.unwrap().record().offset())
        .collect();
    assert_eq!(offsets, [0, 13]);
    assert_eq!(offsets, entity_offsets);
}

#[test]
fn test_into_iterator() {
    let data = mixed_records(&[(ItemType::Way, 2)]);
    let mut count = 0;
    for entity in EntityBuffer::new(&data) {
        assert_eq!(entity.unwrap().kind(), ItemType::Way);
        count += 1;
    }
    assert_eq!(count, 1);
}

#[test]
fn test_shared_across_threads() {
    let data = mixed_records(&[(ItemType::Node, 3); 100]);
    let buffer = EntityBuffer::new(&data);

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(move || buffer.entities().filter(|e| e.is_ok()).count()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 100);
        }
    });
}
