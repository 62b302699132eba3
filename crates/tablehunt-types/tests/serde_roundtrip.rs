//! A `Page` is the unit persisted between extraction and table hunting, so
//! it needs to survive a JSON round trip intact, arena indices included.

use tablehunt_types::{
    Block, Char, Direction, Line, Page, Quad, Rect, StandardStructure, StructuralBlock, TextBlock,
    VectorBlock, WriteMode,
};

#[test]
fn page_with_mixed_blocks_round_trips_through_json() {
    let mut page = Page::new(Rect::new(0.0, 0.0, 612.0, 792.0));

    let table_id = page
        .alloc(Block::Structural(StructuralBlock::new(
            StandardStructure::Table,
            Rect::new(10.0, 10.0, 100.0, 100.0),
            0,
        )))
        .unwrap();
    page.arena_mut().insert_before(table_id, None, None);

    let line = Line {
        bbox: Rect::new(10.0, 10.0, 20.0, 20.0),
        dir: Direction::LeftToRight,
        wmode: WriteMode::Horizontal,
        chars: vec![Char { c: 'a', quad: Quad::axis_aligned(10.0, 10.0, 20.0, 20.0) }],
    };
    let text_id = page.alloc(Block::Text(TextBlock { bbox: line.bbox, lines: vec![line] })).unwrap();
    page.arena_mut().insert_before(text_id, None, Some(table_id));

    let vector_id = page
        .alloc(Block::Vector(VectorBlock { bbox: Rect::new(0.0, 0.0, 1.0, 1.0) }))
        .unwrap();
    page.arena_mut().insert_before(vector_id, None, None);

    let json = serde_json::to_string(&page).unwrap();
    let restored: Page = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.media_box, page.media_box);
    assert_eq!(restored.top_level().collect::<Vec<_>>(), page.top_level().collect::<Vec<_>>());
    assert_eq!(restored.arena().children(Some(table_id)).collect::<Vec<_>>(), vec![text_id]);
}
