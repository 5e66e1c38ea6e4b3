use market_depth_wasm::domain::market_depth::{
    CellMemoryBook, DepthLevel, DepthSnapshot, Price, PriceColumn, RowId, SurfaceUpdate, TickDirection,
    diff_snapshot,
};

fn row(id: &str, level: u32, bid: f64, ask: f64) -> DepthLevel {
    DepthLevel::new(id, level, bid, 100.0, ask, 100.0)
}

fn directions(updates: &[SurfaceUpdate]) -> Vec<(String, TickDirection, TickDirection)> {
    updates
        .iter()
        .filter_map(|u| match u {
            SurfaceUpdate::RenderRow(r) => Some((r.id.to_string(), r.bid_cell.direction, r.ask_cell.direction)),
            _ => None,
        })
        .collect()
}

#[test]
fn first_render_has_no_direction() {
    let snap = DepthSnapshot::new(vec![row("a", 0, 1000.0, 1010.0), row("b", 1, 5.0, 6.0)]);
    let (_, updates) = diff_snapshot(CellMemoryBook::new(), Some(&snap));
    for (_, bid, ask) in directions(&updates) {
        assert_eq!(bid, TickDirection::None);
        assert_eq!(ask, TickDirection::None);
    }
}

#[test]
fn higher_lower_and_equal_prices() {
    let (book, _) = diff_snapshot(CellMemoryBook::new(), Some(&DepthSnapshot::new(vec![row("a", 0, 100.0, 110.0)])));

    let (book, updates) = diff_snapshot(book, Some(&DepthSnapshot::new(vec![row("a", 0, 101.0, 109.0)])));
    assert_eq!(directions(&updates), vec![("a".to_string(), TickDirection::Up, TickDirection::Down)]);

    // Same prices again: the previous direction stays.
    let (book, updates) = diff_snapshot(book, Some(&DepthSnapshot::new(vec![row("a", 0, 101.0, 109.0)])));
    assert_eq!(directions(&updates), vec![("a".to_string(), TickDirection::Up, TickDirection::Down)]);

    let (book, updates) = diff_snapshot(book, Some(&DepthSnapshot::new(vec![row("a", 0, 100.5, 109.5)])));
    assert_eq!(directions(&updates), vec![("a".to_string(), TickDirection::Down, TickDirection::Up)]);

    let memory = book.get(&RowId::from("a"), PriceColumn::Bid).unwrap();
    assert_eq!(memory.last_value, Price::from(100.5));
}

#[test]
fn identical_snapshot_twice_changes_nothing() {
    let first = DepthSnapshot::new(vec![row("a", 0, 100.0, 110.0), row("b", 1, 99.0, 111.0)]);
    let second = DepthSnapshot::new(vec![row("a", 0, 100.5, 110.0), row("b", 1, 98.0, 111.0)]);

    let (book, _) = diff_snapshot(CellMemoryBook::new(), Some(&first));
    let (book, once) = diff_snapshot(book, Some(&second));
    let (_, twice) = diff_snapshot(book, Some(&second));

    assert_eq!(once, twice);
}

#[test]
fn memory_follows_row_identity_not_value() {
    let (book, _) = diff_snapshot(
        CellMemoryBook::new(),
        Some(&DepthSnapshot::new(vec![row("a", 0, 100.0, 110.0), row("b", 1, 90.0, 120.0)])),
    );
    // Prices swap between rows: each row compares with its own history.
    let (_, updates) = diff_snapshot(
        book,
        Some(&DepthSnapshot::new(vec![row("a", 0, 90.0, 120.0), row("b", 1, 100.0, 110.0)])),
    );
    assert_eq!(
        directions(&updates),
        vec![
            ("a".to_string(), TickDirection::Down, TickDirection::Up),
            ("b".to_string(), TickDirection::Up, TickDirection::Down),
        ]
    );
}

#[test]
fn reappearing_row_starts_fresh() {
    let (book, _) = diff_snapshot(CellMemoryBook::new(), Some(&DepthSnapshot::new(vec![row("a", 0, 100.0, 110.0)])));
    let (book, updates) = diff_snapshot(book, Some(&DepthSnapshot::new(vec![row("b", 0, 100.0, 110.0)])));
    assert_eq!(updates[0], SurfaceUpdate::RemoveRow(RowId::from("a")));
    assert!(book.get(&RowId::from("a"), PriceColumn::Bid).is_none());

    let (_, updates) = diff_snapshot(
        book,
        Some(&DepthSnapshot::new(vec![row("a", 0, 105.0, 105.0), row("b", 1, 100.0, 110.0)])),
    );
    assert_eq!(directions(&updates)[0], ("a".to_string(), TickDirection::None, TickDirection::None));
}
