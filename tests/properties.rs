//! Property-based tests
//!
//! The two properties the emulator's correctness leans on hardest:
//! feeding a stream in arbitrary chunks must be indistinguishable from
//! feeding it whole, and resize must never leave the cursor or any row
//! outside the new bounds.

use proptest::prelude::*;

use hawser_terminal::Terminal;

/// Fragments that cover printable text, multi-byte UTF-8, C0 controls, and
/// complete/incomplete escape sequences.
fn stream_fragment() -> impl Strategy<Value = Vec<u8>> {
    let controls_and_escapes = proptest::sample::select(vec![
        b"\r\n".to_vec(),
        b"\t".to_vec(),
        b"\x07".to_vec(),
        b"\x1b[31m".to_vec(),
        b"\x1b[1;44m".to_vec(),
        b"\x1b[0m".to_vec(),
        b"\x1b[2J".to_vec(),
        b"\x1b[K".to_vec(),
        b"\x1b[10;5H".to_vec(),
        b"\x1b[3A".to_vec(),
        b"\x1b[2B".to_vec(),
        b"\x1b]0;title\x07".to_vec(),
        b"\x1b[?25l".to_vec(),
        b"\x1b[9999999999z".to_vec(),
    ]);

    prop_oneof![
        "[ -~]{1,12}".prop_map(|s| s.into_bytes()),
        Just("世界".as_bytes().to_vec()),
        controls_and_escapes,
    ]
}

fn stream() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(stream_fragment(), 1..40).prop_map(|frags| frags.concat())
}

/// Split `data` at the given byte offsets (any offsets, including inside
/// UTF-8 sequences and escape sequences).
fn split_at_offsets(data: &[u8], offsets: &[usize]) -> Vec<Vec<u8>> {
    let mut cuts: Vec<usize> = offsets.iter().map(|&o| o % (data.len() + 1)).collect();
    cuts.sort_unstable();
    cuts.dedup();

    let mut chunks = Vec::new();
    let mut start = 0;
    for cut in cuts {
        if cut > start {
            chunks.push(data[start..cut].to_vec());
            start = cut;
        }
    }
    chunks.push(data[start..].to_vec());
    chunks
}

proptest! {
    /// Chunk-boundary invariance: any split of the stream produces the same
    /// final screen as the unsplit stream.
    #[test]
    fn chunked_feed_matches_whole_feed(
        data in stream(),
        offsets in proptest::collection::vec(0usize..10_000, 0..8),
    ) {
        let mut whole = Terminal::new(40, 10, 100);
        whole.feed(&data);

        let mut chunked = Terminal::new(40, 10, 100);
        for chunk in split_at_offsets(&data, &offsets) {
            chunked.feed(&chunk);
        }

        let a = whole.snapshot();
        let b = chunked.snapshot();
        prop_assert_eq!(a.grid, b.grid);
        prop_assert_eq!(a.history, b.history);
        prop_assert_eq!(a.cursor, b.cursor);
    }

    /// Resize keeps the cursor and every row inside the new bounds, for any
    /// pair of dimensions.
    #[test]
    fn resize_keeps_cursor_and_rows_in_bounds(
        old_cols in 1usize..120,
        old_rows in 1usize..60,
        new_cols in 1usize..120,
        new_rows in 1usize..60,
        data in stream(),
    ) {
        let mut term = Terminal::new(old_cols, old_rows, 200);
        term.feed(&data);
        term.resize(new_cols, new_rows);

        let snapshot = term.snapshot();
        prop_assert!(snapshot.cursor.col < new_cols);
        prop_assert!(snapshot.cursor.row < new_rows);
        prop_assert!(snapshot.grid.iter().all(|row| row.cells.len() == new_cols));
        prop_assert!(snapshot.history.iter().all(|row| row.cells.len() == new_cols));
        prop_assert_eq!(snapshot.grid.len(), new_rows);
    }

    /// Arbitrary garbage never panics the emulator and never breaks the
    /// grid shape.
    #[test]
    fn arbitrary_bytes_never_corrupt_grid_shape(
        data in proptest::collection::vec(any::<u8>(), 0..2048),
    ) {
        let mut term = Terminal::new(20, 6, 50);
        term.feed(&data);

        let snapshot = term.snapshot();
        prop_assert_eq!(snapshot.grid.len(), 6);
        prop_assert!(snapshot.grid.iter().all(|row| row.cells.len() == 20));
        prop_assert!(snapshot.cursor.col < 20);
        prop_assert!(snapshot.cursor.row < 6);
    }
}

/// The concrete case from the chunk-invariance property: a color sequence
/// split mid-parameter must still color the text.
#[test]
fn split_color_sequence_colors_text() {
    use hawser_terminal::Color;

    let mut split = Terminal::new(20, 4, 10);
    split.feed(b"\x1b[3");
    split.feed(b"1mHI\x1b[0m");

    let mut whole = Terminal::new(20, 4, 10);
    whole.feed(b"\x1b[31mHI\x1b[0m");

    for term in [&split, &whole] {
        let snapshot = term.snapshot();
        assert_eq!(snapshot.grid[0].cells[0].content, "H");
        assert_eq!(snapshot.grid[0].cells[0].fg, Color::RED);
        assert_eq!(snapshot.grid[0].cells[1].fg, Color::RED);
    }

    assert_eq!(split.snapshot().grid, whole.snapshot().grid);
}
