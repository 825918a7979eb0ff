use codeview_core::{FoldState, HighlightSpec};
use codeview_highlight::{CodeView, TokenKind};
use pretty_assertions::assert_eq;
use serde_json::json;

const SOURCE: &str = "\
const a = {
  b: \"{ not a brace }\",
};
if (a) {
  run();
}";

#[test]
fn test_fold_skips_string_braces() {
    let view = CodeView::new("javascript").code_folding(true);
    let ranges = view.fold_ranges(SOURCE);
    assert_eq!(
        ranges.iter().map(|r| (r.start, r.end)).collect::<Vec<_>>(),
        vec![(1, 3), (4, 6)]
    );
}

#[test]
fn test_collapse_every_range() {
    let view = CodeView::new("javascript")
        .code_folding(true)
        .show_line_numbers(true)
        .start_line_number(100);
    let mut folds = FoldState::new();
    folds.collapse_all(&view.fold_ranges(SOURCE));
    let snapshot = view.render(SOURCE, &folds);

    let visible: Vec<_> = snapshot
        .rows
        .iter()
        .map(|r| (r.line, r.display_number))
        .collect();
    assert_eq!(
        visible,
        vec![
            (1, Some(100)),
            (3, Some(102)),
            (4, Some(103)),
            (6, Some(105))
        ]
    );
    assert_eq!(snapshot.hidden_line_count(), 2);
}

#[test]
fn test_highlight_spec_from_config_json() {
    let spec: HighlightSpec = serde_json::from_value(json!("2, 5-6")).unwrap();
    let snapshot = CodeView::new("javascript")
        .highlight_lines(spec.resolve())
        .render(SOURCE, &FoldState::new());
    let highlighted: Vec<_> = snapshot
        .rows
        .iter()
        .filter(|r| r.highlighted)
        .map(|r| r.line)
        .collect();
    assert_eq!(highlighted, vec![2, 5, 6]);
}

#[test]
fn test_each_frame_renders_from_scratch() {
    let view = CodeView::new("javascript");
    let full = view.render(SOURCE, &FoldState::new());
    let last = codeview_core::Typewriter::new(SOURCE)
        .map(|frame| view.render(frame, &FoldState::new()))
        .last();
    assert_eq!(last, Some(full));
}

#[test]
fn test_snapshot_json_shape() {
    let snapshot = CodeView::new("python")
        .show_line_numbers(true)
        .active_line(Some(1))
        .render("x = 1", &FoldState::new());
    let value = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(
        value,
        json!({
            "language": "python",
            "rows": [{
                "line": 1,
                "display_number": 1,
                "tokens": [
                    {"kind": "text", "text": "x = "},
                    {"kind": "number", "text": "1"}
                ],
                "highlighted": false,
                "active": true,
                "fold": null,
                "diff": null
            }],
            "fold_ranges": [],
            "line_count": 1,
            "show_line_numbers": true,
            "diff_stats": null
        })
    );
}

#[test]
fn test_diff_rows_are_plain_text() {
    let snapshot = CodeView::new("javascript").render_diff("const a = 1;", "const a = 2;");
    assert_eq!(snapshot.rows.len(), 2);
    assert!(
        snapshot
            .rows
            .iter()
            .flat_map(|r| &r.tokens)
            .all(|t| t.kind == TokenKind::Text)
    );
    let stats = snapshot.diff_stats.unwrap();
    assert_eq!((stats.same, stats.added, stats.removed), (0, 1, 1));
}
