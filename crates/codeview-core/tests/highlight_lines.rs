use codeview_core::{HighlightLineSet, HighlightSpec, Typewriter};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_examples() {
    let cases: &[(&str, &[usize])] = &[
        ("2,4-6", &[2, 4, 5, 6]),
        ("5", &[5]),
        ("3-1", &[]),
        ("", &[]),
        ("1, 1, 2-3, x", &[1, 2, 3]),
    ];
    for (spec, expected) in cases {
        let got: Vec<usize> = HighlightLineSet::parse(spec).iter().collect();
        assert_eq!(got, expected.to_vec(), "spec {spec:?}");
    }
}

#[test]
fn test_list_and_string_forms_agree() {
    let list = HighlightSpec::from(vec![4, 2, 5, 6]).resolve();
    let text = HighlightSpec::from("2,4-6").resolve();
    assert_eq!(list, text);
}

#[test]
fn test_typewriter_frames_are_prefixes() {
    let code = "let 👍🏽 = 1;";
    let frames: Vec<&str> = Typewriter::new(code).collect();
    assert_eq!(frames.first(), Some(&""));
    assert_eq!(frames.last(), Some(&code));
    assert!(frames.windows(2).all(|w| w[1].starts_with(w[0]) && w[1].len() > w[0].len()));
}

proptest! {
    #[test]
    fn prop_span_membership(a in 0usize..500, b in 0usize..500, probe in 0usize..600) {
        let set = HighlightLineSet::parse(&format!("{a}-{b}"));
        prop_assert_eq!(set.contains(probe), a <= probe && probe <= b);
    }

    #[test]
    fn prop_from_lines_matches_sorted_dedup(
        mut lines in prop::collection::vec(0usize..100, 0..40)
    ) {
        let set = HighlightLineSet::from_lines(lines.iter().copied());
        lines.sort_unstable();
        lines.dedup();
        prop_assert_eq!(set.iter().collect::<Vec<_>>(), lines.clone());
        prop_assert_eq!(set.len(), lines.len());
    }
}
