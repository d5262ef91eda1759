//! Grapheme-aware text splitting.
//!
//! Annotation offsets count user-perceived characters, not bytes or UTF-16
//! code units, so splitting must respect extended grapheme clusters:
//! slicing a combined emoji or a decomposed accent in half would corrupt
//! the output.

use unicode_segmentation::UnicodeSegmentation;

/// Number of extended grapheme clusters in `text`.
pub fn grapheme_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Splits `text` into fragments at the given grapheme offsets.
///
/// The effective boundaries are `[0, ...points, grapheme_len(text)]`, so
/// the result always holds `points.len() + 1` fragments; fragment *i*
/// covers graphemes `[points[i - 1], points[i])`. Points past the end of
/// the text clamp to its grapheme count, and an empty or inverted range
/// yields an empty fragment. Points are taken in the order given.
pub fn split_at_points(text: &str, points: &[usize]) -> Vec<String> {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    let total = graphemes.len();

    let mut bounds = Vec::with_capacity(points.len() + 2);
    bounds.push(0);
    bounds.extend(points.iter().map(|&point| point.min(total)));
    bounds.push(total);

    bounds
        .windows(2)
        .map(|pair| {
            let (start, end) = (pair[0], pair[1]);
            if start >= end {
                String::new()
            } else {
                graphemes[start..end].concat()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_points_yields_the_whole_text() {
        assert_eq!(split_at_points("hello", &[]), vec!["hello"]);
    }

    #[test]
    fn splits_at_each_point() {
        assert_eq!(
            split_at_points("hello world", &[3, 5]),
            vec!["hel", "lo", " world"]
        );
    }

    #[test]
    fn repeated_points_yield_empty_fragments() {
        assert_eq!(
            split_at_points("abc", &[1, 1, 2]),
            vec!["a", "", "b", "c"]
        );
    }

    #[test]
    fn boundary_points_yield_empty_edge_fragments() {
        assert_eq!(split_at_points("ab", &[0, 2]), vec!["", "ab", ""]);
    }

    #[test]
    fn points_past_the_end_clamp() {
        assert_eq!(split_at_points("ab", &[5]), vec!["ab", ""]);
    }

    #[test]
    fn fragment_count_is_points_plus_one() {
        for n in 0..6 {
            let points: Vec<usize> = (0..n).collect();
            assert_eq!(split_at_points("hello", &points).len(), n + 1);
        }
    }

    #[test]
    fn empty_text_splits_into_empty_fragments() {
        assert_eq!(split_at_points("", &[0, 3]), vec!["", "", ""]);
    }

    #[test]
    fn combining_accents_stay_whole() {
        // "e" + U+0301 is one grapheme made of two code points.
        let text = "cafe\u{301} au lait";
        assert_eq!(grapheme_len(text), 12);
        let parts = split_at_points(text, &[4]);
        assert_eq!(parts, vec!["caf\u{65}\u{301}", " au lait"]);
    }

    #[test]
    fn combined_emoji_stay_whole() {
        // Family emoji: four code points joined by ZWJs, one grapheme.
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}";
        let text = format!("a{family}b");
        assert_eq!(grapheme_len(&text), 3);
        assert_eq!(
            split_at_points(&text, &[1, 2]),
            vec!["a".to_string(), family.to_string(), "b".to_string()]
        );
    }

    #[test]
    fn splitting_never_breaks_a_grapheme() {
        let text = "x\u{1F1EC}\u{1F1E7}y\u{65}\u{301}z"; // flag + accent
        let total = grapheme_len(text);
        for point in 0..=total {
            let parts = split_at_points(text, &[point]);
            assert_eq!(parts.concat(), text);
            // A broken cluster would decompose into extra graphemes, making
            // the fragment counts sum to more than the whole.
            let summed: usize = parts.iter().map(|part| grapheme_len(part)).sum();
            assert_eq!(summed, total);
        }
    }
}
