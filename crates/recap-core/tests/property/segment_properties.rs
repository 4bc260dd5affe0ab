use proptest::prelude::*;
use recap_core::models::Segment;

proptest! {
    #[test]
    fn split_reassembles_original_text(text in ".{0,80}", cut in 0usize..100) {
        let seg = Segment::new(1.0, 2.0, text.clone());
        let cut = cut.min(seg.char_len());
        let (head, tail) = seg.split_at_char(cut);
        prop_assert_eq!(format!("{}{}", head.text, tail.text), text);
        prop_assert_eq!(head.char_len(), cut);
    }

    #[test]
    fn prefix_matches_split_head(text in ".{1,80}", cut in 1usize..100) {
        let seg = Segment::new(0.0, 0.0, text);
        let cut = cut.min(seg.char_len());
        prop_assert_eq!(seg.with_prefix(cut), seg.split_at_char(cut).0);
    }
}
