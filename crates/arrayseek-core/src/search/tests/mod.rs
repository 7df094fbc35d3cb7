
use crate::{
    error::SearchError,
    kind::{Exact, Tolerance},
    search::{
        ArraySearch, FROM_END, MatchExt, NOT_FOUND, contains, contains_element, first_index_of,
        first_index_of_by, first_index_of_element, first_index_of_in, last_index_of,
        last_index_of_by, last_index_of_element,
    },
    value::{Array, Element},
};

// ---- helpers -----------------------------------------------------------

const HAYSTACK: [i32; 7] = [2, 3, 4, 5, 2, 3, 6];

fn tol64(epsilon: f64) -> Tolerance<f64> {
    Tolerance::<f64>::new(epsilon).expect("valid tolerance")
}

fn fwd(needle: &[i32], from: isize) -> Option<usize> {
    first_index_of(Some(&HAYSTACK[..]), Some(needle), from, Exact).unwrap()
}

fn back(needle: &[i32], from: isize) -> Option<usize> {
    last_index_of(Some(&HAYSTACK[..]), Some(needle), from, Exact).unwrap()
}

// ---- forward sub-sequence ----------------------------------------------

#[test]
fn finds_sub_sequence_after_false_start() {
    assert_eq!(fwd(&[2, 3, 6], 0), Some(4));
    assert_eq!(fwd(&[2, 3, 4], 0), Some(0));
    assert_eq!(fwd(&[2, 3, 4], 1), None);
    assert_eq!(fwd(&[9], 0), None);
}

#[test]
fn negative_from_clamps_to_zero_going_forward() {
    assert_eq!(fwd(&[2, 3], -1), fwd(&[2, 3], 0));
    assert_eq!(fwd(&[2, 3], isize::MIN), Some(0));
}

#[test]
fn empty_needle_returns_clamped_from() {
    for k in 0..=7 {
        assert_eq!(fwd(&[], k), Some(k.unsigned_abs()));
    }
    assert_eq!(fwd(&[], 100), Some(7));
    assert_eq!(fwd(&[], -3), Some(0));
}

#[test]
fn from_past_end_finds_nothing() {
    assert_eq!(fwd(&[6], 7), None);
    assert_eq!(fwd(&[6], 6), Some(6));
}

#[test]
fn needle_longer_than_remaining_finds_nothing() {
    assert_eq!(fwd(&[3, 6], 6), None);
    assert_eq!(fwd(&[2, 3, 4, 5, 2, 3, 6, 7], 0), None);
}

#[test]
fn empty_haystack_finds_nothing() {
    let empty: [i32; 0] = [];
    assert_eq!(
        first_index_of(Some(&empty[..]), Some(&[1][..]), 0, Exact),
        Ok(None)
    );
    assert_eq!(first_index_of_element(Some(&empty[..]), &1, 0, Exact), None);
    assert_eq!(
        first_index_of(Some(&empty[..]), Some(&[][..]), 0, Exact),
        Ok(Some(0))
    );
}

#[test]
fn bounded_forward_search_respects_end() {
    let hay = Some(&HAYSTACK[..]);

    assert_eq!(first_index_of_in(hay, Some(&[2, 3][..]), 1, 7, Exact), Ok(Some(4)));
    assert_eq!(first_index_of_in(hay, Some(&[2, 3][..]), 1, 5, Exact), Ok(None));
    assert_eq!(first_index_of_in(hay, Some(&[2, 3][..]), 1, 6, Exact), Ok(Some(4)));
    assert_eq!(first_index_of_in(hay, Some(&[6][..]), 0, 100, Exact), Ok(Some(6)));
    assert_eq!(first_index_of_in(hay, Some(&[2][..]), 0, -1, Exact), Ok(None));
}

#[test]
fn bounded_search_never_answers_before_start() {
    let hay = Some(&HAYSTACK[..]);

    assert_eq!(first_index_of_in(hay, Some(&[][..]), 5, 2, Exact), Ok(None));
    assert_eq!(first_index_of_in(hay, Some(&[][..]), 9, 100, Exact), Ok(None));
    assert_eq!(first_index_of_in(hay, Some(&[][..]), 2, 2, Exact), Ok(Some(2)));
    assert_eq!(first_index_of_in(hay, Some(&[][..]), -4, 0, Exact), Ok(Some(0)));
    assert_eq!(first_index_of_in(hay, Some(&[][..]), 7, 7, Exact), Ok(Some(7)));
}

// ---- backward sub-sequence ---------------------------------------------

#[test]
fn backward_finds_last_occurrence() {
    assert_eq!(back(&[2, 3], FROM_END), Some(4));
    assert_eq!(back(&[2, 3], 3), Some(0));
    assert_eq!(back(&[2, 3, 4], FROM_END), Some(0));
    assert_eq!(back(&[3, 6], FROM_END), Some(5));
    assert_eq!(back(&[9], FROM_END), None);
}

#[test]
fn negative_from_finds_nothing_going_backward() {
    assert_eq!(back(&[2, 3], -1), None);
    assert_eq!(back(&[], -1), None);
    assert_eq!(back(&[2], isize::MIN), None);
}

#[test]
fn backward_from_clamps_to_last_start() {
    assert_eq!(back(&[3, 6], 6), Some(5));
    assert_eq!(back(&[3, 6], 5), Some(5));
    assert_eq!(back(&[3, 6], 4), None);
    assert_eq!(back(&[], FROM_END), Some(7));
    assert_eq!(back(&[], 2), Some(2));
}

#[test]
fn backward_restarts_after_mismatch() {
    let hay = [1, 2, 1, 2, 3, 1, 2];
    let found = last_index_of(Some(&hay[..]), Some(&[1, 2, 3][..]), FROM_END, Exact);
    assert_eq!(found, Ok(Some(2)));
}

#[test]
fn backward_needle_longer_than_haystack_finds_nothing() {
    assert_eq!(back(&[0; 8], FROM_END), None);
}

// ---- single element ----------------------------------------------------

#[test]
fn element_search_both_directions() {
    let hay = Some(&HAYSTACK[..]);

    assert_eq!(first_index_of_element(hay, &3, 0, Exact), Some(1));
    assert_eq!(first_index_of_element(hay, &3, 2, Exact), Some(5));
    assert_eq!(first_index_of_element(hay, &3, -5, Exact), Some(1));
    assert_eq!(first_index_of_element(hay, &3, 99, Exact), None);

    assert_eq!(last_index_of_element(hay, &3, FROM_END, Exact), Some(5));
    assert_eq!(last_index_of_element(hay, &3, 4, Exact), Some(1));
    assert_eq!(last_index_of_element(hay, &3, 0, Exact), None);
    assert_eq!(last_index_of_element(hay, &2, -1, Exact), None);
}

#[test]
fn element_search_matches_length_one_pattern() {
    let hay = Some(&HAYSTACK[..]);

    for value in 0..8 {
        for from in -2..9 {
            assert_eq!(
                first_index_of_element(hay, &value, from, Exact),
                first_index_of(hay, Some(&[value][..]), from, Exact).unwrap(),
                "forward value={value} from={from}"
            );
            assert_eq!(
                last_index_of_element(hay, &value, from, Exact),
                last_index_of(hay, Some(&[value][..]), from, Exact).unwrap(),
                "backward value={value} from={from}"
            );
        }
    }
}

// ---- tolerance ---------------------------------------------------------

#[test]
fn tolerance_window_decides_float_match() {
    let hay = [1.0f64, 2.0005, 3.0];

    assert_eq!(first_index_of_element(Some(&hay[..]), &2.0, 0, tol64(0.001)), Some(1));
    assert_eq!(first_index_of_element(Some(&hay[..]), &2.0, 0, tol64(0.0001)), None);
    assert_eq!(hay.index_of_within(&2.0, 0, tol64(0.001)), Some(1));
}

#[test]
fn tolerance_applies_to_every_pattern_position() {
    let hay = [0.9f64, 2.1, 2.9, 4.2];
    let needle = [1.0, 2.0, 3.0];

    assert_eq!(hay.index_of_seq_within(&needle, 0, tol64(0.11)), Some(0));
    assert_eq!(hay.index_of_seq_within(&needle, 0, tol64(0.05)), None);
    assert_eq!(hay.last_index_of_seq_within(&needle, FROM_END, tol64(0.11)), Some(0));
}

#[test]
fn zero_tolerance_is_exact_for_signed_zero_but_never_nan() {
    let hay = [f64::NAN, -0.0, 1.0];

    assert_eq!(hay.index_of(&0.0), Some(1));
    assert_eq!(hay.index_of(&f64::NAN), None);
    assert_eq!(hay.last_index_of(&f64::NAN), None);
    assert_eq!(hay.index_of_within(&f64::NAN, 0, tol64(f64::INFINITY)), None);
}

#[test]
fn infinities_match_themselves_in_both_directions() {
    let hay = [f64::NEG_INFINITY, 1.0, f64::INFINITY, f64::INFINITY];

    assert_eq!(hay.index_of(&f64::INFINITY), Some(2));
    assert_eq!(hay.last_index_of(&f64::INFINITY), Some(3));
    assert_eq!(hay.index_of(&f64::NEG_INFINITY), Some(0));
    assert_eq!(hay.last_index_of(&f64::NEG_INFINITY), Some(0));
    assert_eq!(hay.index_of_seq(&[1.0, f64::INFINITY]), Some(1));
    assert_eq!(hay.last_index_of_seq(&[f64::INFINITY]), Some(3));

    let narrow = [1.0f32, f32::INFINITY, f32::NEG_INFINITY];
    let wide = Tolerance::<f32>::new(f32::INFINITY).unwrap();

    assert_eq!(narrow.index_of(&f32::INFINITY), Some(1));
    assert_eq!(narrow.last_index_of(&f32::NEG_INFINITY), Some(2));
    assert_eq!(narrow.index_of_seq(&[f32::INFINITY, f32::NEG_INFINITY]), Some(1));
    assert_eq!(narrow.last_index_of_seq(&[1.0, f32::INFINITY]), Some(0));
    assert_eq!(narrow.last_index_of_within(&f32::NEG_INFINITY, FROM_END, wide), Some(2));
    assert_eq!(narrow.index_of(&f32::NAN), None);
}

#[test]
fn float32_tolerance_uses_its_own_width() {
    let hay = [1.0f32, 1.5, 2.0];
    let tol = Tolerance::<f32>::new(0.25).unwrap();

    assert_eq!(hay.index_of_within(&1.3, 0, tol), Some(1));
    assert_eq!(hay.last_index_of_within(&1.8, FROM_END, tol), Some(2));
}

// ---- null handling -----------------------------------------------------

#[test]
fn null_haystack_is_absence() {
    assert_eq!(first_index_of::<i32>(None, Some(&[1][..]), 0, Exact), Ok(None));
    assert_eq!(last_index_of::<i32>(None, Some(&[1][..]), FROM_END, Exact), Ok(None));
    assert_eq!(first_index_of_element::<i32>(None, &1, 0, Exact), None);
    assert_eq!(contains::<i32>(None, Some(&[][..]), Exact), Ok(false));
}

#[test]
fn null_pattern_is_an_error() {
    let hay = Some(&HAYSTACK[..]);

    assert_eq!(first_index_of(hay, None, 0, Exact), Err(SearchError::NullPattern));
    assert_eq!(last_index_of(hay, None, 0, Exact), Err(SearchError::NullPattern));
    assert_eq!(first_index_of_in(hay, None, 0, 3, Exact), Err(SearchError::NullPattern));
    assert_eq!(contains(hay, None, Exact), Err(SearchError::NullPattern));
    assert_eq!(
        first_index_of::<i32>(None, None, 0, Exact),
        Err(SearchError::NullPattern)
    );
}

// ---- contains ----------------------------------------------------------

#[test]
fn contains_is_index_of_not_sentinel() {
    let hay = Some(&HAYSTACK[..]);

    assert_eq!(contains(hay, Some(&[5, 2][..]), Exact), Ok(true));
    assert_eq!(contains(hay, Some(&[5, 3][..]), Exact), Ok(false));
    assert!(contains_element(hay, &6, Exact));
    assert!(!contains_element(hay, &7, Exact));
    assert!(HAYSTACK.contains_seq(&[4, 5]));
    assert!(!HAYSTACK.contains_element(&0));
}

// ---- sentinel ----------------------------------------------------------

#[test]
fn sentinel_rendition() {
    assert_eq!(fwd(&[9], 0).to_sentinel(), NOT_FOUND);
    assert_eq!(fwd(&[2, 3, 6], 0).to_sentinel(), 4);
    assert_eq!(back(&[2], -1).to_sentinel(), -1);
}

// ---- extension trait defaults ------------------------------------------

#[test]
fn extension_defaults_span_whole_slice() {
    let hay = vec!['a', 'b', 'a', 'b'];

    assert_eq!(hay.index_of(&'b'), Some(1));
    assert_eq!(hay.index_of_from(&'b', 2), Some(3));
    assert_eq!(hay.last_index_of(&'a'), Some(2));
    assert_eq!(hay.last_index_of_from(&'a', 1), Some(0));
    assert_eq!(hay.index_of_seq(&['a', 'b']), Some(0));
    assert_eq!(hay.index_of_seq_from(&['a', 'b'], 1), Some(2));
    assert_eq!(hay.last_index_of_seq(&['a', 'b']), Some(2));
    assert_eq!(hay.last_index_of_seq_from(&['a', 'b'], 1), Some(0));
    assert_eq!(hay.last_index_of_seq(&[]), Some(4));
}

// ---- reference kind ----------------------------------------------------

#[test]
fn reference_search_uses_deep_equality() {
    let nested = |items: Vec<i32>| Element::<&str>::Array(Array::from(items));
    let hay = vec![
        Element::Value("a"),
        nested(vec![1, 2]),
        Element::Null,
        nested(vec![1, 2]),
    ];

    assert_eq!(hay.index_of(&nested(vec![1, 2])), Some(1));
    assert_eq!(hay.last_index_of(&nested(vec![1, 2])), Some(3));
    assert_eq!(hay.index_of(&Element::Null), Some(2));
    assert_eq!(hay.index_of_seq(&[Element::Null, nested(vec![1, 2])]), Some(2));
    assert_eq!(hay.index_of(&nested(vec![2, 1])), None);
}

#[test]
fn caller_predicate_search() {
    fn ignore_case(a: &&str, b: &&str) -> bool {
        a.eq_ignore_ascii_case(b)
    }
    let words = ["Alpha", "beta", "GAMMA", "beta"];

    assert_eq!(first_index_of_by(&words, &["BETA", "gamma"], 0, ignore_case), Some(1));
    assert_eq!(last_index_of_by(&words, &["BETA"], FROM_END, ignore_case), Some(3));
    assert_eq!(first_index_of_by(&words, &["delta"], 0, ignore_case), None);
}

// ---- idempotence -------------------------------------------------------

#[test]
fn repeated_queries_do_not_mutate_inputs() {
    let hay = HAYSTACK;
    let needle = [2, 3];

    let first = hay.index_of_seq(&needle);
    let again = hay.index_of_seq(&needle);

    assert_eq!(first, again);
    assert_eq!(hay, HAYSTACK);
    assert_eq!(needle, [2, 3]);
}
