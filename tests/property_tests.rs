use arith::{
    bits_to_string, frequencies, string_to_bits, BoundaryTable, ExactCoder, FiniteCoder,
    TERMINATOR,
};
use proptest::prelude::*;

/// Histogram with a non-zero terminator and `data` drawn from the other
/// symbols that have mass.
fn table_and_message() -> impl Strategy<Value = (Vec<u64>, Vec<usize>)> {
    prop::collection::vec(0u64..50, 2..12).prop_flat_map(|mut counts| {
        counts[0] = counts[0].max(1);
        counts[1] = counts[1].max(1);
        let live: Vec<usize> = (1..counts.len()).filter(|&s| counts[s] > 0).collect();
        let message = prop::collection::vec(prop::sample::select(live), 0..80).prop_map(
            |mut message| {
                message.push(TERMINATOR);
                message
            },
        );
        (Just(counts), message)
    })
}

proptest! {
    #[test]
    fn test_finite_roundtrip(
        (counts, message) in table_and_message(),
        precision in 16u32..=62,
    ) {
        let table = BoundaryTable::from_counts(&counts).unwrap();
        let coder = FiniteCoder::finite(precision).unwrap();
        let bits = coder.encode(&message, &table).unwrap();
        let decoded = coder.decode(&bits, &table, counts.len() - 1).unwrap();
        prop_assert_eq!(decoded, message);
    }

    #[test]
    fn test_exact_roundtrip((counts, message) in table_and_message()) {
        let table = BoundaryTable::from_counts(&counts).unwrap().to_rational();
        let coder = ExactCoder::exact();
        let bits = coder.encode(&message, &table).unwrap();
        let decoded = coder.decode(&bits, &table, counts.len() - 1).unwrap();
        prop_assert_eq!(decoded, message);
    }

    #[test]
    fn test_engines_agree((counts, message) in table_and_message()) {
        let table = BoundaryTable::from_counts(&counts).unwrap();
        let finite = FiniteCoder::finite(32).unwrap();
        let exact = ExactCoder::exact();
        let rational = table.to_rational();

        let from_finite = finite
            .decode(&finite.encode(&message, &table).unwrap(), &table, counts.len() - 1)
            .unwrap();
        let from_exact = exact
            .decode(&exact.encode(&message, &rational).unwrap(), &rational, counts.len() - 1)
            .unwrap();
        prop_assert_eq!(from_finite, from_exact);
    }

    #[test]
    fn test_encode_deterministic((counts, message) in table_and_message()) {
        let table = BoundaryTable::from_counts(&counts).unwrap();
        let coder = FiniteCoder::finite(32).unwrap();
        prop_assert_eq!(
            coder.encode(&message, &table).unwrap(),
            coder.encode(&message, &table).unwrap()
        );
    }

    #[test]
    fn test_bit_string_roundtrip((counts, message) in table_and_message()) {
        let table = BoundaryTable::from_counts(&counts).unwrap();
        let coder = FiniteCoder::finite(32).unwrap();
        let bits = coder.encode(&message, &table).unwrap();
        let text = bits_to_string(&bits);
        prop_assert_eq!(text.len(), bits.len());
        let parsed = string_to_bits(&text).unwrap();
        prop_assert_eq!(coder.decode(&parsed, &table, counts.len() - 1).unwrap(), message);
    }

    #[test]
    fn test_empirical_table_roundtrip(body in prop::collection::vec(1usize..8, 0..100)) {
        let mut message = body;
        message.push(TERMINATOR);
        let table = BoundaryTable::from_counts(&frequencies(&message)).unwrap();
        let max_symbol = table.len() - 1;
        let coder = FiniteCoder::finite(32).unwrap();
        let bits = coder.encode(&message, &table).unwrap();
        prop_assert!(!bits.is_empty());
        prop_assert_eq!(coder.decode(&bits, &table, max_symbol).unwrap(), message);
    }
}
