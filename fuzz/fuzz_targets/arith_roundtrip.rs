#![no_main]
use arith::{BoundaryTable, ExactCoder, FiniteCoder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<u8>, [u8; 4], u8)| {
    let (input_bytes, weights, precision) = data;
    let precision = (precision as u32 % 47) + 16; // 16 to 62 bits

    // Terminator keeps a small fixed share; other symbols weighted 1..=256.
    let mut counts = vec![1u64];
    counts.extend(weights.iter().map(|&w| w as u64 + 1));
    let table = BoundaryTable::from_counts(&counts).unwrap();

    let mut input: Vec<usize> = input_bytes.iter().map(|&b| (b % 4) as usize + 1).collect();
    input.push(0);

    let coder = FiniteCoder::finite(precision).unwrap();
    let bits = coder.encode(&input, &table).unwrap();
    assert_eq!(coder.decode(&bits, &table, 4).unwrap(), input);

    if input.len() <= 64 {
        let exact = ExactCoder::exact();
        let rational = table.to_rational();
        let bits = exact.encode(&input, &rational).unwrap();
        assert_eq!(exact.decode(&bits, &rational, 4).unwrap(), input);
    }
});
