use arith::{BoundaryTable, FiniteCoder};

fn main() {
    tracing_subscriber::fmt::init();

    let mut input = (0..10000).map(|i| (i % 3) + 1).collect::<Vec<usize>>();
    input.push(0);
    let table = BoundaryTable::from_counts(&[1, 128, 64, 63]).unwrap();
    let coder = FiniteCoder::finite(32).unwrap();

    for _ in 0..1000 {
        let bits = coder.encode(&input, &table).unwrap();
        let decoded = coder.decode(&bits, &table, 3).unwrap();
        assert_eq!(decoded.len(), input.len());
    }
}
