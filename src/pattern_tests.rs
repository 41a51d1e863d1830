use super::*;

#[test]
fn length_matches_n_over_4() {
    for log2_n in 2..=12u32 {
        let n = 1usize << log2_n;
        let table = PatternTable::build(n).unwrap();
        assert_eq!(table.len(), n / 4);
    }
}

#[test]
fn pairs_are_quarter_apart_and_monotone() {
    let n = 64;
    let table = PatternTable::build(n).unwrap();
    let quarter = n as u32 / 4;
    for (k, pair) in table.as_slice().iter().enumerate() {
        assert_eq!(pair.o_even, k as u32);
        assert_eq!(pair.o_odd, k as u32 + quarter);
    }
}
