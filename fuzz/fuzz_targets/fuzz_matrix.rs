#![no_main]

use libfuzzer_sys::fuzz_target;

use fibseries_core::Matrix2;

fuzz_target!(|data: &[u8]| {
    if data.len() < 32 {
        return;
    }
    let word = |i: usize| {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&data[i * 8..i * 8 + 8]);
        u64::from_le_bytes(bytes)
    };
    let m = Matrix2::new(word(0), word(1), word(2), word(3));

    // Identity is neutral on both sides, for any entries.
    let mut right = m;
    right.multiply(&Matrix2::identity()).unwrap();
    assert_eq!(right, m);

    let mut left = Matrix2::identity();
    left.multiply(&m).unwrap();
    assert_eq!(left, m);

    // Squaring either succeeds or leaves the matrix as it was.
    let mut sq = m;
    if sq.square().is_err() {
        assert_eq!(sq, m);
    }
});
