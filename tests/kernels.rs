use natural::kernels::{
    add_vv, add_vv_assign, add_vw, add_vw_assign, div_wvw, div_wvw_assign, mul_vw, mul_vw_assign,
    sub_vv, sub_vv_assign, sub_vw, sub_vw_assign,
};
use natural::{Digit, NaturalError};

const MAX: Digit = Digit::MAX;

#[test]
fn add_vv_propagates_carry_through_every_digit() {
    let x = [MAX, MAX, MAX];
    let y = [1, 0, 0];
    let mut z = [0; 3];

    let c = add_vv(&mut z, &x, &y);

    assert_eq!(z, [0, 0, 0]);
    assert_eq!(c, 1);
}

#[test]
fn add_vv_without_carry() {
    let mut z = [0; 2];

    let c = add_vv(&mut z, &[1, 2], &[3, 4]);

    assert_eq!(z, [4, 6]);
    assert_eq!(c, 0);
}

#[test]
fn add_vw_runs_carry_across_tail() {
    let mut z = [0; 3];

    let c = add_vw(&mut z, &[MAX, MAX, 7], 1);

    assert_eq!(z, [0, 0, 8]);
    assert_eq!(c, 0);
}

#[test]
fn add_vv_assign_matches_add_vv() {
    let x = [MAX, 7, MAX];
    let y = [1, MAX, 0];

    let mut z = [0; 3];
    let c = add_vv(&mut z, &x, &y);

    let mut w = x;
    let c2 = add_vv_assign(&mut w, &y);

    assert_eq!(w, [0, 7, 0]);
    assert_eq!(w, z);
    assert_eq!(c, 1);
    assert_eq!(c2, c);
}

#[test]
fn add_vv_assign_uses_only_the_overlapping_prefix() {
    let mut z = [MAX, MAX];

    assert_eq!(add_vv_assign(&mut z, &[1, 0, 5]), 1);
    assert_eq!(z, [0, 0]);
}

#[test]
#[should_panic(expected = "source is shorter than destination")]
fn add_vv_rejects_short_source() {
    let mut z = [9; 3];
    add_vv(&mut z, &[1], &[2, 3, 4]);
}

#[test]
#[should_panic(expected = "source is shorter than destination")]
fn add_vw_rejects_short_source() {
    let mut z = [9; 2];
    add_vw(&mut z, &[1], 0);
}

#[test]
#[should_panic(expected = "source is shorter than destination")]
fn add_vv_assign_rejects_short_source() {
    let mut z = [9; 2];
    add_vv_assign(&mut z, &[1]);
}

#[test]
fn add_vw_on_empty_slice_returns_incoming_carry() {
    let mut z: [Digit; 0] = [];

    assert_eq!(add_vw(&mut z, &[], 5), 5);
    assert_eq!(add_vw_assign(&mut z, 9), 9);
}

#[test]
fn add_vw_assign_stops_when_carry_is_absorbed() {
    let mut z = [MAX, 3, MAX];

    let c = add_vw_assign(&mut z, 1);

    assert_eq!(z, [0, 4, MAX]);
    assert_eq!(c, 0);
}

#[test]
fn sub_vv_propagates_borrow() {
    let mut z = [0; 3];

    let b = sub_vv(&mut z, &[0, 0, 1], &[1, 0, 0]);

    assert_eq!(z, [MAX, MAX, 0]);
    assert_eq!(b, 0);
}

#[test]
fn sub_vv_reports_underflow_as_final_borrow() {
    let mut z = [0; 2];

    let b = sub_vv(&mut z, &[0, 0], &[1, 0]);

    assert_eq!(z, [MAX, MAX]);
    assert_eq!(b, 1);
}

#[test]
fn sub_vw_and_assign_agree() {
    let x = [0, 0, 5];
    let mut z = [0; 3];

    let b = sub_vw(&mut z, &x, 1);

    let mut w = x;
    let b2 = sub_vw_assign(&mut w, 1);

    assert_eq!(z, [MAX, MAX, 4]);
    assert_eq!(z, w);
    assert_eq!(b, 0);
    assert_eq!(b2, 0);
}

#[test]
fn sub_vv_assign_matches_sub_vv() {
    let x = [0, 0, 5];
    let y = [1, 0, 2];

    let mut z = [0; 3];
    let b = sub_vv(&mut z, &x, &y);

    let mut w = x;
    let b2 = sub_vv_assign(&mut w, &y);

    assert_eq!(w, [MAX, MAX, 2]);
    assert_eq!(w, z);
    assert_eq!(b, 0);
    assert_eq!(b2, b);
}

#[test]
fn sub_vv_assign_reports_underflow() {
    let mut z = [1, 2];

    assert_eq!(sub_vv_assign(&mut z, &[2, 2]), 1);
    assert_eq!(z, [MAX, MAX]);
}

#[test]
#[should_panic(expected = "source is shorter than destination")]
fn sub_vv_rejects_short_source() {
    let mut z = [9; 3];
    sub_vv(&mut z, &[4, 5, 6], &[1]);
}

#[test]
#[should_panic(expected = "source is shorter than destination")]
fn sub_vw_rejects_short_source() {
    let mut z = [9; 2];
    sub_vw(&mut z, &[], 1);
}

#[test]
#[should_panic(expected = "source is shorter than destination")]
fn sub_vv_assign_rejects_short_source() {
    let mut z = [9; 3];
    sub_vv_assign(&mut z, &[1, 1]);
}

#[test]
fn sub_vw_accepts_a_multi_bit_borrow() {
    let mut z = [0; 1];

    assert_eq!(sub_vw(&mut z, &[10], 3), 0);
    assert_eq!(z, [7]);

    assert_eq!(sub_vw(&mut z, &[2], 3), 1);
    assert_eq!(z, [MAX]);
}

#[test]
fn mul_vw_carry_can_exceed_one() {
    let mut z = [0; 1];

    // (B-1) * (B-1) = (B-2) * B + 1
    let c = mul_vw(&mut z, &[MAX], MAX);

    assert_eq!(z, [1]);
    assert_eq!(c, MAX - 1);
}

#[test]
#[should_panic(expected = "source is shorter than destination")]
fn mul_vw_rejects_short_source() {
    let mut z = [9; 2];
    mul_vw(&mut z, &[3], 2);
}

#[test]
fn mul_vw_assign_matches_mul_vw() {
    let x = [MAX, 12, MAX];
    let mut z = [0; 3];

    let c = mul_vw(&mut z, &x, 16);

    let mut w = x;
    let c2 = mul_vw_assign(&mut w, 16);

    assert_eq!(z, w);
    assert_eq!(c, c2);
    assert_eq!(c, 15);
}

#[test]
fn div_wvw_single_digit() {
    let mut z = [0; 1];

    let r = div_wvw(&mut z, 0, &[100], 7).unwrap();

    assert_eq!(z, [14]);
    assert_eq!(r, 2);
}

#[test]
fn div_wvw_uses_incoming_remainder() {
    // (1 * B + 0) / 2 = B / 2
    let mut z = [0; 1];

    let r = div_wvw(&mut z, 1, &[0], 2).unwrap();

    assert_eq!(z, [1 << (Digit::BITS - 1)]);
    assert_eq!(r, 0);
}

#[test]
fn div_wvw_composes_over_segments() {
    let x = [5, 9, 3, 11];
    let y = 7;

    let mut whole = [0; 4];
    let r_whole = div_wvw(&mut whole, 0, &x, y).unwrap();

    let mut high = [0; 2];
    let r_high = div_wvw(&mut high, 0, &x[2..], y).unwrap();
    let mut low = [0; 2];
    let r_low = div_wvw(&mut low, r_high, &x[..2], y).unwrap();

    assert_eq!(&whole[2..], &high);
    assert_eq!(&whole[..2], &low);
    assert_eq!(r_whole, r_low);
}

#[test]
fn div_wvw_assign_matches_div_wvw() {
    let x = [MAX, 1, 42];
    let mut z = [0; 3];

    let r = div_wvw(&mut z, 0, &x, 10).unwrap();

    let mut w = x;
    let r2 = div_wvw_assign(&mut w, 0, 10).unwrap();

    assert_eq!(z, w);
    assert_eq!(r, r2);
}

#[test]
fn div_by_zero_is_rejected_without_writing() {
    let mut z = [3; 2];

    assert_eq!(div_wvw(&mut z, 0, &[1, 2], 0), Err(NaturalError::DivisionByZero));
    assert_eq!(z, [3, 3]);

    assert_eq!(div_wvw_assign(&mut z, 0, 0), Err(NaturalError::DivisionByZero));
    assert_eq!(z, [3, 3]);
}

#[test]
fn remainder_not_below_divisor_is_rejected_without_writing() {
    let mut z = [3; 1];

    assert_eq!(
        div_wvw(&mut z, 5, &[0], 2),
        Err(NaturalError::RemainderTooLarge { remainder: 5, divisor: 2 })
    );
    assert_eq!(z, [3]);

    assert_eq!(
        div_wvw(&mut z, 2, &[0], 2),
        Err(NaturalError::RemainderTooLarge { remainder: 2, divisor: 2 })
    );
    assert_eq!(z, [3]);

    assert_eq!(
        div_wvw_assign(&mut z, 7, 7),
        Err(NaturalError::RemainderTooLarge { remainder: 7, divisor: 7 })
    );
    assert_eq!(z, [3]);
}

#[test]
fn largest_valid_remainder_is_accepted() {
    let mut z = [0; 1];

    // (1 * B + 1) / 2 = B / 2, remainder 1
    let r = div_wvw(&mut z, 1, &[1], 2).unwrap();

    assert_eq!(z, [1 << (natural::DIGIT_BITS - 1)]);
    assert_eq!(r, 1);
}

#[test]
#[should_panic(expected = "source is shorter than destination")]
fn div_wvw_rejects_short_source() {
    let mut z = [9; 2];
    let _ = div_wvw(&mut z, 0, &[1], 3);
}
