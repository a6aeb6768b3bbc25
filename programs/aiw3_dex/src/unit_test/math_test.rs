use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::math::*;

const E9: u64 = 1_000_000_000;

#[test]
fn fee_amount_floors() {
    // 30 bps on 1000 units
    assert_eq!(fee_amount(1_000, 30).unwrap(), 3);
    // floor: 30 bps on 999 is 2.997, rounds down
    assert_eq!(fee_amount(999, 30).unwrap(), 2);
    assert_eq!(fee_amount(0, 30).unwrap(), 0);
    assert_eq!(fee_amount(u64::MAX, 10_000).unwrap(), u64::MAX);
    assert_eq!(fee_amount(12_345, 0).unwrap(), 0);
}

#[test]
fn transfer_fee_caps_at_max_fee() {
    // 1% of 1_000_000 is 10_000, capped at 5_000
    assert_eq!(transfer_fee(1_000_000, 100, 5_000).unwrap(), 5_000);
    // below the cap the bps fee applies
    assert_eq!(transfer_fee(100_000, 100, 5_000).unwrap(), 1_000);
    assert_eq!(transfer_fee(100_000, 0, 5_000).unwrap(), 0);
    assert_eq!(transfer_fee(100_000, 100, 0).unwrap(), 0);
}

#[test]
fn quote_matches_reference_scenario() {
    // 30 bps fee, reserves (100_000e9, 100_000e9), amount_in = 1000e9
    let reserve = 100_000 * E9;
    let amount_in = 1_000 * E9;

    let quote = quote_swap(reserve, reserve, amount_in, 30).unwrap();
    assert_eq!(quote.fee, 3 * E9);
    assert_eq!(quote.amount_in_after_fee, 997 * E9);
    // floor(100_000e9 * 997e9 / 100_997e9)
    assert_eq!(quote.amount_out, 987_158_034_397);
    assert!(quote.amount_out >= 900 * E9);
}

#[test]
fn quote_matches_formula_exactly() {
    let reserve_in = 5_000 * E9;
    let reserve_out = 20_000 * E9;
    let amount_in = 137 * E9 + 41;
    let fee_bps = 25;

    let quote = quote_swap(reserve_in, reserve_out, amount_in, fee_bps).unwrap();

    let expected_fee = (amount_in as u128 * fee_bps as u128 / 10_000) as u64;
    let after_fee = amount_in - expected_fee;
    let expected_out =
        (reserve_out as u128 * after_fee as u128 / (reserve_in as u128 + after_fee as u128)) as u64;
    assert_eq!(quote.fee, expected_fee);
    assert_eq!(quote.amount_in_after_fee, after_fee);
    assert_eq!(quote.amount_out, expected_out);
}

#[test]
fn quote_rejects_zero_amount() {
    let result = quote_swap(1_000, 1_000, 0, 30);
    assert_eq!(result.unwrap_err(), error!(ErrorCode::InvalidAmount));
}

#[test]
fn full_fee_consumes_entire_input() {
    // 10_000 bps leaves nothing to swap: output is zero, so any positive
    // minimum fails the slippage floor.
    let quote = quote_swap(1_000 * E9, 1_000 * E9, 500 * E9, 10_000).unwrap();
    assert_eq!(quote.fee, 500 * E9);
    assert_eq!(quote.amount_in_after_fee, 0);
    assert_eq!(quote.amount_out, 0);
    assert_eq!(
        quote.enforce_min(1).unwrap_err(),
        error!(ErrorCode::SlippageExceeded)
    );
    quote.enforce_min(0).unwrap();
}

#[test]
fn enforce_min_bounds_the_output() {
    let quote = quote_swap(100_000 * E9, 100_000 * E9, 1_000 * E9, 30).unwrap();

    // the quoted output itself always clears the floor
    quote.enforce_min(quote.amount_out).unwrap();
    assert_eq!(
        quote.enforce_min(quote.amount_out + 1).unwrap_err(),
        error!(ErrorCode::SlippageExceeded)
    );
}

#[test]
fn output_never_reaches_reserve_out() {
    // Even an enormous input cannot drain the output reserve.
    let quote = quote_swap(1, u64::MAX, u64::MAX / 2, 0).unwrap();
    assert!(quote.amount_out < u64::MAX);

    let quote = quote_swap(1_000, 1_000, u64::MAX / 2, 0).unwrap();
    assert!(quote.amount_out < 1_000);
}

#[test]
fn constant_product_out_handles_tiny_pools() {
    // reserve_in 1, reserve_out 1: any input yields 0 output at floor
    assert_eq!(constant_product_out(1, 1, 1).unwrap(), 0);
    assert_eq!(constant_product_out(1, 2, 1).unwrap(), 1);
}
