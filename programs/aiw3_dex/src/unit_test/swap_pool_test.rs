use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::math::SwapQuote;
use crate::state::swap_pool::{InitializePoolParams, SwapDirection, SwapPool};

const E9: u64 = 1_000_000_000;

fn canonical_pair() -> (Pubkey, Pubkey) {
    SwapPool::ordered_mints(Pubkey::new_unique(), Pubkey::new_unique())
}

fn active_pool(reserve_a: u64, reserve_b: u64) -> SwapPool {
    let (mint_a, mint_b) = canonical_pair();
    let mut pool = SwapPool::default();
    pool.initialize(InitializePoolParams {
        creator: Pubkey::new_unique(),
        token_mint_a: mint_a,
        token_mint_b: mint_b,
        reserve_a,
        reserve_b,
        fee_recipient: Pubkey::new_unique(),
        bump: 253,
    })
    .unwrap();
    pool
}

#[test]
fn ordered_mints_is_order_independent() {
    let x = Pubkey::new_unique();
    let y = Pubkey::new_unique();
    assert_eq!(SwapPool::ordered_mints(x, y), SwapPool::ordered_mints(y, x));

    let (a, b) = SwapPool::ordered_mints(x, y);
    assert!(a <= b);
    // same pair means same PDA seeds, hence the same pool address
    assert_eq!(
        [a.to_bytes(), b.to_bytes()],
        [
            SwapPool::ordered_mints(y, x).0.to_bytes(),
            SwapPool::ordered_mints(y, x).1.to_bytes()
        ]
    );
}

#[test]
fn initialize_sets_reserves_and_zeroes_counters() {
    let pool = active_pool(500 * E9, 800 * E9);
    assert_eq!(pool.reserve_a, 500 * E9);
    assert_eq!(pool.reserve_b, 800 * E9);
    assert_eq!(pool.total_volume_a, 0);
    assert_eq!(pool.total_volume_b, 0);
    assert_eq!(pool.total_fees_a, 0);
    assert_eq!(pool.total_fees_b, 0);
}

#[test]
fn initialize_rejects_zero_liquidity() {
    let (mint_a, mint_b) = canonical_pair();
    let mut pool = SwapPool::default();
    let result = pool.initialize(InitializePoolParams {
        creator: Pubkey::new_unique(),
        token_mint_a: mint_a,
        token_mint_b: mint_b,
        reserve_a: 0,
        reserve_b: 100,
        fee_recipient: Pubkey::new_unique(),
        bump: 253,
    });
    assert_eq!(result.unwrap_err(), error!(ErrorCode::InvalidAmount));
}

#[test]
fn initialize_rejects_identical_mints() {
    let mint = Pubkey::new_unique();
    let mut pool = SwapPool::default();
    let result = pool.initialize(InitializePoolParams {
        creator: Pubkey::new_unique(),
        token_mint_a: mint,
        token_mint_b: mint,
        reserve_a: 100,
        reserve_b: 100,
        fee_recipient: Pubkey::new_unique(),
        bump: 253,
    });
    assert_eq!(result.unwrap_err(), error!(ErrorCode::InvalidTokenMint));
}

#[test]
fn initialize_rejects_second_call() {
    let mut pool = active_pool(100, 100);
    let (mint_a, mint_b) = canonical_pair();
    let result = pool.initialize(InitializePoolParams {
        creator: Pubkey::new_unique(),
        token_mint_a: mint_a,
        token_mint_b: mint_b,
        reserve_a: 100,
        reserve_b: 100,
        fee_recipient: Pubkey::new_unique(),
        bump: 253,
    });
    assert_eq!(result.unwrap_err(), error!(ErrorCode::AlreadyInitialized));
}

#[test]
fn swap_preserves_constant_product() {
    let mut pool = active_pool(100_000 * E9, 100_000 * E9);
    let k_before = pool.constant_product();

    let quote = pool.quote(SwapDirection::AtoB, 1_000 * E9, 30).unwrap();
    pool.apply_swap(SwapDirection::AtoB, &quote).unwrap();

    assert!(pool.constant_product() >= k_before);
    assert_eq!(pool.reserve_a, 100_000 * E9 + quote.amount_in_after_fee);
    assert_eq!(pool.reserve_b, 100_000 * E9 - quote.amount_out);
}

#[test]
fn swap_updates_per_side_counters() {
    let mut pool = active_pool(100_000 * E9, 100_000 * E9);

    let quote = pool.quote(SwapDirection::AtoB, 1_000 * E9, 30).unwrap();
    pool.apply_swap(SwapDirection::AtoB, &quote).unwrap();
    assert_eq!(pool.total_volume_a, 1_000 * E9);
    assert_eq!(pool.total_fees_a, 3 * E9);
    assert_eq!(pool.total_volume_b, 0);
    assert_eq!(pool.total_fees_b, 0);

    let quote = pool.quote(SwapDirection::BtoA, 500 * E9, 30).unwrap();
    pool.apply_swap(SwapDirection::BtoA, &quote).unwrap();
    assert_eq!(pool.total_volume_a, 1_000 * E9);
    assert_eq!(pool.total_volume_b, 500 * E9);
    assert_eq!(pool.total_fees_b, quote.fee);
}

#[test]
fn round_trip_loses_value_when_fee_is_nonzero() {
    let mut pool = active_pool(1_000_000, 1_000_000);
    let amount_in = 10_000;

    let forward = pool.quote(SwapDirection::AtoB, amount_in, 30).unwrap();
    pool.apply_swap(SwapDirection::AtoB, &forward).unwrap();

    let back = pool
        .quote(SwapDirection::BtoA, forward.amount_out, 30)
        .unwrap();
    pool.apply_swap(SwapDirection::BtoA, &back).unwrap();

    assert!(back.amount_out < amount_in);
}

#[test]
fn apply_swap_refuses_to_drain_a_reserve() {
    let mut pool = active_pool(1_000, 1_000);
    // a forged quote claiming the whole output reserve
    let quote = SwapQuote {
        fee: 0,
        amount_in_after_fee: u64::MAX / 2,
        amount_out: 1_000,
    };
    let result = pool.apply_swap(SwapDirection::AtoB, &quote);
    assert_eq!(result.unwrap_err(), error!(ErrorCode::InsufficientLiquidity));
    // the rejected swap left the pool untouched
    assert_eq!(pool.reserve_a, 1_000);
    assert_eq!(pool.reserve_b, 1_000);
    assert_eq!(pool.total_volume_a, 0);
}

#[test]
fn apply_swap_credits_only_the_received_input() {
    // An input mint with its own transfer fee delivers less than the quoted
    // net input. Settling with the received amount keeps the reserve equal
    // to what the vault actually holds.
    let mut pool = active_pool(100_000 * E9, 100_000 * E9);
    let quote = pool.quote(SwapDirection::AtoB, 1_000 * E9, 30).unwrap();

    let received = quote.amount_in_after_fee - 5 * E9;
    let settled = SwapQuote {
        amount_in_after_fee: received,
        ..quote
    };
    pool.apply_swap(SwapDirection::AtoB, &settled).unwrap();

    assert_eq!(pool.reserve_a, 100_000 * E9 + received);
    assert_eq!(pool.reserve_b, 100_000 * E9 - quote.amount_out);
}

#[test]
fn quote_direction_selects_reserves() {
    let pool = active_pool(10_000, 1_000_000);

    // a -> b sells into the deep side
    let ab = pool.quote(SwapDirection::AtoB, 1_000, 0).unwrap();
    // b -> a sells into the shallow side
    let ba = pool.quote(SwapDirection::BtoA, 1_000, 0).unwrap();

    assert_eq!(ab.amount_out, 1_000_000 * 1_000 / (10_000 + 1_000));
    assert_eq!(ba.amount_out, 10_000 * 1_000 / (1_000_000 + 1_000));
    assert!(ab.amount_out > ba.amount_out);
}
