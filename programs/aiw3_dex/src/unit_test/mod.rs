pub mod math_test;
pub mod swap_pool_test;
