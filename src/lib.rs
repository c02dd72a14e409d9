//! Big Integer \
//! This crate provides:
//! - [`BigInt`]: Arbitrary-precision signed integers stored one decimal digit per element. All operations are exact and never overflow.
//! - [`ParseBigIntError`]: The failure kinds of the decimal string parser.

mod big_int;
mod big_int_cache;
mod big_int_constants;
mod error;

pub use big_int::BigInt;
pub use error::ParseBigIntError;

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "900000000000".parse().unwrap();
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("a * b = {}", &a * &b);
        println!("-a = {}", -&a);
        assert!(&a + &b > a);
    }
}
