/*!
This crate contains small utilities shared by the other sieve crates.
*/

pub mod finite;
pub mod serve;
pub mod table;
