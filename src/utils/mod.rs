pub mod prng;

pub use prng::PRNG;
