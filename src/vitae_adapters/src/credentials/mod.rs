pub mod argon2_codec;

pub use argon2_codec::Argon2Codec;
