pub mod access_gate;
pub mod use_cases;

pub use access_gate::AccessGate;
pub use use_cases::{login::LoginUseCase, register::RegisterUseCase};

#[cfg(test)]
mod test_support;
