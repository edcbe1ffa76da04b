pub mod types;
pub mod digest;
pub mod key;
pub mod wrap;
pub mod aes_ecb;
pub mod signer;

pub use types::*;
pub use digest::*;
pub use key::*;
pub use wrap::*;
pub use aes_ecb::*;
pub use signer::*;
