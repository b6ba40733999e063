//! # genics-juju
//!
//! The symbolic half of the pipeline: letter ciphers over identity strings,
//! calendar numerology, alignment feature extraction, and the aggregate
//! alignment score (GAS). Everything here is deterministic and pure; no
//! claim of statistical validity is made for any of it.

pub mod alignment;
pub mod cipher;
pub mod gas;
pub mod numerology;
pub mod reduce;

pub use alignment::{alignment_of, birthday_alignment};
pub use cipher::{cipher_of, composite_cipher};
pub use gas::gas_of;
pub use numerology::numerology_of;
