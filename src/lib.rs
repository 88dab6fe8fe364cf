// src/lib.rs

pub mod breaker;
pub mod core;
pub mod error;
pub mod io;
pub mod persistence;

pub use crate::breaker::{break_caesar, BreakResult, CaesarBreaker};
pub use crate::core::alphabet::{Alphabet, AlphabetPreset};
pub use crate::core::cipher::{Cipher, CipherKind};
pub use crate::core::frequency::FrequencyProfile;
pub use crate::core::types::{Direction, Shift};
pub use crate::error::{CipherError, Result};
pub use crate::persistence::ProfileFormat;
