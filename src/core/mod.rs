// src/core/mod.rs

pub mod alphabet;
pub mod caesar;
pub mod cipher;
pub mod frequency;
pub mod types;
pub mod vigenere;
