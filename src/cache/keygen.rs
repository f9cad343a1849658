//! Key Generator Module
//!
//! Produces the random identifiers entries are stored under.

use uuid::Uuid;

// == Key Generator ==
/// Generates statistically unique string keys.
///
/// Keys are canonical UUID v4 strings, so each one carries 128 random bits
/// and collisions are negligible in practice. Generation holds no state and
/// cannot fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyGenerator;

impl KeyGenerator {
    // == Constructor ==
    /// Creates a new KeyGenerator.
    pub fn new() -> Self {
        Self
    }

    // == Generate ==
    /// Returns a fresh random key.
    pub fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
