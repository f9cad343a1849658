//! Cache Module
//!
//! Provides the call-counted cache facade, its value model, key generation
//! and operation counting.

mod counter;
mod facade;
mod keygen;
mod value;


// Re-export public types
pub use counter::{CallCounter, Operation};
pub use facade::Cache;
pub use keygen::KeyGenerator;
pub use value::{decode_float, decode_int, decode_str, Value};
