// Reusable library API — visible to both CLI and WASM builds
pub mod dictionary;
pub mod errors;
pub mod log;
pub mod parser;
pub mod permutations;
pub mod solver;
pub mod word_char;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
