// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types and traits describing what a dataset reader
// produces and what a dataset provider must supply.
//
// Rules for this layer:
//   - NO burn types here
//   - NO file I/O
//   - Only structs, enums, and traits
//
// Every provider is decoupled from the reader through the fixed
// two-field Sample record, so the reader never inspects a
// provider's internal example representation.

// A (text, label) record and the split-name → samples mapping
pub mod sample;

// Typed errors shared by providers, registries, and the reader
pub mod error;

// DatasetProvider and DatasetReader abstractions
pub mod traits;

// What the caller asks a reader for
pub mod request;
