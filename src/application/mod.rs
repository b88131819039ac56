// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers for one goal: reading a dataset
// into named splits and optionally saving them.
//
// Rules for this layer:
//   - No file-format parsing here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - Only workflow coordination

// The read workflow
pub mod read_use_case;
