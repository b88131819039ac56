// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting pieces the other layers lean on:
//
//   seed.rs            — once-per-process seeding of the burn
//                        backend RNG, called by the host at startup
//
//   reader_registry.rs — name → reader lookup, so a pipeline can
//                        build "torchtext_classification_data_reader"
//                        from a JSON config block
//
//   output.rs          — JSON persistence of reader configs and
//                        read results

/// Explicit process-wide seeding
pub mod seed;

/// Named dataset-reader registry and pipeline config block
pub mod reader_registry;

/// JSON config loading and result writing
pub mod output;
