// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Coordinates the other layers to accomplish one goal.
//
// Rules for this layer:
//   - No line reading or filtering logic here (Layer 4)
//   - No printing here (Layer 1)
//   - No direct file formats here (Layer 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Vocabularies + parallel load + persistence
pub mod prepare_use_case;

// Single-corpus statistics
pub mod inspect_use_case;
