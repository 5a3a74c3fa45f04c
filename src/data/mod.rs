/// Data layer: core types, loading, and cleaning.
///
/// Architecture:
/// ```text
///  CSV over HTTP(S) or local path
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  select Age / dT → Vec<RawRecord>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  clean    │  drop incomplete rows, sort by age → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  model    │  Dataset → Grid (1×N)
///   └──────────┘
/// ```

pub mod clean;
pub mod loader;
pub mod model;
