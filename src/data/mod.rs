/// Data layer: core types, loading, and cleaning.
///
/// Architecture:
/// ```text
///  bundled iris.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse embedded CSV → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Sample>, numeric columns + species label
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  clean    │  fill missing cells with column means
///   └──────────┘
/// ```

pub mod clean;
pub mod loader;
pub mod model;
