/// Data layer: core types, loading, frame selection and axis scaling.
///
/// Architecture:
/// ```text
///   Interpolated_Data_Anemia.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Record>, distinct years, labels, value range
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  select   │  year → top 10 records, ascending
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  scale    │  ranked subset → axis bounds
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod scale;
pub mod select;
