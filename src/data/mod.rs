/// Data layer: core types, loading, and the two chart transforms.
///
/// Architecture:
/// ```text
///    .csv
///      │
///      ▼
///  ┌──────────┐
///  │  loader   │  parse file → LaunchDataset
///  └──────────┘
///      │
///      ▼
///  ┌───────────────┐
///  │ LaunchDataset  │  Vec<LaunchRecord>, site / category indices
///  └───────────────┘
///      │
///      ├──────────────────────────┐
///      ▼                          ▼
///  ┌───────────┐            ┌──────────┐
///  │ aggregate  │ pie counts │  filter   │ scatter indices
///  └───────────┘            └──────────┘
/// ```
pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
