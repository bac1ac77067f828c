pub mod aggregate;
pub mod audit;
pub mod dedupe;
pub mod entities;
pub mod merge;
pub mod numeric;

pub use aggregate::{
    CountRow, InvalidEntry, SumAggregation, SumRow, aggregate_count, aggregate_sum,
};
pub use audit::{ColumnIssues, IssueKind, IssueReport, audit, render_report};
pub use dedupe::{DedupeOutcome, dedupe};
pub use entities::decode_entities;
pub use merge::merge;
pub use numeric::{NormalizedNumber, normalize};
