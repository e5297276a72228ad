mod aggregation;

pub use aggregation::aggregate_by_month;
