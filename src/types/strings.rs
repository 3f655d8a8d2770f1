use aliri_braid::braid;

/// Name of a tool data table, e.g. `all_fasta`
#[braid(serde)]
pub struct DataTableName;

/// Date in ISO-8601 format, without a timezone.
#[braid(serde)]
pub struct DateString;
