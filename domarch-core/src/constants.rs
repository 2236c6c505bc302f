// =============================================================================
// =============================================================================

/// Field index of the sequence identifier in a hit-table record
pub const HIT_FIELD_SEQUENCE_ID: usize = 0;

/// Field index of the raw annotation identifier in a hit-table record
pub const HIT_FIELD_RAW_ID: usize = 4;

/// Field index of the 1-based inclusive start residue in a hit-table record
pub const HIT_FIELD_START: usize = 6;

/// Field index of the 1-based inclusive stop residue in a hit-table record
pub const HIT_FIELD_STOP: usize = 7;

/// Minimum number of tab-separated fields in a hit-table record
pub const HIT_TABLE_MIN_FIELDS: usize = 8;

/// Minimum number of tab-separated fields in a family-table row
pub const FAMILY_TABLE_MIN_FIELDS: usize = 2;

// =============================================================================
// =============================================================================

/// Separator between family labels in an architecture rendering
pub const ARCHITECTURE_SEPARATOR: char = '-';
