// ============================================================================
// Arithmetic Module
// Raw-integer kernels behind the Fixed operators
// ============================================================================
//
// `wide` holds the multiply/divide/remainder kernels. They work on the raw
// i64 representation so that `numeric::ops` stays a thin dispatch layer.

pub mod wide;
