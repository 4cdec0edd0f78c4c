//! physical constants used for unit conversion of the written values

/// Hartree to kcal/mol
pub const EH2KCAL: f64 = 627.509474;
