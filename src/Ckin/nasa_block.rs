use crate::phycon::EH2KCAL;
use log::debug;

/// NASA polynomial block of a species with its heats of formation (Hartree)
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesThermo {
    pub name: String,
    pub hform0: f64,
    pub hform298: f64,
    /// pre-rendered polynomial coefficients
    pub poly: String,
}

impl SpeciesThermo {
    pub fn new(name: &str, hform0: f64, hform298: f64, poly: &str) -> Self {
        Self {
            name: name.to_string(),
            hform0,
            hform298,
            poly: poly.to_string(),
        }
    }
    pub fn ckin_str(&self, eh2kcal: f64) -> String {
        nasa_polynomial_with_factor(self.hform0, self.hform298, &self.poly, eh2kcal)
    }
}

/// Prepends the heats of formation at 0 K and 298 K (kcal/mol) to the polynomial block
pub fn nasa_polynomial(hform0: f64, hform298: f64, ckin_poly_str: &str) -> String {
    nasa_polynomial_with_factor(hform0, hform298, ckin_poly_str, EH2KCAL)
}

/// same as [`nasa_polynomial`] with an explicit Hartree -> kcal/mol factor
pub fn nasa_polynomial_with_factor(
    hform0: f64,
    hform298: f64,
    ckin_poly_str: &str,
    eh2kcal: f64,
) -> String {
    format!(
        "! Hf(0 K) = {:.2}, ! Hf(298 K) = {:.2} kcal/mol\n{}",
        hform0 * eh2kcal,
        hform298 * eh2kcal,
        ckin_poly_str
    )
}

/// Thermo section body: one commented block per species, newline separated
pub fn combine_nasa_polynomials(species: &[SpeciesThermo], eh2kcal: f64) -> String {
    species
        .iter()
        .map(|spc| {
            debug!("adding NASA polynomial of {}", spc.name);
            spc.ckin_str(eh2kcal)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
