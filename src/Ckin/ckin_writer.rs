//! # CHEMKIN file writers
//!
//! Wraps pre-rendered blocks with the CHEMKIN section markers and writes them to disk.
//! The target directory is created when it does not exist and existing files are
//! overwritten.
//!
//! | file | content |
//! |------|---------|
//! | `<pes_formula>.ckin` | `REACTIONS`, model header, reaction blocks, `END` |
//! | `all_therm.ckin[_<idx>]` | `THERMO`, NASA polynomial blocks, `END` |
//! | `trans.ckin` | transport block as is |
use crate::Ckin::ckin_errors::CkinError;
use crate::Ckin::model_header::{SpeciesModelDct, model_header};
use crate::Ckin::nasa_block::{
    SpeciesThermo, combine_nasa_polynomials, nasa_polynomial_with_factor,
};
use crate::settings::CkinSettings;
use log::{debug, info};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// reserved key of the reaction dictionary holding the model header
pub const HEADER_KEY: &str = "header";
pub const NASA_FILE_NAME: &str = "all_therm.ckin";
pub const TRANSPORT_FILE_NAME: &str = "trans.ckin";

/// Reaction name -> formatted rate expression, plus the model header.
/// Reactions keep their insertion order, which is the order they are written in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CkinRxnDct {
    header: Option<String>,
    reactions: Vec<(String, String)>,
}

impl CkinRxnDct {
    /// empty dictionary without a header
    pub fn new() -> Self {
        Self::default()
    }

    /// empty dictionary with the model header already set
    pub fn with_header(header: &str) -> Self {
        Self {
            header: Some(header.to_string()),
            reactions: Vec::new(),
        }
    }

    /// replaces the model header
    pub fn set_header(&mut self, header: &str) {
        self.header = Some(header.to_string());
    }

    /// model header, `None` until one is set
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// Adds a formatted rate expression.
    ///
    /// # Arguments
    /// * `rxn` - reaction name; [`HEADER_KEY`] sets the model header instead
    /// * `rstring` - rate expression as written in the file
    ///
    /// An existing reaction keeps its position and gets the new rate string.
    pub fn insert(&mut self, rxn: &str, rstring: &str) {
        if rxn == HEADER_KEY {
            self.set_header(rstring);
            return;
        }
        match self.reactions.iter_mut().find(|(name, _)| name == rxn) {
            Some((_, old)) => *old = rstring.to_string(),
            None => self
                .reactions
                .push((rxn.to_string(), rstring.to_string())),
        }
    }

    /// rate expression of `rxn`, `None` if it was never inserted
    pub fn get(&self, rxn: &str) -> Option<&str> {
        self.reactions
            .iter()
            .find(|(name, _)| name == rxn)
            .map(|(_, rstring)| rstring.as_str())
    }

    /// (reaction name, rate expression) pairs in insertion order
    pub fn reactions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.reactions
            .iter()
            .map(|(name, rstring)| (name.as_str(), rstring.as_str()))
    }

    /// number of reactions, the header not counted
    pub fn len(&self) -> usize {
        self.reactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for CkinRxnDct {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dct = CkinRxnDct::new();
        for (rxn, rstring) in iter {
            dct.insert(rxn.as_ref(), rstring.as_ref());
        }
        dct
    }
}

/// content of the reactions file
pub fn rxn_file_str(ckin_rxn_dct: &CkinRxnDct) -> Result<String, CkinError> {
    let header = ckin_rxn_dct.header().ok_or(CkinError::MissingHeader)?;
    let mut ckin_str = String::from("REACTIONS\n\n");
    ckin_str.push_str(header);
    ckin_str.push_str("\n\n");
    for (_, rstring) in ckin_rxn_dct.reactions() {
        ckin_str.push_str(rstring);
        ckin_str.push_str("\n\n");
    }
    ckin_str.push_str("END\n\n");
    Ok(ckin_str)
}

/// writes `<ckin_path>/<pes_formula>.ckin`
pub fn write_rxn_file(
    ckin_rxn_dct: &CkinRxnDct,
    pes_formula: &str,
    ckin_path: impl AsRef<Path>,
) -> Result<(), CkinError> {
    let ckin_path = ckin_path.as_ref();
    let ckin_str = rxn_file_str(ckin_rxn_dct)?;
    ensure_ckin_path(ckin_path)?;
    let fpath = ckin_path.join(format!("{}.ckin", pes_formula));
    debug!(
        "writing {} reactions of PES {}",
        ckin_rxn_dct.len(),
        pes_formula
    );
    write_ckin_file(&fpath, &ckin_str)
}

/// `all_therm.ckin`, suffixed with `_<idx>` when an index is given
pub fn nasa_file_name(idx: Option<f64>) -> String {
    match idx {
        Some(idx) => format!("{}_{}", NASA_FILE_NAME, format_general(idx)),
        None => NASA_FILE_NAME.to_string(),
    }
}

/// content of the thermo file
pub fn nasa_file_str(ckin_nasa_str: &str) -> String {
    format!("THERMO\n\n\n{}\n\nEND\n\n", ckin_nasa_str)
}

/// writes the combined NASA polynomials to `<ckin_path>/all_therm.ckin[_<idx>]`
pub fn write_nasa_file(
    ckin_nasa_str: &str,
    ckin_path: impl AsRef<Path>,
    idx: Option<f64>,
) -> Result<(), CkinError> {
    let ckin_path = ckin_path.as_ref();
    ensure_ckin_path(ckin_path)?;
    let fpath = ckin_path.join(nasa_file_name(idx));
    write_ckin_file(&fpath, &nasa_file_str(ckin_nasa_str))
}

/// writes the transport block to `<ckin_path>/trans.ckin` without any section markers
pub fn write_transport_file(
    ckin_trans_str: &str,
    ckin_path: impl AsRef<Path>,
) -> Result<(), CkinError> {
    let ckin_path = ckin_path.as_ref();
    ensure_ckin_path(ckin_path)?;
    let fpath = ckin_path.join(TRANSPORT_FILE_NAME);
    write_ckin_file(&fpath, ckin_trans_str)
}

fn ensure_ckin_path(ckin_path: &Path) -> Result<(), CkinError> {
    if !ckin_path.exists() {
        debug!("creating directory {}", ckin_path.display());
        fs::create_dir_all(ckin_path).map_err(|e| CkinError::io(ckin_path, e))?;
    }
    Ok(())
}

fn write_ckin_file(fpath: &Path, ckin_str: &str) -> Result<(), CkinError> {
    let file = File::create(fpath).map_err(|e| CkinError::io(fpath, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(ckin_str.as_bytes())
        .map_err(|e| CkinError::io(fpath, e))?;
    writer.flush().map_err(|e| CkinError::io(fpath, e))?;
    info!("CHEMKIN file written: {}", fpath.display());
    Ok(())
}

/// Number in the `%g` notation: 6 significant digits, trailing zeros removed,
/// exponent form below 1e-4 and from 1e6 on (`3` -> `3`, `1e-5` -> `1e-05`).
pub fn format_general(value: f64) -> String {
    const PRECISION: i32 = 6;
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    // rounding to the precision may bump the exponent (999999.5 -> 1e+06)
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    if (-4..PRECISION).contains(&exp) {
        let fixed = format!("{:.*}", (PRECISION - 1 - exp) as usize, value);
        strip_trailing_zeros(&fixed).to_string()
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", strip_trailing_zeros(mantissa), sign, exp.abs())
    }
}

fn strip_trailing_zeros(num: &str) -> &str {
    if num.contains('.') {
        num.trim_end_matches('0').trim_end_matches('.')
    } else {
        num
    }
}

/// Writers bound to a [`CkinSettings`]: output directory, reference scheme and
/// Hartree -> kcal/mol factor are taken from the settings.
#[derive(Debug, Clone, Default)]
pub struct CkinWriter {
    pub settings: CkinSettings,
}

impl CkinWriter {
    /// Creates a writer.
    ///
    /// # Arguments
    /// * `settings` - output directory, reference scheme and conversion factor
    pub fn new(settings: CkinSettings) -> Self {
        Self { settings }
    }

    /// directory all files are written to
    pub fn ckin_path(&self) -> &Path {
        &self.settings.ckin_path
    }

    /// [`model_header`] with the reference scheme of the settings
    pub fn model_header<S: AsRef<str>>(
        &self,
        spc_mods: &[S],
        spc_mod_dct: &SpeciesModelDct,
    ) -> Result<String, CkinError> {
        model_header(spc_mods, spc_mod_dct, self.settings.refscheme.as_deref())
    }

    /// [`nasa_polynomial_with_factor`] with the conversion factor of the settings
    pub fn nasa_polynomial(&self, hform0: f64, hform298: f64, ckin_poly_str: &str) -> String {
        nasa_polynomial_with_factor(hform0, hform298, ckin_poly_str, self.settings.eh2kcal)
    }

    /// [`combine_nasa_polynomials`] with the conversion factor of the settings
    pub fn combine_nasa_polynomials(&self, species: &[SpeciesThermo]) -> String {
        combine_nasa_polynomials(species, self.settings.eh2kcal)
    }

    /// Writes the reactions file of one PES.
    ///
    /// # Arguments
    /// * `ckin_rxn_dct` - model header and rate expressions
    /// * `pes_formula` - file stem, e.g. `C2H4` for `C2H4.ckin`
    ///
    /// # Returns
    /// * `Ok(PathBuf)` - path of the written file
    /// * `Err(CkinError::MissingHeader)` - if the dictionary has no header
    /// * `Err(CkinError::Io)` - if the directory or the file can't be written
    pub fn write_rxn_file(
        &self,
        ckin_rxn_dct: &CkinRxnDct,
        pes_formula: &str,
    ) -> Result<PathBuf, CkinError> {
        write_rxn_file(ckin_rxn_dct, pes_formula, self.ckin_path())?;
        Ok(self.ckin_path().join(format!("{}.ckin", pes_formula)))
    }

    /// Writes the thermo file.
    ///
    /// # Arguments
    /// * `ckin_nasa_str` - combined NASA polynomial blocks
    /// * `idx` - optional suffix of the file name, `all_therm.ckin_<idx>`
    ///
    /// # Returns
    /// * `Ok(PathBuf)` - path of the written file
    /// * `Err(CkinError::Io)` - if the directory or the file can't be written
    pub fn write_nasa_file(
        &self,
        ckin_nasa_str: &str,
        idx: Option<f64>,
    ) -> Result<PathBuf, CkinError> {
        write_nasa_file(ckin_nasa_str, self.ckin_path(), idx)?;
        Ok(self.ckin_path().join(nasa_file_name(idx)))
    }

    /// thermo file for a list of species, see [`combine_nasa_polynomials`]
    pub fn write_species_thermo(
        &self,
        species: &[SpeciesThermo],
        idx: Option<f64>,
    ) -> Result<PathBuf, CkinError> {
        self.write_nasa_file(&self.combine_nasa_polynomials(species), idx)
    }

    /// writes `trans.ckin` and returns its path
    pub fn write_transport_file(&self, ckin_trans_str: &str) -> Result<PathBuf, CkinError> {
        write_transport_file(ckin_trans_str, self.ckin_path())?;
        Ok(self.ckin_path().join(TRANSPORT_FILE_NAME))
    }
}
