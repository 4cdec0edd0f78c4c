//! # Model header
//!
//! Comment block written on top of reaction and thermo CHEMKIN files. It states which
//! statistical mechanics models (vibrational, torsional, symmetry) and which electronic
//! structure levels were used to obtain the rate constants or the polynomial fits.
//!
//! ## Descriptor format
//! Model descriptors come from the model provider as JSON, each level being a nested tuple
//! `[name, [coeff, [program, method, basis, orb_label]]]`:
//! ```json
//! {
//!   "pf_mod": {
//!     "vib":  {"mod": "harm", "geolvl": ["lvl_wbs", [1.0, ["gaussian", "b3lyp", "6-31g*", "R"]]]},
//!     "tors": {"mod": "1dhr", "geolvl": null, "enelvl": null},
//!     "symm": {"mod": "sampling"},
//!     "ene":  {"lvl1": ["lvl_cc", [1.0, ["molpro2015", "ccsd(t)", "cc-pvtz", "R"]]]}
//!   }
//! }
//! ```
//! Only the keys of the `ene` table that contain `lvl` are energy levels; they are used in
//! the order they appear in the table. An optional level (`geolvl`, `enelvl`) is absent when
//! it is `null`, missing, or a pair with a `null` second element such as `["", null]`.
//!
//! With several energy levels every continuation line is a comment too (`! + 0.50 x ...`),
//! unlike the bare ` + 0.50 x ...` lines older CHEMKIN writers produced.
use crate::Ckin::ckin_errors::CkinError;
use log::debug;
use serde::de::{Deserializer, Error as DeError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// electronic structure method used for a level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TheoryInfo {
    pub program: String,
    pub method: String,
    pub basis: String,
    /// orbital restriction: R, U, RR ...
    pub orb_label: String,
}

impl TheoryInfo {
    pub fn new(program: &str, method: &str, basis: &str, orb_label: &str) -> Self {
        Self {
            program: program.to_string(),
            method: method.to_string(),
            basis: basis.to_string(),
            orb_label: orb_label.to_string(),
        }
    }
    /// label used in the header, e.g. `Rb3lyp/6-31g*`
    pub fn ckin_label(&self) -> String {
        format!("{}{}/{}", self.orb_label, self.method, self.basis)
    }
}

type RawTheory = (String, String, String, String);
type RawLevel = (String, (f64, RawTheory));

/// named level of theory with its contribution weight
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawLevel")]
pub struct ModelLevel {
    pub name: String,
    pub coeff: f64,
    pub theory: TheoryInfo,
}

impl From<RawLevel> for ModelLevel {
    fn from((name, (coeff, (program, method, basis, orb_label))): RawLevel) -> Self {
        Self {
            name,
            coeff,
            theory: TheoryInfo {
                program,
                method,
                basis,
                orb_label,
            },
        }
    }
}

impl ModelLevel {
    pub fn new(name: &str, coeff: f64, theory: TheoryInfo) -> Self {
        Self {
            name: name.to_string(),
            coeff,
            theory,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VibModel {
    #[serde(rename = "mod")]
    pub model: String,
    /// harmonic frequencies level, reference for all energy levels
    #[serde(default, deserialize_with = "deserialize_optional_level")]
    pub geolvl: Option<ModelLevel>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TorsModel {
    #[serde(rename = "mod")]
    pub model: String,
    #[serde(default, deserialize_with = "deserialize_optional_level")]
    pub geolvl: Option<ModelLevel>,
    #[serde(default, deserialize_with = "deserialize_optional_level")]
    pub enelvl: Option<ModelLevel>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SymmModel {
    #[serde(rename = "mod")]
    pub model: String,
}

/// models used for a single species or reaction
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpeciesModel {
    pub vib: VibModel,
    pub tors: TorsModel,
    pub symm: SymmModel,
    /// energy levels in the order of the `ene` table
    #[serde(default, deserialize_with = "deserialize_ene_levels")]
    pub ene: Vec<ModelLevel>,
}

/// `null`, `[name, null]` and `[name, [coeff, theory]]` are all accepted
fn deserialize_optional_level<'de, D>(deserializer: D) -> Result<Option<ModelLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<(Option<String>, Option<(f64, RawTheory)>)> =
        Deserialize::deserialize(deserializer)?;
    Ok(match raw {
        Some((name, Some(level))) => Some(ModelLevel::from((name.unwrap_or_default(), level))),
        _ => None,
    })
}

fn deserialize_ene_levels<'de, D>(deserializer: D) -> Result<Vec<ModelLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let table: Option<Map<String, Value>> = Deserialize::deserialize(deserializer)?;
    let Some(table) = table else {
        return Ok(Vec::new());
    };
    table
        .into_iter()
        .filter(|(key, _)| key.contains("lvl"))
        .map(|(key, value)| {
            serde_json::from_value::<ModelLevel>(value)
                .map_err(|e| D::Error::custom(format!("energy level '{}': {}", key, e)))
        })
        .collect()
}

/// model name -> models of the species/reaction
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct SpeciesModelDct {
    models: HashMap<String, SpeciesModel>,
}

impl SpeciesModelDct {
    /// empty dictionary, filled with [`SpeciesModelDct::insert`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the model dictionary from a JSON string.
    ///
    /// # Arguments
    /// * `json` - object mapping model names to `vib`/`tors`/`symm`/`ene` descriptors
    ///
    /// # Returns
    /// * `Err(CkinError::InvalidJson)` - if the JSON is malformed or a required key is missing
    pub fn from_json_str(json: &str) -> Result<Self, CkinError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the model dictionary from a JSON file.
    ///
    /// # Returns
    /// * `Err(CkinError::Io)` - if the file can't be read
    /// * `Err(CkinError::InvalidJson)` - if its content is not a valid model dictionary
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CkinError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CkinError::io(path, e))?;
        Self::from_json_str(&content)
    }

    /// adds or replaces the models stored under `name`
    pub fn insert(&mut self, name: &str, model: SpeciesModel) {
        self.models.insert(name.to_string(), model);
    }

    /// Looks up the models of one species or reaction.
    ///
    /// # Returns
    /// * `Ok(&SpeciesModel)` - models stored under `name`
    /// * `Err(CkinError::MissingModel)` - if `name` is not in the dictionary
    pub fn get(&self, name: &str) -> Result<&SpeciesModel, CkinError> {
        self.models
            .get(name)
            .ok_or_else(|| CkinError::MissingModel(name.to_string()))
    }

    /// number of models
    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// Header for several models, written one after another in the order of `spc_mods`
/// and closed by a blank line.
///
/// # Arguments
/// * `spc_mods` - model names, looked up in `spc_mod_dct`
/// * `spc_mod_dct` - models of the species/reactions
/// * `refscheme` - reference scheme added to every model block when not empty
///
/// # Returns
/// * `Err(CkinError::MissingModel)` - if one of the names is not in the dictionary
pub fn model_header<S: AsRef<str>>(
    spc_mods: &[S],
    spc_mod_dct: &SpeciesModelDct,
    refscheme: Option<&str>,
) -> Result<String, CkinError> {
    let mut mod_str = String::new();
    for spc_mod in spc_mods {
        let model = spc_mod_dct.get(spc_mod.as_ref())?;
        mod_str.push_str(&single_model_header(model, refscheme));
    }
    mod_str.push_str("\n\n");
    Ok(mod_str)
}

/// Header for one model: vib, tors and sym models are always written, the energy levels,
/// the torsional levels and the reference scheme only when they are known.
pub fn single_model_header(model: &SpeciesModel, refscheme: Option<&str>) -> String {
    let mut header = format!("! vib model: {}\n", model.vib.model);
    header.push_str(&format!("! tors model: {}\n", model.tors.model));
    header.push_str(&format!("! sym model: {}\n", model.symm.model));

    if let Some(har_level) = &model.vib.geolvl {
        if !model.ene.is_empty() {
            header.push_str(&energy_level_str(&model.ene, har_level));
        }
    }
    if let (Some(tors_geo), Some(tors_ene)) = (&model.tors.geolvl, &model.tors.enelvl) {
        header.push_str(&format!(
            "! tors level: {}//{}\n",
            tors_ene.theory.ckin_label(),
            tors_geo.theory.ckin_label()
        ));
    }
    if let Some(refscheme) = refscheme.filter(|s| !s.is_empty()) {
        header.push_str(&format!("! reference scheme: {}\n", refscheme));
    }
    header
}

/// `! energy level: c1 x ene1//har` followed by one `! + c_i x ene_i//har` line per
/// additional level
fn energy_level_str(ene_levels: &[ModelLevel], har_level: &ModelLevel) -> String {
    debug!("harmonic level: {:?}", har_level);
    let har_label = har_level.theory.ckin_label();
    let mut ene_str = String::new();
    for (i, ene_level) in ene_levels.iter().enumerate() {
        debug!("energy level: {:?}", ene_level);
        let prefix = if i == 0 { "! energy level:" } else { "! +" };
        ene_str.push_str(&format!(
            "{} {:.2} x {}//{}\n",
            prefix,
            ene_level.coeff,
            ene_level.theory.ckin_label(),
            har_label
        ));
    }
    ene_str
}
