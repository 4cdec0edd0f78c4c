/// error type shared by the formatters and writers
pub mod ckin_errors;
/// eng
/// `!` comment header describing the vibrational, torsional and symmetry models and the
/// levels of theory behind a rate constant or a thermo fit
/// # Examples
/// ```
/// use CkinWriter::Ckin::model_header::{SpeciesModelDct, model_header};
/// let json = r#"{
///   "pf": {
///     "vib": {"mod": "harm", "geolvl": ["lvl_wbs", [1.0, ["gaussian", "b3lyp", "6-31g*", "R"]]]},
///     "tors": {"mod": "1dhr"},
///     "symm": {"mod": "sampling"},
///     "ene": {"lvl1": ["lvl_cc", [1.0, ["molpro2015", "ccsd(t)", "cc-pvtz", "R"]]]}
///   }
/// }"#;
/// let dct = SpeciesModelDct::from_json_str(json).unwrap();
/// let header = model_header(&["pf"], &dct, Some("cbh0")).unwrap();
/// assert!(header.contains("! energy level: 1.00 x Rccsd(t)/cc-pvtz//Rb3lyp/6-31g*\n"));
/// ```
pub mod model_header;
/// heats of formation comment in front of a NASA polynomial block
pub mod nasa_block;
/// REACTIONS, THERMO and transport files
/// # Examples
/// ```
/// use CkinWriter::Ckin::ckin_writer::{CkinRxnDct, write_rxn_file};
/// let dir = std::env::temp_dir().join("ckin_doc_example");
/// let dct: CkinRxnDct = [("header", "! vib model: harm"), ("R1", "H+O2=OH+O  1.0E+14 0.0 16800.")]
///     .into_iter()
///     .collect();
/// write_rxn_file(&dct, "HO2", &dir).unwrap();
/// ```
pub mod ckin_writer;

mod ckin_writer_tests;
