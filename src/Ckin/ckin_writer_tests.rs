#[cfg(test)]
mod tests {
    use crate::Ckin::ckin_errors::CkinError;
    use crate::Ckin::ckin_writer::{
        CkinRxnDct, CkinWriter, format_general, nasa_file_name, rxn_file_str, write_nasa_file,
        write_rxn_file, write_transport_file,
    };
    use crate::Ckin::model_header::{
        ModelLevel, SpeciesModel, SpeciesModelDct, SymmModel, TheoryInfo, TorsModel, VibModel,
    };
    use crate::Ckin::nasa_block::{
        SpeciesThermo, combine_nasa_polynomials, nasa_polynomial, nasa_polynomial_with_factor,
    };
    use crate::phycon::EH2KCAL;
    use crate::settings::CkinSettings;
    use std::fs;
    use tempfile::tempdir;

    fn rxn_dct() -> CkinRxnDct {
        [("header", "H"), ("R1", "A"), ("R2", "B")]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_write_rxn_file() {
        let dir = tempdir().unwrap();
        write_rxn_file(&rxn_dct(), "C2H4", dir.path()).unwrap();
        let content = fs::read_to_string(dir.path().join("C2H4.ckin")).unwrap();
        assert_eq!(content, "REACTIONS\n\nH\n\nA\n\nB\n\nEND\n\n");
    }

    #[test]
    fn test_rxn_order_follows_insertion() {
        let mut dct = CkinRxnDct::with_header("H");
        for rxn in ["R9", "R1", "R5"] {
            dct.insert(rxn, &format!("{} rate", rxn));
        }
        // replacing keeps the original position
        dct.insert("R1", "R1 new rate");
        assert_eq!(dct.len(), 3);
        assert_eq!(dct.get("R1"), Some("R1 new rate"));
        assert_eq!(
            rxn_file_str(&dct).unwrap(),
            "REACTIONS\n\nH\n\nR9 rate\n\nR1 new rate\n\nR5 rate\n\nEND\n\n"
        );
    }

    #[test]
    fn test_header_entry_anywhere() {
        let dct: CkinRxnDct = [("R1", "A"), ("header", "H"), ("R2", "B")]
            .into_iter()
            .collect();
        assert_eq!(dct.header(), Some("H"));
        assert_eq!(
            rxn_file_str(&dct).unwrap(),
            "REACTIONS\n\nH\n\nA\n\nB\n\nEND\n\n"
        );
    }

    #[test]
    fn test_rxn_file_without_header() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("ckin");
        let dct: CkinRxnDct = [("R1", "A")].into_iter().collect();
        let result = write_rxn_file(&dct, "C2H4", &target);
        assert!(matches!(result, Err(CkinError::MissingHeader)));
        assert!(!target.join("C2H4.ckin").exists());
    }

    #[test]
    fn test_rxn_file_overwritten() {
        let dir = tempdir().unwrap();
        write_rxn_file(&rxn_dct(), "C2H4", dir.path()).unwrap();
        let dct = CkinRxnDct::with_header("H2");
        write_rxn_file(&dct, "C2H4", dir.path()).unwrap();
        let content = fs::read_to_string(dir.path().join("C2H4.ckin")).unwrap();
        assert_eq!(content, "REACTIONS\n\nH2\n\nEND\n\n");
    }

    #[test]
    fn test_missing_directory_created() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("run").join("ckin");
        write_rxn_file(&rxn_dct(), "CH4", &target).unwrap();
        write_nasa_file("POLY", &target, None).unwrap();
        write_transport_file("TRANS", &target).unwrap();
        // second round into the existing directory
        write_rxn_file(&rxn_dct(), "CH4", &target).unwrap();
        write_nasa_file("POLY", &target, None).unwrap();
        write_transport_file("TRANS", &target).unwrap();

        assert!(target.join("CH4.ckin").is_file());
        assert!(target.join("all_therm.ckin").is_file());
        assert!(target.join("trans.ckin").is_file());
    }

    #[test]
    fn test_write_nasa_file() {
        let dir = tempdir().unwrap();
        write_nasa_file("POLY", dir.path(), None).unwrap();
        let content = fs::read_to_string(dir.path().join("all_therm.ckin")).unwrap();
        assert_eq!(content, "THERMO\n\n\nPOLY\n\nEND\n\n");

        write_nasa_file("POLY3", dir.path(), Some(3.0)).unwrap();
        let content = fs::read_to_string(dir.path().join("all_therm.ckin_3")).unwrap();
        assert_eq!(content, "THERMO\n\n\nPOLY3\n\nEND\n\n");
    }

    #[test]
    fn test_nasa_file_name() {
        assert_eq!(nasa_file_name(None), "all_therm.ckin");
        assert_eq!(nasa_file_name(Some(3.0)), "all_therm.ckin_3");
        assert_eq!(nasa_file_name(Some(2.5)), "all_therm.ckin_2.5");
    }

    #[test]
    fn test_format_general() {
        assert_eq!(format_general(3.0), "3");
        assert_eq!(format_general(-12.0), "-12");
        assert_eq!(format_general(0.0), "0");
        assert_eq!(format_general(2.5), "2.5");
        assert_eq!(format_general(0.0001), "0.0001");
        assert_eq!(format_general(0.00001), "1e-05");
        assert_eq!(format_general(123456.0), "123456");
        assert_eq!(format_general(1234567.0), "1.23457e+06");
        assert_eq!(format_general(1.0 / 3.0), "0.333333");
        assert_eq!(format_general(f64::INFINITY), "inf");
    }

    #[test]
    fn test_write_transport_file() {
        let dir = tempdir().unwrap();
        let trans = "H2  1  38.000  2.920  0.000  0.790  280.000\n";
        write_transport_file(trans, dir.path()).unwrap();
        let content = fs::read_to_string(dir.path().join("trans.ckin")).unwrap();
        assert_eq!(content, trans);
    }

    #[test]
    fn test_write_into_file_path_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, "x").unwrap();
        let result = write_transport_file("TRANS", &blocker);
        assert!(matches!(result, Err(CkinError::Io { .. })));
    }

    #[test]
    fn test_nasa_polynomial() {
        assert_eq!(
            nasa_polynomial_with_factor(0.1, 0.2, "POLY", 627.5),
            "! Hf(0 K) = 62.75, ! Hf(298 K) = 125.50 kcal/mol\nPOLY"
        );
        assert_eq!(
            nasa_polynomial(0.0, -0.001, "POLY"),
            "! Hf(0 K) = 0.00, ! Hf(298 K) = -0.63 kcal/mol\nPOLY"
        );
    }

    #[test]
    fn test_combine_nasa_polynomials() {
        let species = vec![
            SpeciesThermo::new("H2", 0.0, 0.0, "H2 POLY"),
            SpeciesThermo::new("OH", 0.1, 0.2, "OH POLY"),
        ];
        let combined = combine_nasa_polynomials(&species, 627.5);
        assert_eq!(species[1].name, "OH");
        assert_eq!(
            combined,
            "! Hf(0 K) = 0.00, ! Hf(298 K) = 0.00 kcal/mol\nH2 POLY\n\
             ! Hf(0 K) = 62.75, ! Hf(298 K) = 125.50 kcal/mol\nOH POLY"
        );
        assert_eq!(combine_nasa_polynomials(&[], EH2KCAL), "");
    }

    fn simple_model() -> SpeciesModel {
        let level = ModelLevel::new(
            "lvl_b3",
            1.0,
            TheoryInfo::new("gaussian09", "b3lyp", "6-31g*", "R"),
        );
        SpeciesModel {
            vib: VibModel {
                model: "harm".to_string(),
                geolvl: Some(level.clone()),
            },
            tors: TorsModel {
                model: "rigid".to_string(),
                geolvl: None,
                enelvl: None,
            },
            symm: SymmModel {
                model: "none".to_string(),
            },
            ene: vec![level],
        }
    }

    #[test]
    fn test_ckin_writer_from_settings() {
        let dir = tempdir().unwrap();
        let settings = CkinSettings::new()
            .with_ckin_path(dir.path().join("ckin"))
            .with_refscheme("cbh0")
            .with_eh2kcal(627.5);
        let writer = CkinWriter::new(settings);

        let mut dct = SpeciesModelDct::new();
        dct.insert("pf", simple_model());
        let header = writer.model_header(&["pf"], &dct).unwrap();
        assert!(header.ends_with("! reference scheme: cbh0\n\n\n"));

        let mut rxns = CkinRxnDct::with_header(&header);
        rxns.insert("R1", "CH4+H=CH3+H2  1.0E+13  0.0  10000.");
        let rxn_path = writer.write_rxn_file(&rxns, "CH5").unwrap();
        assert_eq!(rxn_path, dir.path().join("ckin").join("CH5.ckin"));
        let content = fs::read_to_string(&rxn_path).unwrap();
        assert!(content.starts_with("REACTIONS\n\n! vib model: harm\n"));
        assert!(content.ends_with("CH4+H=CH3+H2  1.0E+13  0.0  10000.\n\nEND\n\n"));

        let species = vec![SpeciesThermo::new("OH", 0.1, 0.2, "POLY")];
        let nasa_path = writer.write_species_thermo(&species, Some(1.0)).unwrap();
        assert_eq!(nasa_path, dir.path().join("ckin").join("all_therm.ckin_1"));
        assert_eq!(
            fs::read_to_string(&nasa_path).unwrap(),
            format!("THERMO\n\n\n{}\n\nEND\n\n", writer.nasa_polynomial(0.1, 0.2, "POLY"))
        );

        let trans_path = writer.write_transport_file("TRANS").unwrap();
        assert_eq!(fs::read_to_string(trans_path).unwrap(), "TRANS");
    }
}
