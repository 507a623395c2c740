//! Tests for saving and loading MSAs.

#![cfg(feature = "disk-io")]

use musals::{Aligner, Msa, MsaError, MultipleAlign, Progressive, ScoringScheme};

#[test]
fn bitcode_io() -> Result<(), String> {
    let aligner = Aligner::default();
    let msa = Progressive::new(&aligner)
        .align_multiple(&["ACGT", "AGT", "AACGTT", "CGT"])
        .map_err(|e| e.to_string())?;

    let tmp_dir = tempdir::TempDir::new("testing").map_err(|e| e.to_string())?;
    let path = tmp_dir.path().join("test.msa");
    msa.write_to(&path).map_err(|e| e.to_string())?;

    let loaded = Msa::read_from(&path).map_err(|e| e.to_string())?;
    assert_eq!(loaded, msa);
    assert_eq!(loaded.strings(), ["-ACG-T", "-A-G-T", "AACGTT", "--CG-T"]);
    assert_eq!(loaded.score(), 12);

    Ok(())
}

#[test]
fn serde_io() -> Result<(), String> {
    let scoring = ScoringScheme::new(2, -1, -1);
    let bytes = bitcode::serialize(&scoring).map_err(|e| e.to_string())?;
    let loaded: ScoringScheme = bitcode::deserialize(&bytes).map_err(|e| e.to_string())?;
    assert_eq!(loaded, scoring);

    let aligner = Aligner::with_scoring(loaded);
    let msa = Progressive::new(&aligner)
        .align_multiple(&["ACGTTG", "ACTTG", "ACGTC"])
        .map_err(|e| e.to_string())?;

    let bytes = bitcode::serialize(&msa).map_err(|e| e.to_string())?;
    let loaded: Msa = bitcode::deserialize(&bytes).map_err(|e| e.to_string())?;
    assert_eq!(loaded, msa);
    assert_eq!(loaded.strings(), ["ACGTTG", "AC-TTG", "ACG-TC"]);
    assert_eq!(loaded.score(), 20);

    Ok(())
}

#[test]
fn read_errors() -> Result<(), String> {
    let tmp_dir = tempdir::TempDir::new("testing").map_err(|e| e.to_string())?;

    let missing = Msa::read_from(tmp_dir.path().join("missing.msa"));
    assert!(matches!(missing, Err(MsaError::Io(_))));

    let path = tmp_dir.path().join("empty.msa");
    std::fs::write(&path, b"").map_err(|e| e.to_string())?;
    let empty = Msa::read_from(&path);
    assert!(matches!(empty, Err(MsaError::Decode(_))));

    Ok(())
}
