//! # Published Document Vectors
//!
//! Runs widely published CPF/CNPJ examples through the public API only,
//! the way downstream validation and presentation code consumes it.

use brtax_core::{
    display_document, format_cnpj, format_cpf, is_valid_cnpj, is_valid_cpf, normalize,
    validate_document, Cnpj, Cpf, DocumentKind, FormatError,
};

const VALID_CPFS: &[&str] = &["52998224725", "529.982.247-25", "12345678909", "111.444.777-35"];

const INVALID_CPFS: &[&str] = &[
    "",
    "52998224700",
    "00000000000",
    "11111111111",
    "999.999.999-99",
    "5299822472",
    "abc",
];

const VALID_CNPJS: &[&str] = &["11222333000181", "11.222.333/0001-81", "11.444.777/0001-61"];

const INVALID_CNPJS: &[&str] = &[
    "",
    "11222333000100",
    "00000000000000",
    "11.111.111/1111-11",
    "1122233300018",
];

#[test]
fn valid_cpfs_pass() {
    for raw in VALID_CPFS {
        assert!(is_valid_cpf(raw), "expected valid CPF: {raw}");
        assert!(Cpf::new(*raw).is_ok());
    }
}

#[test]
fn invalid_cpfs_fail() {
    for raw in INVALID_CPFS {
        assert!(!is_valid_cpf(raw), "expected invalid CPF: {raw}");
        assert!(Cpf::new(*raw).is_err());
    }
}

#[test]
fn valid_cnpjs_pass() {
    for raw in VALID_CNPJS {
        assert!(is_valid_cnpj(raw), "expected valid CNPJ: {raw}");
        assert!(Cnpj::new(*raw).is_ok());
    }
}

#[test]
fn invalid_cnpjs_fail() {
    for raw in INVALID_CNPJS {
        assert!(!is_valid_cnpj(raw), "expected invalid CNPJ: {raw}");
        assert!(Cnpj::new(*raw).is_err());
    }
}

#[test]
fn normalization_does_not_change_verdict() {
    for raw in VALID_CPFS.iter().chain(INVALID_CPFS) {
        assert_eq!(is_valid_cpf(&normalize(raw)), is_valid_cpf(raw), "{raw}");
    }
    for raw in VALID_CNPJS.iter().chain(INVALID_CNPJS) {
        assert_eq!(is_valid_cnpj(&normalize(raw)), is_valid_cnpj(raw), "{raw}");
    }
}

#[test]
fn canonical_formats() {
    assert_eq!(format_cpf("52998224725").unwrap(), "529.982.247-25");
    assert_eq!(format_cnpj("11222333000181").unwrap(), "11.222.333/0001-81");
}

#[test]
fn formatter_length_mismatch_is_signalled() {
    let err = format_cpf("529982247").unwrap_err();
    assert_eq!(
        err,
        FormatError::LengthMismatch {
            kind: DocumentKind::Cpf,
            expected: 11,
            actual: 9,
        }
    );
}

#[test]
fn validate_then_display_roundtrip() {
    let doc = validate_document(DocumentKind::Cnpj, "11.444.777/0001-61").unwrap();
    let stored = doc.as_str().to_string();
    assert_eq!(stored, "11444777000161");
    assert_eq!(
        display_document(DocumentKind::Cnpj, &stored).unwrap(),
        "11.444.777/0001-61"
    );
}
