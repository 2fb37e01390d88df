use std::{ffi::OsString, path::Path};

use clap::Parser;

use crate::{run, Args};

#[test]
fn defaults_to_conventional_filenames() {
    let args = Args::try_parse_from(["lifx-products-gen"]).unwrap();
    assert_eq!(args.input, Path::new("products.json"));
    assert_eq!(args.output, Path::new("products.txt"));
    assert_eq!(args.element_type, "lifx_product_info_t");
    assert_eq!(args.array_name, "lifx_products");
    assert!(!args.verbose);
}

#[test]
fn rejects_unknown_backend() {
    assert!(Args::try_parse_from(["lifx-products-gen", "--backend", "go"]).is_err());
}

#[test]
fn run_reports_failing_stage() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("products.json");
    let output = dir.path().join("products.txt");
    std::fs::write(&input, "not json").unwrap();

    let args = Args::try_parse_from(vec![
        OsString::from("lifx-products-gen"),
        "--input".into(),
        input.clone().into_os_string(),
        "--output".into(),
        output.clone().into_os_string(),
    ])
    .unwrap();

    let message = format!("{:#}", run(args).unwrap_err());
    assert!(message.contains("parse error"), "{}", message);
    assert!(!output.exists());
}

#[test]
fn run_writes_rust_table() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("products.json");
    let output = dir.path().join("products.rs");
    std::fs::write(&input, r#"[{"products":[{"pid":1,"name":"Bulb"}]}]"#).unwrap();

    let args = Args::try_parse_from(vec![
        OsString::from("lifx-products-gen"),
        "--backend".into(),
        "rust".into(),
        "-i".into(),
        input.clone().into_os_string(),
        "-o".into(),
        output.clone().into_os_string(),
    ])
    .unwrap();
    run(args).unwrap();

    let code = std::fs::read_to_string(&output).unwrap();
    assert!(code.contains("LIFX_PRODUCTS"), "{}", code);
}
