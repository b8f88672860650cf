use crate::module_graph::dependency::ModuleImport;
use crate::module_graph::version::{parse_version, VersionRange};

#[test]
fn test_parse_version() {
    let version = parse_version("1.2.3").expect("valid version");
    assert_eq!(version.major, 1);
    assert_eq!(version.minor, 2);
    assert_eq!(version.patch, 3);

    assert!(parse_version("not-a-version").is_err());
    assert!(parse_version("1.2").is_err());
}

#[test]
fn test_version_range_includes() {
    let range = VersionRange::from_constraint("^0.1").expect("valid constraint");
    assert!(range.includes(&parse_version("0.1.0").unwrap()));
    assert!(range.includes(&parse_version("0.1.9").unwrap()));
    assert!(!range.includes(&parse_version("0.2.0").unwrap()));
    assert!(!range.includes(&parse_version("1.0.0").unwrap()));
}

#[test]
fn test_version_range_any() {
    let range = VersionRange::any();
    assert!(range.includes(&parse_version("0.0.1").unwrap()));
    assert!(range.includes(&parse_version("99.0.0").unwrap()));
    assert_eq!(range.constraint_string(), "*");
}

#[test]
fn test_invalid_constraint() {
    assert!(VersionRange::from_constraint("^^nope").is_err());
}

#[test]
fn test_range_display_shows_constraint() {
    let range = VersionRange::from_constraint(">=1.0, <2.0").expect("valid constraint");
    assert_eq!(range.to_string(), ">=1.0, <2.0");
}

#[test]
fn test_import_satisfaction() {
    let unconstrained = ModuleImport::any("shared");
    assert!(unconstrained.is_satisfied_by(&parse_version("9.9.9").unwrap()));

    let constrained = ModuleImport::versioned(
        "shared",
        VersionRange::from_constraint("^1.0").expect("valid constraint"),
    );
    assert!(constrained.is_satisfied_by(&parse_version("1.4.2").unwrap()));
    assert!(!constrained.is_satisfied_by(&parse_version("2.0.0").unwrap()));
}

#[test]
fn test_import_display() {
    let import = ModuleImport::any("shared-common");
    assert_eq!(import.to_string(), "import: shared-common (any version)");
}
