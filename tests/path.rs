use std::path::PathBuf;

use jambase::{JamError, related_path};

#[test]
fn lowercase_extension_keeps_target_as_given() {
    let path = related_path("/bbs/msgs/general.jhr", "jdt").expect("derive");
    assert_eq!(path, PathBuf::from("/bbs/msgs/general.jdt"));

    let path = related_path("general.jhr", "jdx").expect("derive");
    assert_eq!(path, PathBuf::from("general.jdx"));
}

#[test]
fn uppercase_extension_uppercases_target() {
    let path = related_path("/BBS/MSGS/GENERAL.JHR", "jdt").expect("derive");
    assert_eq!(path, PathBuf::from("/BBS/MSGS/GENERAL.JDT"));

    // The stem's own case is preserved.
    let path = related_path("/bbs/General.JHR", "jlr").expect("derive");
    assert_eq!(path, PathBuf::from("/bbs/General.JLR"));
}

#[test]
fn bare_extension_is_accepted() {
    assert_eq!(related_path(".jhr", "jdt").expect("derive"), PathBuf::from(".jdt"));
}

#[test]
fn unrecognized_or_short_paths_are_rejected() {
    for bad in ["", "jhr", ".jh", "general.Jhr", "general.jdt", "general.jhr.bak", "general"] {
        let err = related_path(bad, "jdt").unwrap_err();
        assert!(
            matches!(err, JamError::UnsupportedExtension(_)),
            "expected UnsupportedExtension for {:?}, got {:?}",
            bad,
            err
        );
    }
}
