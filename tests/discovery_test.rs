use std::fs::{File, create_dir};
use std::path::Path;

use tempfile::tempdir;

use test_deployer::config::Convention;
use test_deployer::discovery::{derive_record, is_test_source, match_test_sources, scan_directory};

fn touch(dir: &Path, name: &str) {
    File::create(dir.join(name)).expect("Failed to create test file");
}

#[test]
fn test_is_test_source() {
    let convention = Convention::default();

    assert!(is_test_source("leds_test.c", &convention));
    assert!(is_test_source("_test.c", &convention));
    assert!(!is_test_source("leds.c", &convention));
    assert!(!is_test_source("leds_test.h", &convention));
    assert!(!is_test_source("leds_test.cpp", &convention));
    assert!(!is_test_source("bat_manager_test_failing.c", &convention));
    assert!(!is_test_source("README.md", &convention));
}

#[test]
fn test_derive_record() {
    let convention = Convention::default();

    let record = derive_record("./tests/devices", "power_conv_test.c", &convention)
        .unwrap()
        .expect("power_conv_test.c follows the convention");

    assert_eq!(record.name, "power_conv_test");
    assert_eq!(record.test_name, "power_conv_unit_test");
    assert_eq!(record.path, "./tests/devices/power_conv_unit_test");
}

#[test]
fn test_derive_record_with_trailing_separator() {
    let convention = Convention::default();

    let record = derive_record("./tests/devices/", "obdh_test.c", &convention)
        .unwrap()
        .unwrap();

    assert_eq!(record.path, "./tests/devices/obdh_unit_test");
}

#[test]
fn test_derive_record_only_replaces_trailing_marker() {
    let convention = Convention::default();

    let record = derive_record("./tests", "eps2_test_data_test.c", &convention)
        .unwrap()
        .unwrap();

    assert_eq!(record.name, "eps2_test_data_test");
    assert_eq!(record.test_name, "eps2_test_data_unit_test");
}

#[test]
fn test_derive_record_rejects_other_names() {
    let convention = Convention::default();

    assert_eq!(derive_record("./tests", "leds.c", &convention).unwrap(), None);
    assert_eq!(derive_record("./tests", "leds_test.h", &convention).unwrap(), None);
}

#[test]
fn test_derive_record_with_custom_convention() {
    let convention = Convention {
        extension: ".cpp".to_string(),
        test_marker: "_spec".to_string(),
        target_marker: "_runner".to_string(),
    };

    let record = derive_record("./src", "parser_spec.cpp", &convention)
        .unwrap()
        .unwrap();

    assert_eq!(record.name, "parser_spec");
    assert_eq!(record.test_name, "parser_runner");
    assert_eq!(record.path, "./src/parser_runner");
    assert_eq!(derive_record("./src", "parser_test.c", &convention).unwrap(), None);
}

#[test]
fn test_scan_directory_is_sorted_and_skips_directories() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    touch(temp_dir.path(), "watchdog_test.c");
    touch(temp_dir.path(), "heater_test.c");
    touch(temp_dir.path(), "media_test.c");
    create_dir(temp_dir.path().join("fixtures_test.c")).expect("Failed to create directory");

    let files = scan_directory(temp_dir.path()).unwrap();
    let names: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();

    assert_eq!(names, ["heater_test.c", "media_test.c", "watchdog_test.c"]);
    assert_eq!(files[0].path, temp_dir.path().join("heater_test.c"));
}

#[test]
fn test_scan_directory_is_not_recursive() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let nested = temp_dir.path().join("nested");
    create_dir(&nested).expect("Failed to create directory");
    touch(&nested, "ttc_test.c");
    touch(temp_dir.path(), "leds_test.c");

    let files = scan_directory(temp_dir.path()).unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].filename, "leds_test.c");
}

#[test]
fn test_scan_missing_directory_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("missing");

    let error = scan_directory(&missing).unwrap_err();
    let error_string = format!("{error}");

    assert!(error_string.contains("list directory"));
    assert!(error_string.contains("missing"));
}

#[test]
fn test_every_test_source_gives_exactly_one_record() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let all = [
        "battery_monitor_test.c",
        "current_sensor_test.c",
        "bat_manager_test_failing.c",
        "leds.c",
        "leds_test.h",
        "Makefile",
        "README.md",
        "temp_sensor_test.c",
    ];
    for name in all {
        touch(temp_dir.path(), name);
    }

    let convention = Convention::default();
    let files = scan_directory(temp_dir.path()).unwrap();
    let records = match_test_sources("./tests", &files, &convention).unwrap();

    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        ["battery_monitor_test", "current_sensor_test", "temp_sensor_test"]
    );

    for record in &records {
        let target = record.name.strip_suffix("_test").unwrap();
        assert_eq!(record.test_name, format!("{target}_unit_test"));
        assert_eq!(record.path, format!("./tests/{}", record.test_name));
    }
}

#[test]
fn test_no_test_sources_gives_no_records() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    touch(temp_dir.path(), "main.c");
    touch(temp_dir.path(), "version.h");

    let files = scan_directory(temp_dir.path()).unwrap();
    let records = match_test_sources("./firmware", &files, &Convention::default()).unwrap();

    assert!(records.is_empty());
}

#[cfg(unix)]
#[test]
fn test_non_unicode_names_are_skipped() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = tempdir().expect("Failed to create temp directory");
    File::create(temp_dir.path().join(OsStr::from_bytes(b"bad\xff_test.c")))
        .expect("Failed to create test file");
    touch(temp_dir.path(), "ok_test.c");

    let files = scan_directory(temp_dir.path()).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].filename, "ok_test.c");

    let records = match_test_sources("./tests", &files, &Convention::default()).unwrap();
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["ok_test"]);
}
