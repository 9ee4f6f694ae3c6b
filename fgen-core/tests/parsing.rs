use fgen_core::content::{truncate_to_bytes, LoremSource, TextSource};
use fgen_core::format::{human_bytes, human_duration};
use fgen_core::prepare::prepare_dir;
use fgen_core::request::parse_size;
use std::fs;

#[test]
fn size_suffixes_are_binary_and_case_insensitive() {
    assert_eq!(parse_size("10KB").unwrap(), 10 * 1024);
    assert_eq!(parse_size("2MB").unwrap(), 2 * 1024 * 1024);
    assert_eq!(parse_size("1GB").unwrap(), 1024 * 1024 * 1024);
    assert_eq!(parse_size("500").unwrap(), 500);
    assert_eq!(parse_size("10kb").unwrap(), 10 * 1024);
    assert_eq!(parse_size("3Mb").unwrap(), 3 * 1024 * 1024);
    assert_eq!(parse_size(" 7KB ").unwrap(), 7 * 1024);
    assert_eq!(parse_size("0").unwrap(), 0);
}

#[test]
fn bad_sizes_are_errors() {
    assert!(parse_size("ten").is_err());
    assert!(parse_size("10TB").is_err()); // unknown suffix, not a number
    assert!(parse_size("").is_err());
    assert!(parse_size("-5KB").is_err());
}

#[test]
fn byte_formatter_uses_decimal_units() {
    assert_eq!(human_bytes(500), "500.0 bytes");
    assert_eq!(human_bytes(1500), "1.5 KB");
    assert_eq!(human_bytes(1_500_000), "1.5 MB");
    assert_eq!(human_bytes(0), "0.0 bytes");
    assert_eq!(human_bytes(2_000_000_000), "2.0 GB");
    assert_eq!(human_bytes(3_100_000_000_000), "3.1 TB");
}

#[test]
fn duration_formatter_truncates_into_coarse_units() {
    assert_eq!(human_duration(999), "999 ms");
    assert_eq!(human_duration(1000), "1 s");
    assert_eq!(human_duration(90_500), "90 s");
    assert_eq!(human_duration(5 * 60 * 1000), "5 min");
    assert_eq!(human_duration(59 * 60 * 1000), "59 min");
    assert_eq!(human_duration(60 * 60 * 1000), "1 h");
    assert_eq!(human_duration(25 * 60 * 60 * 1000), "1 d");
}

#[test]
fn truncation_is_exact_for_ascii_and_safe_for_utf8() {
    assert_eq!(truncate_to_bytes("hello world".to_string(), 5), "hello");
    assert_eq!(truncate_to_bytes("hi".to_string(), 10), "hi");
    // 'é' is two bytes; cutting inside it backs off to the boundary
    assert_eq!(truncate_to_bytes("aé".to_string(), 2), "a");
    assert_eq!(truncate_to_bytes("aé".to_string(), 3), "aé");
}

#[test]
fn lorem_source_covers_the_requested_length() {
    let mut src = LoremSource::seeded(42);
    for want in [0usize, 1, 10, 1000, 5000] {
        let text = src.text(want);
        assert!(text.len() >= want, "want {} got {}", want, text.len());
        assert!(text.is_ascii());
    }
}

#[test]
fn lorem_source_is_deterministic_per_seed() {
    let a = LoremSource::seeded(7).text(500);
    let b = LoremSource::seeded(7).text(500);
    assert_eq!(a, b);
}

#[test]
fn prepare_creates_missing_parents() {
    let tmp = tempfile::tempdir().unwrap();
    let deep = tmp.path().join("a/b/c");
    prepare_dir(&deep).unwrap();
    assert!(deep.is_dir());
}

#[test]
fn prepare_clears_files_and_subdirectories() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("target");
    fs::create_dir_all(dir.join("sub/deeper")).unwrap();
    fs::write(dir.join("f.txt"), b"x").unwrap();
    fs::write(dir.join("sub/deeper/g.txt"), b"x").unwrap();

    prepare_dir(&dir).unwrap();
    assert!(dir.is_dir());
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
}

#[cfg(unix)]
#[test]
fn prepare_unlinks_symlinks_without_touching_targets() {
    let tmp = tempfile::tempdir().unwrap();
    let target = tmp.path().join("outside.txt");
    fs::write(&target, b"keep me").unwrap();
    let dir = tmp.path().join("linked");
    fs::create_dir_all(&dir).unwrap();
    std::os::unix::fs::symlink(&target, dir.join("link.txt")).unwrap();

    prepare_dir(&dir).unwrap();
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
    assert!(target.exists());
}
