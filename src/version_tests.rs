use super::version_below;

#[test]
fn older_version_is_below() {
    assert!(version_below("5.8.0", "5.9.2"));
    assert!(version_below("3.3.9", "3.4.0"));
    assert!(version_below("0.1.9", "0.2.0"));
}

#[test]
fn equal_version_is_not_below() {
    assert!(!version_below("5.9.2", "5.9.2"));
    assert!(!version_below("0.2.0", "0.2.0"));
}

#[test]
fn newer_version_is_not_below() {
    assert!(!version_below("5.10.0", "5.9.2"));
    assert!(!version_below("6.0.0", "5.9.2"));
}

#[test]
fn missing_segments_count_as_zero() {
    assert!(!version_below("5.9", "5.9.0"));
    assert!(version_below("5.9", "5.9.1"));
    assert!(!version_below("5.9.0.1", "5.9"));
}

#[test]
fn numeric_segments_compare_numerically_not_lexically() {
    // "10" > "9" even though it sorts first as a string
    assert!(!version_below("5.10.0", "5.9.0"));
}

#[test]
fn garbage_segments_count_as_zero() {
    assert!(version_below("abc", "0.0.1"));
    assert!(!version_below("1.x", "1.0"));
}
