use super::*;

#[test]
fn settings_file_uses_expected_filename() {
    let path = settings_file().expect("settings_file should resolve");
    assert_eq!(
        path.file_name().and_then(|f| f.to_str()),
        Some("settings.json")
    );
}

#[test]
fn store_file_uses_expected_filename() {
    let path = store_file().expect("store_file should resolve");
    assert_eq!(path.file_name().and_then(|f| f.to_str()), Some("store.json"));
}

#[test]
fn expand_home_leaves_plain_paths_alone() {
    let path = Path::new("/opt/aegis");
    assert_eq!(expand_home(path).unwrap(), PathBuf::from("/opt/aegis"));
}

#[test]
fn expand_home_rejects_other_users() {
    assert!(expand_home(Path::new("~someone/aegis")).is_err());
}
