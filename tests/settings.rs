use stipula::settings::Settings;

#[test]
fn defaults_apply_when_no_file_is_present() {
    let settings = Settings::load(Some("no_such_settings_file")).expect("settings");
    assert_eq!(settings.log_filter, "info");
    assert!(settings.print_store);
}

#[test]
fn file_values_override_the_defaults() {
    // Use a temp path in the working directory; ensure clean start
    let path = "test_stipula_settings";
    let file = format!("{path}.toml");
    std::fs::write(&file, "log_filter = \"debug\"\nprint_store = false\n").expect("write settings");
    let settings = Settings::load(Some(path)).expect("settings");
    let _ = std::fs::remove_file(&file);
    assert_eq!(settings.log_filter, "debug");
    assert!(!settings.print_store);
}
