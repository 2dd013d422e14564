//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use sherpa_config::{ConfigError, SherpaConfig};

#[test]
fn loads_export_section_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[export]
output_dir = "out/rubrics"
source_dir = "fixtures"
question_preview_chars = 60
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(SherpaConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = SherpaConfig::from_figment(&figment).expect("config loads");

        assert_eq!(config.export.output_dir, "out/rubrics");
        assert_eq!(config.export.source_dir, "fixtures");
        assert_eq!(config.export.question_preview_chars, 60);
        Ok(())
    });
}

#[test]
fn loads_pdf_section_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[pdf]
font_size = 8.5
margin = 24.0
column_widths = [0.3, 0.175, 0.175, 0.175, 0.175]
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(SherpaConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = SherpaConfig::from_figment(&figment).expect("config loads");

        assert_eq!(config.pdf.font_size, 8.5);
        assert_eq!(config.pdf.margin, 24.0);
        assert_eq!(config.pdf.title_font_size, 16.0);
        assert_eq!(config.pdf.column_widths, vec![0.3, 0.175, 0.175, 0.175, 0.175]);
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".sherpa")?;
        jail.create_file(
            ".sherpa/config.toml",
            r#"
[export]
output_dir = "project-exports"
"#,
        )?;

        let config = SherpaConfig::load().expect("config loads");
        assert_eq!(config.export.output_dir, "project-exports");
        assert_eq!(config.export.question_preview_chars, 40);
        Ok(())
    });
}

#[test]
fn invalid_column_widths_fail_validation() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[pdf]
column_widths = [0.5, 0.5]
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(SherpaConfig::default()))
            .merge(Toml::file("config.toml"));
        let result = SherpaConfig::from_figment(&figment);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "pdf.column_widths"
        ));
        Ok(())
    });
}
