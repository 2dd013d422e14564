use anyhow::Context;
use sherpa_config::SherpaConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, then apply directory overrides from flags.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<SherpaConfig> {
    let mut config = SherpaConfig::load_with_dotenv().context("failed to load configuration")?;
    apply_overrides(&mut config, flags);
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn apply_overrides(config: &mut SherpaConfig, flags: &GlobalFlags) {
    if let Some(dir) = &flags.source_dir {
        config.export.source_dir.clone_from(dir);
    }
    if let Some(dir) = &flags.out_dir {
        config.export.output_dir.clone_from(dir);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::OutputFormat;

    fn flags(source_dir: Option<&str>, out_dir: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            output: OutputFormat::Table,
            quiet: false,
            verbose: false,
            source_dir: source_dir.map(str::to_string),
            out_dir: out_dir.map(str::to_string),
        }
    }

    #[test]
    fn flags_override_configured_directories() {
        let mut config = SherpaConfig::default();
        apply_overrides(&mut config, &flags(Some("fixtures"), Some("/tmp/out")));

        assert_eq!(config.export.source_dir, "fixtures");
        assert_eq!(config.export.output_dir, "/tmp/out");
    }

    #[test]
    fn absent_flags_keep_config_values() {
        let mut config = SherpaConfig::default();
        apply_overrides(&mut config, &flags(None, None));

        assert_eq!(config.export.source_dir, "results");
        assert_eq!(config.export.output_dir, "exports");
    }
}
