use std::path::Path;

use ::config as config_rs;
use anyhow::{Context, Result};
use config_rs::{ConfigBuilder, builder::DefaultState};
use serde::de::DeserializeOwned;

/// Settings read from `APP_`-prefixed variables, with `__` between section and
/// field (`APP_DATABASE__URL`).
pub trait EnvConfig: Sized + DeserializeOwned {
    const PREFIX: &'static str = "APP";
    const SEPARATOR: &'static str = "__";
    /// Unprefixed variables and the config key each one sets. A non-blank value
    /// wins over the prefixed form.
    const PLAIN_VARS: &'static [(&'static str, &'static str)] = &[];

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn from_env() -> Result<Self> {
        load_dotenv();

        let builder = config_rs::Config::builder().add_source(
            config_rs::Environment::with_prefix(Self::PREFIX)
                .prefix_separator("_")
                .separator(Self::SEPARATOR)
                .try_parsing(true),
        );
        let cfg = apply_plain_vars(builder, Self::PLAIN_VARS, |name| std::env::var(name).ok())?
            .build()
            .context("failed to read environment variables for config")?
            .try_deserialize::<Self>()
            .context("failed to deserialize environment into config")?;

        cfg.validate()?;
        Ok(cfg)
    }
}

fn apply_plain_vars(
    mut builder: ConfigBuilder<DefaultState>,
    vars: &[(&str, &str)],
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ConfigBuilder<DefaultState>> {
    for (name, key) in vars {
        let value = lookup(name).filter(|value| !value.trim().is_empty());
        builder = builder
            .set_override_option(*key, value)
            .with_context(|| format!("failed to apply {name}"))?;
    }
    Ok(builder)
}

// The crate's own .env first, then one in the working directory.
fn load_dotenv() {
    let crate_env = Path::new(env!("CARGO_MANIFEST_DIR")).join(".env");
    if dotenvy::from_filename(crate_env).is_err() {
        dotenvy::dotenv().ok();
    }
}

#[cfg(test)]
mod tests {
    use ::config as config_rs;

    use super::apply_plain_vars;

    const VARS: &[(&str, &str)] = &[("DATABASE_URL", "database.url")];

    fn resolved_url(lookup: impl Fn(&str) -> Option<String>) -> String {
        let builder = config_rs::Config::builder()
            .set_default("database.url", "postgres://localhost/todo-anywhere")
            .expect("default should apply");
        apply_plain_vars(builder, VARS, lookup)
            .expect("overrides should apply")
            .build()
            .expect("config should build")
            .get_string("database.url")
            .expect("url should be set")
    }

    #[test]
    fn plain_variable_wins_over_configured_value() {
        let url = resolved_url(|name| (name == "DATABASE_URL").then(|| "sqlite::memory:".into()));
        assert_eq!(url, "sqlite::memory:");
    }

    #[test]
    fn blank_or_unset_plain_variable_is_ignored() {
        assert_eq!(resolved_url(|_| None), "postgres://localhost/todo-anywhere");
        assert_eq!(
            resolved_url(|_| Some("   ".to_string())),
            "postgres://localhost/todo-anywhere"
        );
    }
}
