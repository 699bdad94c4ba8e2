//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Prefix for environment overrides (`LLM_QA_BACKEND__MODEL=...`)
pub const ENV_PREFIX: &str = "LLM_QA_";

const PROJECT_FILES: [&str; 2] = ["llm-qa.toml", ".llm-qa.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `LLM_QA_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./llm-qa.toml` or `./.llm-qa.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/llm-qa/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/llm-qa/config.toml if set,
    /// otherwise the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("llm-qa").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used (for --show-config)
    pub fn describe_sources(explicit: Option<&PathBuf>) -> String {
        let mut out = String::from("Configuration sources (in priority order):\n");

        out.push_str(&format!("  [ENV  ] Environment: {}*\n", ENV_PREFIX));

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            out.push_str(&format!("  [{}] Explicit: {}\n", mark, path.display()));
        }

        if let Some(path) = Self::project_config_path() {
            out.push_str(&format!("  [FOUND] Project: {}\n", path.display()));
        } else {
            out.push_str("  [     ] Project: ./llm-qa.toml or ./.llm-qa.toml\n");
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            out.push_str(&format!("  [{}] Global:  {}\n", mark, path.display()));
        }

        out.push_str("  [     ] Default: built-in defaults");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.backend.api_key_env, "GROQ_API_KEY");
        assert_eq!(config.backend.max_tokens, 400);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("llm-qa"));
    }

    #[test]
    fn test_project_file_is_merged() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "llm-qa.toml",
                r#"
                [backend]
                model = "llama3-8b-8192"
                "#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.backend.model, "llama3-8b-8192");
            assert_eq!(config.backend.max_tokens, 400);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_beats_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file("llm-qa.toml", "[backend]\nmax_tokens = 100\n")?;
            jail.create_file("custom.toml", "[backend]\nmax_tokens = 200\n")?;

            let explicit = PathBuf::from("custom.toml");
            let config = ConfigLoader::load(Some(&explicit)).map_err(|e| *e)?;
            assert_eq!(config.backend.max_tokens, 200);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file("llm-qa.toml", "[server]\nbind = \"127.0.0.1:6000\"\n")?;
            jail.set_env("LLM_QA_SERVER__BIND", "127.0.0.1:7000");
            jail.set_env("LLM_QA_BACKEND__TEMPERATURE", "0.9");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.server.bind, "127.0.0.1:7000");
            assert_eq!(config.backend.temperature, 0.9);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_absolute_path() {
        Jail::expect_with(|jail| {
            let xdg = jail.directory().display().to_string();
            jail.set_env("XDG_CONFIG_HOME", xdg);
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("qa.toml");
            std::fs::write(&path, "[backend]\nmodel = \"gemma2-9b-it\"\n").unwrap();

            let config = ConfigLoader::load(Some(&path)).map_err(|e| *e)?;
            assert_eq!(config.backend.model, "gemma2-9b-it");
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file_falls_back_to_defaults() {
        Jail::expect_with(|jail| {
            let xdg = jail.directory().display().to_string();
            jail.set_env("XDG_CONFIG_HOME", xdg);
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("absent.toml");

            let config = ConfigLoader::load(Some(&path)).map_err(|e| *e)?;
            assert_eq!(config.backend.base_url, "https://api.groq.com/openai/v1");
            Ok(())
        });
    }

    #[test]
    fn test_invalid_type_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("llm-qa.toml", "[backend]\nmax_tokens = \"lots\"\n")?;
            assert!(ConfigLoader::load(None).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_describe_sources_mentions_env_prefix() {
        let text = ConfigLoader::describe_sources(None);
        assert!(text.contains("LLM_QA_"));
        assert!(text.contains("built-in defaults"));
    }
}
