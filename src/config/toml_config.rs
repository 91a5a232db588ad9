use crate::core::ConfigProvider;
use crate::utils::error::{Result, ToolkitError};
use crate::utils::validation::{validate_positive_number, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const DEFAULT_ROLLS: i64 = 1000;
pub const DEFAULT_DISPLAY_LIMIT: usize = 10;
pub const DEFAULT_CURRENCY_DECIMALS: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    pub simulation: SimulationConfig,
    pub interest: InterestConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub default_rolls: i64,
    pub seed: Option<u64>,
    pub display_limit: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            default_rolls: DEFAULT_ROLLS,
            seed: None,
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterestConfig {
    pub times_per_year: u32,
    pub decimals: usize,
}

impl Default for InterestConfig {
    fn default() -> Self {
        Self {
            times_per_year: crate::core::finance::DEFAULT_TIMES_PER_YEAR,
            decimals: DEFAULT_CURRENCY_DECIMALS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub verbose: bool,
    pub json: bool,
}

impl ToolkitConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` when given, otherwise returns the built-in defaults.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        let config = toml::from_str(&processed_content)?;
        Ok(config)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_range(
            "simulation.display_limit",
            self.simulation.display_limit,
            1,
            usize::from(crate::core::simulation::MAX_SUM - crate::core::simulation::MIN_SUM + 1),
        )?;

        validate_positive_number("interest.times_per_year", self.interest.times_per_year, 1).map_err(
            |e| ToolkitError::ConfigValidationError {
                field: "interest.times_per_year".to_string(),
                message: e.to_string(),
            },
        )?;

        validate_range("interest.decimals", self.interest.decimals, 0, 8)?;
        Ok(())
    }
}

impl ConfigProvider for ToolkitConfig {
    fn default_rolls(&self) -> i64 {
        self.simulation.default_rolls
    }

    fn seed(&self) -> Option<u64> {
        self.simulation.seed
    }

    fn display_limit(&self) -> usize {
        self.simulation.display_limit
    }

    fn times_per_year(&self) -> u32 {
        self.interest.times_per_year
    }

    fn currency_decimals(&self) -> usize {
        self.interest.decimals
    }
}

impl Validate for ToolkitConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
