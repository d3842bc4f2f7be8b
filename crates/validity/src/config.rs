//! Configuration for rule compilation and evaluation

use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Country codes accepted by the `iban` rule (ISO 13616 members).
pub const BANK_ACCOUNT_COUNTRIES: &[&str] = &[
    "AD", "AE", "AL", "AT", "AZ", "BA", "BE", "BG", "BH", "BR", "CH", "CR", "CY", "CZ", "DE",
    "DK", "DO", "EE", "ES", "FI", "FO", "FR", "GB", "GE", "GI", "GL", "GR", "GT", "HR", "HU",
    "IE", "IL", "IS", "IT", "KW", "KZ", "LB", "LI", "LT", "LU", "LV", "MC", "MD", "ME", "MK",
    "MR", "MT", "MU", "NL", "NO", "PK", "PL", "PS", "PT", "RO", "RS", "SA", "SE", "SI", "SK",
    "SM", "TN", "TR", "VG",
];

/// Knobs that parameterize rules whose behaviour is not fully determined
/// by their arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Shortest value the Special `email` rule accepts (chars).
    pub email_min_len: usize,
    /// Longest value the Special `email` rule accepts (chars).
    pub email_max_len: usize,
    /// Personal IDs with a 7/8/9 century digit whose birth year would make
    /// the holder younger than this are moved back one century.
    pub personal_id_min_age: i32,
    /// Year the personal-ID age check is measured from. `None` means the
    /// current UTC year at compile time.
    pub reference_year: Option<i32>,
    /// Country prefixes the `iban` rule accepts.
    pub bank_account_countries: Vec<String>,
    /// Worker count for [`Validator::validate_parallel`](crate::engine::Validator::validate_parallel)
    /// when the caller passes 0. `None` means available parallelism.
    pub parallel_workers: Option<usize>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            email_min_len: 8,
            email_max_len: 25,
            personal_id_min_age: 14,
            reference_year: None,
            bank_account_countries: BANK_ACCOUNT_COUNTRIES
                .iter()
                .map(|c| (*c).to_owned())
                .collect(),
            parallel_workers: None,
        }
    }
}

impl ValidatorConfig {
    /// Create a new configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from JSON; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The year personal-ID ages are measured from.
    pub fn reference_year(&self) -> i32 {
        self.reference_year
            .unwrap_or_else(|| chrono::Utc::now().year())
    }

    /// Number of workers to use for parallel evaluation.
    pub fn workers(&self) -> usize {
        self.parallel_workers
            .or_else(|| std::thread::available_parallelism().ok().map(usize::from))
            .unwrap_or(1)
            .max(1)
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_email_len(mut self, min: usize, max: usize) -> Self {
        self.email_min_len = min;
        self.email_max_len = max;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_bank_account_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bank_account_countries = countries.into_iter().map(Into::into).collect();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_parallel_workers(mut self, workers: usize) -> Self {
        self.parallel_workers = Some(workers);
        self
    }
}
