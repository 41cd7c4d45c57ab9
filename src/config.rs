use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::InvoiceError;

const SETTINGS_PREFIX: &str = "INVOICE_";

/// The invoicing party, printed in the header and payment instructions.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct BillerIdentity {
    pub name: String,
    pub address: String,
    pub city_state_zip: String,
    pub social_handle: String,
}

/// Read from `INVOICE_`-prefixed variables.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Settings {
    #[serde(default = "default_number_prefix")]
    pub number_prefix: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_number_prefix() -> String {
    "KG".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            number_prefix: default_number_prefix(),
            output_dir: default_output_dir(),
        }
    }
}

/// Drops variables whose name or value is not valid unicode.
fn unicode_vars<I>(vars: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}

#[derive(Debug, PartialEq, Clone)]
pub struct Config {
    pub biller: BillerIdentity,
    pub settings: Settings,
}

impl Config {
    /// Load configuration from the environment, after merging in a `.env`
    /// file when one exists.
    pub fn load() -> Result<Self, InvoiceError> {
        dotenv().ok();
        Self::from_vars(unicode_vars(env::vars_os()))
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, InvoiceError>
    where
        I: IntoIterator<Item = (String, String)> + Clone,
    {
        Ok(Self {
            biller: envy::from_iter(vars.clone())?,
            settings: envy::prefixed(SETTINGS_PREFIX).from_iter(vars)?,
        })
    }
}
