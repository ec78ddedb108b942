//! # Configuration
//!
//! Configuration is managed by [`confique`], layered from environment
//! variables, an optional `hotel.toml`, and compiled defaults.
//!
//! The defaults reproduce the fixed layout: the three collection files sit
//! under their fixed names in the process working directory. Nothing needs
//! configuring for that layout to work.
//!
//! ## Available Settings
//!
//! | Key | Env | Default |
//! |-----|-----|---------|
//! | `data_dir` | `HOTEL_DATA_DIR` | `.` |
//! | `customers_file` | | `customers.json` |
//! | `hotels_file` | | `hotels.json` |
//! | `reservations_file` | | `reservations.json` |

use crate::error::Result;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "hotel.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HotelConfig {
    /// Directory holding the collection files.
    #[config(env = "HOTEL_DATA_DIR", default = ".")]
    pub data_dir: PathBuf,

    #[config(default = "customers.json")]
    pub customers_file: String,

    #[config(default = "hotels.json")]
    pub hotels_file: String,

    #[config(default = "reservations.json")]
    pub reservations_file: String,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            customers_file: "customers.json".to_string(),
            hotels_file: "hotels.json".to_string(),
            reservations_file: "reservations.json".to_string(),
        }
    }
}

impl HotelConfig {
    /// Load from the environment, then `hotel.toml` in `dir` if present.
    pub fn load(dir: &Path) -> Result<Self> {
        let config = HotelConfig::builder()
            .env()
            .file(dir.join(CONFIG_FILE_NAME))
            .load()?;
        Ok(config)
    }
}
