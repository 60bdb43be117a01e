//! Command-line arguments for the two binaries.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::AppError;

/// Default location of the seed file.
pub const DEFAULT_JSON_FILE: &str = "data/products.json";

/// Arguments of the `data-loader` binary.
#[derive(Parser, Debug, Clone)]
#[command(name = "data-loader")]
#[command(about = "Initial product data loader", long_about = None)]
pub struct LoaderArgs {
    /// The OpenAI API key to be used
    #[arg(long = "use_api_key", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Path to the JSON file with initial products
    #[arg(long = "json_file", default_value = DEFAULT_JSON_FILE)]
    pub json_file: PathBuf,
}

/// Arguments of the `product-emitter` binary.
#[derive(Parser, Debug, Clone)]
#[command(name = "product-emitter")]
#[command(about = "Product data emitter", long_about = None)]
pub struct EmitterArgs {
    /// The OpenAI API key to be used
    #[arg(long = "use_api_key", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Load the seed file before emitting updates (yes/no, true/false, 1/0)
    #[arg(long = "load_data", default_value = "false", value_parser = parse_bool)]
    pub load_data: bool,

    /// Path to the JSON file with initial products
    #[arg(long = "json_file", default_value = DEFAULT_JSON_FILE)]
    pub json_file: PathBuf,

    /// Number of product updates to emit
    #[arg(long = "num_products", default_value = "20")]
    pub num_products: usize,

    /// Interval between product emissions in seconds
    #[arg(long = "interval", default_value = "5")]
    pub interval: u64,
}

/// Parse a permissive boolean flag value.
///
/// Accepts `yes/true/t/y/1` and `no/false/f/n/0`, case-insensitively.
pub fn parse_bool(value: &str) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" | "t" | "y" | "1" => Ok(true),
        "no" | "false" | "f" | "n" | "0" => Ok(false),
        _ => Err(AppError::config(format!(
            "Boolean value expected, got {:?}",
            value
        ))),
    }
}

/// Return `provided` if set, otherwise prompt for the API key on `output`
/// and read it from `input`.
pub fn resolve_api_key<R, W>(
    provided: Option<String>,
    input: &mut R,
    output: &mut W,
) -> Result<String, AppError>
where
    R: BufRead,
    W: Write,
{
    let key = match provided {
        Some(key) => key,
        None => {
            write!(output, "\nPlease provide your OpenAI API key: ")?;
            output.flush()?;
            let mut line = String::new();
            input.read_line(&mut line)?;
            line
        }
    };

    let key = key.trim().to_string();
    if key.is_empty() {
        return Err(AppError::config("An OpenAI API key is required"));
    }
    Ok(key)
}
