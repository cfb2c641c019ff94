use std::error::Error;
use std::io::Read;

use clap::{Parser, ValueEnum};

use blo::{BloOptions, CaseMode, DEFAULT_SIZE};

const TERM_SQUARE_WIDTH: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Svg,
    Uri,
    Json,
    Term,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CaseArg {
    AsIs,
    Upper,
    Lower,
}

impl From<CaseArg> for CaseMode {
    fn from(value: CaseArg) -> Self {
        match value {
            CaseArg::AsIs => CaseMode::AsIs,
            CaseArg::Upper => CaseMode::Upper,
            CaseArg::Lower => CaseMode::Lower,
        }
    }
}

/// Render blockies identicons
///
/// Reads the address from the argument or stdin and prints the icon.
#[derive(Debug, Parser)]
#[command(name = "blo", version)]
pub struct Cli {
    /// Rendered size in pixels
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    pub size: u32,

    /// Seed the icon with SEED instead of the address
    #[arg(long, allow_hyphen_values = true)]
    pub seed: Option<String>,

    /// Case policy applied to the address before seeding
    #[arg(short, long = "case", value_enum, default_value_t = CaseArg::AsIs)]
    pub case_mode: CaseArg,

    #[arg(short, long, value_enum, default_value_t = Format::Svg)]
    pub format: Format,

    /// Log debug messages to stderr
    #[arg(short, long)]
    pub verbose: bool,

    pub address: Option<String>,
}

impl Cli {
    pub fn options(&self) -> BloOptions {
        BloOptions {
            size: self.size,
            seed: self.seed.clone(),
            case_mode: self.case_mode.into(),
        }
    }

    /// Render the icon, reading the address from `stdin` when no argument
    /// was given.
    pub fn execute(&self, mut stdin: impl Read) -> Result<String, Box<dyn Error>> {
        let address = match self.address {
            Some(ref address) => address.trim().to_string(),
            None => {
                let mut buf = String::new();
                stdin.read_to_string(&mut buf)?;
                buf.trim().to_string()
            }
        };
        if address.is_empty() {
            return Err("no input provided".into());
        }

        let options = self.options();
        let output = match self.format {
            Format::Svg => blo::svg(&address, &options)?,
            Format::Uri => blo::data_uri(&address, &options)?,
            Format::Json => {
                let icon = blo::bitmap_and_palette(&address, &options)?;
                serde_json::to_string_pretty(&icon)?
            }
            Format::Term => {
                let icon = blo::bitmap_and_palette(&address, &options)?;
                format!("{}\n\n{}", blo::term::render_term(&icon, TERM_SQUARE_WIDTH), address)
            }
        };
        Ok(output)
    }
}
