// src/cli/commands.rs
use clap::Subcommand;

use crate::models::PasswordGenerationOptions;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate(GenerateArgs),

    /// Rate an existing password against the selected character classes
    Classify {
        /// Password to rate
        #[arg(required = true)]
        password: String,

        #[command(flatten)]
        classes: ClassFlags,
    },

    /// Adjust options and regenerate interactively
    Interactive {
        /// Starting password length
        #[arg(short, long, value_parser = clap::value_parser!(u16).range(8..=30))]
        length: Option<u16>,

        #[command(flatten)]
        classes: ClassFlags,
    },
}

#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Password length
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(8..=30))]
    pub length: Option<u16>,

    /// Number of passwords to generate
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=100))]
    pub count: u16,

    /// Copy the (last) generated password to the clipboard
    #[arg(short, long)]
    pub copy: bool,

    #[command(flatten)]
    pub classes: ClassFlags,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            length: None,
            count: 1,
            copy: false,
            classes: ClassFlags::default(),
        }
    }
}

/// Character class switches. Each `--x`/`--no-x` pair overrides the
/// configured default, and the last one given wins.
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassFlags {
    /// Include uppercase letters
    #[arg(long, overrides_with = "no_uppercase")]
    pub uppercase: bool,

    /// Leave out uppercase letters
    #[arg(long, overrides_with = "uppercase")]
    pub no_uppercase: bool,

    /// Include lowercase letters
    #[arg(long, overrides_with = "no_lowercase")]
    pub lowercase: bool,

    /// Leave out lowercase letters
    #[arg(long, overrides_with = "lowercase")]
    pub no_lowercase: bool,

    /// Include numbers
    #[arg(long, overrides_with = "no_numbers")]
    pub numbers: bool,

    /// Leave out numbers
    #[arg(long, overrides_with = "numbers")]
    pub no_numbers: bool,

    /// Include special characters
    #[arg(long, overrides_with = "no_symbols")]
    pub symbols: bool,

    /// Leave out special characters
    #[arg(long, overrides_with = "symbols")]
    pub no_symbols: bool,
}

impl ClassFlags {
    pub fn apply(&self, options: &mut PasswordGenerationOptions) {
        fn pick(on: bool, off: bool, current: bool) -> bool {
            if on {
                true
            } else if off {
                false
            } else {
                current
            }
        }

        options.include_uppercase = pick(self.uppercase, self.no_uppercase, options.include_uppercase);
        options.include_lowercase = pick(self.lowercase, self.no_lowercase, options.include_lowercase);
        options.include_numbers = pick(self.numbers, self.no_numbers, options.include_numbers);
        options.include_symbols = pick(self.symbols, self.no_symbols, options.include_symbols);
    }
}

/// Resolve the generation options from configured defaults plus flags.
pub fn resolve_options(
    defaults: PasswordGenerationOptions,
    length: Option<u16>,
    classes: &ClassFlags,
) -> PasswordGenerationOptions {
    let mut options = defaults;
    if let Some(length) = length {
        options.length = usize::from(length);
    }
    classes.apply(&mut options);
    options
}
