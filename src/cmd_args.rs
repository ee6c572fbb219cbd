use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Pincode to look up
    /// Optional. When given, the lookup runs once and the result is printed.
    /// When omitted, the interactive screen starts (or codes are read from
    /// stdin if it is not a terminal).
    #[clap(help = "6-digit pincode to look up once")]
    pincode: Option<String>,

    /// Profile name
    /// Optional. Profile to read from the profile file. Default is 'default'.
    /// If the profile is not configured, the public directory is used.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    /// JSON output
    /// Optional. Print matching post offices as a JSON array instead of cards.
    #[clap(long, help = "Print results as JSON", default_value = "false")]
    json: bool,

    /// Verbose mode
    /// Optional. Print verbose messages.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    pincode: Option<String>,
    profile: String,
    json: bool,
    verbose: bool,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    fn from_clap(args: ClapArgs) -> Self {
        Self {
            pincode: args.pincode,
            profile: args.profile,
            json: args.json,
            verbose: args.verbose,
        }
    }

    pub fn pincode(&self) -> Option<&str> {
        self.pincode.as_deref()
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn json(&self) -> bool {
        self.json
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
