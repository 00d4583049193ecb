// src/cli.rs

use clap::Parser;

/// Scrape Vultr and Linode pricing tables.
///
/// With no flags the pages are still fetched and parsed but nothing is
/// emitted. Useful as a smoke test that the structural contracts hold.
#[derive(Debug, Parser)]
#[command(name = "vps_scrape", version)]
pub struct Args {
    /// Render listings to stdout as an aligned table
    #[arg(long)]
    pub print: bool,

    /// Write listings to machines.json (overwrites)
    #[arg(long = "save_json")]
    pub save_json: bool,

    /// Write listings to machines.csv (overwrites)
    #[arg(long = "save_csv")]
    pub save_csv: bool,
}

/// Requested sinks, resolved once at startup. The pipeline takes this
/// and never looks back at raw argument state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmitOptions {
    pub console: bool,
    pub json: bool,
    pub csv: bool,
}

impl Args {
    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            console: self.print,
            json: self.save_json,
            csv: self.save_csv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_order_independent_and_combinable() {
        let args = Args::try_parse_from(["vps_scrape", "--save_csv", "--print"]).unwrap();
        let emit = args.emit_options();
        assert_eq!(
            emit,
            EmitOptions {
                console: true,
                json: false,
                csv: true
            }
        );
    }

    #[test]
    fn no_flags_means_no_sinks() {
        let args = Args::try_parse_from(["vps_scrape"]).unwrap();
        assert_eq!(args.emit_options(), EmitOptions::default());
    }

    #[test]
    fn flag_names_keep_their_underscores() {
        // The original flags are --save_json / --save_csv, not kebab-case.
        assert!(Args::try_parse_from(["vps_scrape", "--save-json"]).is_err());
        assert!(Args::try_parse_from(["vps_scrape", "--save_json"]).is_ok());
    }
}
