use clap::Parser;
use std::path::PathBuf;

use crate::actions::{Config, DEFAULT_BACKUP_EXT, DEFAULT_MAX_SEARCH};
use crate::error::{Error, Result};

#[derive(Parser, Debug)]
#[command(name = "ziptrim")]
#[command(version)]
#[command(about = "Detect and clean up garbage at the end of a ZIP archive", long_about = None)]
#[command(after_help = "Output of -s is: zip_size garbage_size file_size file_name\n\n\
Examples:\n  \
  ziptrim download.zip               show sizes if download.zip has trailing garbage\n  \
  ziptrim -c download.zip clean/     copy the ZIP data to clean/download.zip\n  \
  ziptrim -t -k orig download.zip    truncate in place, keeping download.zip.orig")]
pub struct Cli {
    /// ZIP file to inspect
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Copy destination file or directory
    #[arg(value_name = "DEST")]
    pub dest: Option<PathBuf>,

    /// Show ZIP size, garbage size and file size in bytes (default action)
    #[arg(short = 's', long = "show")]
    pub show: bool,

    /// Copy the ZIP portion to DEST
    #[arg(short = 'c', long = "copy")]
    pub copy: bool,

    /// Truncate the file in place, after making a backup
    #[arg(short = 't', long = "truncate")]
    pub truncate: bool,

    /// Act even if there is no garbage; overwrite existing destinations
    #[arg(short = 'f', long = "force")]
    pub force: bool,

    /// Extension of the backup file made before truncation
    #[arg(short = 'k', long = "backup-ext", value_name = "EXT", default_value = DEFAULT_BACKUP_EXT)]
    pub backup_ext: String,

    /// Do not make a backup file before truncation
    #[arg(long = "nobackup")]
    pub no_backup: bool,

    /// Maximum garbage size searched for the end of the ZIP data
    #[arg(long = "maxtruncate", value_name = "BYTES", default_value_t = DEFAULT_MAX_SEARCH)]
    pub max_truncate: u64,

    /// Log progress to stderr (-vv => debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Action selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Report { file: PathBuf },
    Copy { src: PathBuf, dst: PathBuf },
    Truncate { file: PathBuf },
}

impl Cli {
    /// Validate the action flags and positional arguments.
    pub fn action(&self) -> Result<Action> {
        let Some(file) = self.file.clone() else {
            return Err(Error::Usage(
                "Filename not given. (use --help for guide)".to_string(),
            ));
        };

        let selected = [self.show, self.copy, self.truncate]
            .iter()
            .filter(|&&on| on)
            .count();
        if selected > 1 {
            return Err(Error::Usage(
                "-s, -c and -t are mutually exclusive; must specify one".to_string(),
            ));
        }

        if self.copy {
            let Some(dst) = self.dest.clone() else {
                return Err(Error::Usage("copy destination not specified".to_string()));
            };
            Ok(Action::Copy { src: file, dst })
        } else if self.truncate {
            Ok(Action::Truncate { file })
        } else {
            Ok(Action::Report { file })
        }
    }

    pub fn config(&self) -> Config {
        Config {
            force: self.force,
            backup: !self.no_backup,
            backup_ext: self.backup_ext.clone(),
            max_search: self.max_truncate,
        }
    }

    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
