use crate::greeting::DEFAULT_NAME;
use clap::Parser;
use std::ffi::{OsStr, OsString};
use std::iter;

/// Supplies the inputs the entry point needs.
pub trait ConfigProvider {
    fn name(&self) -> &OsStr;
}

/// Command line for `greet-app [name]`.
///
/// The name is taken verbatim: no flags are recognised, so values such as
/// `-v`, `--help` or `--` are greeted like any other text.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "greet-app")]
#[command(about = "Prints a BuildStream welcome line")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CliConfig {
    #[arg(allow_hyphen_values = true)]
    pub name: Option<OsString>,

    // Only the first argument is used.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub ignored: Vec<OsString>,
}

impl CliConfig {
    pub fn with_name(name: impl Into<OsString>) -> Self {
        Self {
            name: Some(name.into()),
            ignored: Vec::new(),
        }
    }

    /// Parses the process arguments without treating any of them as options.
    pub fn parse_verbatim() -> Self {
        Self::parse_verbatim_from(std::env::args_os())
    }

    /// Like [`CliConfig::parse_verbatim`], where the first item is the binary name.
    ///
    /// An end-of-options marker is placed ahead of the user's arguments, so
    /// clap reads every one of them (a literal `--` included) as a value.
    pub fn parse_verbatim_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let bin = args.next().unwrap_or_else(|| OsString::from("greet-app"));
        Self::parse_from(
            iter::once(bin)
                .chain(iter::once(OsString::from("--")))
                .chain(args),
        )
    }
}

impl ConfigProvider for CliConfig {
    fn name(&self) -> &OsStr {
        match &self.name {
            Some(name) => name,
            None => OsStr::new(DEFAULT_NAME),
        }
    }
}
