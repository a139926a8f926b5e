mod generate;
mod list;

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;
use gwtgen_scan::{GWT_XML_SUFFIX, SearchFilter, module_name, scan};
use list::ListCommand;

#[derive(Parser)]
#[command(name = "gwtgen")]
#[command(version)]
#[command(about = "Generate an aggregate IDE.gwt.xml from GWT modules found on the classpath")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the search path and write the aggregate descriptor
    Generate(GenerateCommand),

    /// Print the GWT modules discovered on the search path
    List(ListCommand),
}

/// Scan flags shared by every subcommand.
#[derive(Args)]
pub(crate) struct SearchArgs {
    /// Classpath entry (directory or JAR) to scan; repeatable.
    /// Defaults to the CLASSPATH environment variable.
    #[arg(long = "search-path", value_name = "PATH")]
    pub search_path: Vec<PathBuf>,

    /// Package prefixes excluded from the scan
    #[arg(
        long = "exclude-packages",
        value_name = "PACKAGE",
        default_values_t = [
            "com.google".to_string(),
            "elemental".to_string(),
            "java.util".to_string(),
            "java.lang".to_string(),
        ]
    )]
    pub exclude_packages: Vec<String>,

    /// Package prefixes the scan is restricted to (empty matches all)
    #[arg(long = "include-packages", value_name = "PACKAGE")]
    pub include_packages: Vec<String>,
}

impl SearchArgs {
    /// Run the scan and normalize matches into dotted module names.
    pub fn discover_modules(&self) -> BTreeSet<String> {
        let filter = SearchFilter::new(
            self.include_packages.iter().cloned(),
            self.exclude_packages.iter().cloned(),
        );
        scan(&self.search_path, &filter, GWT_XML_SUFFIX)
            .iter()
            .map(|resource| module_name(resource, GWT_XML_SUFFIX))
            .collect()
    }
}
