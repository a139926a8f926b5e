use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use gwtgen_core::{
    DEFAULT_ENTRY_POINT, DEFAULT_GWT_XML_PATH, DEFAULT_STYLE_SHEET, GeneratorConfig,
};

use super::SearchArgs;

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    search: SearchArgs,

    /// Output root directory
    #[arg(long, default_value = ".")]
    pub root_dir: PathBuf,

    /// Descriptor path relative to the root directory
    #[arg(long, default_value = DEFAULT_GWT_XML_PATH)]
    pub gwt_file_name: PathBuf,

    /// Entry point class bound into the descriptor
    #[arg(long, default_value = DEFAULT_ENTRY_POINT)]
    pub entry_point: String,

    /// Stylesheet bound into the descriptor
    #[arg(long, default_value = DEFAULT_STYLE_SHEET)]
    pub style_sheet: String,

    /// Enable gwt.logging in the generated descriptor
    #[arg(long)]
    pub logging_enabled: bool,

    /// Print the rendered descriptor without writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        println!(" ------------------------------------------------------------------------ ");
        println!("Searching for GWT");
        println!(" ------------------------------------------------------------------------ ");

        let modules = self.search.discover_modules();
        println!("Found {} gwt modules", modules.len());

        let config = GeneratorConfig::new(modules, self.root_dir.clone())
            .with_gwt_file_name(self.gwt_file_name.clone())
            .with_entry_point(self.entry_point.clone())
            .with_style_sheet(self.style_sheet.clone())
            .with_logging_enabled(self.logging_enabled);

        if self.dry_run {
            print!("{}", gwtgen_core::render(&config)?);
            return Ok(());
        }

        let written = gwtgen_core::generate(&config)?;
        println!("Generated {}", written.display());
        Ok(())
    }
}
