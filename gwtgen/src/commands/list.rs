use clap::Args;
use eyre::Result;

use super::SearchArgs;

#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    search: SearchArgs,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let modules = self.search.discover_modules();
        if modules.is_empty() {
            println!("No gwt modules found");
        } else {
            for module in &modules {
                println!("{module}");
            }
        }
        Ok(())
    }
}
