mod cost;
mod find;

/// Subcommands for zabbrev
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Find abbreviations for a set of strings.
    Find(find::FindArgs),

    /// Print the z-char cost of each string.
    Cost(cost::CostArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Find(cmd) => cmd.run(),
            Commands::Cost(cmd) => cmd.run(),
        }
    }
}
