use std::io::{BufRead, Write};

use zabbrev::{TextCostModel, ZCharCostModel, encoding::unit_savings};

use crate::{
    input_output::{OutputArgs, open_reader},
    logging::LogArgs,
};

/// Args for the cost command.
#[derive(clap::Args, Debug)]
pub struct CostArgs {
    /// Input file, one string per line; "-" reads stdin.
    #[arg(default_value = "-")]
    input: String,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl CostArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let model = ZCharCostModel::default();
        let mut writer = self.output.open_writer()?;
        for line in open_reader(&self.input)?.lines() {
            let line = line?;
            writeln!(
                writer,
                "{}\t{}\t{:?}",
                model.cost_in_units(&line),
                unit_savings(&model, &line),
                line
            )?;
        }
        writer.flush()?;

        Ok(())
    }
}
