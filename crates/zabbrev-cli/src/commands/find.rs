use std::{
    io::{BufRead, Write},
    num::NonZeroUsize,
    path::Path,
};

use zabbrev::{
    AbbrevFinder,
    AbbrevFinderOptions,
    ZCharCostModel,
    listing::{MAX_ABBREVIATIONS, write_frequent_words},
};

use crate::{
    input_output::{OutputArgs, open_reader},
    logging::LogArgs,
};

/// Args for the find command.
#[derive(clap::Args, Debug)]
pub struct FindArgs {
    /// Input files, one string per line; "-" reads stdin.
    #[arg(default_value = "-")]
    files: Vec<String>,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Max abbreviations to select; also the `WORDS::` table size.
    #[arg(
        long,
        default_value_t = MAX_ABBREVIATIONS,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new()
            .range(0..=MAX_ABBREVIATIONS as u64),
    )]
    max: usize,

    /// Max scoring threads.
    #[arg(long)]
    threads: Option<NonZeroUsize>,

    #[command(flatten)]
    output: OutputArgs,
}

impl FindArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let mut finder = AbbrevFinderOptions::default()
            .with_max_pool(self.threads)
            .init(ZCharCostModel::default());

        log::info!("Reading strings:");
        for (idx, path) in self.files.iter().enumerate() {
            log::info!("{idx}: {path}");
            self.read_strings(&mut finder, path)?;
        }

        let source_name = self
            .files
            .first()
            .and_then(|p| Path::new(p).file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "-".to_string());

        let mut writer = self.output.open_writer()?;
        let summary = write_frequent_words(
            &mut writer,
            &source_name,
            finder.get_results(self.max),
            self.max,
        )?;
        writer.flush()?;

        log::info!(
            "Abbrevs would save {} z-chars total (~{} bytes)",
            summary.total_savings,
            summary.approx_bytes()
        );

        Ok(())
    }

    fn read_strings(
        &self,
        finder: &mut AbbrevFinder,
        path: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let reader = open_reader(path)?;
        for line in reader.lines() {
            finder.add_text(&line?);
        }
        Ok(())
    }
}
