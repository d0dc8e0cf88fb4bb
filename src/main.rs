use chlight::{
    logging,
    privilege,
    Args,
    Mode,
    Process,
};

use clap::Parser;
use anyhow::Result;
use anyhow::Context;

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init();

    privilege::drop_to_real(&Process).context("failed to drop setuid privileges")?;

    let options = args.options();
    log::debug!("options: {:?}", options);

    match args.mode()? {
        Mode::List => {
            print!("{}", chlight::list(&options)?);
        }
        Mode::Write { selector, value } => {
            print!("{}", chlight::change(&Process, &options, &selector, &value)?);
        }
    }

    Ok(())
}
