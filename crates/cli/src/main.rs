#![warn(clippy::pedantic)]

use std::{env, io};

use fitrack::{Settings, logger, settings::LOG_LEVEL_VAR};

fn main() -> anyhow::Result<()> {
    let settings = Settings::new(env::args().skip(1), env::var(LOG_LEVEL_VAR).ok().as_deref())?;
    logger::init(settings.log_level)?;
    fitrack::run(&settings, &mut io::stdout().lock())
}
