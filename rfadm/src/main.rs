// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use anyhow::{Context, Result};
use clap::Parser;
use rfilter::{render, Format, RouteTable};
use slog::Drain;
use slog::Logger;
use std::io::Write;
use std::path::PathBuf;

/// Print the self-originated routes of a route table.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output rendering.
    #[arg(short, long, value_enum, default_value_t = Format::Debug)]
    format: Format,

    /// Read routes from a JSON file instead of the built-in table.
    #[arg(short, long)]
    routes: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log = init_logger();

    let mut table = match &cli.routes {
        Some(path) => RouteTable::new(
            rfilter::load(path)
                .with_context(|| format!("load routes {}", path.display()))?,
            log.clone(),
        ),
        None => RouteTable::literal(log.clone())?,
    };
    slog::debug!(log, "loaded route table"; "routes" => table.len());

    table.retain_self_originated();

    let out = render(table.routes(), cli.format)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{out}")?;
    Ok(())
}

fn init_logger() -> Logger {
    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_envlogger::new(drain).fuse();
    let drain = slog_async::Async::new(drain)
        .chan_size(0x2000)
        .build()
        .fuse();
    slog::Logger::root(drain, slog::o!())
}
