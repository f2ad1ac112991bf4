// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use clap::Parser;
use env_logger::Env;

mod cli;
use cli::Cli;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = cli::run(cli, &mut out) {
        let _ = out.flush();
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}
