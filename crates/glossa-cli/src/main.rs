// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod logging;
mod report;

use anyhow::{Context, Result, anyhow, bail};
use config::Config;
use glossa_app::{ChaChaSource, Collection, Controller, Intent, SortField};
use report::ListOptions;
use std::env;
use std::path::PathBuf;
use tracing::info;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `glossa --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;

    let log_path = config.log_path()?;
    logging::init(&log_path, config.log_level()).with_context(|| {
        format!(
            "start logging to {} -- set [log].file or GLOSSA_LOG_PATH to a writable path",
            log_path.display()
        )
    })?;

    let seed = options.seed.or(config.seed());
    info!(
        config = %options.config_path.display(),
        log = %log_path.display(),
        seed = ?seed,
        "configuration loaded"
    );

    let source = match seed {
        Some(seed) => ChaChaSource::seeded(seed),
        None => ChaChaSource::from_entropy().map_err(|error| {
            anyhow!("seed random source from OS entropy: {error}; pass --seed <n> instead")
        })?,
    };
    let collection = Collection::builtin();
    info!(terms = collection.len(), "loaded built-in glossary");
    let mut controller = Controller::new(collection, source);

    if options.check_only {
        return Ok(());
    }

    if options.print_random {
        controller.dispatch(Intent::DrawRandom);
        controller.dispatch(Intent::RevealDefinition);
        println!("{}", report::render_random(&controller.random_view()));
        return Ok(());
    }

    if options.print_list {
        report::apply_list_options(&mut controller, &options.list);
        println!("{}", report::render_page(&controller.page_view()));
        return Ok(());
    }

    glossa_tui::run_app(&mut controller)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    print_config_path: bool,
    print_example: bool,
    check_only: bool,
    show_help: bool,
    seed: Option<u64>,
    print_list: bool,
    print_random: bool,
    list: ListOptions,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        print_config_path: false,
        print_example: false,
        check_only: false,
        show_help: false,
        seed: None,
        print_list: false,
        print_random: false,
        list: ListOptions::default(),
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--seed" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--seed requires a non-negative integer"))?;
                let seed = value.as_ref().parse::<u64>().with_context(|| {
                    format!("invalid --seed {:?}; use a non-negative integer", value.as_ref())
                })?;
                options.seed = Some(seed);
            }
            "--list" => {
                options.print_list = true;
            }
            "--random" => {
                options.print_random = true;
            }
            "--filter" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--filter requires search text"))?;
                options.list.filter = Some(value.as_ref().to_owned());
            }
            "--sort" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--sort requires a column (name or description)"))?;
                let field = SortField::parse(value.as_ref()).ok_or_else(|| {
                    anyhow!(
                        "unknown sort column {:?}; use name or description",
                        value.as_ref()
                    )
                })?;
                options.list.sorts.push(field);
            }
            "--page" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--page requires a page number"))?;
                let page = value.as_ref().parse::<usize>().ok().filter(|page| *page >= 1);
                let Some(page) = page else {
                    bail!("invalid --page {:?}; pages start at 1", value.as_ref());
                };
                options.list.page = Some(page);
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    if !options.print_list && options.list != ListOptions::default() {
        bail!("--filter, --sort and --page only apply to --list");
    }
    if options.print_list && options.print_random {
        bail!("--list and --random cannot be combined; pick one");
    }

    Ok(options)
}

fn print_help() {
    println!("glossa");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a config template");
    println!("  --check                  Validate config, logging and seed data");
    println!("  --seed <n>               Draw random terms from a fixed seed");
    println!("  --list                   Print one page of terms and exit");
    println!("    --filter <text>        Only names containing <text> (case-insensitive)");
    println!("    --sort <column>        Sort by name or description; repeat to flip");
    println!("    --page <n>             Page to print (clamped to the last page)");
    println!("  --random                 Print a random term with its definition");
    println!("  --help                   Show this help");
}
