use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

use numbox::operations;
use numbox_cli::input;
use numbox_cli::runner::{self, RunnerConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("NUMBOX_LOG", "error,numbox=info"),
    )
    .init();

    let matches = Command::new("numbox")
        .version(clap::crate_version!())
        .about("\u{1F9F0} Numbox CLI - Array statistics, matrix math, and random matrices")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("stats")
                .about("Compute mean, median, and standard deviation of a numeric file")
                .arg(
                    Arg::new("input")
                        .help("Path to a .csv or .tsv file of numbers")
                        .required(true)
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("matmul")
                .about("Multiply two matrices read from CSV/TSV files")
                .arg(
                    Arg::new("left")
                        .help("Path to the left matrix (.csv or .tsv, one row per record)")
                        .required(true)
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("right")
                        .help("Path to the right matrix (.csv or .tsv, one row per record)")
                        .required(true)
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output")
                        .help("Write the product to this file instead of stdout")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("random")
                .about("Generate a matrix of uniform random values in [0,1)")
                .arg(
                    Arg::new("rows")
                        .help("Number of rows")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("cols")
                        .help("Number of columns")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .help("Seed a deterministic generator instead of thread-local entropy")
                        .value_parser(clap::value_parser!(u64))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output")
                        .help("Write the matrix to this file instead of stdout")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("run")
                .about("Compile an external source file and run the produced binary")
                .arg(
                    Arg::new("source")
                        .help("Path to the source file to compile")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("compiler")
                        .long("compiler")
                        .help("Compiler executable. Overrides the config file (default: g++).")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::CommandName),
                )
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output")
                        .help("Path for the compiled binary. Overrides the config file.")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .help("Path to a runner JSON configuration file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some(("stats", sub_m)) => handle_stats(sub_m),
        Some(("matmul", sub_m)) => handle_matmul(sub_m),
        Some(("random", sub_m)) => handle_random(sub_m),
        Some(("run", sub_m)) => handle_run(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_stats(matches: &ArgMatches) -> Result<()> {
    let input_path: &String = matches.get_one("input").unwrap();
    input::validate_csv_or_tsv_file(input_path)?;

    log::info!("[Numbox::Stats] Reading values from {}", input_path);
    let values = input::read_numeric_file(input_path)?;
    let stats = numbox::array_statistics(&values)?;

    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

fn handle_matmul(matches: &ArgMatches) -> Result<()> {
    let left_path: &String = matches.get_one("left").unwrap();
    let right_path: &String = matches.get_one("right").unwrap();
    input::validate_csv_or_tsv_file(left_path)?;
    input::validate_csv_or_tsv_file(right_path)?;

    let left = input::read_matrix_file(left_path)?;
    let right = input::read_matrix_file(right_path)?;
    log::info!(
        "[Numbox::Matmul] Multiplying {}x{} by {}x{}",
        left.nrows(),
        left.ncols(),
        right.nrows(),
        right.ncols()
    );

    let product = numbox::matrix_multiplication(&left, &right)?;
    write_matrix_result(matches, &product)
}

fn handle_random(matches: &ArgMatches) -> Result<()> {
    let rows = *matches.get_one::<usize>("rows").unwrap();
    let cols = *matches.get_one::<usize>("cols").unwrap();

    let matrix = match matches.get_one::<u64>("seed") {
        Some(&seed) => {
            log::info!("[Numbox::Random] Generating {}x{} matrix with seed {}", rows, cols, seed);
            let mut rng = StdRng::seed_from_u64(seed);
            operations::create_random_matrix_with(rows, cols, &mut rng)?
        }
        None => {
            log::info!("[Numbox::Random] Generating {}x{} matrix", rows, cols);
            operations::create_random_matrix(rows, cols)?
        }
    };
    write_matrix_result(matches, &matrix)
}

fn handle_run(matches: &ArgMatches) -> Result<()> {
    let source: &PathBuf = matches.get_one("source").unwrap();

    let mut config = if let Some(config_path) = matches.get_one::<PathBuf>("config") {
        runner::load_runner_config(config_path)?
    } else {
        RunnerConfig::default()
    };
    if let Some(compiler) = matches.get_one::<String>("compiler") {
        config.compiler = compiler.clone();
    }
    if let Some(output) = matches.get_one::<PathBuf>("output_file") {
        config.output = output.clone();
    }

    log::info!(
        "[Numbox::Run] Compiling {} with '{}'",
        source.display(),
        config.compiler
    );
    let captured = runner::compile_and_run(source, &config)?;
    print!("{}", captured);
    Ok(())
}

fn write_matrix_result(matches: &ArgMatches, matrix: &ndarray::Array2<f64>) -> Result<()> {
    match matches.get_one::<PathBuf>("output_file") {
        Some(path) => {
            input::write_matrix_file(path, matrix)?;
            log::info!(
                "[Numbox::Output] Wrote {}x{} matrix to {}",
                matrix.nrows(),
                matrix.ncols(),
                path.display()
            );
            Ok(())
        }
        None => input::write_matrix(std::io::stdout().lock(), matrix),
    }
}
