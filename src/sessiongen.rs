use rdbgview::{DemoSessionReader, SessionWriter};
use anyhow::{bail, Context, Result};
use std::env;

struct Config {
    seed: u64,
    output_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: 42,
            output_file: None,
        }
    }
}

fn parse_args() -> Result<Option<Config>> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-seed" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    bail!("-seed requires a value");
                };
                config.seed = value
                    .parse()
                    .with_context(|| format!("Invalid seed: {}", value))?;
            }
            "-o" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    bail!("-o requires a file name");
                };
                config.output_file = Some(value.clone());
            }
            "-h" | "-help" | "--help" => {
                print_help();
                return Ok(None);
            }
            other => {
                eprintln!("Warning: Unknown argument: {}", other);
            }
        }
        i += 1;
    }

    Ok(Some(config))
}

fn print_help() {
    println!("Debug Session Generator");
    println!("Usage: dbgview-sessiongen [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -seed <N>      Random seed (default: 42)");
    println!("  -o <FILE>      Output file; a name ending in .br is Brotli-compressed");
    println!("                 (default: print JSON to stdout)");
    println!("  -h, -help      Show this help");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let Some(config) = parse_args()? else {
        return Ok(());
    };

    let session = DemoSessionReader::with_seed(config.seed).generate();

    match config.output_file {
        Some(path) => {
            let mut writer = SessionWriter::new(&path)?;
            writer.write_session(&session)?;
            writer.finish()?;
            eprintln!(
                "Wrote {} frames, {} breakpoints and {} variables to {}",
                session.frames.len(),
                session.breakpoints.len(),
                session.variable_count(),
                path
            );
        }
        None => {
            println!("{}", serde_json::to_string_pretty(&session)?);
        }
    }

    Ok(())
}
