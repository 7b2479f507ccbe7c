use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use spectral_notation::{Config, Result};

#[derive(Parser)]
#[command(name = "spectral")]
#[command(about = "Stellar spectral classification decoder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode classification strings and print one JSON document per input.
    Decode {
        /// Attach averaged reference properties.
        #[arg(long)]
        data: bool,

        #[arg(long)]
        pretty: bool,

        #[command(flatten)]
        config: Config,

        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Print the reference properties for one point.
    Lookup {
        #[arg(long)]
        letter: String,

        #[arg(long)]
        number: Option<f64>,

        #[arg(long, default_value = "")]
        luminosity: String,

        #[arg(long)]
        reference: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Decode {
            data,
            pretty,
            config,
            text,
        } => {
            let classifier = config.build_classifier()?;

            for input in &text {
                let result = classifier
                    .decode(input, data)
                    .with_context(|| format!("decode {:?}", input))?;

                match result.as_deref() {
                    None => eprintln!("WARN: cannot parse {:?}", input),
                    Some(c) if c.data.as_ref().is_some_and(|d| d.is_empty()) => {
                        eprintln!("WARN: no reference data for {:?}", input)
                    }
                    Some(_) => {}
                }

                let doc = serde_json::json!({
                    "input": input,
                    "result": result.as_deref(),
                });
                println!("{}", to_json(&doc, pretty)?);
            }
        }
        Commands::Lookup {
            letter,
            number,
            luminosity,
            reference,
        } => {
            let lookup = Config {
                reference,
                ..Config::default()
            }
            .load_lookup()?;

            match lookup.lookup(&letter, number, &luminosity) {
                Some(props) => println!("{}", to_json(props, true)?),
                None => eprintln!(
                    "WARN: no reference data for letter={} number={:?} luminosity={:?}",
                    letter, number, luminosity
                ),
            }
        }
    }

    Ok(())
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}
