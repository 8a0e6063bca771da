use std::path::{Path, PathBuf};

use structopt::StructOpt;

use grib2json::Source;

#[macro_use]
extern crate log;

#[derive(Debug, StructOpt)]
struct Cli {
    /// URL or local path of the raw GRIB2 file
    input: String,

    /// write the JSON here instead of stdout
    #[structopt(long = "output", short = "o")]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    std::env::var("RUST_LOG")
        .map_err(|_| {
            std::env::set_var("RUST_LOG", "error,grib2json=info");
        })
        .unwrap_or_default();
    env_logger::init();

    let args = Cli::from_args();

    let source = if Path::new(&args.input).exists() {
        Source::Bytes(std::fs::read(&args.input)?)
    } else {
        Source::Url(args.input.clone())
    };

    let json = grib2json::grib2json(source).await?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, json)?;
            info!("Wrote {:?}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
