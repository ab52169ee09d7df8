use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use sweepcss_lib::{naming, optimize};

#[derive(Parser)]
#[command(name = "sweepcss")]
#[command(about = "Sort and deduplicate CSS/SCSS selectors and declarations")]
struct Args {
    /// Input CSS/SCSS file.
    input: String,

    /// Output file name. Defaults to the input file (in-place overwrite),
    /// unless the input name carries a `-tooptimize` marker.
    output: Option<String>,

    /// Fail on malformed input instead of dropping it silently.
    #[arg(long)]
    strict: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    // exit 1 on usage errors (clap's default is 2), exit 0 for --help
    let args = Args::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        if err.use_stderr() {
            std::process::exit(1);
        }
        std::process::exit(0);
    });

    let output = naming::derive_output_path(&args.input, args.output.as_deref());

    match optimize::run(Path::new(&args.input), Path::new(&output), args.strict) {
        Ok(()) => {
            println!("Saved: {output}");
            println!("CSS optimization completed.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error processing CSS: {err}");
            ExitCode::FAILURE
        }
    }
}
