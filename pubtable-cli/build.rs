use clap::{Arg, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the argument surface in src/main.rs
// Build scripts can't access src/ modules, so the definition is repeated here
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("pubtable")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render a BibTeX bibliography as an HTML publication table")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Bibliography file to read")
                .required(true)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .help("File to write the HTML table to")
                .required(true)
                .index(2)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verify-name")
                .long("verify-name")
                .value_name("NAME")
                .help("Full name of a tracked author to check every entry against")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a pubtable.toml configuration file")
                .value_hint(ValueHint::FilePath),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "pubtable", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "pubtable", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "pubtable", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
