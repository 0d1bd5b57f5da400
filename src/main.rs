mod inspector;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::io::Write;
use std::path::PathBuf;

use inspector::{CxxFilt, LibrarySet, Nm};

#[derive(Parser, Debug)]
#[command(name = "sodeps")]
#[command(about = "Infer dependencies between shared libraries from their symbol tables")]
#[command(version)]
struct Args {
    /// Shared libraries to compare
    #[arg(required = true, allow_hyphen_values = true)]
    libraries: Vec<PathBuf>,

    /// Symbol table dumper
    #[arg(long, default_value = "nm")]
    nm: String,

    /// Symbol name demangler
    #[arg(long, default_value = "c++filt")]
    demangler: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let dumper = Nm::new(args.nm);
    let demangler = CxxFilt::new(args.demangler);

    let libraries = LibrarySet::inspect(&args.libraries, &dumper, &demangler)?;
    info!("inspected {} libraries", libraries.len());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    libraries
        .write_edges(&mut out)
        .and_then(|()| out.flush())
        .context("Failed to write dependency edges")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_prefixed_paths_are_libraries() {
        let args = Args::try_parse_from(["sodeps", "-odd.so", "libb.so"]).unwrap();
        assert_eq!(
            args.libraries,
            vec![PathBuf::from("-odd.so"), PathBuf::from("libb.so")]
        );
        assert_eq!(args.nm, "nm");
        assert_eq!(args.demangler, "c++filt");
    }

    #[test]
    fn tool_options_still_parse() {
        let args =
            Args::try_parse_from(["sodeps", "--nm", "llvm-nm", "liba.so", "--", "--odd.so"])
                .unwrap();
        assert_eq!(args.nm, "llvm-nm");
        assert_eq!(
            args.libraries,
            vec![PathBuf::from("liba.so"), PathBuf::from("--odd.so")]
        );
    }

    #[test]
    fn at_least_one_library_is_required() {
        assert!(Args::try_parse_from(["sodeps"]).is_err());
    }
}
