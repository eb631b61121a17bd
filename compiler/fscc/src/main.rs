//! Format String Checker CLI

use fscc::commands::{check_call_site, explain_error, run_batch_file};
use fscc::{init_tracing, CliConfig};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (config, positional) = match CliConfig::from_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };

    let Some(command) = positional.first() else {
        print_usage();
        return;
    };

    let passed = match command.as_str() {
        "check" => {
            let Some(format) = positional.get(1) else {
                eprintln!("Usage: fsc check <format> [descriptor...]");
                eprintln!("Example: fsc check '%s owes %.2f' java.lang.String D");
                std::process::exit(2);
            };
            check_call_site(format, &positional[2..], &config)
        }
        "batch" => {
            let Some(path) = positional.get(1) else {
                eprintln!("Usage: fsc batch <file|->");
                std::process::exit(2);
            };
            run_batch_file(path, &config)
        }
        "explain" | "--explain" => {
            let Some(code) = positional.get(1) else {
                eprintln!("Usage: fsc explain <ERROR_CODE>");
                eprintln!("Example: fsc explain E2001");
                std::process::exit(2);
            };
            explain_error(code)
        }
        "help" => {
            print_usage();
            true
        }
        "version" => {
            println!("fsc {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };

    if !passed {
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Format String Checker");
    println!();
    println!("Usage: fsc [options] <command> [args]");
    println!();
    println!("Commands:");
    println!("  check <format> [descriptor...]  Check one call site");
    println!("  batch <file|->                  Check one call site per line");
    println!("  explain <code>                  Explain an error code (e.g., E2001)");
    println!("  help                            Show this help message");
    println!("  version                         Show version information");
    println!();
    println!("Descriptors are JVM signatures (I, Ljava/lang/String;, [J) or");
    println!("source names (int, java.lang.String, long[]).");
    println!();
    println!("Batch lines are `<format>\\t<descriptor> <descriptor>...` and take the");
    println!("same descriptor forms; blank lines and lines starting with # are skipped.");
    println!();
    println!("Options:");
    println!("  --json                Emit diagnostics as JSON on stdout");
    println!("  --color=<mode>        Color output: auto, always, never");
    println!("  --no-parallel         Check batch entries on one thread");
    println!("  -v, --verbose         Also report passing batch lines");
    println!("  --                    Treat everything after as positional");
    println!();
    println!("Set FSC_LOG (or RUST_LOG) to enable tracing, e.g. FSC_LOG=fsc_check=debug.");
}
