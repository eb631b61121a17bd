//! The `check` command: check one call site given on the command line.

use fsc_check::check;

use super::{descriptor_from_arg, Reporter};
use crate::CliConfig;

/// Check `format` against `descriptors`, reporting any failure.
///
/// Returns `true` if the call site passes.
pub fn check_call_site(format: &str, descriptors: &[String], config: &CliConfig) -> bool {
    let arguments: Vec<_> = descriptors
        .iter()
        .map(|arg| descriptor_from_arg(arg))
        .collect();

    let mut reporter = Reporter::new(config);
    reporter.set_source(format);

    let passed = match check(format, &arguments) {
        Ok(()) => {
            if !reporter.is_json() {
                println!("OK");
            }
            true
        }
        Err(err) => {
            reporter.report(&err.to_diagnostic());
            false
        }
    };

    reporter.finish(usize::from(!passed));
    passed
}
