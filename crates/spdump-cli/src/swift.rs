//! Invocation of `swift package dump-package`

use crate::errors::CliError;
use spdump_logger as logger;
use std::path::Path;
use std::process::Command;

/// Arguments passed to the swift executable for a package directory
pub fn dump_package_args(package_dir: &Path) -> Vec<String> {
    vec![
        "package".to_string(),
        "--package-path".to_string(),
        package_dir.display().to_string(),
        "dump-package".to_string(),
    ]
}

/// Run `swift package dump-package` and return its stdout
pub fn dump_package(swift: &Path, package_dir: &Path) -> Result<Vec<u8>, CliError> {
    let args = dump_package_args(package_dir);
    logger::debug(&format!("Running: {} {}", swift.display(), args.join(" ")));

    logger::spinner_start(&format!("Dumping package at {}", package_dir.display()));
    let output = match Command::new(swift).args(&args).output() {
        Ok(output) => output,
        Err(e) => {
            logger::spinner_error("Failed to launch swift");
            return Err(e.into());
        }
    };
    logger::capture_output("swift package dump-package", &output);

    if !output.status.success() {
        logger::spinner_error("swift package dump-package failed");
        return Err(CliError::SwiftFailed {
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    logger::spinner_stop();
    Ok(output.stdout)
}
