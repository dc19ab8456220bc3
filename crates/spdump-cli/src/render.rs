//! Rendering of decoded manifests

use crate::common::OutputFormat;
use crate::errors::CliError;
use spdump_manifest::{Manifest, TargetDependency};
use std::fmt::Write;

pub fn render(manifest: &Manifest, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(render_text(manifest)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(manifest)?),
    }
}

/// One line describing a dependency reference
pub fn describe_dependency(dependency: &TargetDependency) -> String {
    match dependency {
        TargetDependency::Product(product) => format!(
            "{:<8} {} (key: {})",
            "product",
            product.product_name,
            product.uniq_key()
        ),
        TargetDependency::ByName(by_name) => format!("{:<8} {}", "byName", by_name.name),
        TargetDependency::Target(target) => format!("{:<8} {}", "target", target.target_name),
        TargetDependency::Unspecified => "(unrecognized reference)".to_string(),
    }
}

pub fn render_text(manifest: &Manifest) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Package: {}", manifest.name);

    if manifest.platforms.is_empty() {
        let _ = writeln!(out, "Platforms: (none)");
    } else {
        let platforms: Vec<String> = manifest
            .platforms
            .iter()
            .map(|p| format!("{} {}", p.platform_name, p.version))
            .collect();
        let _ = writeln!(out, "Platforms: {}", platforms.join(", "));
    }

    let _ = writeln!(out, "Products ({}):", manifest.products.len());
    for product in &manifest.products {
        let _ = writeln!(
            out,
            "  {} ({}) -> {}",
            product.name,
            product.kind().unwrap_or("unknown"),
            product.targets.join(", ")
        );
    }

    let _ = writeln!(out, "Targets: {}", manifest.targets.len());

    let _ = writeln!(out, "Dependencies ({}):", manifest.dependencies.len());
    for dependency in &manifest.dependencies {
        let _ = writeln!(out, "  {}", describe_dependency(dependency));
    }

    out
}
