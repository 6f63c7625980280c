use mongel_core::dataset::load_dataset;
use mongel_core::error::MongelError;
use std::collections::BTreeMap;
use std::path::Path;

pub fn run(file: &Path) -> Result<(), MongelError> {
    let ds = load_dataset(file)?;

    println!(
        "Dataset '{}' is valid.",
        ds.name.as_deref().unwrap_or("unnamed")
    );
    println!("  Attributes: {}", ds.attributes.len());
    for attr in &ds.attributes {
        println!("    {:<16} {}", attr.name, attr.kind);
    }
    println!("  Instances: {}", ds.len());

    let mut per_class: BTreeMap<usize, usize> = BTreeMap::new();
    for inst in &ds.instances {
        *per_class.entry(inst.output).or_default() += 1;
    }
    for (output, count) in &per_class {
        println!("    {:<16} {}", ds.class_name(*output), count);
    }

    // Check for potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    if ds.is_empty() {
        warnings.push("dataset has no instances; rules cannot be induced from it".to_string());
    }
    for (idx, name) in ds.classes.iter().enumerate() {
        if !per_class.contains_key(&idx) {
            warnings.push(format!("class '{}' has no instances", name));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
