use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/meters.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    // Read catalog file
    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    // Parse and validate JSON
    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let meters = catalog.get("meters").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'meters' field\n\
             The catalog must have a top-level 'meters' array.\n"
        );
    });

    let meters = meters.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'meters' must be an array\n\
             Got: {meters}\n"
        );
    });

    for (i, meter) in meters.iter().enumerate() {
        validate_meter(meter, i);
    }

    println!("cargo:warning=Validated catalog: {} meters", meters.len());
}

fn validate_meter(meter: &serde_json::Value, index: usize) {
    let name = meter
        .get("name")
        .and_then(|v| v.as_str())
        .unwrap_or_else(|| {
            panic!("\n\nCATALOG BUILD ERROR: Meter at index {index} missing 'name' field\n")
        });

    // The pattern field is optional (entries without one are matched only by
    // built-in rules), but when present it must be well-formed: a non-empty
    // string over {L, G}, or an array of such strings.
    match meter.get("pattern") {
        None | Some(serde_json::Value::Null) => {}
        Some(serde_json::Value::String(s)) => validate_pattern_string(s, name),
        Some(serde_json::Value::Array(variants)) => {
            assert!(
                !variants.is_empty(),
                "\n\nCATALOG BUILD ERROR: Meter '{name}' has an empty pattern variant list\n"
            );
            for variant in variants {
                let s = variant.as_str().unwrap_or_else(|| {
                    panic!(
                        "\n\nCATALOG BUILD ERROR: Meter '{name}' has a non-string pattern variant\n"
                    )
                });
                validate_pattern_string(s, name);
            }
        }
        Some(other) => panic!(
            "\n\nCATALOG BUILD ERROR: Meter '{name}' has invalid 'pattern' type\n\
             Got: {other}\n\
             Expected: string, array of strings, or null.\n"
        ),
    }

    // Cross-check syllables_per_pada against the pattern length when both exist
    if let (Some(len), Some(serde_json::Value::String(pattern))) = (
        meter
            .get("syllables_per_pada")
            .and_then(serde_json::Value::as_u64),
        meter.get("pattern"),
    ) {
        assert!(
            pattern.chars().count() as u64 == len,
            "\n\nCATALOG BUILD ERROR: Meter '{name}' pattern length {} does not match syllables_per_pada {len}\n",
            pattern.chars().count()
        );
    }
}

fn validate_pattern_string(pattern: &str, name: &str) {
    assert!(
        !pattern.is_empty(),
        "\n\nCATALOG BUILD ERROR: Meter '{name}' has an empty pattern string\n"
    );
    assert!(
        pattern.chars().all(|c| c == 'L' || c == 'G'),
        "\n\nCATALOG BUILD ERROR: Meter '{name}' pattern contains symbols other than L/G\n\
         Pattern: {pattern}\n"
    );
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/meters.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
