use wayfinder_api::NavigationOptions;
use wayfinder_core::PageManifest;

pub fn run(options: bool) -> anyhow::Result<()> {
    let schema = if options {
        schemars::schema_for!(NavigationOptions)
    } else {
        schemars::schema_for!(PageManifest)
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
