//! Copies the config template to the user's local data directory so a
//! freshly built binary has an example next to where it looks for state.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=spoticli.ini.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let template_path = manifest_dir.join("spoticli.ini.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spoticli");
    fs::create_dir_all(&out_dir)?;

    // Only copy if the source exists; otherwise warn instead of failing
    if template_path.is_file() {
        let contents = fs::read_to_string(&template_path)?;
        fs::write(out_dir.join("spoticli.ini.example"), contents)?;
    } else {
        println!(
            "cargo:warning=spoticli.ini.example not found at {}",
            template_path.display()
        );
    }

    Ok(())
}
