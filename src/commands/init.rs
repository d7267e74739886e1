use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::Path;

pub fn init_config(force: bool) -> Result<()> {
    init_config_at(Path::new("."), force)
}

pub fn init_config_at(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Gradebook Configuration

[display]
# Color mode for shell status lines: auto, always, never
color = "auto"

# Seed records loaded at session start. Remove or edit freely; entries with
# an empty name or a score outside 0-100 are skipped.

[[seed]]
name = "Ava"
score = 91.5

[[seed]]
name = "Noah"
score = 73.0

[[seed]]
name = "Mia"
score = 88.25

[[seed]]
name = "Liam"
score = 95.0

[[seed]]
name = "Emma"
score = 82.0
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");

    Ok(())
}
