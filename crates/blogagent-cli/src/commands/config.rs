use anyhow::Result;

use blogagent_client::{config, Config};

/// Create the config file with commented defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let path = config::config_file_path();

    if created {
        println!("Created config file: {}", path.display());
    } else {
        println!("Config file already exists: {}", path.display());
    }

    Ok(())
}

/// Show the current effective configuration.
pub fn show_config() -> Result<()> {
    let config = Config::load()?;

    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config::config_file_path().display());

    let exists = config::config_file_path().exists();
    println!(
        "File exists: {}\n",
        if exists { "yes" } else { "no (using defaults)" }
    );

    println!("Settings:");
    println!("  endpoint:     {}", config.endpoint);
    println!("  timeout_secs: {}", config.timeout_secs);
    println!("  demo_mode:    {}", config.demo_mode);
    println!("  log_level:    {}", config.log_level);

    println!("\nPriority: CLI args > ENV vars (BLOG_*) > Config file > Defaults");

    Ok(())
}
