mod root;

use std::path::PathBuf;
use std::sync::Arc;

use log::{info, warn};

use atrium_core::config::{profile, AppConfig, RuntimeProfile};
use atrium_core::kernel::constants;
use atrium_core::{MountOptions, Shell};

use home_screen::HomeModule;
use root::RootModule;
use shared_ui::SharedCommonModule;

/// Configuration file from the environment, falling back to the default
/// name next to the binary. No command-line flags exist.
fn config_path() -> PathBuf {
    std::env::var_os(constants::CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_CONFIG_FILE))
}

fn load_config() -> AppConfig {
    let path = config_path();
    if !path.exists() {
        info!("no config file at '{}', using defaults", path.display());
        return AppConfig::default();
    }
    match AppConfig::load(&path) {
        Ok(config) => {
            info!("loaded configuration from '{}'", path.display());
            config
        }
        Err(e) => {
            warn!("ignoring unreadable config '{}': {}", path.display(), e);
            AppConfig::default()
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();
    println!("{} v{}", constants::APP_NAME, constants::APP_VERSION);

    // Production behavior is pinned before anything else runs
    profile::activate(RuntimeProfile::Production);

    let config = load_config();

    println!("Initializing application...");
    let shell = match Shell::new(config) {
        Ok(shell) => shell,
        Err(e) => {
            eprintln!("Failed to initialize shell: {}", e);
            return;
        }
    };

    // --- Statically Register Application Modules ---
    println!("Registering application modules...");
    let modules: [(&str, Arc<dyn atrium_core::AppModule>); 3] = [
        ("shared-common", Arc::new(SharedCommonModule)),
        ("home", Arc::new(HomeModule)),
        ("root", Arc::new(RootModule)),
    ];
    for (name, module) in modules {
        if let Err(e) = shell.register_module(module).await {
            eprintln!("Fatal: Failed to register module '{}': {}", name, e);
            return;
        }
        println!("  - Registered: {}", name);
    }
    // --- End Module Registration ---

    let options = MountOptions {
        preserve_whitespace: true,
        initial_path: None,
    };

    match shell.mount("root", options).await {
        Ok(app) => {
            println!("Application mounted.");
            if let Err(e) = app.unmount().await {
                eprintln!("Error while unmounting: {}", e);
            }
            println!("Shutting down application...");
        }
        Err(_) => {
            // The mount failure was already logged with its detail. The
            // process stays up, unmounted; nothing retries.
            println!("Application is running unmounted; see the log for details.");
        }
    }
}
