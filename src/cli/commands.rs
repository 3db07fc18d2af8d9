//! CLI commands and argument parsing
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, their arguments, and command execution.

use clap::{Parser, Subcommand};

use crate::config::{AppConfig, EnvKey, EnvSnapshot};
use crate::error::Result;
use crate::utils::format::{format_raw, format_table, DisplayUtils, OutputFormat};

#[derive(Parser)]
#[command(name = "hdctl")]
#[command(about = "Configuration toolkit for the hyperdraft markdown note server")]
#[command(version, author)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the configuration in the current environment
    Check,
    /// Resolve and print the effective configuration
    Show,
    /// List the environment variables the server recognizes
    Env,
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Check => execute_check(self.no_color),
            Commands::Show => execute_show(self.format, self.no_color),
            Commands::Env => execute_env(self.no_color),
        }
    }
}

fn execute_check(no_color: bool) -> Result<()> {
    let config = AppConfig::from_process_env()?;

    let display = DisplayUtils::new(no_color);
    display.print_success(&format!("Configuration is valid for {}", config.domain))?;

    Ok(())
}

fn execute_show(format: OutputFormat, no_color: bool) -> Result<()> {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct ConfigItem {
        #[tabled(rename = "Setting")]
        key: String,
        #[tabled(rename = "Value")]
        value: String,
        #[tabled(rename = "Source")]
        source: String,
    }

    let snapshot = EnvSnapshot::from_process()?;
    let config = AppConfig::resolve(&snapshot)?;

    if format == OutputFormat::Json {
        let json_output = serde_json::to_string_pretty(&config)?;
        println!("{json_output}");
        return Ok(());
    }

    let source = |key: EnvKey| {
        if snapshot.is_set(key) { "env" } else { "default" }.to_string()
    };
    let items = vec![
        ConfigItem {
            key: "domain".to_string(),
            value: config.domain.clone(),
            source: "env".to_string(),
        },
        ConfigItem {
            key: "rendererBaseUrl".to_string(),
            value: config.renderer_base_url.clone(),
            source: if snapshot.is_set(EnvKey::RendererBaseUrl) {
                "env".to_string()
            } else {
                "HD_DOMAIN".to_string()
            },
        },
        ConfigItem {
            key: "port".to_string(),
            value: config.port.to_string(),
            source: source(EnvKey::Port),
        },
        ConfigItem {
            key: "loglevel".to_string(),
            value: config.loglevel.to_string(),
            source: source(EnvKey::Loglevel),
        },
        ConfigItem {
            key: "persistInterval".to_string(),
            value: config.persist_interval.to_string(),
            source: source(EnvKey::PersistInterval),
        },
    ];

    let table = Table::new(&items);
    let rendered = if format == OutputFormat::Raw {
        format_raw(table)
    } else {
        format_table(table, no_color)
    };
    println!("{rendered}");

    Ok(())
}

fn execute_env(no_color: bool) -> Result<()> {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct VariableItem {
        #[tabled(rename = "Variable")]
        name: &'static str,
        #[tabled(rename = "Required")]
        required: &'static str,
        #[tabled(rename = "Default")]
        default: &'static str,
        #[tabled(rename = "Description")]
        description: &'static str,
    }

    let items: Vec<VariableItem> = EnvKey::ALL
        .into_iter()
        .map(|key| VariableItem {
            name: key.as_str(),
            required: if key.is_required() { "yes" } else { "no" },
            default: key.default_hint(),
            description: key.description(),
        })
        .collect();

    let display = DisplayUtils::new(no_color);
    display.print_header("hyperdraft environment variables")?;
    println!("{}", format_table(Table::new(&items), no_color));

    Ok(())
}
