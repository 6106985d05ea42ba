// Fri Oct 16 2026 - Alex

use super::args::Args;
use crate::catalog::{self, CATALOG};
use crate::config::InspectorConfig;
use crate::structure::SerializableLayout;
use crate::Inspector;
use colored::Colorize;
use std::io::Write;

pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        self.setup_logging(&args);

        if args.no_color {
            colored::control::set_override(false);
        }

        if args.list {
            return self.handle_list();
        }

        args.validate().map_err(|e| anyhow::anyhow!(e))?;

        let config = match &args.config {
            Some(path) => InspectorConfig::load(path)?,
            None => InspectorConfig::default(),
        };
        let recursive = config.recursive && !args.flat;
        let inspector = Inspector::with_config(config.with_recursive(recursive));

        if args.json {
            println!("{}", self.json_report(&inspector, &args.types)?);
            Ok(())
        } else {
            self.handle_print(&inspector, &args.types)
        }
    }

    fn setup_logging(&self, args: &Args) {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            "off" => log::LevelFilter::Off,
            _ => log::LevelFilter::Warn,
        };

        env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .init();
    }

    fn handle_list(&self) -> anyhow::Result<()> {
        println!("{}", "Available types".cyan().bold());
        println!("{}", "-".repeat(40).cyan());
        for (name, ty) in CATALOG.iter() {
            println!("  {:<16} {} ({} fields)", name.green(), ty.semantics(), ty.field_count());
        }
        Ok(())
    }

    fn handle_print(&self, inspector: &Inspector, names: &[String]) -> anyhow::Result<()> {
        let recursive = inspector.config().recursive;
        let stdout = std::io::stdout();
        let mut sink = stdout.lock();

        for (i, name) in names.iter().enumerate() {
            let ty = catalog::lookup(name).ok_or_else(|| anyhow::anyhow!("Unknown type: {}", name))?;
            log::info!("Inspecting {}", ty.name());
            if i > 0 {
                writeln!(sink)?;
            }
            inspector.print_of(&ty, &mut sink, recursive)?;
        }
        Ok(())
    }

    /// Layouts of the named catalog types as a pretty JSON array.
    pub fn json_report(&self, inspector: &Inspector, names: &[String]) -> anyhow::Result<String> {
        let recursive = inspector.config().recursive;
        let mut layouts = Vec::with_capacity(names.len());
        for name in names {
            let ty = catalog::lookup(name).ok_or_else(|| anyhow::anyhow!("Unknown type: {}", name))?;
            let layout = inspector.compute_layout_of(&ty)?;
            layouts.push(SerializableLayout::new(&layout, recursive));
        }

        Ok(serde_json::to_string_pretty(&layouts)?)
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
