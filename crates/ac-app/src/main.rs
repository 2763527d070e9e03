use ac_core::TableConfig;
use ac_core::table::{describe, render_table};
use anyhow::Result;
use clap::Parser;

pub mod cli;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Recherche d'un caractère
    let lookup = cli.lookup()?;
    if let Some(ch) = lookup {
        log::info!("Caractère trouvé : {ch:?}");
        print!("{}", describe(ch));
        if !cli.table {
            return Ok(());
        }
    }

    // 4. Charger la config et appliquer les overrides CLI
    let mut config = resolve_config(&cli)?;
    if let Some(class) = cli.class_filter()? {
        config.class = Some(class);
    }
    log::debug!(
        "Table {:?}..={:?}, {} colonne(s)",
        config.first,
        config.last,
        config.columns.len()
    );

    // 5. Rendu
    if lookup.is_some() {
        println!();
    }
    print!("{}", render_table(&config));
    Ok(())
}

/// Charge la config si le fichier existe, sinon les valeurs par défaut.
fn resolve_config(cli: &cli::Cli) -> Result<TableConfig> {
    if cli.config.exists() {
        ac_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(TableConfig::default())
    }
}
