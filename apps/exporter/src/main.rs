use clap::Parser;
use tracing_subscriber::EnvFilter;

use visitwall_exporter::cli::Cli;
use visitwall_exporter::config::ExporterConfig;
use visitwall_exporter::export::{Destination, Exporter};
use visitwall_vcard::download::DirectoryTarget;
use visitwall_vcard::VcardGenerator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = ExporterConfig::load(cli.config.as_deref())?;
    if let Some(dir) = cli.out_dir {
        config.output_dir = dir;
    }

    // Logs go to stderr so `--stdout` output stays a clean vCard stream.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if config.vcard.embed_avatar {
        tracing::info!("avatar embedding on: using stored avatarUrl values");
    }

    let destination = if cli.stdout {
        Destination::Writer(Box::new(std::io::stdout()))
    } else {
        Destination::Directory(DirectoryTarget::new(&config.output_dir)?)
    };

    let generator = VcardGenerator::new(config.vcard.clone());
    let mut exporter = Exporter::new(generator, destination);
    let summary = exporter.export_all(&cli.inputs);

    tracing::info!(
        exported = summary.exported,
        failed = summary.failed,
        "export finished"
    );

    if summary.failed > 0 {
        return Err(format!("{} of {} exports failed", summary.failed, cli.inputs.len()).into());
    }
    Ok(())
}
