use super::{document_paths, load_config};
use crate::{
    CleanArgs,
    convert::{base_path_from_config, output_path_for, resolve_against},
};

pub async fn run(args: &CleanArgs) -> Result<(), anyhow::Error> {
    let (config, config_path) = load_config(args.config_file.as_deref())?;

    // Get the base path for resolving relative paths
    let base_path = base_path_from_config(&config_path);

    let output_dir = config
        .output
        .dir
        .as_ref()
        .map(|dir| resolve_against(&base_path, dir));

    // Delete the converted output of every document
    let mut removed = 0;
    for input in document_paths(&args.inputs, &config, &base_path) {
        let output_path = output_path_for(&input, &config.output.extension, output_dir.as_deref());
        if !output_path.exists() {
            continue;
        }

        if args.dry_run {
            println!("Would delete {}", output_path.display());
        } else {
            tokio::fs::remove_file(&output_path).await?;
            println!("Deleted {}", output_path.display());
            removed += 1;
        }
    }

    tracing::info!(removed, "clean finished");

    Ok(())
}
