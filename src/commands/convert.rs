use anyhow::Context;

use super::{document_paths, load_config};
use crate::{
    ConvertArgs,
    convert::{
        DocumentReport, Pipeline, PipelineContext, ProcessingDocument, base_path_from_config,
        output_path_for, resolve_against,
    },
};

pub async fn run(args: &ConvertArgs) -> Result<(), anyhow::Error> {
    let (config, config_path) = load_config(args.config_file.as_deref())?;

    // Relative paths in the config file are relative to the file itself
    let base_path = base_path_from_config(&config_path);
    let inputs = document_paths(&args.inputs, &config, &base_path);
    if inputs.is_empty() {
        return Err(anyhow::anyhow!(
            "No documents to convert. Pass .tex files or list them under 'documents' in {}",
            config_path.display()
        ));
    }

    let output_dir = config
        .output
        .dir
        .as_ref()
        .map(|dir| resolve_against(&base_path, dir));

    // Load every source before converting anything
    let mut docs = Vec::with_capacity(inputs.len());
    for input in inputs {
        let source = tokio::fs::read_to_string(&input)
            .await
            .with_context(|| format!("failed to read {}", input.display()))?;
        let output_path = output_path_for(&input, &config.output.extension, output_dir.as_deref());
        docs.push(ProcessingDocument::new(input, output_path, &source));
    }

    let pipeline = Pipeline::for_options(config.format.pretty);
    let ctx = PipelineContext::new(&config.output, args.dry_run);
    pipeline.run(&mut docs, &ctx)?;

    let reports: Vec<DocumentReport> = docs.iter().map(DocumentReport::from_document).collect();
    for report in &reports {
        for label in &report.unresolved_references {
            tracing::warn!(source = %report.source.display(), label = %label, "unresolved reference");
        }
    }

    if args.report {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{} -> {}", report.source.display(), report.output.display());
        }
    }

    let written = reports.iter().filter(|r| r.written).count();
    if args.dry_run {
        eprintln!("Converted {} document(s) (dry run, nothing written)", reports.len());
    } else {
        eprintln!("Converted {} document(s), wrote {}", reports.len(), written);
    }

    Ok(())
}
