use anyhow::Result;
use tracing::info;

use crate::cli::TaxonomyArgs;
use crate::model::TaxonomyManifest;
use crate::taxonomy::Taxonomy;
use crate::util::{now_utc_string, write_json_pretty};

pub fn run(args: TaxonomyArgs) -> Result<()> {
    let taxonomy = Taxonomy::load_or_default(args.taxonomy_path.as_deref())?;
    let manifest = build_manifest(&taxonomy);

    if args.dry_run {
        info!(
            category_count = manifest.category_count,
            name_count = manifest.name_count,
            "taxonomy dry-run complete"
        );
        return Ok(());
    }

    write_json_pretty(&args.output_path, &manifest)?;
    info!(path = %args.output_path.display(), "wrote taxonomy manifest");
    info!(
        category_count = manifest.category_count,
        name_count = manifest.name_count,
        "taxonomy export completed"
    );

    Ok(())
}

pub fn build_manifest(taxonomy: &Taxonomy) -> TaxonomyManifest {
    TaxonomyManifest {
        manifest_version: 1,
        generated_at: now_utc_string(),
        category_count: taxonomy.category_count(),
        name_count: taxonomy.name_count(),
        categories: taxonomy.categories.clone(),
    }
}
