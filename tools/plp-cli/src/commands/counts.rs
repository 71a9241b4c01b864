//! Facet count inspection.

use anyhow::{Context as _, Result};
use plp_catalog::{FacetCounts, ListPayload};

use super::CountsArgs;
use crate::context::Context;

/// Run the counts command.
pub async fn run(args: CountsArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.input);
    let text = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read payload: {}", path.display()))?;
    let payload = ListPayload::from_json(&text)
        .with_context(|| format!("Failed to parse payload: {}", path.display()))?;

    let counts = if args.recount {
        FacetCounts::from_items(&payload.items)
    } else {
        payload.facet_counts()
    };

    if ctx.output.is_json() {
        ctx.output.json(&counts);
        return Ok(());
    }

    ctx.output.header(&format!("{} items", payload.items.len()));
    print_facet(ctx, "Item Group", &counts.item_group_count);
    print_facet(ctx, "Brand", &counts.brand_count);

    Ok(())
}

fn print_facet(ctx: &Context, title: &str, counts: &std::collections::BTreeMap<String, u32>) {
    if counts.is_empty() {
        return;
    }

    let width = counts.keys().map(|k| k.chars().count()).max().unwrap_or(0).max(title.len());
    ctx.output.info("");
    ctx.output.table_row(&[title, "Count"], &[width, 5]);
    for (name, count) in counts {
        let count = count.to_string();
        ctx.output.table_row(&[name.as_str(), count.as_str()], &[width, 5]);
    }
}
