//! Render payload files to list view markup.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context as _, Result};
use chrono::{DateTime, Utc};
use dialoguer::Confirm;
use plp_catalog::ListPayload;
use plp_core::{RenderId, StoreSettings, ViewPreference};
use plp_observability::{LogFormat, MetricsSummary, RenderMetrics, StructuredLogger};
use plp_render::{LabelSet, LabelUpdate, ListOptions, ProductList, ProductsSection, Translate};
use serde::Serialize;

use super::RenderArgs;
use crate::context::Context;
use crate::output::format_bytes;

/// Report written after a render run.
#[derive(Debug, Serialize)]
pub struct RenderReport {
    pub rendered_at: DateTime<Utc>,
    pub files: Vec<FileReport>,
    pub summary: MetricsSummary,
}

/// Per-file entry of the report.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    pub metrics: RenderMetrics,
    pub labels: Vec<LabelUpdate>,
    /// Label keys with no matching filter label on the page.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_labels: Vec<String>,
    /// Rendered markup, carried inline when it was not written to a file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markup: Option<String>,
}

impl FileReport {
    /// Build the entry for one input. With `inline` set the markup travels in the report.
    pub fn from_outcome(
        input: &str,
        outcome: RenderOutcome,
        output: Option<String>,
        missing_labels: Vec<String>,
        inline: bool,
    ) -> Self {
        Self {
            input: input.to_string(),
            output,
            metrics: outcome.metrics.with_source(input),
            labels: outcome.labels,
            missing_labels,
            markup: inline.then_some(outcome.markup),
        }
    }
}

/// Markup and bookkeeping for one payload.
pub struct RenderOutcome {
    pub markup: String,
    pub metrics: RenderMetrics,
    pub labels: Vec<LabelUpdate>,
}

/// Render one payload with config defaults filled in.
pub fn render_payload<T: Translate>(
    renderer: &ProductList<T>,
    payload: &ListPayload,
    defaults: &StoreSettings,
    preference: ViewPreference,
    wrap_id: Option<&str>,
) -> RenderOutcome {
    let render_id = RenderId::generate();
    let started = Instant::now();

    let mut options = ListOptions::from_payload(payload).with_preference(preference);
    if payload.settings.is_none() {
        options.settings = *defaults;
    }

    let mut section = ProductsSection::new();
    let rendered = renderer.render(&options, &mut section);

    let markup = match wrap_id {
        Some(id) => section.outer_html(id),
        None => section.html().to_string(),
    };

    let mut metrics = RenderMetrics::new(&render_id);
    metrics.rows = rendered.rows;
    metrics.labels = rendered.labels.len();
    metrics.bytes = markup.len();
    metrics.hidden = rendered.hidden;
    metrics.record_duration(started.elapsed());

    RenderOutcome {
        markup,
        metrics,
        labels: rendered.labels,
    }
}

/// Keys that have no label on the page, in update order.
pub fn missing_labels(updates: &[LabelUpdate], page: &LabelSet) -> Vec<String> {
    updates
        .iter()
        .filter(|u| page.text(&u.key).is_none())
        .map(|u| u.key.clone())
        .collect()
}

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let renderer = ctx.renderer()?;
    let page_labels = match &args.labels {
        Some(path) => Some(load_label_keys(&ctx.resolve_path(path)).await?),
        None => None,
    };
    let out_dir = match &args.out_dir {
        Some(dir) => {
            let dir = ctx.resolve_path(dir);
            tokio::fs::create_dir_all(&dir)
                .await
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            Some(dir)
        }
        None => None,
    };
    let wrap_id = args.wrap.then(|| ctx.config.render.container_id.as_str());

    let pb = ctx.output.progress(args.inputs.len() as u64, "Rendering");
    let mut files = Vec::with_capacity(args.inputs.len());

    for input in &args.inputs {
        let path = ctx.resolve_path(input);
        let text = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read payload: {}", path.display()))?;
        let payload = ListPayload::from_json(&text)
            .with_context(|| format!("Failed to parse payload: {}", path.display()))?;

        let preference = args
            .preference
            .as_deref()
            .map(|p| p.parse::<ViewPreference>().unwrap_or_default())
            .or_else(|| payload.preference.clone())
            .unwrap_or_else(|| ctx.config.render.preference.clone());

        let outcome = render_payload(
            &renderer,
            &payload,
            &ctx.config.settings,
            preference,
            wrap_id,
        );
        let logger = logger_for(ctx, &outcome, input);

        let missing = match &page_labels {
            Some(page) => missing_labels(&outcome.labels, page),
            None => Vec::new(),
        };
        if !missing.is_empty() {
            logger
                .warn_builder("filter labels missing")
                .field("keys", missing.join(", "))
                .emit();
            if args.strict_labels {
                bail!("{}: no filter label for {}", input, missing.join(", "));
            }
        }

        let (output, inline) = match &out_dir {
            Some(dir) => (
                write_markup(dir, input, &outcome.markup, args.yes, ctx).await?,
                false,
            ),
            None if ctx.output.is_json() => (None, true),
            None => {
                ctx.output.raw(&outcome.markup);
                (None, false)
            }
        };

        logger
            .info_builder("rendered")
            .field_u64("rows", outcome.metrics.rows as u64)
            .field_u64("bytes", outcome.metrics.bytes as u64)
            .field_bool("hidden", outcome.metrics.hidden)
            .emit();
        outcome.metrics.trace();

        files.push(FileReport::from_outcome(input, outcome, output, missing, inline));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let summary = MetricsSummary::from_metrics(files.iter().map(|f| &f.metrics));
    ctx.output.success(&format!(
        "Rendered {} file(s), {} row(s), {}",
        summary.renders,
        summary.rows,
        format_bytes(summary.bytes as u64)
    ));

    let report = RenderReport {
        rendered_at: Utc::now(),
        files,
        summary,
    };

    if let Some(path) = &args.report {
        let path = ctx.resolve_path(path);
        let json = serde_json::to_string_pretty(&report)?;
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        ctx.output.debug(&format!("Report: {}", path.display()));
    } else if ctx.output.is_json() {
        ctx.output.json(&report);
    }

    Ok(())
}

fn logger_for(ctx: &Context, outcome: &RenderOutcome, input: &str) -> StructuredLogger {
    let format = if ctx.output.is_json() {
        LogFormat::Json
    } else {
        LogFormat::Human
    };
    let min_level = if ctx.output.is_verbose() {
        plp_observability::LogLevel::Info
    } else {
        plp_observability::LogLevel::Warn
    };

    StructuredLogger::new(RenderId::from_string(outcome.metrics.render_id.clone()))
        .with_source(input)
        .with_format(format)
        .with_min_level(min_level)
}

async fn load_label_keys(path: &Path) -> Result<LabelSet> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read labels: {}", path.display()))?;
    let keys: Vec<String> = serde_json::from_str(&text)
        .with_context(|| format!("Labels must be a JSON array of strings: {}", path.display()))?;
    Ok(LabelSet::from_keys(keys.iter().map(String::as_str)))
}

/// Output file for an input: `<stem>.html` inside `dir`.
pub fn output_path(dir: &Path, input: &str) -> PathBuf {
    let stem = Path::new(input)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("products");
    dir.join(format!("{}.html", stem))
}

async fn write_markup(
    dir: &Path,
    input: &str,
    markup: &str,
    overwrite: bool,
    ctx: &Context,
) -> Result<Option<String>> {
    let path = output_path(dir, input);

    if path.exists() && !overwrite {
        if ctx.output.is_json() {
            bail!("Output exists: {}. Use --yes to overwrite.", path.display());
        }
        let confirmed = Confirm::new()
            .with_prompt(format!("Overwrite {}?", path.display()))
            .default(false)
            .interact()?;
        if !confirmed {
            ctx.output.warn(&format!("Skipped {}", input));
            return Ok(None);
        }
    }

    tokio::fs::write(&path, markup)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    ctx.output.debug(&format!("Wrote {}", path.display()));

    Ok(Some(path.display().to_string()))
}
