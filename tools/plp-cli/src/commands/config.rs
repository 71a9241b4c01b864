//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};
use plp_core::coerce::truthy;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::{find_config_path, Context};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    let settings = &ctx.config.settings;
    ctx.output.info("[settings]");
    ctx.output.kv("enabled", &settings.enabled.to_string());
    ctx.output.kv("enable_wishlist", &settings.enable_wishlist.to_string());
    ctx.output.kv(
        "show_stock_availability",
        &settings.show_stock_availability.to_string(),
    );
    ctx.output.kv(
        "allow_items_not_in_stock",
        &settings.allow_items_not_in_stock.to_string(),
    );

    let render = &ctx.config.render;
    ctx.output.info("");
    ctx.output.info("[render]");
    ctx.output.kv("preference", render.preference.as_str());
    ctx.output.kv("title_limit", &render.limits.title_limit.to_string());
    ctx.output.kv("abbr_length", &render.limits.abbr_length.to_string());
    ctx.output.kv("container_id", &render.container_id);
    if let Some(ref path) = render.translations {
        ctx.output.kv("translations", path);
    }

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        ctx.output.raw(&value.to_string());
    }

    Ok(())
}

fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let Some(config_path) = find_config_path(&ctx.cwd) else {
        bail!("No config file found. Run `plp config init` to create one.");
    };
    let config_path = config_path.to_string_lossy().to_string();

    let mut config = CliConfig::load(&config_path)?;
    set_config_value(&mut config, key, value)?;
    config.save(&config_path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("plp.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

/// Problems found in a config: (errors, warnings).
pub fn check_config(config: &CliConfig, ctx: &Context) -> (Vec<String>, Vec<String>) {
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();
    let render = &config.render;

    if render.limits.title_limit == 0 {
        errors.push("render.title_limit must be greater than 0".to_string());
    }

    if render.limits.abbr_length == 0 {
        errors.push("render.abbr_length must be greater than 0".to_string());
    }

    if render.container_id.trim().is_empty() {
        errors.push("render.container_id is required".to_string());
    }

    if let Some(ref path) = render.translations {
        if !ctx.resolve_path(path).exists() {
            errors.push(format!("render.translations file not found: {}", path));
        }
    }

    if !render.preference.is_list_view() {
        warnings.push(format!(
            "render.preference '{}' renders rows hidden by default",
            render.preference
        ));
    }

    if !config.settings.enabled && config.settings.allow_items_not_in_stock {
        warnings.push(
            "settings.allow_items_not_in_stock has no effect while settings.enabled is false"
                .to_string(),
        );
    }

    (errors, warnings)
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check_config(&ctx.config, ctx);

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<serde_json::Value> {
    use serde_json::json;

    let parts: Vec<&str> = key.split('.').collect();
    let settings = &config.settings;
    let render = &config.render;

    Ok(match parts.as_slice() {
        ["settings", "enabled"] => json!(settings.enabled),
        ["settings", "enable_wishlist"] => json!(settings.enable_wishlist),
        ["settings", "show_stock_availability"] => json!(settings.show_stock_availability),
        ["settings", "allow_items_not_in_stock"] => json!(settings.allow_items_not_in_stock),
        ["render", "preference"] => json!(render.preference.as_str()),
        ["render", "title_limit"] => json!(render.limits.title_limit),
        ["render", "abbr_length"] => json!(render.limits.abbr_length),
        ["render", "container_id"] => json!(render.container_id),
        ["render", "translations"] => json!(render.translations),
        _ => bail!("Unknown config key: {}", key),
    })
}

fn parse_flag(value: &str) -> bool {
    truthy(&serde_json::Value::String(value.to_string()))
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["settings", "enabled"] => config.settings.enabled = parse_flag(value),
        ["settings", "enable_wishlist"] => config.settings.enable_wishlist = parse_flag(value),
        ["settings", "show_stock_availability"] => {
            config.settings.show_stock_availability = parse_flag(value)
        }
        ["settings", "allow_items_not_in_stock"] => {
            config.settings.allow_items_not_in_stock = parse_flag(value)
        }
        ["render", "preference"] => config.render.preference = value.parse()?,
        ["render", "title_limit"] => config.render.limits.title_limit = value.parse()?,
        ["render", "abbr_length"] => config.render.limits.abbr_length = value.parse()?,
        ["render", "container_id"] => config.render.container_id = value.to_string(),
        ["render", "translations"] => config.render.translations = Some(value.to_string()),
        _ => bail!("Unknown or read-only config key: {}", key),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Output;
    use plp_core::ViewPreference;

    fn context(config: CliConfig) -> Context {
        Context {
            config,
            output: Output::new(false, true),
            cwd: std::env::temp_dir(),
        }
    }

    #[test]
    fn test_get_and_set_values() {
        let mut config = CliConfig::default();

        set_config_value(&mut config, "settings.enabled", "1").unwrap();
        set_config_value(&mut config, "render.preference", "Grid View").unwrap();
        set_config_value(&mut config, "render.title_limit", "120").unwrap();

        assert!(config.settings.enabled);
        assert_eq!(config.render.preference, ViewPreference::GridView);
        assert_eq!(get_config_value(&config, "render.title_limit").unwrap(), 120);
        assert_eq!(get_config_value(&config, "settings.enabled").unwrap(), true);
    }

    #[test]
    fn test_unknown_keys() {
        let mut config = CliConfig::default();
        assert!(get_config_value(&config, "render.colour").is_err());
        assert!(set_config_value(&mut config, "settings", "1").is_err());
        assert!(set_config_value(&mut config, "render.title_limit", "many").is_err());
    }

    #[test]
    fn test_check_config() {
        let mut config = CliConfig::default();
        let ctx = context(config.clone());
        let (errors, warnings) = check_config(&config, &ctx);
        assert!(errors.is_empty());
        assert!(warnings.is_empty());

        config.render.limits.title_limit = 0;
        config.render.preference = ViewPreference::GridView;
        config.settings.allow_items_not_in_stock = true;
        let (errors, warnings) = check_config(&config, &ctx);
        assert_eq!(errors.len(), 1);
        assert_eq!(warnings.len(), 2);
    }
}
