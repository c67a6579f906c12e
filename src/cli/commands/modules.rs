//! Modules commands - registry search and fetch

use anyhow::Result;
use serde::Serialize;

use crate::catalog::ModuleFilter;
use crate::cli::Context;
use crate::core::types::{Module, ModuleId};
use crate::ui::output;

#[derive(Serialize)]
struct ModuleList {
    count: usize,
    items: Vec<Module>,
}

fn render(ctx: &Context, items: Vec<Module>) -> Result<()> {
    if ctx.json {
        return output::json(&ModuleList {
            count: items.len(),
            items,
        });
    }
    for module in &items {
        let mut tags = module.language.clone();
        if let Some(region) = &module.region {
            tags.push('/');
            tags.push_str(region);
        }
        output::print(
            format!("{:<12} [{}] {}", module.id.as_str(), tags, module.description),
            ctx.verbosity,
        );
        if let Some(origin) = &module.origin {
            output::debug(format!("{}: {}", module.id, origin), ctx.verbosity);
        }
    }
    Ok(())
}

/// Search the registry with optional filters.
pub fn search(
    ctx: &Context,
    id: Option<String>,
    language: Option<String>,
    region: Option<String>,
) -> Result<()> {
    let filter = ModuleFilter {
        id,
        language,
        region,
    };
    output::debug(format!("searching registry with {:?}", filter), ctx.verbosity);
    let items = ctx.app.catalog.search(&filter)?;
    render(ctx, items)
}

/// Fetch registry entries for specific module identifiers.
pub fn fetch(ctx: &Context, ids: &[String]) -> Result<()> {
    let ids = ids
        .iter()
        .map(|id| ModuleId::new(id))
        .collect::<Result<Vec<_>, _>>()?;
    let items = ctx.app.catalog.fetch(&ids)?;
    render(ctx, items)
}
