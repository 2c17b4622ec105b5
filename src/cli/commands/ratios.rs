use anyhow::Result;

use calcestate::catalog;
use calcestate::errors::CalcEstateError;
use calcestate::implementations::favorites::FavoritesStore;
use calcestate::traits::storage::KeyValueStorage;

use crate::cli::ui;

/// List the catalog, optionally only liked ratios and/or matching a search query
pub fn list<S: KeyValueStorage>(
    favorites: &FavoritesStore<S>,
    liked_only: bool,
    search: Option<&str>,
    json: bool
) -> Result<()> {
    let ratios: Vec<_> = catalog::search(search.unwrap_or(""))
        .into_iter()
        .filter(|r| !liked_only || favorites.is_liked(r.id))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&ratios)?);
        return Ok(());
    }

    ui::print_header(if liked_only { "Liked Ratios" } else { "Ratios" });
    if ratios.is_empty() {
        if liked_only {
            ui::print_info("No liked ratios. Use `calcestate ratios like <id>` to save one.");
        } else {
            ui::print_info("No results found");
        }
        return Ok(());
    }
    for ratio in ratios {
        ui::print_ratio_line(ratio, favorites.is_liked(ratio.id));
    }
    Ok(())
}

pub fn show<S: KeyValueStorage>(favorites: &FavoritesStore<S>, id: u32, json: bool) -> Result<()> {
    let ratio = catalog::find(id).ok_or(CalcEstateError::UnknownRatio(id))?;
    if json {
        println!("{}", serde_json::to_string_pretty(ratio)?);
    } else {
        ui::print_ratio_detail(ratio, favorites.is_liked(id));
    }
    Ok(())
}

pub async fn like<S: KeyValueStorage>(favorites: &mut FavoritesStore<S>, id: u32) -> Result<()> {
    let now_liked = favorites.toggle(id).await?;
    let title = catalog::find(id).map(|r| r.title).unwrap_or("Ratio");
    if now_liked {
        ui::print_success(&format!("{} added to liked ratios", title));
    } else {
        ui::print_success(&format!("{} removed from liked ratios", title));
    }
    Ok(())
}
