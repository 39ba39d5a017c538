//! Visits subcommand handler

use anyhow::Result;

use typewriter::tui::current_theme;
use typewriter::visits::VisitStore;

/// Show the visit counter, or reset it.
pub fn handle(reset: bool) -> Result<()> {
    let store = VisitStore::open_default()?;
    let theme = current_theme();

    if reset {
        store.reset()?;
        println!("{}", theme.success_text("Visit counter reset."));
        return Ok(());
    }

    let record = store.load()?;
    println!("{} {}", theme.secondary_text("visits:"), record.visits);
    if let Some(last) = &record.last_visit {
        println!("{} {}", theme.secondary_text("last visit:"), last);
    }
    println!("{} {}", theme.secondary_text("file:"), store.path().display());
    Ok(())
}
