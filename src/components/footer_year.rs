//! Copyright year in the footer.

use crate::config::FooterConfig;
use crate::surface::Surface;
use crate::util::clock::Clock;

/// Write the current year into the footer placeholder. Returns `false` when
/// the placeholder is missing.
pub fn install<S: Surface>(surface: &S, cfg: &FooterConfig, clock: &dyn Clock) -> bool {
    let Some(slot) = surface.element_by_id(&cfg.year_id) else {
        log::debug!("footer: #{} missing, year not written", cfg.year_id);
        return false;
    };
    surface.set_text(&slot, &clock.current_year().to_string());
    true
}
