use rand::Rng;

use crate::models::business::Business;
use crate::seed::catalog::{COMPANY_SUFFIXES, LAST_NAMES};
use crate::seed::{image_url, new_id, pick_str};

pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Business {
    Business {
        id: new_id(rng),
        name: company_name(rng),
        logo_url: image_url(rng, 200, 200),
    }
}

/// "Cohen Ltd", "Levi-Katz" or "Peretz, Segal and Klein".
fn company_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = pick_str(rng, LAST_NAMES);
    match rng.random_range(0..3) {
        0 => format!("{first} {}", pick_str(rng, COMPANY_SUFFIXES)),
        1 => format!("{first}-{}", pick_str(rng, LAST_NAMES)),
        _ => format!(
            "{first}, {} and {}",
            pick_str(rng, LAST_NAMES),
            pick_str(rng, LAST_NAMES)
        ),
    }
}
