use anyhow::Result;
use binfit::{Algorithm, Packer};

use crate::io::report::render_bins;

/// Small fixed instance whose packings can be checked by hand.
pub const CONTROL_ITEMS: [u64; 10] = [3, 8, 2, 5, 7, 1, 9, 4, 6, 2];

/// Packs [`CONTROL_ITEMS`] with both algorithms and lists the resulting bins.
pub fn control_listing(packer: &Packer, capacity: u64) -> Result<String> {
    let mut sections = vec![];
    for (title, algorithm) in [
        ("First Fit (FF)", Algorithm::FirstFit),
        ("First Fit Decreasing (FFD)", Algorithm::FirstFitDecreasing),
    ] {
        let packing = packer.pack(algorithm, &CONTROL_ITEMS, capacity)?;
        sections.push(format!(
            "=== {title} Packing ===\n{}",
            render_bins(&packing.into_contents())
        ));
    }
    Ok(sections.join("\n\n"))
}
