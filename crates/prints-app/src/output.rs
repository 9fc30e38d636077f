// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Rendering of command results for stdout.

use prints_core::PrinterListing;
use prints_core::error::Result;

/// Bulleted printer list with the default marked.
pub fn render_listing(listing: &PrinterListing) -> String {
    let mut text = String::from("Printers:\n");
    if listing.printers.is_empty() {
        text.push_str("  (none found)\n");
        return text;
    }
    for name in &listing.printers {
        let mark = if listing.is_default(name) { " (default)" } else { "" };
        text.push_str(&format!("  - {name}{mark}\n"));
    }
    text
}

pub fn render_listing_json(listing: &PrinterListing) -> Result<String> {
    Ok(format!("{}\n", listing.to_json()?))
}

pub fn render_default_set(printer: &str) -> String {
    format!("Default printer set to: {printer}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn office() -> PrinterListing {
        PrinterListing::new(
            vec!["HP-OfficeJet".into(), "Canon-MX".into()],
            Some("HP-OfficeJet".into()),
        )
    }

    #[test]
    fn human_listing_marks_default() {
        assert_eq!(
            render_listing(&office()),
            "Printers:\n  - HP-OfficeJet (default)\n  - Canon-MX\n"
        );
    }

    #[test]
    fn human_listing_without_printers() {
        assert_eq!(
            render_listing(&PrinterListing::default()),
            "Printers:\n  (none found)\n"
        );
    }

    #[test]
    fn human_listing_without_default() {
        let listing = PrinterListing::new(vec!["A".into()], None);
        assert_eq!(render_listing(&listing), "Printers:\n  - A\n");
    }

    #[test]
    fn json_listing_is_one_line() {
        assert_eq!(
            render_listing_json(&office()).unwrap(),
            "{\"printers\": [\"HP-OfficeJet\", \"Canon-MX\"], \"default\": \"HP-OfficeJet\"}\n"
        );
    }

    #[test]
    fn default_set_confirmation() {
        assert_eq!(render_default_set("Canon-MX"), "Default printer set to: Canon-MX\n");
    }
}
