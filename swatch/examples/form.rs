//! Form Example
//!
//! A scripted host form driving a color selector:
//! - the user picks and un-picks colors
//! - the form toggles the control between enabled and disabled
//! - the form marks the control required, then optional again
//!
//! Logs go to `form_example.log`.

use std::fs::File;

use formbind::{FormControl, UpdateOptions, Validator};
use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use swatch::{ColorSelector, Swatch};

// ============================================================================
// Host form
// ============================================================================

struct ColorForm {
    control: FormControl,
}

impl ColorForm {
    fn new() -> Self {
        Self {
            control: FormControl::new(),
        }
    }

    fn toggle_disabled(&self) {
        if self.control.is_disabled() {
            self.control.enable();
        } else {
            self.control.disable();
        }
    }

    fn mark_as_required(&self) {
        self.control.set_validators(Validator::required().into());
        self.control.update_value_and_validity(UpdateOptions::default());
    }

    fn mark_as_not_required(&self) {
        self.control.clear_validators();
        self.control.update_value_and_validity(UpdateOptions::default());
    }

    fn report(&self, selector: &ColorSelector, step: &str) {
        println!(
            "{:<28} selection={:<6} value={:<8} status={:?} required={} errors={}",
            step,
            selector
                .selection()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".into()),
            self.control.value().to_string(),
            self.control.status(),
            selector.required(),
            self.control
                .errors()
                .map(|e| e.to_string())
                .unwrap_or_default(),
        );
    }
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<(), Box<dyn std::error::Error>> {
    WriteLogger::init(
        LevelFilter::Trace,
        Config::default(),
        File::create("form_example.log")?,
    )?;

    let form = ColorForm::new();
    let selector = ColorSelector::new();
    let mut binding = selector.attach(&form.control);
    form.report(&selector, "attached");

    selector.select(Swatch::Green);
    form.report(&selector, "picked green");

    selector.select(Swatch::Green);
    form.report(&selector, "picked green again");

    form.mark_as_required();
    form.report(&selector, "marked required");

    selector.select(Swatch::Blue);
    form.report(&selector, "picked blue");

    form.toggle_disabled();
    selector.select(Swatch::Red);
    form.report(&selector, "disabled, picked red");

    form.toggle_disabled();
    form.report(&selector, "enabled");

    form.control.set_value("purple", UpdateOptions::default());
    form.report(&selector, "form wrote purple");

    form.mark_as_not_required();
    form.control.set_value(None::<&str>, UpdateOptions::default());
    form.report(&selector, "optional, form cleared");

    selector.teardown();
    binding.unbind();
    Ok(())
}
