//! Interactive symptom interview.
//!
//! Asks the questions in a fixed order and fills a [`FactPreset`]. Questions
//! that do not apply are skipped and left to the shared defaults, so the
//! interview and flag mode resolve to the same store for the same answers.

use crate::prompt::Prompter;
use autodiag_shared::{FactPreset, Smoke};
use std::io;

pub const Q_STARTS: &str = "Does the car start?";
pub const Q_DASHBOARD: &str = "Do the dashboard lights come on?";
pub const Q_STALLS: &str = "Does the car stall when accelerating?";
pub const Q_SMOKE: &str = "Is there noticeable smoke from the exhaust?";
pub const Q_SMOKE_COLOR: &str = "What colour is the smoke?";

pub fn interview<P: Prompter>(prompter: &mut P) -> io::Result<FactPreset> {
    let mut preset = FactPreset::default();

    let arranca = prompter.ask_yes_no(Q_STARTS)?;
    preset.arranca = Some(arranca);

    if arranca {
        preset.apaga_al_acelerar = Some(prompter.ask_yes_no(Q_STALLS)?);
        // dashboard is irrelevant once the car starts; resolve() sets it to true
    } else {
        preset.tablero = Some(prompter.ask_yes_no(Q_DASHBOARD)?);
    }

    let smoke = if prompter.ask_yes_no(Q_SMOKE)? {
        let labels: Vec<&str> = Smoke::CHOICES.iter().map(Smoke::label).collect();
        Smoke::CHOICES[prompter.ask_choice(Q_SMOKE_COLOR, &labels)?]
    } else {
        Smoke::Ninguno
    };
    preset.humo = Some(smoke);

    Ok(preset)
}
