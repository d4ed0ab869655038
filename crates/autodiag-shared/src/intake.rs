//! Fact intake: turning partial observations into a complete fact store.
//!
//! Both collaborators (interactive interview and flag/config presets) fill a
//! [`FactPreset`] and call [`FactPreset::resolve`], so they share one default
//! policy:
//! - `arranca` defaults to true
//! - `tablero` defaults to the value of `arranca` (dark dashboard when the
//!   car does not start, neutral `true` when it does)
//! - `apaga_al_acelerar` defaults to false
//! - `humo` defaults to `ninguno`

use crate::facts::{keys, FactStore, Smoke};
use serde::{Deserialize, Serialize};

pub mod defaults {
    use crate::facts::Smoke;

    pub const ARRANCA: bool = true;
    pub const APAGA_AL_ACELERAR: bool = false;
    pub const HUMO: Smoke = Smoke::Ninguno;
}

/// Partially known observations, before defaults are applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FactPreset {
    pub arranca: Option<bool>,
    pub tablero: Option<bool>,
    pub apaga_al_acelerar: Option<bool>,
    pub humo: Option<Smoke>,
}

impl FactPreset {
    /// True when no value was supplied at all
    pub fn is_empty(&self) -> bool {
        self.arranca.is_none()
            && self.tablero.is_none()
            && self.apaga_al_acelerar.is_none()
            && self.humo.is_none()
    }

    /// Layer `over` on top of `self`; supplied values in `over` win
    pub fn overlay(self, over: FactPreset) -> FactPreset {
        FactPreset {
            arranca: over.arranca.or(self.arranca),
            tablero: over.tablero.or(self.tablero),
            apaga_al_acelerar: over.apaga_al_acelerar.or(self.apaga_al_acelerar),
            humo: over.humo.or(self.humo),
        }
    }

    /// Apply defaults and produce a store with all four keys
    pub fn resolve(&self) -> FactStore {
        let arranca = self.arranca.unwrap_or(defaults::ARRANCA);
        let tablero = self.tablero.unwrap_or(arranca);
        let apaga = self.apaga_al_acelerar.unwrap_or(defaults::APAGA_AL_ACELERAR);
        let humo = self.humo.unwrap_or(defaults::HUMO);

        FactStore::new()
            .with(keys::ARRANCA, arranca)
            .with(keys::TABLERO, tablero)
            .with(keys::APAGA_AL_ACELERAR, apaga)
            .with(keys::HUMO, humo)
    }
}
