// Copyright (c) 2018-2022  Ministerio de Fomento
//                          Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

// Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>,
//            Daniel Jiménez González <dani@ietcc.csic.es>

/*! Comprobaciones de condensaciones para el CTE
 *
 * - valores reglamentarios y por defecto (CTE DB-HE)
 * - clases de higrometría y humedad relativa interior asociada
 * - condensaciones superficiales (factor de temperatura superficial interior)
 * - condensaciones intersticiales
 * - informe conjunto de resultados
*/

use std::convert::TryFrom;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::{
    envelope::Envelope,
    error::CondensaError,
    glaser::{condensation, evaporation, Condensation},
    materials::MaterialsDB,
    psicrom::temp_from_saturation_pressure,
    types::{Climate, Layer},
};

/// Resistencia superficial exterior por defecto (cerramientos verticales) [m2.K/W]
pub const RSE_DEFAULT: f64 = 0.04;
/// Resistencia superficial interior por defecto (cerramientos verticales) [m2.K/W]
pub const RSI_DEFAULT: f64 = 0.13;
/// Temperatura interior de cálculo por defecto [ºC]
pub const TINT_DEFAULT: f64 = 20.0;
/// Resistencia superficial interior para el cálculo del factor de temperatura [m2.K/W]
pub const RSI_FRSI: f64 = 0.25;
/// Presión de saturación de referencia a 20ºC empleada en fRsi,min [Pa]
pub const PSAT_20: f64 = 2337.0;
/// Humedad relativa máxima admisible en la superficie interior [-]
pub const HR_MAX_SURFACE: f64 = 0.8;

/// Clase de higrometría del espacio interior
///
/// Hygrometry class (internal moisture production), from 1 (low) to 5 (very high).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum HygrometryClass {
    /// Higrometría 1
    #[strum(serialize = "1")]
    H1,
    /// Higrometría 2
    #[strum(serialize = "2")]
    H2,
    /// Higrometría 3 (espacios habitables sin producción elevada de humedad)
    #[strum(serialize = "3")]
    H3,
    /// Higrometría 4 (p.e. cocinas industriales, restaurantes)
    #[strum(serialize = "4")]
    H4,
    /// Higrometría 5 (p.e. lavanderías, piscinas)
    #[strum(serialize = "5")]
    H5,
}

impl HygrometryClass {
    /// Humedad relativa interior de cálculo [%]
    pub fn hr_interior(self) -> f64 {
        match self {
            HygrometryClass::H1 | HygrometryClass::H2 | HygrometryClass::H3 => 55.0,
            HygrometryClass::H4 => 62.0,
            HygrometryClass::H5 => 70.0,
        }
    }
}

impl Default for HygrometryClass {
    fn default() -> Self {
        HygrometryClass::H3
    }
}

impl TryFrom<u8> for HygrometryClass {
    type Error = CondensaError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(HygrometryClass::H1),
            2 => Ok(HygrometryClass::H2),
            3 => Ok(HygrometryClass::H3),
            4 => Ok(HygrometryClass::H4),
            5 => Ok(HygrometryClass::H5),
            _ => Err(CondensaError::HygrometryOutOfRange(value)),
        }
    }
}

/// Humedad relativa interior [%] para la clase de higrometría indicada (1 a 5)
pub fn hr_interior(hygrometry: u8) -> Result<f64, CondensaError> {
    Ok(HygrometryClass::try_from(hygrometry)?.hr_interior())
}

// Condensaciones superficiales -------------------------------------------------------------------

/// Factor de temperatura de la superficie interior, fRsi = 1 - U * 0.25
#[allow(non_snake_case)]
pub fn f_rsi(U: f64) -> f64 {
    1.0 - U * RSI_FRSI
}

/// Factor de temperatura de la superficie interior mínimo, fRsi,min
///
/// Se obtiene la temperatura superficial interior mínima que mantiene la humedad relativa en la
/// superficie por debajo del 80%, a partir de la humedad relativa interior hr_int [%].
pub fn f_rsimin(t_ext: f64, t_int: f64, hr_int: f64) -> Result<f64, CondensaError> {
    if !(hr_int > 0.0 && hr_int <= 100.0) {
        return Err(CondensaError::InvalidArgument(format!(
            "humedad relativa interior fuera del rango (0, 100] ({})",
            hr_int
        )));
    }
    if t_int == t_ext {
        return Err(CondensaError::DivisionByZero(
            "el factor de temperatura superficial mínimo (T_int = T_ext)",
        ));
    }
    let psat = (hr_int * PSAT_20 / 100.0) / HR_MAX_SURFACE;
    let t_si_min = temp_from_saturation_pressure(psat)?;
    Ok((t_si_min - t_ext) / (t_int - t_ext))
}

/// ¿Se producen condensaciones superficiales?
pub fn has_surface_condensation(f_rsi: f64, f_rsimin: f64) -> bool {
    f_rsi < f_rsimin
}

// Condensaciones intersticiales ------------------------------------------------------------------

/// ¿Se producen condensaciones intersticiales?
pub fn has_interstitial_condensation(
    envelope: &Envelope,
    db: &MaterialsDB,
    ext: &Climate,
    int: &Climate,
) -> Result<bool, CondensaError> {
    Ok(condensation(envelope, db, ext, int)?.has_condensation())
}

/// ¿Se producen condensaciones superficiales o intersticiales?
pub fn has_condensation(
    envelope: &Envelope,
    db: &MaterialsDB,
    ext: &Climate,
    int: &Climate,
) -> Result<bool, CondensaError> {
    let frsi = f_rsi(envelope.transmittance(db)?);
    let frsimin = f_rsimin(ext.temp, int.temp, int.hr)?;
    Ok(has_surface_condensation(frsi, frsimin)
        || has_interstitial_condensation(envelope, db, ext, int)?)
}

// Informe ----------------------------------------------------------------------------------------

/// Resultados de la comprobación de condensaciones de un cerramiento
///
/// Envelope condensation check results, with the profiles needed to draw the Glaser diagram.
#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CondensationReport {
    /// Nombre del cerramiento
    pub name: String,
    /// Capas del cerramiento, de exterior a interior
    pub layers: Vec<Layer>,
    /// Condiciones exteriores
    pub ext: Climate,
    /// Condiciones interiores
    pub int: Climate,
    /// Resistencia térmica total [m2.K/W]
    pub R_total: f64,
    /// Transmitancia térmica [W/(m2.K)]
    pub U: f64,
    /// Espesor de aire equivalente total [m]
    pub S_total: f64,
    /// Factor de temperatura de la superficie interior [-]
    pub f_rsi: f64,
    /// Factor de temperatura de la superficie interior mínimo [-]
    pub f_rsimin: f64,
    /// Temperaturas [ºC]
    pub temperatures: Vec<f64>,
    /// Presiones de vapor [Pa]
    pub vapour_pressures: Vec<f64>,
    /// Presiones de saturación [Pa]
    pub saturation_pressures: Vec<f64>,
    /// Espesor de aire equivalente acumulado en las interfases [m]
    pub interface_positions: Vec<f64>,
    /// Condensaciones intersticiales
    pub condensation: Condensation,
    /// ¿Hay condensaciones superficiales?
    pub surface_condensation: bool,
    /// ¿Hay condensaciones intersticiales?
    pub interstitial_condensation: bool,
    /// Evaporación en las interfases indicadas por el usuario, si se ha calculado
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaporation: Option<Condensation>,
}

impl CondensationReport {
    /// ¿Hay condensaciones superficiales o intersticiales?
    pub fn has_condensation(&self) -> bool {
        self.surface_condensation || self.interstitial_condensation
    }
}

/// Comprueba las condensaciones superficiales e intersticiales de un cerramiento
#[allow(non_snake_case)]
pub fn check_envelope(
    envelope: &Envelope,
    db: &MaterialsDB,
    ext: &Climate,
    int: &Climate,
) -> Result<CondensationReport, CondensaError> {
    let R_total = envelope.total_resistance(db)?;
    let U = envelope.transmittance(db)?;
    let frsi = f_rsi(U);
    let frsimin = f_rsimin(ext.temp, int.temp, int.hr)?;
    let cond = condensation(envelope, db, ext, int)?;
    let interstitial_condensation = cond.has_condensation();

    Ok(CondensationReport {
        name: envelope.name.clone(),
        layers: envelope.layers().to_vec(),
        ext: *ext,
        int: *int,
        R_total,
        U,
        S_total: envelope.total_equivalent_air_thickness(db)?,
        f_rsi: frsi,
        f_rsimin: frsimin,
        temperatures: envelope.temperatures(db, ext.temp, int.temp)?,
        vapour_pressures: envelope.vapour_pressures(db, ext, int)?,
        saturation_pressures: envelope.saturation_pressures(db, ext.temp, int.temp)?,
        interface_positions: envelope.interface_positions(db)?,
        condensation: cond,
        surface_condensation: has_surface_condensation(frsi, frsimin),
        interstitial_condensation,
        evaporation: None,
    })
}

/// Comprueba las condensaciones de un cerramiento e incluye la evaporación en las interfases
/// indicadas (índices en el diagrama de Glaser, entre 1 y el número de capas - 1)
pub fn check_envelope_evaporation(
    envelope: &Envelope,
    db: &MaterialsDB,
    ext: &Climate,
    int: &Climate,
    interfaces: &[usize],
) -> Result<CondensationReport, CondensaError> {
    let mut report = check_envelope(envelope, db, ext, int)?;
    report.evaporation = Some(evaporation(envelope, db, ext, int, interfaces)?);
    Ok(report)
}
