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

use itertools::Itertools;

use crate::{cte::CondensationReport, glaser::Condensation};

// ==================== Conversión a formato simple

/// Muestra en formato simple
///
/// Esta función usa un formato simple y compacto para representar la información sobre
/// condensaciones en cerramientos
pub trait AsCtePlain {
    /// Get in plain format
    fn to_plain(&self) -> String;
}

// ================= Implementaciones ====================

/// Muestra un valor lógico como SÍ / NO
fn yes_no(v: bool) -> &'static str {
    if v {
        "SÍ"
    } else {
        "NO"
    }
}

/// Nombre de cada punto de los perfiles (exterior, superficies e interfases)
fn profile_labels(num_layers: usize) -> Vec<String> {
    std::iter::once("Exterior".to_string())
        .chain(std::iter::once("Sup. exterior".to_string()))
        .chain((1..num_layers).map(|i| format!("Interfase {}", i)))
        .chain(std::iter::once("Sup. interior".to_string()))
        .chain(std::iter::once("Interior".to_string()))
        .collect()
}

impl AsCtePlain for Condensation {
    fn to_plain(&self) -> String {
        let planes = self.planes.iter().join(", ");
        let g_by_plane = self
            .monthly_g()
            .iter()
            .map(|g| format!("{:.2}", g))
            .join(", ");
        format!(
            "Planos (S [m], p [Pa]): {planes}
Cantidad por plano [g/m2.mes]: {g_by_plane}
Cantidad total [g/m2.mes]: {total:.2}",
            planes = planes,
            g_by_plane = if g_by_plane.is_empty() {
                "-".to_string()
            } else {
                g_by_plane
            },
            total = self.monthly_total()
        )
    }
}

impl AsCtePlain for CondensationReport {
    fn to_plain(&self) -> String {
        let layers = self.layers.iter().map(|l| format!("  {}", l)).join("\n");

        let profiles = profile_labels(self.layers.len())
            .iter()
            .zip(self.temperatures.iter())
            .zip(self.vapour_pressures.iter())
            .zip(self.saturation_pressures.iter())
            .map(|(((label, t), p), psat)| {
                format!("  {:<14} {:>7.2} {:>8.1} {:>8.1}", label, t, p, psat)
            })
            .join("\n");

        let evaporation = match &self.evaporation {
            Some(evap) => format!(
                "\n\n** Evaporación (interfases {})\n{}",
                evap.interfaces().iter().join(", "),
                evap.to_plain()
            ),
            None => String::new(),
        };

        format!(
            "** Cerramiento: {name}
{layers}
R_total [m2K/W]: {r_total:.3}
U [W/m2K]: {u:.3}
S_total [m]: {s_total:.3}

** Condiciones de cálculo
Exterior: {ext}
Interior: {int}

** Perfiles
  {hdr_pto:<14} {hdr_t:>7} {hdr_p:>8} {hdr_psat:>8}
{profiles}

** Condensaciones superficiales
fRsi = {f_rsi:.3}, fRsi,min = {f_rsimin:.3}
Condensaciones superficiales: {surface}

** Condensaciones intersticiales
{condensation}
Condensaciones intersticiales: {interstitial}{evaporation}",
            name = self.name,
            layers = layers,
            r_total = self.R_total,
            u = self.U,
            s_total = self.S_total,
            ext = self.ext,
            int = self.int,
            hdr_pto = "Punto",
            hdr_t = "T [ºC]",
            hdr_p = "p [Pa]",
            hdr_psat = "psat [Pa]",
            profiles = profiles,
            f_rsi = self.f_rsi,
            f_rsimin = self.f_rsimin,
            surface = yes_no(self.surface_condensation),
            condensation = self.condensation.to_plain(),
            interstitial = yes_no(self.interstitial_condensation),
            evaporation = evaporation,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glaser::Point;
    use pretty_assertions::assert_eq;

    #[test]
    fn labels() {
        assert_eq!(
            profile_labels(2),
            vec![
                "Exterior",
                "Sup. exterior",
                "Interfase 1",
                "Sup. interior",
                "Interior"
            ]
        );
    }

    #[test]
    fn condensation_plain() {
        let cond = Condensation {
            planes: vec![
                Point::new(0.0, 800.0),
                Point::new(1.0, 900.0),
                Point::new(3.0, 1300.0),
            ],
            indices: vec![0, 1, 2],
            g: vec![2.0e-5],
        };
        assert_eq!(
            cond.to_plain(),
            "Planos (S [m], p [Pa]): (0.000, 800.0), (1.000, 900.0), (3.000, 1300.0)
Cantidad por plano [g/m2.mes]: 51.84
Cantidad total [g/m2.mes]: 51.84"
        );
    }

    #[test]
    fn condensation_plain_empty() {
        let cond = Condensation {
            planes: vec![Point::new(0.0, 800.0), Point::new(3.0, 1300.0)],
            indices: vec![0, 1],
            g: vec![],
        };
        assert!(cond
            .to_plain()
            .contains("Cantidad por plano [g/m2.mes]: -\nCantidad total [g/m2.mes]: 0.00"));
    }
}
