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

/*!
Psicrometría
============

Funciones psicrométricas para el cálculo de presiones de vapor y de la transferencia de vapor
por difusión.

Las expresiones de la presión de saturación son las de la UNE-EN ISO 13788, con coeficientes
distintos sobre agua líquida (T > 0ºC) y sobre hielo (T <= 0ºC). Se consideran válidas en el
rango de temperaturas habitual en edificación ([-60, 60] ºC).
*/

use crate::error::CondensaError;

/// Presión de saturación a 0ºC [Pa]
pub const PSAT_0: f64 = 610.5;

/// Permeabilidad al vapor del aire en reposo, delta_0 [g/(m.s.Pa)]
pub const DELTA_0: f64 = 2.0e-7;

/// Coeficientes (a, b) de la curva de saturación sobre agua líquida (T > 0ºC)
const COEFS_WATER: (f64, f64) = (17.269, 237.3);
/// Coeficientes (a, b) de la curva de saturación sobre hielo (T <= 0ºC)
const COEFS_ICE: (f64, f64) = (21.875, 267.5);

/// Presión de saturación [Pa] a la temperatura temp [ºC]
///
/// Saturation vapour pressure [Pa] at temperature temp [ºC]
pub fn saturation_pressure(temp: f64) -> f64 {
    let (a, b) = if temp > 0.0 { COEFS_WATER } else { COEFS_ICE };
    PSAT_0 * (a * temp / (b + temp)).exp()
}

/// Temperatura [ºC] para la que se alcanza la presión de saturación psat [Pa]
///
/// Inversa de `saturation_pressure`. Usa la rama de agua líquida si psat >= 610.5 Pa y la de
/// hielo en caso contrario. Las presiones que no alcanza la curva (psat >= 610.5 * e^17.269,
/// unos 1.9e10 Pa) devuelven `DivisionByZero`.
pub fn temp_from_saturation_pressure(psat: f64) -> Result<f64, CondensaError> {
    if !(psat > 0.0) {
        return Err(CondensaError::InvalidArgument(format!(
            "presión de saturación no positiva ({})",
            psat
        )));
    }
    let (a, b) = if psat >= PSAT_0 { COEFS_WATER } else { COEFS_ICE };
    let l = (psat / PSAT_0).ln();
    // La curva de saturación tiende a PSAT_0 * e^a cuando T tiende a infinito
    if l >= a {
        return Err(CondensaError::DivisionByZero(
            "la temperatura de saturación (presión fuera de la curva de saturación)",
        ));
    }
    Ok(b * l / (a - l))
}

/// Presión de vapor [Pa] a la temperatura temp [ºC] y humedad relativa hr [%]
///
/// Vapour pressure [Pa] for temperature temp [ºC] and relative humidity hr [%]
pub fn vapour_pressure(temp: f64, hr: f64) -> Result<f64, CondensaError> {
    if !(0.0..=100.0).contains(&hr) {
        return Err(CondensaError::InvalidArgument(format!(
            "humedad relativa fuera del rango [0, 100] ({})",
            hr
        )));
    }
    Ok(hr / 100.0 * saturation_pressure(temp))
}

/// Tasa de transferencia de vapor [g/(m2.s)] entre dos puntos
///
/// Los puntos se definen por su presión de vapor p [Pa] y su espesor de aire equivalente
/// acumulado s [m]. Es positiva cuando el vapor fluye de e hacia i.
pub fn vapour_transfer_rate(p_e: f64, p_i: f64, s_e: f64, s_i: f64) -> Result<f64, CondensaError> {
    let ds = s_i - s_e;
    if ds == 0.0 {
        return Err(CondensaError::DivisionByZero(
            "la tasa de transferencia de vapor (puntos coincidentes)",
        ));
    }
    Ok(DELTA_0 * (p_i - p_e) / ds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn psat_both_branches() {
        assert!(approx(saturation_pressure(-20.0), 104.230_159_48, 1e-7));
        assert!(approx(saturation_pressure(20.0), 2336.951_143_80, 1e-7));
        assert_eq!(saturation_pressure(0.0), PSAT_0);
    }

    #[test]
    fn psat_inverse() {
        for &t in &[-25.0, -5.0, 0.5, 10.0, 21.3] {
            let p = saturation_pressure(t);
            assert!(approx(temp_from_saturation_pressure(p).unwrap(), t, 1e-9));
        }
        assert!(temp_from_saturation_pressure(0.0).is_err());
    }

    #[test]
    fn psat_inverse_out_of_curve() {
        // ln(psat / 610.5) > 17.269
        for &p in &[2.0e10, 1.0e12, std::f64::INFINITY] {
            assert!(matches!(
                temp_from_saturation_pressure(p),
                Err(CondensaError::DivisionByZero(_))
            ));
        }
        let t = temp_from_saturation_pressure(1.9e10).unwrap();
        assert!(t.is_finite() && t > 1000.0);
    }

    #[test]
    fn pvapor() {
        assert!(approx(
            vapour_pressure(20.0, 55.0).unwrap(),
            1285.323_129_09,
            1e-7
        ));
        assert_eq!(vapour_pressure(20.0, 0.0).unwrap(), 0.0);
        assert!(vapour_pressure(20.0, 100.5).is_err());
        assert!(vapour_pressure(20.0, -1.0).is_err());
    }

    #[test]
    fn transfer_rate() {
        let g = vapour_transfer_rate(1000.0, 1200.0, 0.0, 2.0).unwrap();
        assert!(approx(g, 2.0e-5, 1e-15));
        assert_eq!(
            vapour_transfer_rate(1000.0, 1200.0, 1.5, 1.5),
            Err(CondensaError::DivisionByZero(
                "la tasa de transferencia de vapor (puntos coincidentes)"
            ))
        );
    }
}
