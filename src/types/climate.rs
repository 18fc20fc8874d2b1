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

//! Condiciones climáticas

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CondensaError;
use crate::psicrom;

/// Condiciones ambientales de temperatura y humedad relativa
///
/// Ambient climate conditions (exterior or interior).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Climate {
    /// Temperatura, T [ºC]
    pub temp: f64,
    /// Humedad relativa, HR [%]
    pub hr: f64,
}

impl Climate {
    /// Nuevas condiciones. La humedad relativa debe estar en el rango [0, 100]
    pub fn new(temp: f64, hr: f64) -> Result<Self, CondensaError> {
        if !(0.0..=100.0).contains(&hr) {
            return Err(CondensaError::InvalidArgument(format!(
                "humedad relativa fuera del rango [0, 100] ({})",
                hr
            )));
        }
        Ok(Self { temp, hr })
    }

    /// Presión de vapor [Pa]
    pub fn vapour_pressure(&self) -> Result<f64, CondensaError> {
        psicrom::vapour_pressure(self.temp, self.hr)
    }

    /// Presión de saturación [Pa]
    pub fn saturation_pressure(&self) -> f64 {
        psicrom::saturation_pressure(self.temp)
    }
}

impl fmt::Display for Climate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T = {:.1} ºC, HR = {:.0} %", self.temp, self.hr)
    }
}
