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

//! Capas de cerramiento

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CondensaError;

/// Capa de un cerramiento: material y espesor
///
/// Layer of an envelope. The material is referenced by its name in the materials catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Nombre del material en el catálogo
    pub material: String,
    /// Espesor, e [m]
    pub thickness: f64,
}

impl Layer {
    /// Nueva capa. El espesor debe ser positivo (puede ser muy pequeño, p.e. láminas de 1e-5 m)
    pub fn new(material: &str, thickness: f64) -> Result<Self, CondensaError> {
        let layer = Self {
            material: material.to_string(),
            thickness,
        };
        layer.validate()?;
        Ok(layer)
    }

    /// Comprueba que el espesor es positivo y finito
    pub fn validate(&self) -> Result<(), CondensaError> {
        if !(self.thickness > 0.0 && self.thickness.is_finite()) {
            return Err(CondensaError::InvalidArgument(format!(
                "espesor no positivo en la capa de \"{}\" ({})",
                self.material, self.thickness
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} m - {}", self.thickness, self.material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_thickness() {
        assert!(Layer::new("Lámina de PE", 1.0e-5).is_ok());
        assert!(Layer::new("Ladrillo", 0.0).is_err());
        assert!(Layer::new("Ladrillo", -0.1).is_err());
        assert!(Layer::new("Ladrillo", std::f64::NAN).is_err());
    }

    #[test]
    fn layer_display() {
        let layer = Layer::new("Enlucido de yeso", 0.015).unwrap();
        assert_eq!(layer.to_string(), "0.015 m - Enlucido de yeso");
    }
}
