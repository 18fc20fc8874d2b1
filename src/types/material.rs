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

//! Materiales

use std::fmt;
use std::str;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::CondensaError;

/// Tipo de material según las propiedades térmicas que lo definen.
///
/// Material kind.
#[allow(non_camel_case_types)]
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum MaterialType {
    /// Material definido por su conductividad térmica. La resistencia depende del espesor
    PROPERTIES,
    /// Material definido por una resistencia térmica fija (cámaras de aire, láminas, ...)
    RESISTANCE,
}

/// Propiedades térmicas del material, según su tipo
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum ThermalProps {
    /// Conductividad térmica, lambda [W/(m.K)]
    Conductivity(f64),
    /// Resistencia térmica [m2.K/W]
    Resistance(f64),
}

impl ThermalProps {
    /// Tipo de material correspondiente a estas propiedades
    pub fn kind(&self) -> MaterialType {
        match self {
            ThermalProps::Conductivity(_) => MaterialType::PROPERTIES,
            ThermalProps::Resistance(_) => MaterialType::RESISTANCE,
        }
    }

    /// Valor numérico de la propiedad (conductividad o resistencia)
    pub fn value(&self) -> f64 {
        match *self {
            ThermalProps::Conductivity(v) | ThermalProps::Resistance(v) => v,
        }
    }
}

/// Material de construcción
///
/// Building material, with its thermal and vapour diffusion properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Nombre del material (identificador en el catálogo)
    pub name: String,
    /// Propiedades térmicas
    pub props: ThermalProps,
    /// Factor de resistencia a la difusión del vapor de agua, mu [-]
    pub mu: f64,
}

impl Material {
    /// Material definido por su conductividad térmica
    pub fn new_properties(name: &str, conductivity: f64, mu: f64) -> Result<Self, CondensaError> {
        let material = Self {
            name: name.trim().to_string(),
            props: ThermalProps::Conductivity(conductivity),
            mu,
        };
        material.validate()?;
        Ok(material)
    }

    /// Material definido por su resistencia térmica
    pub fn new_resistance(name: &str, resistance: f64, mu: f64) -> Result<Self, CondensaError> {
        let material = Self {
            name: name.trim().to_string(),
            props: ThermalProps::Resistance(resistance),
            mu,
        };
        material.validate()?;
        Ok(material)
    }

    /// Tipo de material
    pub fn kind(&self) -> MaterialType {
        self.props.kind()
    }

    /// Comprueba que el nombre no está vacío y que las propiedades son positivas y finitas
    pub fn validate(&self) -> Result<(), CondensaError> {
        if self.name.is_empty() {
            return Err(CondensaError::InvalidArgument(
                "material sin nombre".to_string(),
            ));
        }
        let value = self.props.value();
        if !(value > 0.0 && value.is_finite()) {
            return Err(CondensaError::InvalidArgument(format!(
                "propiedad térmica no positiva en \"{}\" ({})",
                self.name, value
            )));
        }
        if !(self.mu > 0.0 && self.mu.is_finite()) {
            return Err(CondensaError::InvalidArgument(format!(
                "factor de resistencia al vapor no positivo en \"{}\" ({})",
                self.name, self.mu
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.name,
            self.kind(),
            self.props.value(),
            self.mu
        )
    }
}

impl str::FromStr for Material {
    type Err = CondensaError;

    /// Interpreta una línea del tipo:
    ///
    /// nombre, PROPERTIES|RESISTANCE, valor, mu # comentario
    ///
    /// Los campos se separan desde el final, así que el nombre puede contener comas.
    fn from_str(s: &str) -> Result<Material, Self::Err> {
        let line = s.splitn(2, '#').next().unwrap_or("").trim();
        let items: Vec<&str> = line.rsplitn(4, ',').map(str::trim).collect();
        if items.len() != 4 {
            return Err(CondensaError::ParseError(s.into()));
        }
        let mu: f64 = items[0].parse()?;
        let value: f64 = items[1].parse()?;
        let kind: MaterialType = items[2]
            .parse()
            .map_err(|_| CondensaError::ParseError(format!("tipo de material: {}", items[2])))?;
        let name = items[3];
        match kind {
            MaterialType::PROPERTIES => Material::new_properties(name, value, mu),
            MaterialType::RESISTANCE => Material::new_resistance(name, value, mu),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn material_from_str() {
        let m: Material = "EPS Poliestireno Expandido [ 0.037 W/[mK]], PROPERTIES, 0.0375, 20"
            .parse()
            .unwrap();
        assert_eq!(m.name, "EPS Poliestireno Expandido [ 0.037 W/[mK]]");
        assert_eq!(m.props, ThermalProps::Conductivity(0.0375));
        assert_eq!(m.mu, 20.0);
        assert_eq!(m.kind(), MaterialType::PROPERTIES);
    }

    #[test]
    fn material_name_with_commas_and_comment() {
        let m: Material = "Cámara de aire, sin ventilar, vertical, RESISTANCE, 0.17, 1 # 2 cm"
            .parse()
            .unwrap();
        assert_eq!(m.name, "Cámara de aire, sin ventilar, vertical");
        assert_eq!(m.props, ThermalProps::Resistance(0.17));
        assert_eq!(m.kind(), MaterialType::RESISTANCE);
    }

    #[test]
    fn material_roundtrip() {
        let line = "Enlucido de yeso 1000 < d < 1300, PROPERTIES, 0.57, 6";
        assert_eq!(line.parse::<Material>().unwrap().to_string(), line);
    }

    #[test]
    fn material_bad_input() {
        assert!("Ladrillo, PROPERTIES, 0.6".parse::<Material>().is_err());
        assert!("Ladrillo, CONDUCTIVITY, 0.6, 10"
            .parse::<Material>()
            .is_err());
        assert!("Ladrillo, PROPERTIES, abc, 10".parse::<Material>().is_err());
        assert!(matches!(
            "Ladrillo, PROPERTIES, 0.0, 10".parse::<Material>(),
            Err(CondensaError::InvalidArgument(_))
        ));
        assert!(Material::new_resistance("Lámina", 0.01, -1.0).is_err());
    }
}
