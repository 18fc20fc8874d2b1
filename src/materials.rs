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
Catálogo de materiales
======================

Define el tipo MaterialsDB (lista de materiales consultable por nombre).

El catálogo se construye una única vez, a partir de una lista de materiales o de un texto con
un material por línea, y solo se consulta después. Se pasa explícitamente a las funciones de
cálculo que lo necesitan.

```text
# nombre, tipo, valor, mu
1/2 pie LP métrico o catalán 40 mm< G < 60 mm, PROPERTIES, 0.667, 10
Cámara de aire sin ventilar vertical 2 cm, RESISTANCE, 0.17, 1
```
*/

use std::collections::HashSet;
use std::convert::TryFrom;
use std::fmt;
use std::str;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    error::CondensaError,
    types::{Material, MaterialType, ThermalProps},
};

/// Catálogo de materiales
///
/// Read-only materials catalog, queried by material name.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Material>", into = "Vec<Material>")]
pub struct MaterialsDB {
    materials: Vec<Material>,
}

impl MaterialsDB {
    /// Construye el catálogo comprobando los materiales y que no haya nombres repetidos
    pub fn new(materials: Vec<Material>) -> Result<Self, CondensaError> {
        let mut names = HashSet::new();
        for material in &materials {
            material.validate()?;
            if !names.insert(material.name.as_str()) {
                return Err(CondensaError::InvalidArgument(format!(
                    "material repetido en el catálogo: \"{}\"",
                    material.name
                )));
            }
        }
        Ok(Self { materials })
    }

    /// Lista de materiales, en el orden de definición
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Número de materiales del catálogo
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// ¿Está vacío el catálogo?
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Material de nombre `name`
    pub fn get(&self, name: &str) -> Result<&Material, CondensaError> {
        self.materials
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| CondensaError::NotFound(name.to_string()))
    }

    /// Tipo del material
    pub fn kind(&self, name: &str) -> Result<MaterialType, CondensaError> {
        Ok(self.get(name)?.kind())
    }

    /// Conductividad térmica [W/(m.K)] de un material de tipo PROPERTIES
    pub fn conductivity(&self, name: &str) -> Result<f64, CondensaError> {
        match self.get(name)?.props {
            ThermalProps::Conductivity(k) => Ok(k),
            ThermalProps::Resistance(_) => Err(CondensaError::TypeMismatch {
                name: name.to_string(),
                expected: "PROPERTIES",
            }),
        }
    }

    /// Resistencia térmica [m2.K/W] de un material de tipo RESISTANCE
    pub fn resistance(&self, name: &str) -> Result<f64, CondensaError> {
        match self.get(name)?.props {
            ThermalProps::Resistance(r) => Ok(r),
            ThermalProps::Conductivity(_) => Err(CondensaError::TypeMismatch {
                name: name.to_string(),
                expected: "RESISTANCE",
            }),
        }
    }

    /// Factor de resistencia a la difusión del vapor de agua, mu [-]
    pub fn vapour_diffusivity_factor(&self, name: &str) -> Result<f64, CondensaError> {
        Ok(self.get(name)?.mu)
    }
}

impl TryFrom<Vec<Material>> for MaterialsDB {
    type Error = CondensaError;

    fn try_from(materials: Vec<Material>) -> Result<Self, Self::Error> {
        MaterialsDB::new(materials)
    }
}

impl From<MaterialsDB> for Vec<Material> {
    fn from(db: MaterialsDB) -> Self {
        db.materials
    }
}

impl fmt::Display for MaterialsDB {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.materials.iter().join("\n"))
    }
}

impl str::FromStr for MaterialsDB {
    type Err = CondensaError;

    fn from_str(s: &str) -> Result<MaterialsDB, Self::Err> {
        let s_nobom = if s.starts_with('\u{feff}') {
            &s[3..]
        } else {
            s
        };
        let materials = s_nobom
            .lines()
            .map(str::trim)
            .filter(|l| !(l.starts_with('#') || l.starts_with("nombre,") || l.is_empty()))
            .map(str::parse)
            .collect::<Result<Vec<Material>, _>>()?;
        MaterialsDB::new(materials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TESTMATERIALS: &str = "# Catálogo de prueba
nombre, tipo, valor, mu
1/2 pie LP métrico o catalán 40 mm< G < 60 mm, PROPERTIES, 0.667, 10
EPS Poliestireno Expandido [ 0.037 W/[mK]], PROPERTIES, 0.0375, 20 # aislante

Cámara de aire sin ventilar vertical 2 cm, RESISTANCE, 0.17, 1
";

    #[test]
    fn materials_lookup() {
        let db: MaterialsDB = TESTMATERIALS.parse().unwrap();
        assert_eq!(db.len(), 3);
        let brick = "1/2 pie LP métrico o catalán 40 mm< G < 60 mm";
        let air = "Cámara de aire sin ventilar vertical 2 cm";
        assert_eq!(db.kind(brick).unwrap(), MaterialType::PROPERTIES);
        assert_eq!(db.kind(air).unwrap(), MaterialType::RESISTANCE);
        assert_eq!(db.conductivity(brick).unwrap(), 0.667);
        assert_eq!(db.resistance(air).unwrap(), 0.17);
        assert_eq!(db.vapour_diffusivity_factor(brick).unwrap(), 10.0);
    }

    #[test]
    fn materials_errors() {
        let db: MaterialsDB = TESTMATERIALS.parse().unwrap();
        assert_eq!(
            db.kind("Hormigón"),
            Err(CondensaError::NotFound("Hormigón".into()))
        );
        assert_eq!(
            db.conductivity("Cámara de aire sin ventilar vertical 2 cm"),
            Err(CondensaError::TypeMismatch {
                name: "Cámara de aire sin ventilar vertical 2 cm".into(),
                expected: "PROPERTIES"
            })
        );
        assert!(matches!(
            db.resistance("EPS Poliestireno Expandido [ 0.037 W/[mK]]"),
            Err(CondensaError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn materials_duplicated() {
        let res = "Ladrillo, PROPERTIES, 0.6, 10\nLadrillo, PROPERTIES, 0.7, 10"
            .parse::<MaterialsDB>();
        assert!(matches!(res, Err(CondensaError::InvalidArgument(_))));
    }

    #[test]
    fn materials_roundtrip() {
        let db: MaterialsDB = TESTMATERIALS.parse().unwrap();
        let dbstr = "1/2 pie LP métrico o catalán 40 mm< G < 60 mm, PROPERTIES, 0.667, 10
EPS Poliestireno Expandido [ 0.037 W/[mK]], PROPERTIES, 0.0375, 20
Cámara de aire sin ventilar vertical 2 cm, RESISTANCE, 0.17, 1";
        assert_eq!(db.to_string(), dbstr);
        assert_eq!(dbstr.parse::<MaterialsDB>().unwrap(), db);
    }

    #[test]
    fn materials_json() {
        let db: MaterialsDB = TESTMATERIALS.parse().unwrap();
        let json = serde_json::to_string(&db).unwrap();
        assert_eq!(serde_json::from_str::<MaterialsDB>(&json).unwrap(), db);
        let bad = r#"[{"name": "X", "props": {"Conductivity": -1.0}, "mu": 1.0}]"#;
        assert!(serde_json::from_str::<MaterialsDB>(bad).is_err());
    }
}
